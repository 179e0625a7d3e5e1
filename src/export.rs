//! Read-only projections of a machine's rule table.
//!
//! Diagram renderers and other tooling consume these instead of the
//! rules themselves. Output order mirrors declaration order, so exporting
//! an unchanged machine always yields the same result.

use crate::core::{tag_names, Action, State, Tag};
use crate::machine::Machine;
use serde::{Deserialize, Serialize};

/// One labelled arrow of the state diagram.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub rule: String,
    pub source: String,
    pub action: String,
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

/// Printable view of a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    pub name: String,
    pub sources: Vec<String>,
    pub actions: Vec<String>,
    pub destinations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl<S: State, A: Action> Machine<S, A> {
    /// Expand every rule into source x action x destination edges.
    ///
    /// Rules come out in registry order; within a rule the nesting is
    /// source, then action, then destination.
    pub fn export_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for rule in self.transition_table() {
            for source in rule.sources() {
                for action in rule.actions() {
                    for destination in rule.destinations() {
                        edges.push(Edge {
                            rule: rule.name().to_string(),
                            source: source.name().to_string(),
                            action: action.name().to_string(),
                            destination: destination.name().to_string(),
                            annotation: rule.annotation().map(str::to_string),
                        });
                    }
                }
            }
        }
        edges
    }

    /// One summary per rule, in registry order.
    pub fn summaries(&self) -> Vec<RuleSummary> {
        self.transition_table()
            .iter()
            .map(|rule| RuleSummary {
                name: rule.name().to_string(),
                sources: owned(tag_names(rule.sources())),
                actions: owned(tag_names(rule.actions())),
                destinations: owned(tag_names(rule.destinations())),
                annotation: rule.annotation().map(str::to_string),
            })
            .collect()
    }

    /// Every state named by any rule, first-seen order, no repeats.
    pub fn state_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for rule in self.transition_table() {
            for tag in rule.sources().iter().chain(rule.destinations()) {
                let name = tag.name();
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// The edge list as pretty-printed JSON.
    pub fn edges_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.export_edges())
    }
}

fn owned(names: Vec<&'static str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rule;
    use crate::{action_enum, state_enum};

    state_enum! {
        enum Ticket {
            Open,
            Assigned(String),
            Closed,
        }
        tag: TicketTag
        final: [Closed]
    }

    action_enum! {
        enum Event {
            Assign(String),
            Resolve,
            Reject,
        }
        tag: EventTag
    }

    fn machine() -> Machine<Ticket, Event> {
        Machine::builder("Tickets")
            .rule(
                Rule::<Ticket, Event>::named("assign")
                    .from([TicketTag::Open])
                    .on([EventTag::Assign])
                    .to([TicketTag::Assigned])
                    .logic(|state, action| match action {
                        Event::Assign(who) => Ticket::Assigned(who.clone()),
                        _ => state.clone(),
                    }),
            )
            .rule(
                Rule::<Ticket, Event>::named("close")
                    .from([TicketTag::Open, TicketTag::Assigned])
                    .on([EventTag::Resolve, EventTag::Reject])
                    .to([TicketTag::Closed, TicketTag::Open])
                    .annotate("reopened when rejected")
                    .logic(|_, action| match action {
                        Event::Reject => Ticket::Open,
                        _ => Ticket::Closed,
                    }),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn export_yields_one_edge_per_triple() {
        let edges = machine().export_edges();

        // 1x1x1 for "assign", 2x2x2 for "close"
        assert_eq!(edges.len(), 9);
        assert_eq!(
            edges[0],
            Edge {
                rule: "assign".to_string(),
                source: "Open".to_string(),
                action: "Assign".to_string(),
                destination: "Assigned".to_string(),
                annotation: None,
            }
        );
        assert!(edges[1..].iter().all(|e| e.rule == "close"
            && e.annotation.as_deref() == Some("reopened when rejected")));
    }

    #[test]
    fn export_nests_source_action_destination() {
        let edges = machine().export_edges();
        let close: Vec<(&str, &str, &str)> = edges[1..]
            .iter()
            .map(|e| (e.source.as_str(), e.action.as_str(), e.destination.as_str()))
            .collect();

        assert_eq!(
            close,
            vec![
                ("Open", "Resolve", "Closed"),
                ("Open", "Resolve", "Open"),
                ("Open", "Reject", "Closed"),
                ("Open", "Reject", "Open"),
                ("Assigned", "Resolve", "Closed"),
                ("Assigned", "Resolve", "Open"),
                ("Assigned", "Reject", "Closed"),
                ("Assigned", "Reject", "Open"),
            ]
        );
    }

    #[test]
    fn export_is_stable_across_calls() {
        let machine = machine();

        assert_eq!(machine.export_edges(), machine.export_edges());
        assert_eq!(machine.edges_json().unwrap(), machine.edges_json().unwrap());
    }

    #[test]
    fn summaries_mirror_declarations() {
        let summaries = machine().summaries();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].name, "close");
        assert_eq!(summaries[1].sources, vec!["Open", "Assigned"]);
        assert_eq!(summaries[1].actions, vec!["Resolve", "Reject"]);
        assert_eq!(summaries[1].destinations, vec!["Closed", "Open"]);
    }

    #[test]
    fn state_names_are_unique_in_first_seen_order() {
        assert_eq!(
            machine().state_names(),
            vec!["Open", "Assigned", "Closed"]
        );
    }

    #[test]
    fn edges_json_omits_missing_annotations() {
        let json = machine().edges_json().unwrap();
        let parsed: Vec<Edge> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, machine().export_edges());

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value[0].get("annotation").is_none());
        assert_eq!(value[1]["annotation"], "reopened when rejected");
    }
}
