//! Core machine types.
//!
//! This module contains the value model and the rule descriptor:
//! - State and action values via the `State` and `Action` traits
//! - Variant identifiers via the `Tag` trait
//! - Transition rules with their validating invoker
//!
//! Nothing in here holds mutable state. Rules are immutable once built
//! and every check is a pure function of its inputs.

mod rule;
mod variant;

pub(crate) use rule::tag_names;
pub use rule::{Logic, LogicError, Rule, TransitionError};
pub use variant::{Action, State, Tag};
