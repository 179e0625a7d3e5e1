//! Variant model for machine states and actions.
//!
//! States and actions are closed sets of immutable values. Each value
//! exposes a `Tag` naming its variant; rules declare their domains in
//! terms of tags, so membership checks never look at payloads.

use std::fmt::Debug;
use std::hash::Hash;

/// Fieldless identifier of a single state or action variant.
///
/// Tags are what rules declare: "this rule accepts `Idle` and
/// `OutOfCoffee`". They are cheap to copy and compare.
pub trait Tag: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Variant name used in errors and exported edges.
    fn name(&self) -> &'static str;
}

/// Trait for machine states.
///
/// All methods are pure. States are immutable values compared
/// structurally; the machine never tracks their identity.
///
/// # Required Traits
///
/// - `Clone`: rules receive borrowed states and build new ones
/// - `PartialEq`: states are compared by value
/// - `Debug`: states are rendered into dispatch errors
///
/// # Example
///
/// ```rust
/// use typemata::core::{State, Tag};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Door {
///     Open,
///     Locked { code: u32 },
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum DoorTag {
///     Open,
///     Locked,
/// }
///
/// impl Tag for DoorTag {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// impl State for Door {
///     type Tag = DoorTag;
///
///     fn tag(&self) -> DoorTag {
///         match self {
///             Self::Open => DoorTag::Open,
///             Self::Locked { .. } => DoorTag::Locked,
///         }
///     }
/// }
///
/// assert_eq!(Door::Locked { code: 7 }.name(), "Locked");
/// ```
pub trait State: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Identifier type for this state's variants.
    type Tag: Tag;

    /// Get the variant tag of this value.
    fn tag(&self) -> Self::Tag;

    /// Get the variant name for display/logging.
    fn name(&self) -> &'static str {
        self.tag().name()
    }

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Trait for machine actions.
///
/// Actions are pure data that trigger transitions. They carry no behavior.
pub trait Action: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Identifier type for this action's variants.
    type Tag: Tag;

    /// Get the variant tag of this value.
    fn tag(&self) -> Self::Tag;

    /// Get the variant name for display/logging.
    fn name(&self) -> &'static str {
        self.tag().name()
    }
}
