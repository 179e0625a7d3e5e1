//! Typemata: declarative state machines dispatched by variant domains
//!
//! A machine is an ordered list of named rules. Each rule declares which
//! state variants and action variants it accepts and which state variants
//! it may produce. Given a concrete (state, action) pair, the machine finds
//! the first rule whose domain covers the pair, checks the pair against
//! that rule and runs its logic.
//!
//! # Core Concepts
//!
//! - **State / Action**: closed enums with a companion `Tag` enum per type
//! - **Rule**: an immutable descriptor plus logic, validated on every call
//! - **Machine**: an immutable, shareable registry of rules and a dispatcher
//! - **Export**: edge lists and summaries for diagram tooling
//!
//! # Example
//!
//! ```rust
//! use typemata::core::Rule;
//! use typemata::machine::Machine;
//! use typemata::{action_enum, state_enum};
//!
//! state_enum! {
//!     enum Coffee {
//!         Idle(u32),
//!         Brewing(u32),
//!         OutOfCoffee,
//!     }
//!     tag: CoffeeTag
//! }
//!
//! action_enum! {
//!     enum Button {
//!         InsertCoin,
//!         BrewCoffee,
//!         Refill(u32),
//!     }
//!     tag: ButtonTag
//! }
//!
//! let machine = Machine::builder("CoffeeMachine")
//!     .rule(
//!         Rule::<Coffee, Button>::named("start_brewing")
//!             .from([CoffeeTag::Idle])
//!             .on([ButtonTag::InsertCoin])
//!             .to([CoffeeTag::Brewing])
//!             .logic(|state, _| match state {
//!                 Coffee::Idle(stock) => Coffee::Brewing(*stock),
//!                 other => other.clone(),
//!             }),
//!     )
//!     .rule(
//!         Rule::<Coffee, Button>::named("finish_brewing")
//!             .from([CoffeeTag::Brewing])
//!             .on([ButtonTag::BrewCoffee])
//!             .to([CoffeeTag::Idle, CoffeeTag::OutOfCoffee])
//!             .logic(|state, _| match state {
//!                 Coffee::Brewing(stock) if *stock > 1 => Coffee::Idle(stock - 1),
//!                 _ => Coffee::OutOfCoffee,
//!             }),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let state = machine.run(&Coffee::Idle(1), &Button::InsertCoin).unwrap();
//! assert_eq!(state, Coffee::Brewing(1));
//! assert_eq!(
//!     machine.run(&state, &Button::BrewCoffee).unwrap(),
//!     Coffee::OutOfCoffee
//! );
//! assert!(machine.run(&Coffee::OutOfCoffee, &Button::InsertCoin).is_err());
//! ```
//!
//! # Sharing a definition
//!
//! `Machine` is cheap to clone and `Send + Sync`. Build it once, for
//! example behind a `std::sync::LazyLock`, and read it from anywhere.

pub mod builder;
pub mod core;
pub mod export;
pub mod machine;

// Re-export commonly used types
pub use builder::{define_machine, DefinitionError, MachineBuilder, RuleBuilder, RuleDefect};
pub use self::core::{Action, Rule, State, Tag, TransitionError};
pub use export::{Edge, RuleSummary};
pub use machine::{DestinationCheck, Machine, MachineConfig};
