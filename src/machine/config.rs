//! Runtime configuration for machines.

use serde::{Deserialize, Serialize};

/// How a machine treats a rule that returns a state outside its
/// declared destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationCheck {
    /// Trust the rule author
    #[default]
    Off,

    /// Return the state but log a warning
    Warn,

    /// Fail with `UndeclaredDestination`
    Enforce,
}

/// Machine configuration.
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub destination_check: DestinationCheck,

    /// Emit debug events for rule resolution
    pub log_dispatch: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            destination_check: DestinationCheck::Off,
            log_dispatch: true,
        }
    }
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination check mode
    pub fn destination_check(mut self, check: DestinationCheck) -> Self {
        self.destination_check = check;
        self
    }

    /// Enable or disable dispatch logging
    pub fn log_dispatch(mut self, enabled: bool) -> Self {
        self.log_dispatch = enabled;
        self
    }
}
