//! Capability policy seam

use serde::{Deserialize, Serialize};

/// Capabilities field plugins may ask about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// May edit other users' profile data, locked fields included
    UpdateUser,
}

/// Context a capability is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyContext {
    /// System-wide context
    System,
}

/// Host policy engine as seen by field plugins
pub trait CapabilityCheck {
    /// Whether the current actor holds `capability` in `context`
    fn has_capability(&self, capability: Capability, context: PolicyContext) -> bool;
}

/// Grants every capability
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl CapabilityCheck for AllowAll {
    fn has_capability(&self, _capability: Capability, _context: PolicyContext) -> bool {
        true
    }
}

/// Denies every capability
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl CapabilityCheck for DenyAll {
    fn has_capability(&self, _capability: Capability, _context: PolicyContext) -> bool {
        false
    }
}
