//! Capability descriptors.
//!
//! Static operations carry their capabilities as trait impls
//! ([`Adjoint`](crate::Adjoint), [`Controlled`](crate::Controlled)). The
//! types here describe the same information as data, for type-erased
//! operations whose capabilities are only known at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single optional ability of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// The operation can be inverted.
    Adjoint,
    /// The operation can be applied conditionally on control qubits.
    Controlled,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Adjoint => write!(f, "adjoint"),
            Capability::Controlled => write!(f, "controlled"),
        }
    }
}

/// The set of capabilities an operation declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    /// Supports adjoint application.
    pub adjoint: bool,
    /// Supports controlled application.
    pub controlled: bool,
}

impl Capabilities {
    /// No optional capability.
    pub const NONE: Self = Self {
        adjoint: false,
        controlled: false,
    };
    /// Adjoint only.
    pub const ADJOINT: Self = Self {
        adjoint: true,
        controlled: false,
    };
    /// Controlled only.
    pub const CONTROLLED: Self = Self {
        adjoint: false,
        controlled: true,
    };
    /// Adjoint and controlled.
    pub const ALL: Self = Self {
        adjoint: true,
        controlled: true,
    };

    /// Check if every capability of `other` is in this set.
    pub fn contains(self, other: Capabilities) -> bool {
        (self.adjoint || !other.adjoint) && (self.controlled || !other.controlled)
    }

    /// Capabilities present in either set.
    #[must_use]
    pub fn union(self, other: Capabilities) -> Self {
        Self {
            adjoint: self.adjoint || other.adjoint,
            controlled: self.controlled || other.controlled,
        }
    }

    /// Capabilities present in both sets.
    #[must_use]
    pub fn intersection(self, other: Capabilities) -> Self {
        Self {
            adjoint: self.adjoint && other.adjoint,
            controlled: self.controlled && other.controlled,
        }
    }

    /// The first capability of `required` missing from this set, if any.
    pub fn missing(self, required: Capabilities) -> Option<Capability> {
        if required.adjoint && !self.adjoint {
            Some(Capability::Adjoint)
        } else if required.controlled && !self.controlled {
            Some(Capability::Controlled)
        } else {
            None
        }
    }
}

impl From<Capability> for Capabilities {
    fn from(capability: Capability) -> Self {
        match capability {
            Capability::Adjoint => Capabilities::ADJOINT,
            Capability::Controlled => Capabilities::CONTROLLED,
        }
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.adjoint, self.controlled) {
            (false, false) => write!(f, "none"),
            (true, false) => write!(f, "adj"),
            (false, true) => write!(f, "ctl"),
            (true, true) => write!(f, "adj+ctl"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        assert!(Capabilities::ALL.contains(Capabilities::ADJOINT));
        assert!(Capabilities::ADJOINT.contains(Capabilities::NONE));
        assert!(!Capabilities::ADJOINT.contains(Capabilities::CONTROLLED));
        assert!(!Capabilities::NONE.contains(Capabilities::ALL));
    }

    #[test]
    fn test_union_and_intersection() {
        assert_eq!(
            Capabilities::ADJOINT.union(Capabilities::CONTROLLED),
            Capabilities::ALL
        );
        assert_eq!(
            Capabilities::ALL.intersection(Capabilities::CONTROLLED),
            Capabilities::CONTROLLED
        );
    }

    #[test]
    fn test_missing() {
        assert_eq!(
            Capabilities::CONTROLLED.missing(Capabilities::ALL),
            Some(Capability::Adjoint)
        );
        assert_eq!(
            Capabilities::ADJOINT.missing(Capabilities::ALL),
            Some(Capability::Controlled)
        );
        assert_eq!(Capabilities::ALL.missing(Capabilities::ALL), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Capabilities::NONE.to_string(), "none");
        assert_eq!(Capabilities::ALL.to_string(), "adj+ctl");
        assert_eq!(Capability::Controlled.to_string(), "controlled");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Capability::Adjoint).unwrap();
        assert_eq!(json, "\"adjoint\"");
    }
}
