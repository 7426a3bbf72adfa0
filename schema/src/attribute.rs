//! CVSS attribute domains.
//!
//! Each attribute of a [`crate::CveModel`] is constrained to a small
//! enumerated domain. The enums here are the typed form of those domains;
//! [`Attribute`] names the attributes themselves and carries the metadata the
//! form and the renderer need (wire name, label, option values).

#[cfg(test)]
#[path = "attribute_test.rs"]
mod attribute_test;

use serde::{Deserialize, Serialize};

/// A closed set of wire strings backed by a fieldless enum.
pub trait Domain: Sized + Copy + 'static {
    /// Every variant, in option order.
    const ALL: &'static [Self];
    /// Wire strings for [`Self::ALL`], same order.
    const VALUES: &'static [&'static str];

    /// Wire string for this variant.
    fn as_str(self) -> &'static str;

    /// Parse a wire string. Returns `None` for values outside the domain.
    #[must_use]
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttackComplexity {
    #[default]
    Low,
    High,
}

impl Domain for AttackComplexity {
    const ALL: &'static [Self] = &[Self::Low, Self::High];
    const VALUES: &'static [&'static str] = &["LOW", "HIGH"];

    fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::High => "HIGH",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttackVector {
    #[default]
    Network,
    AdjacentNetwork,
    Local,
    Physical,
}

impl Domain for AttackVector {
    const ALL: &'static [Self] = &[Self::Network, Self::AdjacentNetwork, Self::Local, Self::Physical];
    const VALUES: &'static [&'static str] = &["NETWORK", "ADJACENT_NETWORK", "LOCAL", "PHYSICAL"];

    fn as_str(self) -> &'static str {
        match self {
            Self::Network => "NETWORK",
            Self::AdjacentNetwork => "ADJACENT_NETWORK",
            Self::Local => "LOCAL",
            Self::Physical => "PHYSICAL",
        }
    }
}

/// Shared domain of the confidentiality, integrity and availability impacts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Impact {
    #[default]
    None,
    Low,
    High,
}

impl Domain for Impact {
    const ALL: &'static [Self] = &[Self::None, Self::Low, Self::High];
    const VALUES: &'static [&'static str] = &["NONE", "LOW", "HIGH"];

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Low => "LOW",
            Self::High => "HIGH",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrivilegesRequired {
    #[default]
    None,
    Low,
    High,
}

impl Domain for PrivilegesRequired {
    const ALL: &'static [Self] = &[Self::None, Self::Low, Self::High];
    const VALUES: &'static [&'static str] = &["NONE", "LOW", "HIGH"];

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Low => "LOW",
            Self::High => "HIGH",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scope {
    #[default]
    Unchanged,
    Changed,
}

impl Domain for Scope {
    const ALL: &'static [Self] = &[Self::Unchanged, Self::Changed];
    const VALUES: &'static [&'static str] = &["UNCHANGED", "CHANGED"];

    fn as_str(self) -> &'static str {
        match self {
            Self::Unchanged => "UNCHANGED",
            Self::Changed => "CHANGED",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserInteraction {
    #[default]
    None,
    Required,
}

impl Domain for UserInteraction {
    const ALL: &'static [Self] = &[Self::None, Self::Required];
    const VALUES: &'static [&'static str] = &["NONE", "REQUIRED"];

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Required => "REQUIRED",
        }
    }
}

/// The named attributes of a record.
///
/// Declaration order is the natural (wire) order of the record's fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    AttackComplexity,
    AttackVector,
    AvailabilityImpact,
    ConfidentialityImpact,
    IntegrityImpact,
    PrivilegesRequired,
    Scope,
    UserInteraction,
}

impl Attribute {
    /// All attributes in natural record order.
    pub const ALL: [Self; 8] = [
        Self::AttackComplexity,
        Self::AttackVector,
        Self::AvailabilityImpact,
        Self::ConfidentialityImpact,
        Self::IntegrityImpact,
        Self::PrivilegesRequired,
        Self::Scope,
        Self::UserInteraction,
    ];

    /// All attributes in the order the record form lays out its controls.
    pub const FORM_ORDER: [Self; 8] = [
        Self::AttackVector,
        Self::AttackComplexity,
        Self::PrivilegesRequired,
        Self::UserInteraction,
        Self::Scope,
        Self::ConfidentialityImpact,
        Self::IntegrityImpact,
        Self::AvailabilityImpact,
    ];

    /// camelCase field name on the wire.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::AttackComplexity => "attackComplexity",
            Self::AttackVector => "attackVector",
            Self::AvailabilityImpact => "availabilityImpact",
            Self::ConfidentialityImpact => "confidentialityImpact",
            Self::IntegrityImpact => "integrityImpact",
            Self::PrivilegesRequired => "privilegesRequired",
            Self::Scope => "scope",
            Self::UserInteraction => "userInteraction",
        }
    }

    /// Human-readable label shown above the attribute's control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AttackComplexity => "Attack complexity",
            Self::AttackVector => "Attack vector",
            Self::AvailabilityImpact => "Availability impact",
            Self::ConfidentialityImpact => "Confidentiality impact",
            Self::IntegrityImpact => "Integrity impact",
            Self::PrivilegesRequired => "Privileges required",
            Self::Scope => "Scope",
            Self::UserInteraction => "User interaction",
        }
    }

    /// Option values of the attribute's domain, in option order.
    #[must_use]
    pub fn values(self) -> &'static [&'static str] {
        match self {
            Self::AttackComplexity => AttackComplexity::VALUES,
            Self::AttackVector => AttackVector::VALUES,
            Self::AvailabilityImpact | Self::ConfidentialityImpact | Self::IntegrityImpact => Impact::VALUES,
            Self::PrivilegesRequired => PrivilegesRequired::VALUES,
            Self::Scope => Scope::VALUES,
            Self::UserInteraction => UserInteraction::VALUES,
        }
    }

    /// Look up an attribute by its wire name.
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.wire_name() == name)
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}
