//! Shared record model and wire schema for the `POST /predict` endpoint.
//!
//! This crate owns the representation used by both `client` and `cli`: the
//! typed record ([`CveModel`]), its untyped editing form ([`RawCveModel`]),
//! the [`validate`] step between the two, and the request/response bodies.
//! Rendering of predictions lives in [`render`].


pub mod attribute;
pub mod render;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use attribute::{
    AttackComplexity, AttackVector, Attribute, Domain, Impact, PrivilegesRequired, Scope, UserInteraction,
};

/// Upper bound on records in one batch.
pub const MAX_RECORDS: usize = 3;
/// Lower bound on records in one batch.
pub const MIN_RECORDS: usize = 1;

/// Error returned by [`validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The attribute has no value at all.
    #[error("missing value for `{attribute}`")]
    Missing { attribute: Attribute },
    /// The attribute's value is not a member of its domain.
    #[error("`{value}` is not a valid value for `{attribute}`")]
    OutOfDomain { attribute: Attribute, value: String },
}

/// One vulnerability record: every attribute set to a member of its domain.
///
/// Field order is the natural attribute order ([`Attribute::ALL`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CveModel {
    pub attack_complexity: AttackComplexity,
    pub attack_vector: AttackVector,
    pub availability_impact: Impact,
    pub confidentiality_impact: Impact,
    pub integrity_impact: Impact,
    pub privileges_required: PrivilegesRequired,
    pub scope: Scope,
    pub user_interaction: UserInteraction,
}

impl CveModel {
    /// Wire string of one attribute.
    #[must_use]
    pub fn value(&self, attribute: Attribute) -> &'static str {
        match attribute {
            Attribute::AttackComplexity => self.attack_complexity.as_str(),
            Attribute::AttackVector => self.attack_vector.as_str(),
            Attribute::AvailabilityImpact => self.availability_impact.as_str(),
            Attribute::ConfidentialityImpact => self.confidentiality_impact.as_str(),
            Attribute::IntegrityImpact => self.integrity_impact.as_str(),
            Attribute::PrivilegesRequired => self.privileges_required.as_str(),
            Attribute::Scope => self.scope.as_str(),
            Attribute::UserInteraction => self.user_interaction.as_str(),
        }
    }

    /// Every attribute value in natural record order.
    #[must_use]
    pub fn values(&self) -> [&'static str; 8] {
        Attribute::ALL.map(|attribute| self.value(attribute))
    }
}

/// Untyped record as edited through choice controls or typed on a command line.
///
/// Values are plain strings and may be missing or out of domain; [`validate`]
/// is the only way to turn one into a [`CveModel`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawCveModel {
    values: BTreeMap<Attribute, String>,
}

impl RawCveModel {
    /// Set one attribute's raw value, replacing any previous value.
    pub fn set(&mut self, attribute: Attribute, value: impl Into<String>) {
        self.values.insert(attribute, value.into());
    }

    /// Raw value of one attribute, if present.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        self.values.get(&attribute).map(String::as_str)
    }

    /// Build a raw record from a JSON object keyed by wire names.
    ///
    /// Unknown keys are ignored. Non-string values are kept as their JSON
    /// text so that [`validate`] reports them as out of domain.
    #[must_use]
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let mut raw = Self::default();
        for (key, value) in object {
            let Some(attribute) = Attribute::from_wire_name(key) else {
                continue;
            };
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            raw.set(attribute, text);
        }
        raw
    }
}

impl From<&CveModel> for RawCveModel {
    fn from(model: &CveModel) -> Self {
        let mut raw = Self::default();
        for attribute in Attribute::ALL {
            raw.set(attribute, model.value(attribute));
        }
        raw
    }
}

/// Validate a raw record against the enumerated-domain schema.
///
/// Attributes are checked in natural order and the first failure is
/// returned.
///
/// # Errors
///
/// Returns [`ValidationError::Missing`] when an attribute has no value and
/// [`ValidationError::OutOfDomain`] when a value is not in its domain.
pub fn validate(raw: &RawCveModel) -> Result<CveModel, ValidationError> {
    Ok(CveModel {
        attack_complexity: field(raw, Attribute::AttackComplexity)?,
        attack_vector: field(raw, Attribute::AttackVector)?,
        availability_impact: field(raw, Attribute::AvailabilityImpact)?,
        confidentiality_impact: field(raw, Attribute::ConfidentialityImpact)?,
        integrity_impact: field(raw, Attribute::IntegrityImpact)?,
        privileges_required: field(raw, Attribute::PrivilegesRequired)?,
        scope: field(raw, Attribute::Scope)?,
        user_interaction: field(raw, Attribute::UserInteraction)?,
    })
}

fn field<T: Domain>(raw: &RawCveModel, attribute: Attribute) -> Result<T, ValidationError> {
    let value = raw.get(attribute).ok_or(ValidationError::Missing { attribute })?;
    T::parse(value).ok_or_else(|| ValidationError::OutOfDomain { attribute, value: value.to_owned() })
}

/// Binary classification returned per record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ExploitLabel {
    NoExploit,
    Exploit,
}

impl ExploitLabel {
    /// Human-readable headline for this label.
    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Self::NoExploit => "Probably exploit does not exist",
            Self::Exploit => "Probably exploit exists",
        }
    }
}

impl TryFrom<u8> for ExploitLabel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NoExploit),
            1 => Ok(Self::Exploit),
            other => Err(format!("unknown prediction label: {other}")),
        }
    }
}

impl From<ExploitLabel> for u8 {
    fn from(label: ExploitLabel) -> Self {
        match label {
            ExploitLabel::NoExploit => 0,
            ExploitLabel::Exploit => 1,
        }
    }
}

/// One prediction, echoing the record that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvePrediction {
    pub label: ExploitLabel,
    pub score: f64,
    pub input_model: CveModel,
}

/// Body of `POST /predict`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub data: Vec<CveModel>,
}

/// Response of `POST /predict`, order-aligned with [`PredictRequest::data`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub data: Vec<CvePrediction>,
}

/// Path of the prediction endpoint relative to the service base URL.
pub const PREDICT_PATH: &str = "/predict";

/// Join a service base URL and [`PREDICT_PATH`], tolerating a trailing slash.
#[must_use]
pub fn predict_url(base_url: &str) -> String {
    format!("{}{PREDICT_PATH}", base_url.trim_end_matches('/'))
}
