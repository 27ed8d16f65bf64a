//! Core data models for the wealth advisor

use serde::{Deserialize, Serialize};
use std::fmt;

//
// ================= Enums =================
//

/// Caller-supplied investment style.
///
/// Any string deserializes: only the exact tags `low`, `medium` and `high`
/// map to named variants, everything else is kept verbatim as
/// [`RiskProfile::Unrecognized`] and advised like `High`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskProfile {
    Low,
    Medium,
    High,
    Unrecognized(String),
}

impl From<String> for RiskProfile {
    fn from(value: String) -> Self {
        match value.as_str() {
            "low" => RiskProfile::Low,
            "medium" => RiskProfile::Medium,
            "high" => RiskProfile::High,
            _ => RiskProfile::Unrecognized(value),
        }
    }
}

impl From<&str> for RiskProfile {
    fn from(value: &str) -> Self {
        RiskProfile::from(value.to_string())
    }
}

impl From<RiskProfile> for String {
    fn from(value: RiskProfile) -> Self {
        match value {
            RiskProfile::Unrecognized(raw) => raw,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskProfile::Low => "low",
            RiskProfile::Medium => "medium",
            RiskProfile::High => "high",
            RiskProfile::Unrecognized(raw) => raw.as_str(),
        };
        write!(f, "{}", s)
    }
}

//
// ================= Profile =================
//

/// One request's financial snapshot. Built fresh per call, never shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub debt: f64,
    pub age: u32,
    pub dependents: u32,
    pub risk_profile: RiskProfile,
    /// Free-form tag such as "spending" or "savings". Carried, not evaluated.
    pub context: String,
}

//
// ================= Advice =================
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceItem {
    /// Name of the rule that produced this item
    pub rule: &'static str,
    pub text: String,
}

impl AdviceItem {
    pub fn new(rule: &'static str, text: impl Into<String>) -> Self {
        Self {
            rule,
            text: text.into(),
        }
    }
}

impl fmt::Display for AdviceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<AdviceItem> for String {
    fn from(item: AdviceItem) -> Self {
        item.text
    }
}

/// Financial and trust advice for one profile, side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResult {
    pub financial_advice: Vec<String>,
    pub trust_advice: Vec<String>,
}

impl AdviceResult {
    /// Text handed to speech synthesis: financial lines, then trust lines,
    /// joined with `\n`.
    pub fn narration(&self) -> String {
        self.financial_advice
            .iter()
            .chain(self.trust_advice.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

//
// ================= Quick Recommendation =================
//

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuickInput {
    pub income: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickResult {
    pub savings: f64,
    pub savings_percent: f64,
    pub expenses: f64,
    pub advice: Vec<String>,
}
