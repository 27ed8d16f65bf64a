//! Estate, trust and insurance advice
//!
//! Every clause is independent. No clause firing is a valid outcome.

use crate::models::FinancialProfile;
use crate::rules::{Clause, RuleBook};
use serde::{Deserialize, Serialize};

/// Savings above which estate tax planning is suggested
const ESTATE_PLANNING_THRESHOLD: f64 = 50_000.0;

/// Age above which an insurance review is suggested
const INSURANCE_REVIEW_AGE: u32 = 40;

pub const FAMILY_TRUST: &str =
    "Consider setting up a family trust to protect assets for your dependents.";
pub const VALID_WILL: &str = "Make sure you have a valid will to ensure smooth transfer of wealth.";
pub const ESTATE_PLANNING: &str =
    "Explore estate planning strategies to reduce tax burdens on inheritance.";
pub const INSURANCE_REVIEW: &str =
    "Review life insurance and health insurance policies to safeguard your family.";

/// The slice of a profile the trust rules may read
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustProfile {
    pub age: u32,
    pub savings: f64,
    pub dependents: u32,
}

impl From<&FinancialProfile> for TrustProfile {
    fn from(profile: &FinancialProfile) -> Self {
        Self {
            age: profile.age,
            savings: profile.savings,
            dependents: profile.dependents,
        }
    }
}

/// Rule table for estate and insurance advice
pub struct TrustAdvisor {
    rules: RuleBook<TrustProfile>,
}

impl TrustAdvisor {
    pub fn new() -> Self {
        let rules = RuleBook::new("trust")
            .with(Clause::new("family_trust", has_dependents, |_: &TrustProfile| {
                FAMILY_TRUST.to_string()
            }))
            .with(Clause::new("valid_will", has_dependents, |_: &TrustProfile| {
                VALID_WILL.to_string()
            }))
            .with(Clause::new(
                "estate_planning",
                |p: &TrustProfile| p.savings > ESTATE_PLANNING_THRESHOLD,
                |_: &TrustProfile| ESTATE_PLANNING.to_string(),
            ))
            .with(Clause::new(
                "insurance_review",
                |p: &TrustProfile| p.age > INSURANCE_REVIEW_AGE,
                |_: &TrustProfile| INSURANCE_REVIEW.to_string(),
            ));

        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.rule_names()
    }

    pub fn advise(&self, profile: &TrustProfile) -> Vec<String> {
        self.rules.evaluate_text(profile)
    }
}

fn has_dependents(profile: &TrustProfile) -> bool {
    profile.dependents > 0
}

impl Default for TrustAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered estate/insurance advice
pub fn derive_trust_advice(age: u32, savings: f64, dependents: u32) -> Vec<String> {
    TrustAdvisor::new().advise(&TrustProfile {
        age,
        savings,
        dependents,
    })
}
