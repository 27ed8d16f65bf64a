//! Combined financial + trust advice for one profile

use crate::financial::FinancialAdvisor;
use crate::models::{AdviceResult, FinancialProfile};
use crate::trust::{TrustAdvisor, TrustProfile};
use tracing::info;

/// Both advisors, evaluated independently on the same profile
pub struct Advisor {
    financial: FinancialAdvisor,
    trust: TrustAdvisor,
}

impl Advisor {
    pub fn new() -> Self {
        Self {
            financial: FinancialAdvisor::new(),
            trust: TrustAdvisor::new(),
        }
    }

    pub fn advise(&self, profile: &FinancialProfile) -> AdviceResult {
        let result = AdviceResult {
            financial_advice: self.financial.advise(profile),
            trust_advice: self.trust.advise(&TrustProfile::from(profile)),
        };

        info!(
            risk_profile = %profile.risk_profile,
            financial_items = result.financial_advice.len(),
            trust_items = result.trust_advice.len(),
            "Advice derived"
        );

        result
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}

/// Financial and trust advice, side by side
pub fn advise(profile: &FinancialProfile) -> AdviceResult {
    Advisor::new().advise(profile)
}
