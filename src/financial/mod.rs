//! Budgeting and investment advice
//!
//! Clause order is part of the output contract:
//! safety net, debt, risk allocation, age horizon, cash-flow sizing,
//! then the two generic horizon items.

use crate::models::{FinancialProfile, RiskProfile};
use crate::rules::{Clause, RuleBook};
use tracing::warn;

/// Share of positive disposable income suggested as a monthly saving
const SAVINGS_RATE: f64 = 0.3;

/// Months of expenses an emergency fund should cover
const EMERGENCY_FUND_MONTHS: f64 = 3.0;

pub const EMERGENCY_FUND: &str = "Build an emergency fund of at least three months of expenses.";
pub const LOW_RISK: &str = "Invest in low-risk assets like government bonds or fixed deposits.";
pub const MEDIUM_RISK: &str =
    "Maintain a balanced portfolio with stocks, ETFs, bonds, and mutual funds.";
pub const HIGH_RISK: &str =
    "Consider aggressive investments such as stocks, ETFs, or real estate for higher returns.";
pub const EARLY_RETIREMENT: &str =
    "Start retirement savings early with long-term growth funds or retirement accounts.";
pub const WEALTH_BUILDING: &str =
    "Focus on building wealth and balancing retirement contributions with investments.";
pub const RETIREMENT_SAFETY: &str =
    "Prioritize safe investments and ensure you are on track for retirement.";
pub const BUDGET_REVIEW: &str = "Expenses and debt exceed income. Review your budget carefully.";
pub const SHORT_TERM_HORIZON: &str =
    "For short-term goals under three years, use safe, liquid options like savings accounts.";
pub const LONG_TERM_HORIZON: &str =
    "For long-term goals over five years, diversify into stocks, ETFs, or index funds for growth.";

/// Rule table for budgeting and investment advice
pub struct FinancialAdvisor {
    rules: RuleBook<FinancialProfile>,
}

impl FinancialAdvisor {
    pub fn new() -> Self {
        let rules = RuleBook::new("financial")
            .with(Clause::new(
                "emergency_fund",
                |p: &FinancialProfile| p.savings < EMERGENCY_FUND_MONTHS * p.expenses,
                |_: &FinancialProfile| EMERGENCY_FUND.to_string(),
            ))
            .with(Clause::new(
                "debt_reduction",
                |p: &FinancialProfile| p.debt > 0.0,
                |p: &FinancialProfile| {
                    format!(
                        "Focus on reducing your debt of {}. Prioritize high-interest debts first.",
                        display_amount(p.debt)
                    )
                },
            ))
            .with(Clause::always("risk_allocation", |p: &FinancialProfile| {
                risk_advice(&p.risk_profile).to_string()
            }))
            .with(Clause::always("age_horizon", |p: &FinancialProfile| {
                age_advice(p.age).to_string()
            }))
            .with(Clause::always("disposable_income", |p: &FinancialProfile| {
                let disposable = disposable_income(p);
                if disposable > 0.0 {
                    format!(
                        "Save or invest approximately {} per month for your goals.",
                        suggested_monthly_saving(disposable)
                    )
                } else {
                    BUDGET_REVIEW.to_string()
                }
            }))
            .with(Clause::always("short_term_horizon", |_: &FinancialProfile| {
                SHORT_TERM_HORIZON.to_string()
            }))
            .with(Clause::always("long_term_horizon", |_: &FinancialProfile| {
                LONG_TERM_HORIZON.to_string()
            }));

        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.rule_names()
    }

    pub fn advise(&self, profile: &FinancialProfile) -> Vec<String> {
        self.rules.evaluate_text(profile)
    }
}

impl Default for FinancialAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered budgeting/investment advice for one profile
pub fn derive_financial_advice(profile: &FinancialProfile) -> Vec<String> {
    FinancialAdvisor::new().advise(profile)
}

/// Income minus expenses minus debt. May be negative.
pub fn disposable_income(profile: &FinancialProfile) -> f64 {
    profile.income - profile.expenses - profile.debt
}

/// Whole currency units, truncated toward zero. Printed from the float
/// itself so large amounts keep every digit instead of saturating.
fn suggested_monthly_saving(disposable: f64) -> String {
    format!("{:.0}", (disposable * SAVINGS_RATE).trunc())
}

fn risk_advice(risk: &RiskProfile) -> &'static str {
    match risk {
        RiskProfile::Low => LOW_RISK,
        RiskProfile::Medium => MEDIUM_RISK,
        RiskProfile::High => HIGH_RISK,
        RiskProfile::Unrecognized(raw) => {
            warn!(risk_profile = %raw, "Unrecognized risk profile, advising as high risk");
            HIGH_RISK
        }
    }
}

fn age_advice(age: u32) -> &'static str {
    match age {
        0..=29 => EARLY_RETIREMENT,
        30..=49 => WEALTH_BUILDING,
        _ => RETIREMENT_SAFETY,
    }
}

/// Amounts as the web client has always displayed them: shortest
/// round-trip digits, whole numbers keep one decimal place (`500.0`),
/// and exponents below -4 or from 16 up switch to `1e+16` / `1e-05` form.
fn display_amount(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let plain = format!("{}", value);
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    }
}
