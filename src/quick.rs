//! Quick savings-ratio recommendation
//!
//! Income and expenses only. Independent of the profile advisors.

use crate::models::{QuickInput, QuickResult};
use tracing::debug;

pub const OVERSPENDING: &str = "Your expenses exceed your income! Consider reducing costs.";
pub const LOW_SAVINGS_RATE: &str = "Try to save at least 5% of your income.";
pub const HIGH_EXPENSE_RATIO: &str = "Expenses are over 70% of income. Consider budgeting.";
pub const LOW_EXPENSE_RATIO: &str = "Good job! You are spending less than half your income.";

const MIN_SAVINGS_PERCENT: f64 = 5.0;
const HIGH_EXPENSE_SHARE: f64 = 0.7;
const LOW_EXPENSE_SHARE: f64 = 0.5;

/// Savings summary and short advice for an income/expense pair
pub fn quick_recommend(income: f64, expenses: f64) -> QuickResult {
    let savings = (income - expenses).max(0.0);
    let savings_percent = if income > 0.0 {
        round2(savings / income * 100.0)
    } else {
        0.0
    };

    let mut advice = Vec::new();

    if expenses > income {
        advice.push(OVERSPENDING.to_string());
    } else {
        if savings_percent < MIN_SAVINGS_PERCENT {
            advice.push(LOW_SAVINGS_RATE.to_string());
        }

        // Zero income has no meaningful expense ratio
        if income != 0.0 {
            let expense_share = expenses / income;
            if expense_share > HIGH_EXPENSE_SHARE {
                advice.push(HIGH_EXPENSE_RATIO.to_string());
            }
            if expense_share < LOW_EXPENSE_SHARE {
                advice.push(LOW_EXPENSE_RATIO.to_string());
            }
        }
    }

    debug!(
        savings_percent,
        advice_count = advice.len(),
        "Quick recommendation computed"
    );

    QuickResult {
        savings: round2(savings),
        savings_percent,
        expenses: round2(expenses),
        advice,
    }
}

impl QuickInput {
    pub fn recommend(&self) -> QuickResult {
        quick_recommend(self.income, self.expenses)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_income_and_expenses() {
        let result = quick_recommend(0.0, 0.0);
        assert_eq!(result.savings, 0.0);
        assert_eq!(result.savings_percent, 0.0);
        assert_eq!(result.expenses, 0.0);
        assert_eq!(result.advice, vec![LOW_SAVINGS_RATE]);
    }

    #[test]
    fn test_overspending_short_circuits() {
        let result = quick_recommend(1000.0, 1200.0);
        assert_eq!(result.savings, 0.0);
        assert_eq!(result.savings_percent, 0.0);
        assert_eq!(result.expenses, 1200.0);
        assert_eq!(result.advice, vec![OVERSPENDING]);
    }

    #[test]
    fn test_frugal_household() {
        let result = quick_recommend(3000.0, 1000.0);
        assert_eq!(result.savings, 2000.0);
        assert_eq!(result.savings_percent, 66.67);
        assert_eq!(result.advice, vec![LOW_EXPENSE_RATIO]);
    }

    #[test]
    fn test_tight_budget_fires_both_rate_rules() {
        let result = quick_recommend(1000.0, 980.0);
        assert_eq!(result.savings_percent, 2.0);
        assert_eq!(result.advice, vec![LOW_SAVINGS_RATE, HIGH_EXPENSE_RATIO]);
    }

    #[test]
    fn test_middle_band_gives_no_advice() {
        let result = quick_recommend(1000.0, 600.0);
        assert_eq!(result.savings_percent, 40.0);
        assert!(result.advice.is_empty());
    }

    #[test]
    fn test_negative_income_still_uses_ratio() {
        let result = quick_recommend(-100.0, -200.0);
        assert_eq!(result.savings, 100.0);
        assert_eq!(result.savings_percent, 0.0);
        assert_eq!(result.expenses, -200.0);
        assert_eq!(result.advice, vec![LOW_SAVINGS_RATE, HIGH_EXPENSE_RATIO]);
    }

    #[test]
    fn test_ratio_thresholds_are_strict() {
        let at_seventy = quick_recommend(1000.0, 700.0);
        assert_eq!(at_seventy.savings_percent, 30.0);
        assert!(at_seventy.advice.is_empty());

        let at_half = quick_recommend(1000.0, 500.0);
        assert_eq!(at_half.savings_percent, 50.0);
        assert!(at_half.advice.is_empty());
    }

    #[test]
    fn test_five_percent_savings_is_enough() {
        let result = quick_recommend(1000.0, 950.0);
        assert_eq!(result.savings_percent, 5.0);
        assert_eq!(result.advice, vec![HIGH_EXPENSE_RATIO]);
    }

    #[test]
    fn test_break_even() {
        let result = quick_recommend(1000.0, 1000.0);
        assert_eq!(result.savings, 0.0);
        assert_eq!(result.advice, vec![LOW_SAVINGS_RATE, HIGH_EXPENSE_RATIO]);
    }

    #[test]
    fn test_rounding_for_display() {
        let result = quick_recommend(1234.567, 111.111);
        assert_eq!(result.expenses, 111.11);
        assert_eq!(result.savings, 1123.46);
    }

    #[test]
    fn test_input_recommend_matches_function() {
        let input = QuickInput {
            income: 4200.0,
            expenses: 3100.0,
        };
        assert_eq!(input.recommend(), quick_recommend(4200.0, 3100.0));
    }
}
