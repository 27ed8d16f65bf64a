//! Wealth Advisor
//!
//! Deterministic personal-finance guidance:
//! - Budgeting and investment advice from a financial profile
//! - Estate, trust and insurance advice from age, savings and dependents
//! - Quick savings-ratio recommendation from income and expenses
//! - Optional spoken delivery through a pluggable text-to-speech backend
//!
//! Every advisor is a pure, ordered rule table.
//! PROFILE → RULES (in order) → ADVICE → [SPEECH]

pub mod advisor;
pub mod api;
pub mod config;
pub mod error;
pub mod financial;
pub mod models;
pub mod quick;
pub mod rules;
pub mod speech;
pub mod trust;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use advisor::{advise, Advisor};
pub use financial::{derive_financial_advice, FinancialAdvisor};
pub use quick::quick_recommend;
pub use trust::{derive_trust_advice, TrustAdvisor, TrustProfile};
