use std::fs::File;
use std::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wealth_advisor::{advise, quick_recommend, FinancialProfile, RiskProfile};

fn sample_profile() -> FinancialProfile {
    FinancialProfile {
        income: 5000.0,
        expenses: 2000.0,
        savings: 1000.0,
        debt: 500.0,
        age: 25,
        dependents: 0,
        risk_profile: RiskProfile::Low,
        context: "savings".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Optional profile JSON file as the first argument
    let profile = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "Loading profile");
            let reader = BufReader::new(File::open(&path)?);
            serde_json::from_reader::<_, FinancialProfile>(reader)?
        }
        None => sample_profile(),
    };

    let result = advise(&profile);
    let quick = quick_recommend(profile.income, profile.expenses);

    println!("\n=== FINANCIAL ADVICE ===");
    for (i, line) in result.financial_advice.iter().enumerate() {
        println!("  {}: {}", i + 1, line);
    }

    println!("\n=== TRUST ADVICE ===");
    if result.trust_advice.is_empty() {
        println!("  (none)");
    }
    for (i, line) in result.trust_advice.iter().enumerate() {
        println!("  {}: {}", i + 1, line);
    }

    println!("\n=== QUICK CHECK ===");
    println!("Savings: {:.2} ({:.2}%)", quick.savings, quick.savings_percent);
    println!("Expenses: {:.2}", quick.expenses);
    for line in &quick.advice {
        println!("  - {}", line);
    }

    Ok(())
}
