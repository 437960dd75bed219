use chrono::Local;
use debt_ledger::{
    config::{seed, settings::Settings},
    core::{
        Ledger, UuidIds,
        debt::projected_payoff,
        report::{format_debt_line, format_expense_line, format_summary},
    },
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since variables can be set externally
    dotenv().ok();

    // 3. Resolve settings
    let settings = Settings::from_env().inspect_err(|e| error!("Invalid settings: {}", e))?;

    // 4. Build the ledger from the seed file, or start empty without one
    let ledger = if settings.seed_path.exists() {
        seed::load_seed(&settings.seed_path)
            .and_then(|file| file.into_ledger(UuidIds))
            .inspect(|_| info!("Loaded seed file {}", settings.seed_path.display()))
            .inspect_err(|e| error!("Failed to load seed file: {}", e))?
    } else {
        info!(
            "No seed file at {}, starting with an empty ledger",
            settings.seed_path.display()
        );
        Ledger::new()
    };

    // 5. Print the monthly overview
    let today = Local::now().date_naive();
    println!("{}", format_summary(&ledger.totals()));

    println!();
    println!("Debts");
    for debt in ledger.debts() {
        let payoff = projected_payoff(debt, today)
            .map_or_else(|| "no payoff date".to_string(), |d| d.format("%Y-%m").to_string());
        println!("  {} | {}", format_debt_line(debt), payoff);
    }

    println!();
    println!("Fixed expenses");
    for expense in ledger.expenses() {
        println!("  {}", format_expense_line(expense, settings.locale));
    }

    Ok(())
}
