use anyhow::Context;
use clap::Parser;
use raffle_tickets::utils::{logger, validation::Validate};
use raffle_tickets::{CliConfig, LocalStorage, RaffleEngine, RaffleError, TicketSettings};
use std::io::{self, Write};

fn main() {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting raffle-tickets");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match &config.config {
        Some(path) => load_settings(path).unwrap_or_else(|e| fail(e)),
        None => TicketSettings::default(),
    };

    if config.organization.is_none() {
        config.organization = settings.organization.clone();
    }
    if config.organization.is_none() {
        match prompt_organization() {
            Ok(name) => config.organization = Some(name),
            Err(e) => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        fail(e);
    }

    println!("📧 Input file: {}", config.input);
    println!("🏢 Organization: {}", config.organization.as_deref().unwrap_or_default());
    println!("📄 Output file: {}", config.output);
    println!("{}", "-".repeat(50));

    let output = config.output.clone();
    let date = config.date.clone();
    let mut engine = RaffleEngine::new(LocalStorage::default(), config)
        .with_layout(settings.layout)
        .with_style(settings.style);
    if let Some(date) = date {
        engine = engine.with_date(date);
    }

    match engine.run() {
        Ok(summary) => {
            tracing::info!("Raffle tickets written to {}", summary.output_path);
            println!();
            println!("✅ Tickets written to: {}", summary.output_path);
            if let Some(path) = &summary.assignments_path {
                println!("✅ Assignments written to: {}", path);
            }
            println!(
                "📊 {} identifiers, {} tickets, {} pages",
                summary.identifiers, summary.tickets, summary.pages
            );
            println!("💡 Open '{}' in a web browser and print it.", output);
        }
        Err(e) => {
            tracing::error!(
                "Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(e);
        }
    }
}

fn load_settings(path: &str) -> raffle_tickets::Result<TicketSettings> {
    tracing::info!("Loading settings from: {}", path);
    let settings = TicketSettings::from_file(path)?;
    settings.validate()?;
    Ok(settings)
}

fn prompt_organization() -> anyhow::Result<String> {
    print!("Organization name: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read the organization name from stdin")?;
    Ok(line.trim().to_string())
}

fn fail(error: RaffleError) -> ! {
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(error.exit_code());
}
