use airport_control::utils::{logger, validation::Validate};
use airport_control::{CliConfig, Tower};
use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting airport control tower");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // Validate flags before touching the config file
    let config = match cli.validate().and_then(|_| cli.resolve()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let airport = config
        .build_airport()
        .context("failed to build airport from configuration")?;
    tracing::info!(
        "🛬 {} open with {} stands",
        airport.name(),
        airport.capacity()
    );

    let mut tower = Tower::new(airport);
    if let Err(e) = tower.run_script(cli.commands.as_slice()) {
        tracing::error!(
            "❌ Tower script aborted: {} (Severity: {:?})",
            e,
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if cli.json {
        let report = serde_json::to_string_pretty(&tower.report())
            .context("failed to serialize flight log")?;
        println!("{}", report);
    } else {
        for entry in tower.log() {
            println!("{}", entry);
        }
        let summary = tower.summary();
        println!(
            "📋 {} landed, {} departed, {} refused; {}/{} stands taken",
            summary.landed,
            summary.departed,
            summary.refused,
            tower.airport().len(),
            tower.airport().capacity()
        );
    }

    Ok(())
}
