use clap::Parser;
use kelly_sizer::cli::{Cli, Commands};
use kelly_sizer::config::Config;
use kelly_sizer::profile::RiskProfileCatalog;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    kelly_sizer::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Recommend(args) => args.execute(&config)?,
        Commands::Project(args) => args.execute(&config)?,
        Commands::Solve(args) => args.execute(&config)?,
        Commands::Profiles => {
            for profile in RiskProfileCatalog::standard().iter() {
                println!("{}", profile.name);
                println!(
                    "  Risk per trade: {}% - {}% (default {}%)",
                    profile.risk_per_trade.min,
                    profile.risk_per_trade.max,
                    profile.risk_per_trade.default
                );
                println!("  Kelly multiplier: {}", profile.kelly_fraction_multiplier);
                println!("  Max drawdown: {}%", profile.max_drawdown * 100.0);
                println!("  {}", profile.description);
            }
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
