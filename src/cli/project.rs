//! Project command implementation

use clap::Args;

use super::{print_json, print_messages, OutputFormat};
use crate::config::Config;
use crate::growth::{GrowthProjectionInput, GrowthProjector};

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Starting balance
    #[arg(long)]
    pub initial: f64,

    /// Ending balance
    #[arg(long = "final")]
    pub final_value: f64,

    /// Number of trades between the two balances
    #[arg(long)]
    pub trades: u32,

    /// Time horizon in years, for an annualized return
    #[arg(long)]
    pub years: Option<f64>,

    /// Print the balance after every trade
    #[arg(long)]
    pub trajectory: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ProjectArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let projector = GrowthProjector::new(config.projection.clone());
        let mut input = GrowthProjectionInput::new(self.initial, self.final_value, self.trades);
        if let Some(years) = self.years {
            input = input.with_time_horizon(years);
        }

        let result = projector.project(&input);
        let trajectory = (self.trajectory && result.is_valid).then(|| {
            projector.trajectory(self.initial, result.per_trade_return, self.trades)
        });

        match self.format {
            OutputFormat::Json => print_json(&serde_json::json!({
                "projection": result,
                "trajectory": trajectory,
            })),
            OutputFormat::Table => {
                println!("Per-trade return:   {:.4}%", result.per_trade_return_percent);
                println!("Total return:       {:.2}%", result.total_return_percent);
                if let Some(annualized) = result.annualized_return {
                    println!("Annualized return:  {:.2}%", annualized * 100.0);
                }
                println!("Compounded value:   {:.2}", result.compounded_value);
                println!("Valid:              {}", result.is_valid);
                print_messages(&result.errors, &result.warnings);
                if let Some(path) = trajectory {
                    for (trade, balance) in path.iter().enumerate() {
                        println!("{:>5}  {:.2}", trade, balance);
                    }
                }
                Ok(())
            }
        }
    }
}
