//! Recommend command implementation

use clap::Args;
use rust_decimal::Decimal;

use super::{print_json, print_messages, OutputFormat};
use crate::config::Config;
use crate::growth::FixedFractionalSolver;
use crate::profile::{RiskProfileCatalog, RiskProfileName};
use crate::sizing::{GrowthTarget, PositionSizeRecommender, PositionSizingInput, PositionSizingResult};

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Account balance
    #[arg(long)]
    pub balance: Decimal,

    /// Historical win rate in percent
    #[arg(long)]
    pub win_rate: f64,

    /// Average winning trade
    #[arg(long)]
    pub avg_win: f64,

    /// Average losing trade, as a positive amount
    #[arg(long)]
    pub avg_loss: f64,

    /// Risk profile: conservative, moderate or aggressive
    #[arg(long, default_value = "moderate")]
    pub profile: RiskProfileName,

    /// Current VIX reading
    #[arg(long)]
    pub vix: Option<f64>,

    /// Cap on risk per trade in percent
    #[arg(long)]
    pub max_risk: Option<f64>,

    /// Growth target as final/starting balance (requires --trades)
    #[arg(long, requires = "trades")]
    pub target_ratio: Option<f64>,

    /// Number of trades for the growth target
    #[arg(long, requires = "target_ratio")]
    pub trades: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl RecommendArgs {
    fn input(&self) -> PositionSizingInput {
        let mut input = PositionSizingInput::new(
            self.balance,
            self.win_rate,
            self.avg_win,
            self.avg_loss,
            self.profile,
        );
        if let Some(vix) = self.vix {
            input = input.with_vix(vix);
        }
        if let Some(max_risk) = self.max_risk {
            input = input.with_max_risk_override(max_risk);
        }
        input
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let recommender =
            PositionSizeRecommender::new(RiskProfileCatalog::standard(), config.sizing.clone());
        let input = self.input();

        let result = match (self.target_ratio, self.trades) {
            (Some(target_capital_ratio), Some(num_trades)) => {
                let solver = FixedFractionalSolver::from_config(&config.solver);
                let target = GrowthTarget {
                    target_capital_ratio,
                    num_trades,
                };
                recommender.recommend_with_target(&input, &target, &solver)
            }
            _ => recommender.recommend(&input),
        };

        tracing::info!(
            profile = %self.profile,
            recommended = result.recommended_position_size,
            valid = result.validation.is_valid,
            "Recommendation computed"
        );

        match self.format {
            OutputFormat::Json => print_json(&result),
            OutputFormat::Table => {
                print_table(&result);
                Ok(())
            }
        }
    }
}

fn print_table(result: &PositionSizingResult) {
    println!("Profile:            {}", result.risk_profile.name);
    println!("Full Kelly:         {:.4}", result.kelly_fraction);
    println!("Fractional Kelly:   {:.4}", result.fractional_kelly);
    println!(
        "Recommended size:   {:.3}% ({:?})",
        result.recommended_position_size, result.limiting_factor
    );
    println!("VIX adjusted size:  {:.3}%", result.vix_adjusted_size);
    println!("Max position size:  {:.3}%", result.max_position_size);
    println!("Risk amount:        {}", result.risk_amount);
    if let Some(advice) = &result.growth_advice {
        match advice.required_risk_pct {
            Some(pct) => println!(
                "Target {}x / {} trades needs {:.3}% per trade",
                advice.target.target_capital_ratio, advice.target.num_trades, pct
            ),
            None => println!(
                "Target {}x / {} trades is not reachable",
                advice.target.target_capital_ratio, advice.target.num_trades
            ),
        }
    }
    println!("Valid:              {}", result.validation.is_valid);
    print_messages(&result.validation.errors, &result.validation.warnings);
}
