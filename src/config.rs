//! Configuration types for kelly-sizer

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub sizing: SizingConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub projection: ProjectionConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Position sizing validation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SizingConfig {
    /// Smallest account balance a recommendation is considered valid for
    #[serde(default = "default_min_account_balance")]
    pub min_account_balance: Decimal,

    /// Average win and average loss must both exceed this value
    #[serde(default = "default_min_avg_trade")]
    pub min_avg_trade: f64,
}

fn default_min_account_balance() -> Decimal {
    Decimal::new(2000, 0)
}
fn default_min_avg_trade() -> f64 {
    0.01
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            min_account_balance: Decimal::new(2000, 0),
            min_avg_trade: 0.01,
        }
    }
}

/// Fixed-fractional solver configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SolverConfig {
    /// Bisection iteration cap
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Absolute tolerance on the achieved capital ratio
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Upper bound of the searched risk fraction
    #[serde(default = "default_max_fraction")]
    pub max_fraction: f64,

    /// Multiplier applied to `tolerance` when accepting an unconverged bracket
    #[serde(default = "default_relaxed_factor")]
    pub relaxed_tolerance_factor: f64,
}

fn default_max_iterations() -> u32 {
    100
}
fn default_tolerance() -> f64 {
    1e-6
}
fn default_max_fraction() -> f64 {
    0.5
}
fn default_relaxed_factor() -> f64 {
    10.0
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
            max_fraction: 0.5,
            relaxed_tolerance_factor: 10.0,
        }
    }
}

/// Growth projection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectionConfig {
    /// Relative error allowed when recompounding the per-trade return
    #[serde(default = "default_accuracy_tolerance")]
    pub accuracy_tolerance: f64,

    /// Lowest total return (percent) accepted as a sane target
    #[serde(default = "default_min_total_return_pct")]
    pub min_total_return_pct: f64,

    /// Highest total return (percent) accepted as a sane target
    #[serde(default = "default_max_total_return_pct")]
    pub max_total_return_pct: f64,

    /// Largest number of trades a projection may span
    #[serde(default = "default_max_trades")]
    pub max_trades: u32,
}

fn default_accuracy_tolerance() -> f64 {
    0.0001 // 0.01%
}
fn default_min_total_return_pct() -> f64 {
    -50.0
}
fn default_max_total_return_pct() -> f64 {
    200.0
}
fn default_max_trades() -> u32 {
    1000
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            accuracy_tolerance: 0.0001,
            min_total_return_pct: -50.0,
            max_total_return_pct: 200.0,
            max_trades: 1000,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
