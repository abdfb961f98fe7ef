//! kelly-sizer: position sizing and growth projection engine
//!
//! This library provides pure, deterministic calculations for:
//! - Risk profiles with bounded risk-per-trade bands
//! - Input validation against safety limits
//! - Full and fractional Kelly sizing from trade statistics
//! - VIX-based size scaling
//! - Fixed-fractional risk solving for a capital growth target
//! - Compound growth projection with round-trip verification
//! - A combined, conservative position size recommendation

pub mod cli;
pub mod config;
pub mod growth;
pub mod profile;
pub mod sizing;
pub mod telemetry;

pub use growth::{
    solve_fixed_fractional_f, FixedFractionalQuery, FixedFractionalSolver, GrowthProjectionInput,
    GrowthProjectionResult, GrowthProjector, NoSolution,
};
pub use profile::{RiskProfile, RiskProfileCatalog, RiskProfileName};
pub use sizing::{
    kelly_fraction, PositionSizeRecommender, PositionSizingInput, PositionSizingResult,
    ValidationResult,
};
