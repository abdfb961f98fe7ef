//! Capital growth module
//!
//! Fixed-fractional risk solving and compound return projection

mod fixed_fractional;
mod projection;

pub use fixed_fractional::{
    solve_fixed_fractional_f, Convergence, FixedFractionalQuery, FixedFractionalSolution,
    FixedFractionalSolver, NoSolution,
};
pub use projection::{GrowthProjectionInput, GrowthProjectionResult, GrowthProjector};
