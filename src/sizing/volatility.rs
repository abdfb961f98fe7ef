//! VIX-based position scaling

/// Lower edge of the 0.75 bucket
pub const ELEVATED_VIX: f64 = 15.0;
/// Lower edge of the 0.5 bucket; readings above it get a high volatility warning
pub const HIGH_VIX: f64 = 25.0;
/// Lower edge of the 0.25 bucket; readings above it get an extreme volatility warning
pub const EXTREME_VIX: f64 = 35.0;

/// Position size multiplier for a VIX reading.
///
/// | VIX | multiplier |
/// |-----|-----------|
/// | < 15 | 1.0 |
/// | 15 - 25 | 0.75 |
/// | 25 - 35 | 0.5 |
/// | >= 35 | 0.25 |
///
/// Lower bounds are inclusive. A non-finite reading gets the smallest multiplier.
pub fn vix_multiplier(vix: f64) -> f64 {
    if vix.is_nan() || vix >= EXTREME_VIX {
        0.25
    } else if vix >= HIGH_VIX {
        0.5
    } else if vix >= ELEVATED_VIX {
        0.75
    } else {
        1.0
    }
}
