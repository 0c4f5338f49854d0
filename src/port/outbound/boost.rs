//! Special-day demand boost port.

/// Source of the multiplicative boost applied on special days.
///
/// Drawn once per item per request. Production sources are random; tests
/// inject fixed values.
pub trait BoostSource: Send + Sync {
    /// Draw one multiplier.
    fn multiplier(&self) -> f64;
}
