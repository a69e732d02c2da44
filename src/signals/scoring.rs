//! Score rounding, clamping and threshold helpers shared by the evaluators.

pub const MAX_SCORE: u8 = 100;

/// Round a raw confidence to the nearest integer and clamp it into `[0, 100]`.
///
/// Evaluators call this once, after every bonus has been added.
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

/// Round and cap at 100 without producing the final `u8`, for intermediate terms.
pub fn capped(raw: f64) -> f64 {
    raw.round().min(f64::from(MAX_SCORE))
}

/// `numerator / denominator`, or `None` when the denominator is zero or the
/// result is not finite.
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator).filter(|r| r.is_finite())
}

/// Signed percentage distance of `value` from `reference`.
pub fn percent_diff(value: f64, reference: f64) -> Option<f64> {
    ratio(value - reference, reference).map(|r| r * 100.0)
}
