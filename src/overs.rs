// Overs/balls codec.
//
// A bowling duration crosses the boundary in one of three shapes: a string
// like "18.3" (18 whole overs, 3 balls), a bare number, or a structured
// {overs, balls} pair. Everything is normalized to an integer ball count
// here, so the rest of the engine only ever deals in balls.

use serde::Deserialize;

use crate::error::EngineError;

/// Legal deliveries per over.
pub const BALLS_PER_OVER: u32 = 6;

// ---------------------------------------------------------------------------
// Boundary input forms
// ---------------------------------------------------------------------------

/// The accepted boundary representations of an overs duration.
///
/// The fractional digit of the decimal forms counts balls within the current
/// over and must therefore be in 0..=5; "18.6" is not eighteen overs and six
/// balls, it is malformed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OversInput {
    Pair { overs: u32, balls: u32 },
    Number(f64),
    Text(String),
}

/// Normalize any boundary form to a ball count.
pub fn parse_overs_to_balls(input: &OversInput) -> Result<u32, EngineError> {
    match input {
        OversInput::Text(s) => parse_overs_str(s),
        OversInput::Number(n) => parse_overs_number(*n),
        OversInput::Pair { overs, balls } => combine(*overs, *balls, &format!("{overs}.{balls}")),
    }
}

/// Parse an overs string ("20", "20.0", "18.3") to a ball count.
///
/// Fails with `InvalidFormat` when the ball digit is >= 6, the fractional
/// part is not exactly one digit, or either part is not a non-negative
/// integer.
pub fn parse_overs_str(value: &str) -> Result<u32, EngineError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::invalid_format(value, "empty value"));
    }

    match trimmed.split_once('.') {
        None => {
            let overs: u32 = trimmed
                .parse()
                .map_err(|_| EngineError::invalid_format(value, "not a number"))?;
            combine(overs, 0, value)
        }
        Some((whole, frac)) => {
            let overs: u32 = whole
                .parse()
                .map_err(|_| EngineError::invalid_format(value, "not a number"))?;
            if frac.len() != 1 {
                return Err(EngineError::invalid_format(
                    value,
                    "ball component must be a single digit",
                ));
            }
            let balls: u32 = frac
                .parse()
                .map_err(|_| EngineError::invalid_format(value, "not a number"))?;
            combine(overs, balls, value)
        }
    }
}

fn parse_overs_number(value: f64) -> Result<u32, EngineError> {
    let display = value.to_string();
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::invalid_format(
            display,
            "must be a finite non-negative number",
        ));
    }
    // One meaningful fractional digit at most: 18.3 is fine, 18.25 is not.
    let tenths = (value * 10.0).round();
    if (value * 10.0 - tenths).abs() > 1e-6 {
        return Err(EngineError::invalid_format(
            display,
            "at most one fractional digit",
        ));
    }
    if tenths > u32::MAX as f64 {
        return Err(EngineError::invalid_format(display, "overs value too large"));
    }
    let tenths = tenths as u32;
    combine(tenths / 10, tenths % 10, &display)
}

fn combine(overs: u32, balls: u32, original: &str) -> Result<u32, EngineError> {
    if balls >= BALLS_PER_OVER {
        return Err(EngineError::invalid_format(
            original,
            "ball component must be between 0 and 5",
        ));
    }
    overs
        .checked_mul(BALLS_PER_OVER)
        .and_then(|b| b.checked_add(balls))
        .ok_or_else(|| EngineError::invalid_format(original, "overs value too large"))
}

// ---------------------------------------------------------------------------
// Inverse mappings
// ---------------------------------------------------------------------------

/// Ball count to overs string, e.g. 111 -> "18.3". Two-sided inverse of
/// `parse_overs_str` for every ball count.
pub fn balls_to_overs_string(balls: u32) -> String {
    format!("{}.{}", balls / BALLS_PER_OVER, balls % BALLS_PER_OVER)
}

/// Ball count to fractional overs, e.g. 111 -> 18.5. Used for run-rate
/// denominators.
pub fn balls_to_decimal_overs(balls: u32) -> f64 {
    balls as f64 / BALLS_PER_OVER as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
