//! Kitchen price estimator on the home page.
//!
//! Width and height are typed as free text restricted to unsigned decimals;
//! the estimate is `width * height * BASE_PRICE_EGP` once both are positive.

#[cfg(test)]
#[path = "estimator_test.rs"]
mod estimator_test;

/// Price per square meter in Egyptian pounds.
pub const BASE_PRICE_EGP: f64 = 1500.0;

/// Delay before a fresh estimate is revealed.
pub const SETTLE_DELAY_MS: u32 = 500;

pub const INVALID_DIMENSIONS_MESSAGE: &str = "Please enter valid dimensions greater than 0";

/// Whether `value` is an acceptable partial input: digits with at most one
/// decimal point, or nothing at all.
#[must_use]
pub fn is_decimal_input(value: &str) -> bool {
    let mut seen_dot = false;
    value.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

/// Outcome for the current pair of inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Estimate {
    /// One or both inputs are empty.
    Pending,
    /// Both present but at least one is not a positive number.
    Invalid,
    /// Total price in EGP.
    Price(f64),
}

#[must_use]
pub fn estimate(width: &str, height: &str) -> Estimate {
    if width.is_empty() || height.is_empty() {
        return Estimate::Pending;
    }
    match (width.parse::<f64>(), height.parse::<f64>()) {
        (Ok(w), Ok(h)) if w > 0.0 && h > 0.0 => Estimate::Price(w * h * BASE_PRICE_EGP),
        _ => Estimate::Invalid,
    }
}

/// Raw input state for the two dimension fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EstimatorInputs {
    pub width: String,
    pub height: String,
}

impl EstimatorInputs {
    /// Accept `value` for the width field if it is decimal text. Returns
    /// whether the edit was applied; rejected keystrokes leave the field as is.
    pub fn set_width(&mut self, value: String) -> bool {
        accept(&mut self.width, value)
    }

    /// Same as [`Self::set_width`] for the height field.
    pub fn set_height(&mut self, value: String) -> bool {
        accept(&mut self.height, value)
    }

    #[must_use]
    pub fn estimate(&self) -> Estimate {
        estimate(&self.width, &self.height)
    }
}

fn accept(slot: &mut String, value: String) -> bool {
    if is_decimal_input(&value) {
        *slot = value;
        true
    } else {
        false
    }
}
