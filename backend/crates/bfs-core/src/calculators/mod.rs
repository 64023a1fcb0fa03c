//! Pure financial calculators. No I/O; invalid input is reported as
//! [`CoreError::Validation`](crate::CoreError::Validation) naming the field.

pub mod investment;
pub mod life_insurance;
pub mod mortgage;

/// Round to whole cents for display
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
