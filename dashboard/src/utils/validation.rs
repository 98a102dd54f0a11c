/// Validation utilities for user input
use crate::core::error::{AppError, Result};

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Parse an amount field into a positive, finite number.
///
/// Surrounding whitespace and `,` thousands separators are accepted.
pub fn parse_amount(text: &str) -> Result<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(AppError::InvalidAmount(text.to_string()));
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(AppError::InvalidAmount(text.to_string())),
    }
}

/// Validate an amount field for inline hints
pub fn validate_amount(text: &str) -> ValidationResult {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ValidationResult::err("Amount is required");
    }

    match parse_amount(trimmed) {
        Ok(_) => ValidationResult::ok(),
        Err(_) => match trimmed.replace(',', "").parse::<f64>() {
            Ok(value) if value.is_finite() => ValidationResult::err("Amount must be greater than zero"),
            _ => ValidationResult::err("Amount must be a number"),
        },
    }
}
