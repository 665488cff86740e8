//! Validation of raw text before it reaches the solvers.
//!
//! The solvers assume finite reals; anything else is rejected here.

use eqs_core::{EqsError, ErrorInfo};

/// Parses a finite real coefficient.
pub fn parse_coefficient(text: &str) -> Result<f64, EqsError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EqsError::Input(ErrorInfo::new(
            "input-empty",
            "Input cannot be empty. Please enter a valid number.",
        )));
    }
    let value: f64 = trimmed.parse().map_err(|_| {
        EqsError::Input(
            ErrorInfo::new(
                "input-not-a-number",
                format!("Please enter a valid number. Invalid input: {trimmed}"),
            )
            .with_context("input", trimmed),
        )
    })?;
    if !value.is_finite() {
        return Err(EqsError::Input(
            ErrorInfo::new(
                "input-not-finite",
                format!("Please enter a finite number. Invalid input: {trimmed}"),
            )
            .with_context("input", trimmed),
        ));
    }
    Ok(value)
}

/// Parses a menu choice within `min..=max`.
pub fn parse_choice(text: &str, min: u32, max: u32) -> Result<u32, EqsError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EqsError::Input(ErrorInfo::new(
            "input-empty",
            "Input cannot be empty. Please enter a valid choice.",
        )));
    }
    match trimmed.parse::<u32>() {
        Ok(choice) if (min..=max).contains(&choice) => Ok(choice),
        _ => Err(EqsError::Input(
            ErrorInfo::new(
                "choice-out-of-range",
                format!("Please enter a number between {min} and {max}. Invalid input: {trimmed}"),
            )
            .with_context("input", trimmed)
            .with_context("min", min.to_string())
            .with_context("max", max.to_string()),
        )),
    }
}

/// Interprets a yes/no answer; anything but `y`/`yes` is a no.
pub fn is_affirmative(text: &str) -> bool {
    matches!(text.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients() {
        assert_eq!(parse_coefficient(" -2.5 ").unwrap(), -2.5);
        assert_eq!(parse_coefficient("1e3").unwrap(), 1000.0);
        assert_eq!(parse_coefficient("").unwrap_err().info().code, "input-empty");
        assert_eq!(parse_coefficient("abc").unwrap_err().info().code, "input-not-a-number");
        assert_eq!(parse_coefficient("inf").unwrap_err().info().code, "input-not-finite");
        assert_eq!(parse_coefficient("NaN").unwrap_err().info().code, "input-not-finite");
    }

    #[test]
    fn choices() {
        assert_eq!(parse_choice("2", 1, 3).unwrap(), 2);
        assert_eq!(parse_choice("4", 1, 3).unwrap_err().info().code, "choice-out-of-range");
        assert_eq!(parse_choice("-1", 1, 3).unwrap_err().info().code, "choice-out-of-range");
        assert_eq!(parse_choice("  ", 1, 3).unwrap_err().info().code, "input-empty");
    }

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("Y"));
        assert!(is_affirmative(" yes\n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative(""));
    }
}
