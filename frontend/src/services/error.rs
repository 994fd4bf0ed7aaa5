use thiserror::Error;

/// Failure taxonomy for the goal update flow.
///
/// `Display` is the user-facing banner text. `Transport` keeps its
/// underlying reason out of `Display` so the banner stays generic; the
/// reason is only for the console log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UpdateError {
    /// Bad or missing amount, caught before any I/O.
    #[error("Пожалуйста, введите корректную сумму")]
    Validation,
    /// Network failure, or a response body that does not parse.
    #[error("Произошла ошибка при обновлении цели")]
    Transport { reason: String },
    /// Server-reported failure with a human message.
    #[error("{0}")]
    Business(String),
}

/// Parse and validate the amount field of the update form.
///
/// The amount must parse to a finite number greater than zero; anything
/// else fails synchronously and never reaches the network.
pub fn validate_amount(input: &str) -> Result<f64, UpdateError> {
    match input.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(UpdateError::Validation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_amounts() {
        assert_eq!(validate_amount("100"), Ok(100.0));
        assert_eq!(validate_amount("0.01"), Ok(0.01));
        assert_eq!(validate_amount(" 2500.50 "), Ok(2500.5));
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        assert_eq!(validate_amount("0"), Err(UpdateError::Validation));
        assert_eq!(validate_amount("-1"), Err(UpdateError::Validation));
        assert_eq!(validate_amount("-0.01"), Err(UpdateError::Validation));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(validate_amount(""), Err(UpdateError::Validation));
        assert_eq!(validate_amount("abc"), Err(UpdateError::Validation));
        assert_eq!(validate_amount("12,50"), Err(UpdateError::Validation));
    }

    #[test]
    fn rejects_non_finite_input() {
        assert_eq!(validate_amount("inf"), Err(UpdateError::Validation));
        assert_eq!(validate_amount("NaN"), Err(UpdateError::Validation));
    }

    #[test]
    fn transport_display_stays_generic() {
        let error = UpdateError::Transport {
            reason: "connection refused".to_string(),
        };
        assert_eq!(error.to_string(), "Произошла ошибка при обновлении цели");
    }

    #[test]
    fn business_display_is_the_server_message() {
        let error = UpdateError::Business("Недостаточно данных".to_string());
        assert_eq!(error.to_string(), "Недостаточно данных");
    }
}
