//! Input validation for scheduling batches.
//!
//! Checks the batch before any simulator runs. Detects:
//! - Negative arrival times
//! - Non-positive bursts
//! - Non-positive Round Robin quantum
//! - Batches whose clock could exceed `i64` (last arrival plus total burst)
//!
//! Every problem is reported, not just the first, and a batch with any
//! error produces no report at all.

use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has `burst <= 0`.
    InvalidBurst,
    /// A process has `arrival < 0`.
    InvalidArrival,
    /// The Round Robin quantum is `<= 0`.
    InvalidQuantum,
    /// The latest arrival plus the total burst does not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates `(arrival, burst)` pairs.
///
/// Checks, per process:
/// 1. `arrival >= 0`
/// 2. `burst > 0`
///
/// Then, over the valid pairs, that `max(arrival) + sum(burst)` fits in
/// `i64`. No simulator clock can pass that bound.
pub fn validate_processes(pairs: &[(i64, i64)]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut latest_arrival: i64 = 0;
    let mut horizon = Some(0_i64);

    for (index, &(arrival, burst)) in pairs.iter().enumerate() {
        if arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!("Process {index} has negative arrival time {arrival}"),
            ));
        }
        if burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process {index} has non-positive burst {burst}"),
            ));
        }
        if arrival >= 0 && burst > 0 {
            latest_arrival = latest_arrival.max(arrival);
            horizon = horizon.and_then(|h| h.checked_add(burst));
        }
    }

    if horizon.and_then(|h| h.checked_add(latest_arrival)).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst exceeds the representable time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_batch() {
        assert!(validate_processes(&[(0, 5), (1, 3), (2, 1)]).is_ok());
        assert!(validate_quantum(2).is_ok());
    }

    #[test]
    fn test_zero_burst() {
        let errors = validate_processes(&[(0, 0)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBurst);
        assert!(errors[0].message.contains("Process 0"));
    }

    #[test]
    fn test_negative_burst() {
        let errors = validate_processes(&[(0, 4), (3, -2)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Process 1"));
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[(-1, 4)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidArrival);
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(1).is_ok());
        assert_eq!(
            validate_quantum(0).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
        assert!(validate_quantum(-5).is_err());
    }

    #[test]
    fn test_multiple_errors() {
        // Bad arrival and bad burst on one process are both reported
        let errors = validate_processes(&[(-1, 0), (0, 3)]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidArrival);
        assert_eq!(errors[1].kind, ValidationErrorKind::InvalidBurst);
    }

    #[test]
    fn test_time_overflow() {
        let errors = validate_processes(&[(i64::MAX - 2, 5)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        // Bursts alone can overflow too
        let errors = validate_processes(&[(0, i64::MAX), (0, 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_time_at_limit_is_valid() {
        assert!(validate_processes(&[(i64::MAX - 5, 5)]).is_ok());
        assert!(validate_processes(&[(0, i64::MAX)]).is_ok());
    }

    #[test]
    fn test_overflow_ignores_invalid_pairs() {
        // An invalid pair is left out of the horizon
        let errors = validate_processes(&[(i64::MAX, -1)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBurst);
    }

    #[test]
    fn test_empty_batch_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_display() {
        let e = validate_quantum(-3).unwrap_err();
        assert_eq!(e.to_string(), "Time quantum must be positive, got -3");
    }
}
