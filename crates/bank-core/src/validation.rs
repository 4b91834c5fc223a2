//! Validation utilities.

use crate::{BankError, FieldError};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `BankError` on failure.
    fn validate_request(&self) -> Result<(), BankError> {
        self.validate().map_err(|e| validation_errors_to_bank_error(&e))
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors, descending into
/// nested structs and lists.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut result = Vec::new();

    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    result.push(FieldError {
                        field: field.to_string(),
                        message: err
                            .message
                            .as_ref()
                            .map_or_else(|| err.code.to_string(), ToString::to_string),
                        code: err.code.to_string(),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                for nested_err in field_errors(nested) {
                    result.push(FieldError {
                        field: format!("{}.{}", field, nested_err.field),
                        ..nested_err
                    });
                }
            }
            ValidationErrorsKind::List(items) => {
                for (index, item) in items {
                    for nested_err in field_errors(item) {
                        result.push(FieldError {
                            field: format!("{}[{}].{}", field, index, nested_err.field),
                            ..nested_err
                        });
                    }
                }
            }
        }
    }

    result
}

/// Converts `validator::ValidationErrors` to `BankError`.
#[must_use]
pub fn validation_errors_to_bank_error(errors: &ValidationErrors) -> BankError {
    let message = field_errors(errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    BankError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(range(min = 1, max = 999_999_999, message = "BIK has at most 9 digits"))]
        bik: Option<i64>,
        #[validate(length(max = 5, message = "City is too long"))]
        city: Option<String>,
    }

    #[test]
    fn test_absent_fields_are_not_validated() {
        let sample = Sample { bik: None, city: None };
        assert!(sample.validate_request().is_ok());
    }

    #[test]
    fn test_present_fields_are_validated() {
        let sample = Sample {
            bik: Some(44_525_225),
            city: Some("Тула".to_string()),
        };
        assert!(sample.validate_request().is_ok());
    }

    #[test]
    fn test_validation_errors_become_bank_error() {
        let sample = Sample {
            bik: Some(1_000_000_000),
            city: Some("Санкт-Петербург".to_string()),
        };
        let errors = sample.validate().unwrap_err();

        let fields = field_errors(&errors);
        assert_eq!(fields.len(), 2);

        match validation_errors_to_bank_error(&errors) {
            BankError::Validation(msg) => {
                assert!(msg.contains("BIK has at most 9 digits"));
                assert!(msg.contains("City is too long"));
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }
}
