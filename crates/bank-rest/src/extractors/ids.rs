//! Identifier parsing for path segments and the `ids` query parameter.

use crate::responses::AppError;
use bank_core::BankError;
use serde::Deserialize;
use utoipa::IntoParams;

/// Largest id list a single batch lookup accepts.
pub const MAX_BATCH_IDS: usize = 1000;

/// Query of a batch lookup: `?ids=1,2,3`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdsQuery {
    /// Comma-separated entity ids.
    pub ids: Option<String>,
}

impl IdsQuery {
    /// Parses the id list. A missing parameter, an unparsable element or more
    /// than [`MAX_BATCH_IDS`] elements is a validation failure.
    pub fn parse(&self) -> Result<Vec<i64>, AppError> {
        let raw = self
            .ids
            .as_deref()
            .ok_or_else(|| AppError(BankError::validation("Query parameter 'ids' is required")))?;

        let parts: Vec<&str> = raw.split(',').map(str::trim).filter(|part| !part.is_empty()).collect();
        if parts.len() > MAX_BATCH_IDS {
            return Err(AppError(BankError::validation(format!(
                "At most {} ids per request",
                MAX_BATCH_IDS
            ))));
        }

        parts.into_iter().map(parse_id).collect()
    }
}

/// Parses an entity id taken from the path.
pub fn parse_id(id: &str) -> Result<i64, AppError> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| AppError(BankError::validation(format!("Invalid id: {}", id))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(ids: &str) -> IdsQuery {
        IdsQuery {
            ids: Some(ids.to_string()),
        }
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("abc").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn test_parse_ids_list() {
        assert_eq!(query("1,2,3").parse().unwrap(), vec![1, 2, 3]);
        assert_eq!(query(" 4 , 5,").parse().unwrap(), vec![4, 5]);
    }

    #[test]
    fn test_parse_ids_rejects_garbage() {
        let err = query("1,x").parse().unwrap_err();
        assert_eq!(err.0.status_code(), 400);
        assert!(err.0.to_string().contains("x"));
    }

    fn id_list(count: usize) -> String {
        (1..=count).map(|id| id.to_string()).collect::<Vec<_>>().join(",")
    }

    #[test]
    fn test_parse_ids_accepts_full_batch() {
        assert_eq!(query(&id_list(MAX_BATCH_IDS)).parse().unwrap().len(), MAX_BATCH_IDS);
    }

    #[test]
    fn test_parse_ids_rejects_oversized_batch() {
        let err = query(&id_list(MAX_BATCH_IDS + 1)).parse().unwrap_err();
        assert_eq!(err.0.error_code(), "VALIDATION_ERROR");
        assert!(err.0.to_string().contains("1000"));
    }

    #[test]
    fn test_missing_ids_is_validation_error() {
        let err = IdsQuery::default().parse().unwrap_err();
        assert_eq!(err.0.error_code(), "VALIDATION_ERROR");
    }
}
