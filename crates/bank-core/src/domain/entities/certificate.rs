//! Certificate entity.

use crate::Entity;

/// Scanned certificate issued to a bank, stored as an opaque image blob.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Certificate {
    /// Store-generated identifier; `None` until the row is inserted.
    pub id: Option<i64>,
    /// Raw image bytes.
    pub photo: Vec<u8>,
    /// Owning bank details row.
    pub bank_details_id: i64,
}

impl Certificate {
    /// Creates a certificate that has not been stored yet.
    #[must_use]
    pub fn new(photo: Vec<u8>, bank_details_id: i64) -> Self {
        Self {
            id: None,
            photo,
            bank_details_id,
        }
    }
}

impl Entity for Certificate {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_certificate_has_no_identity() {
        let certificate = Certificate::new(vec![0xFF, 0xD8], 3);
        assert_eq!(Entity::id(&certificate), None);
        assert_eq!(certificate.bank_details_id, 3);
    }
}
