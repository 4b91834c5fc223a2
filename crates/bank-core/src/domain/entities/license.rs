//! License entity.

use crate::Entity;

/// Banking license scan, structurally the same as a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct License {
    pub id: Option<i64>,
    pub photo: Vec<u8>,
    pub bank_details_id: i64,
}

impl License {
    /// Creates a license that has not been stored yet.
    #[must_use]
    pub fn new(photo: Vec<u8>, bank_details_id: i64) -> Self {
        Self {
            id: None,
            photo,
            bank_details_id,
        }
    }
}

impl Entity for License {
    fn id(&self) -> Option<i64> {
        self.id
    }
}
