//! Domain entities.
//!
//! Public-info owns [`BankDetails`], [`Certificate`] and [`License`];
//! the account service owns [`AccountDetails`].

mod account_details;
mod bank_details;
mod certificate;
mod license;

pub use account_details::*;
pub use bank_details::*;
pub use certificate::*;
pub use license::*;
