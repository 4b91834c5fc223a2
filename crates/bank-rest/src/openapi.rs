//! OpenAPI documentation for both services.
//!
//! Each deployment publishes only its own resources, together with the
//! health endpoints they share.

use crate::controllers::{
    account_details_controller, bank_details_controller, certificate_controller,
    health_controller, license_controller,
};
use bank_core::{ErrorResponse, FieldError};
use bank_service::{AccountDetailsDto, BankDetailsDto, CertificateDto, LicenseDto, ProfileDto};
use utoipa::OpenApi;

/// OpenAPI documentation of the public-info service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Public Info API",
        version = "1.0.0",
        description = "Bank details, certificates and licenses"
    ),
    paths(
        bank_details_controller::get_bank_details,
        bank_details_controller::list_bank_details,
        bank_details_controller::create_bank_details,
        bank_details_controller::update_bank_details,
        certificate_controller::get_certificate,
        certificate_controller::list_certificates,
        certificate_controller::create_certificate,
        certificate_controller::update_certificate,
        license_controller::get_license,
        license_controller::list_licenses,
        license_controller::create_license,
        license_controller::update_license,
        health_controller::health_check,
        health_controller::readiness_check,
        health_controller::liveness_check,
    ),
    components(schemas(BankDetailsDto, CertificateDto, LicenseDto, ErrorResponse, FieldError)),
    tags(
        (name = "bank-details", description = "Bank registration details"),
        (name = "certificates", description = "Scanned bank certificates"),
        (name = "licenses", description = "Scanned bank licenses"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct PublicInfoApiDoc;

/// OpenAPI documentation of the account service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account API",
        version = "1.0.0",
        description = "Account details and the records they reference"
    ),
    paths(
        account_details_controller::get_account_details,
        account_details_controller::list_account_details,
        account_details_controller::create_account_details,
        account_details_controller::update_account_details,
        account_details_controller::get_account_profile,
        account_details_controller::get_account_bank_details,
        health_controller::health_check,
        health_controller::readiness_check,
        health_controller::liveness_check,
    ),
    components(schemas(AccountDetailsDto, ProfileDto, BankDetailsDto, ErrorResponse, FieldError)),
    tags(
        (name = "account-details", description = "Account details"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct AccountApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_info_document_lists_resources() {
        let doc = PublicInfoApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/public-info/bank/details/{id}"));
        assert!(paths.contains_key("/api/public-info/certificate"));
        assert!(paths.contains_key("/api/public-info/license/{id}"));
        assert!(!paths.contains_key("/api/account/details"));
    }

    #[test]
    fn test_account_document_lists_links() {
        let doc = AccountApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/account/details/{id}/profile"));
        assert!(paths.contains_key("/api/account/details/{id}/bank-details"));
        assert!(paths.contains_key("/health"));
    }
}
