//! Raw export rows as the extractor writes them.
//!
//! Each struct is the single source-column mapping for its export: the
//! serde attributes name the header a field is read from. Every field is an
//! optional string so that absent columns and blank cells never fail a row.

use serde::Deserialize;

/// One row of `*-AuthenticationMethods.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAuthenticationMethodRow {
    #[serde(rename = "user")]
    pub user: Option<String>,
    #[serde(rename = "MFAstatus")]
    pub mfa_status: Option<String>,
    #[serde(rename = "password")]
    pub password: Option<String>,
    #[serde(rename = "app")]
    pub app: Option<String>,
    #[serde(rename = "phone")]
    pub phone: Option<String>,
    #[serde(rename = "email")]
    pub email: Option<String>,
    #[serde(rename = "fido2")]
    pub fido2: Option<String>,
    #[serde(rename = "softwareoath")]
    pub software_oath: Option<String>,
    #[serde(rename = "hellobusiness")]
    pub hello_business: Option<String>,
    #[serde(rename = "temporaryAccessPassAuthenticationMethod")]
    pub temporary_access_pass: Option<String>,
    #[serde(rename = "certificateBasedAuthConfiguration")]
    pub certificate_based_auth: Option<String>,
}

/// One row of `*-UserRegistrationDetails.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RawUserRegistrationRow {
    pub id: Option<String>,
    pub user_display_name: Option<String>,
    pub user_principal_name: Option<String>,
    pub user_type: Option<String>,
    pub is_admin: Option<String>,
    pub is_mfa_capable: Option<String>,
    pub is_mfa_registered: Option<String>,
    pub is_passwordless_capable: Option<String>,
    pub is_sspr_capable: Option<String>,
    pub is_sspr_enabled: Option<String>,
    pub is_sspr_registered: Option<String>,
    pub is_system_preferred_authentication_method_enabled: Option<String>,
    pub system_preferred_authentication_methods: Option<String>,
    // The extractor has shipped this header misspelled.
    #[serde(alias = "UserPreferredMethodForSecondaryAuthenticaton")]
    pub user_preferred_method_for_secondary_authentication: Option<String>,
    pub methods_registered: Option<String>,
    pub last_updated_date_time: Option<String>,
}
