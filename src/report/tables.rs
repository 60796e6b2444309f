//! CSV serialization of canonical records and frequency tables.
//!
//! The output row structs below are the canonical schema: their serde names
//! are the header of the written file.

use crate::records::{AuthenticationMethodRecord, UserRegistrationRecord};
use crate::stats::FrequencyTable;
use crate::utils::time::format_timestamp;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthenticationMethodCsvRow<'a> {
    user_principal_name: &'a str,
    mfa_status: &'a str,
    password: &'static str,
    authenticator_app: &'static str,
    phone: &'static str,
    email: &'static str,
    fido2: &'static str,
    software_oath: &'static str,
    hello_for_business: &'static str,
    temporary_access_pass: &'a str,
    certificate_based_auth: &'static str,
}

impl<'a> From<&'a AuthenticationMethodRecord> for AuthenticationMethodCsvRow<'a> {
    fn from(r: &'a AuthenticationMethodRecord) -> Self {
        Self {
            user_principal_name: r.user_principal_name.as_deref().unwrap_or(""),
            mfa_status: r.mfa_status.as_str(),
            password: flag(r.password),
            authenticator_app: flag(r.authenticator_app),
            phone: flag(r.phone),
            email: flag(r.email),
            fido2: flag(r.fido2),
            software_oath: flag(r.software_oath),
            hello_for_business: flag(r.hello_for_business),
            temporary_access_pass: r.temporary_access_pass_display(),
            certificate_based_auth: flag(r.certificate_based_auth),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct UserRegistrationCsvRow<'a> {
    id: &'a str,
    user_display_name: &'a str,
    user_principal_name: &'a str,
    user_type: &'a str,
    is_admin: &'static str,
    is_mfa_capable: &'static str,
    is_mfa_registered: &'static str,
    is_passwordless_capable: &'static str,
    is_sspr_capable: &'static str,
    is_sspr_enabled: &'static str,
    is_sspr_registered: &'static str,
    is_system_preferred_authentication_method_enabled: &'static str,
    system_preferred_authentication_methods: &'a str,
    user_preferred_method_for_secondary_authentication: &'a str,
    methods_registered: &'a str,
    last_updated_date_time: String,
}

impl<'a> From<&'a UserRegistrationRecord> for UserRegistrationCsvRow<'a> {
    fn from(r: &'a UserRegistrationRecord) -> Self {
        Self {
            id: &r.id,
            user_display_name: &r.display_name,
            user_principal_name: &r.user_principal_name,
            user_type: r.user_type.as_str(),
            is_admin: flag(r.is_admin),
            is_mfa_capable: flag(r.is_mfa_capable),
            is_mfa_registered: flag(r.is_mfa_registered),
            is_passwordless_capable: flag(r.is_passwordless_capable),
            is_sspr_capable: flag(r.is_sspr_capable),
            is_sspr_enabled: flag(r.is_sspr_enabled),
            is_sspr_registered: flag(r.is_sspr_registered),
            is_system_preferred_authentication_method_enabled: flag(
                r.is_system_preferred_method_enabled,
            ),
            system_preferred_authentication_methods: &r.system_preferred_methods,
            user_preferred_method_for_secondary_authentication: r
                .user_preferred_secondary_method
                .as_deref()
                .unwrap_or(""),
            methods_registered: &r.methods_registered.display,
            last_updated_date_time: r
                .last_updated
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_default(),
        }
    }
}

fn serialize_rows<T: Serialize>(rows: impl IntoIterator<Item = T>, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the canonical Authentication Methods CSV.
///
/// An empty slice produces an empty file, which the spreadsheet step skips.
pub fn write_authentication_methods(
    records: &[AuthenticationMethodRecord],
    path: &Path,
) -> Result<()> {
    serialize_rows(records.iter().map(AuthenticationMethodCsvRow::from), path)
}

/// Write the canonical User Registration Details CSV.
pub fn write_user_registrations(records: &[UserRegistrationRecord], path: &Path) -> Result<()> {
    serialize_rows(records.iter().map(UserRegistrationCsvRow::from), path)
}

/// Write a frequency table as `<label>,Count,Percentage`.
pub fn write_frequency_table(table: &FrequencyTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    writer.write_record([table.label_header.as_str(), "Count", "Percentage"])?;
    for row in &table.rows {
        writer.write_record([
            row.label.as_str(),
            row.count.to_string().as_str(),
            row.percentage.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
