//! Normalization of raw export rows into canonical records.
//!
//! Normalization never fails on missing or blank fields: flags default to
//! `false`, strings to empty, and the TAP column to its placeholder. Only
//! unreadable or malformed files are errors, and those surface from the
//! loaders at the bottom of this module.

use super::raw::{RawAuthenticationMethodRow, RawUserRegistrationRow};
use super::types::{AuthenticationMethodRecord, RegisteredMethods, UserRegistrationRecord, UserType};
use crate::utils::reader::read_rows;
use crate::utils::time::TimestampLayout;
use anyhow::Result;
use std::path::Path;
use tracing::{debug, warn};

/// Parse a `"True"`/`"False"` cell. Anything but a case-insensitive `true` is `false`.
pub fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Normalize one Authentication Methods row.
pub fn normalize_authentication_method(raw: RawAuthenticationMethodRow) -> AuthenticationMethodRecord {
    AuthenticationMethodRecord {
        user_principal_name: non_empty(raw.user),
        mfa_status: raw.mfa_status.unwrap_or_default(),
        password: parse_flag(raw.password.as_deref()),
        authenticator_app: parse_flag(raw.app.as_deref()),
        phone: parse_flag(raw.phone.as_deref()),
        email: parse_flag(raw.email.as_deref()),
        fido2: parse_flag(raw.fido2.as_deref()),
        software_oath: parse_flag(raw.software_oath.as_deref()),
        hello_for_business: parse_flag(raw.hello_business.as_deref()),
        certificate_based_auth: parse_flag(raw.certificate_based_auth.as_deref()),
        temporary_access_pass: non_empty(raw.temporary_access_pass),
    }
}

/// Normalize every Authentication Methods row, preserving order and count.
pub fn normalize_authentication_methods(
    rows: Vec<RawAuthenticationMethodRow>,
) -> Vec<AuthenticationMethodRecord> {
    let records: Vec<_> = rows
        .into_iter()
        .map(normalize_authentication_method)
        .collect();

    let blank = records
        .iter()
        .filter(|r| r.user_principal_name.is_none())
        .count();
    if blank > 0 {
        warn!("{} authentication method rows have no user principal name", blank);
    }

    records
}

/// Normalized User Registration Details plus what was learned about timestamps.
#[derive(Debug, Clone)]
pub struct RegistrationBatch {
    pub records: Vec<UserRegistrationRecord>,
    /// Layout detected from the first non-blank `LastUpdatedDateTime`.
    pub timestamp_layout: Option<TimestampLayout>,
    /// Rows with a non-blank timestamp that did not parse with the layout.
    pub unparsed_timestamps: usize,
}

/// Detect the timestamp layout from the first row that carries a value.
///
/// Leading rows with a blank `LastUpdatedDateTime` are skipped rather than
/// taken as the sample, so a blank first row does not leave every other
/// row unparsed.
pub fn detect_timestamp_layout(rows: &[RawUserRegistrationRow]) -> Option<TimestampLayout> {
    let sample = rows
        .iter()
        .filter_map(|r| r.last_updated_date_time.as_deref())
        .find(|v| !v.trim().is_empty())?;

    let layout = TimestampLayout::detect(sample);
    match layout {
        Some(layout) => debug!("Detected timestamp layout {} from '{}'", layout, sample),
        None => warn!("Unrecognized timestamp layout in sample '{}'", sample),
    }
    layout
}

fn normalize_user_registration(
    raw: RawUserRegistrationRow,
    layout: Option<TimestampLayout>,
    unparsed: &mut usize,
) -> UserRegistrationRecord {
    let last_updated = match raw.last_updated_date_time.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => {
            let parsed = layout.and_then(|l| l.parse(value).ok());
            if parsed.is_none() {
                *unparsed += 1;
            }
            parsed
        }
    };

    UserRegistrationRecord {
        id: raw.id.unwrap_or_default(),
        display_name: raw.user_display_name.unwrap_or_default(),
        user_principal_name: raw.user_principal_name.unwrap_or_default(),
        user_type: UserType::from_source(raw.user_type.as_deref()),
        is_admin: parse_flag(raw.is_admin.as_deref()),
        is_mfa_capable: parse_flag(raw.is_mfa_capable.as_deref()),
        is_mfa_registered: parse_flag(raw.is_mfa_registered.as_deref()),
        is_passwordless_capable: parse_flag(raw.is_passwordless_capable.as_deref()),
        is_sspr_capable: parse_flag(raw.is_sspr_capable.as_deref()),
        is_sspr_enabled: parse_flag(raw.is_sspr_enabled.as_deref()),
        is_sspr_registered: parse_flag(raw.is_sspr_registered.as_deref()),
        is_system_preferred_method_enabled: parse_flag(
            raw.is_system_preferred_authentication_method_enabled
                .as_deref(),
        ),
        system_preferred_methods: raw
            .system_preferred_authentication_methods
            .unwrap_or_default(),
        user_preferred_secondary_method: non_empty(
            raw.user_preferred_method_for_secondary_authentication,
        ),
        methods_registered: RegisteredMethods::from_source(raw.methods_registered.as_deref()),
        last_updated,
    }
}

/// Normalize every User Registration Details row.
///
/// The timestamp layout is decided once for the whole batch; rows written
/// in another layout end up with no `last_updated` and are counted.
pub fn normalize_user_registrations(rows: Vec<RawUserRegistrationRow>) -> RegistrationBatch {
    let timestamp_layout = detect_timestamp_layout(&rows);
    let mut unparsed_timestamps = 0;

    let records = rows
        .into_iter()
        .map(|raw| normalize_user_registration(raw, timestamp_layout, &mut unparsed_timestamps))
        .collect();

    if unparsed_timestamps > 0 {
        warn!(
            "{} LastUpdatedDateTime values could not be parsed",
            unparsed_timestamps
        );
    }

    RegistrationBatch {
        records,
        timestamp_layout,
        unparsed_timestamps,
    }
}

/// Load and normalize an Authentication Methods export.
pub fn load_authentication_methods(
    path: impl AsRef<Path>,
) -> Result<Vec<AuthenticationMethodRecord>> {
    let rows: Vec<RawAuthenticationMethodRow> = read_rows(path)?;
    Ok(normalize_authentication_methods(rows))
}

/// Load and normalize a User Registration Details export.
pub fn load_user_registrations(path: impl AsRef<Path>) -> Result<RegistrationBatch> {
    let rows: Vec<RawUserRegistrationRow> = read_rows(path)?;
    Ok(normalize_user_registrations(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::format_timestamp;

    fn registration(last_updated: Option<&str>) -> RawUserRegistrationRow {
        RawUserRegistrationRow {
            user_principal_name: Some("user@contoso.com".to_string()),
            last_updated_date_time: last_updated.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("True")));
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some(" TRUE ")));
        assert!(!parse_flag(Some("False")));
        assert!(!parse_flag(Some("yes")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_tap_placeholder_and_passthrough() {
        let blank = normalize_authentication_method(RawAuthenticationMethodRow::default());
        assert_eq!(blank.temporary_access_pass_display(), "-");

        let empty = normalize_authentication_method(RawAuthenticationMethodRow {
            temporary_access_pass: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(empty.temporary_access_pass_display(), "-");

        let set = normalize_authentication_method(RawAuthenticationMethodRow {
            temporary_access_pass: Some("True".to_string()),
            ..Default::default()
        });
        assert_eq!(set.temporary_access_pass_display(), "True");
    }

    #[test]
    fn test_blank_user_is_kept() {
        let records = normalize_authentication_methods(vec![
            RawAuthenticationMethodRow {
                user: Some("a@contoso.com".to_string()),
                ..Default::default()
            },
            RawAuthenticationMethodRow::default(),
        ]);
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].user_principal_name.as_deref(),
            Some("a@contoso.com")
        );
        assert!(records[1].user_principal_name.is_none());
    }

    #[test]
    fn test_user_and_status_literals_are_kept() {
        let record = normalize_authentication_method(RawAuthenticationMethodRow {
            user: Some(" alice@contoso.com".to_string()),
            mfa_status: Some("enabled".to_string()),
            ..Default::default()
        });
        assert_eq!(record.user_principal_name.as_deref(), Some(" alice@contoso.com"));
        assert_eq!(record.mfa_status, "enabled");
        assert!(record.is_multi_factor());
    }

    #[test]
    fn test_layout_detected_from_first_non_blank_row() {
        let batch = normalize_user_registrations(vec![
            registration(None),
            registration(Some("24.01.2025 13:05:00")),
            registration(Some("25.01.2025 08:00:00")),
        ]);
        assert_eq!(batch.timestamp_layout, Some(TimestampLayout::German));
        assert!(batch.records[0].last_updated.is_none());
        assert_eq!(
            format_timestamp(batch.records[1].last_updated.as_ref().unwrap()),
            "2025-01-24 13:05:00"
        );
        assert_eq!(batch.unparsed_timestamps, 0);
    }

    #[test]
    fn test_mixed_locales_fail_per_row() {
        let batch = normalize_user_registrations(vec![
            registration(Some("1/24/2025 1:05:00 PM")),
            registration(Some("24.01.2025 13:05:00")),
        ]);
        assert_eq!(batch.timestamp_layout, Some(TimestampLayout::Us));
        assert!(batch.records[0].last_updated.is_some());
        assert!(batch.records[1].last_updated.is_none());
        assert_eq!(batch.unparsed_timestamps, 1);
    }

    #[test]
    fn test_undetected_layout_fails_every_row() {
        let batch = normalize_user_registrations(vec![
            registration(Some("2025-01-24T13:05:00Z")),
            registration(Some("24.01.2025 13:05:00")),
        ]);
        assert!(batch.timestamp_layout.is_none());
        assert!(batch.records.iter().all(|r| r.last_updated.is_none()));
        assert_eq!(batch.unparsed_timestamps, 2);
    }
}
