/// Integration tests for the mfa-audit analysis pipeline
/// These tests verify end-to-end functionality with sample exports
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const AUTH_HEADER: &str = "user,MFAstatus,password,app,phone,email,fido2,softwareoath,hellobusiness,temporaryAccessPassAuthenticationMethod,certificateBasedAuthConfiguration";

const REGISTRATION_HEADER: &str = "Id,UserPrincipalName,UserDisplayName,UserType,IsAdmin,IsMfaCapable,IsMfaRegistered,IsPasswordlessCapable,IsSsprCapable,IsSsprEnabled,IsSsprRegistered,IsSystemPreferredAuthenticationMethodEnabled,LastUpdatedDateTime,MethodsRegistered,SystemPreferredAuthenticationMethods,UserPreferredMethodForSecondaryAuthentication";

/// Helper to create a sample Authentication Methods export
fn create_auth_export(dir: &Path) -> PathBuf {
    let path = dir.join("20250124-AuthenticationMethods.csv");
    let rows = [
        AUTH_HEADER,
        "alice@contoso.com,Enabled,True,True,False,False,False,False,False,,False",
        "bob@contoso.com,Disabled,True,False,False,False,False,False,False,,False",
        "carol@contoso.com,Enabled,True,True,True,False,True,False,False,True,False",
    ];
    // Extractor output carries a UTF-8 BOM.
    let mut content = String::from("\u{feff}");
    for row in rows {
        content.push_str(row);
        content.push_str("\r\n");
    }
    fs::write(&path, content).unwrap();
    path
}

/// Helper to create the companion User Registration Details export
fn create_registration_export(dir: &Path) -> PathBuf {
    let path = dir.join("20250124-UserRegistrationDetails.csv");
    let content = format!(
        "{}\r\n\
         1,alice@contoso.com,Alice,member,True,True,True,False,True,False,True,False,24.01.2025 13:05:00,\"Email\r\nMicrosoftAuthenticator\r\n\",push,push\r\n\
         2,bob@contoso.com,Bob,guest,False,False,False,False,False,False,False,False,25.01.2025 08:00:00,,,\r\n\
         3,carol@contoso.com,Carol,member,True,True,False,True,True,True,True,True,26.01.2025 09:30:15,\"MicrosoftAuthenticator\r\nFido2\r\n\",Fido2,\r\n",
        REGISTRATION_HEADER
    );
    fs::write(&path, content).unwrap();
    path
}

fn read_csv(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_end_to_end_three_users() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let input = create_auth_export(input_dir.path());
    create_registration_export(input_dir.path());

    use mfa_audit_tools::commands::analyze;
    let summary = analyze::run(&input, output_dir.path()).unwrap();

    assert_eq!(summary.auth_stats.total_users, 3);
    assert_eq!(summary.auth_stats.single_factor.count, 1);
    assert_eq!(summary.auth_stats.multi_factor.count, 2);
    assert!(summary.registration_error.is_none());

    let status = fs::read_to_string(output_dir.path().join("Stats/CSV/MFA-Status.csv")).unwrap();
    assert_eq!(
        status,
        "MFAStatus,Count,Percentage\nEnabled,2,66.67%\nDisabled,1,33.33%\n"
    );

    for name in [
        "CSV/AuthenticationMethods.csv",
        "CSV/UserRegistrationDetails.csv",
        "XLSX/AuthenticationMethods.xlsx",
        "XLSX/UserRegistrationDetails.xlsx",
        "Stats/CSV/AuthenticationMethod.csv",
        "Stats/CSV/MethodsRegistered.csv",
        "Stats/XLSX/MFA-Status.xlsx",
        "Stats/XLSX/AuthenticationMethod.xlsx",
        "Stats/XLSX/MethodsRegistered.xlsx",
    ] {
        assert!(output_dir.path().join(name).exists(), "missing {}", name);
    }
    assert_eq!(summary.files_written.len(), 10);
}

#[test]
fn test_authentication_methods_canonical_csv() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let input = create_auth_export(input_dir.path());

    use mfa_audit_tools::commands::analyze;
    analyze::run(&input, output_dir.path()).unwrap();

    let rows = read_csv(&output_dir.path().join("CSV/AuthenticationMethods.csv"));
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0][0], "userPrincipalName");
    assert_eq!(rows[0][9], "temporaryAccessPass");
    assert_eq!(rows[1][0], "alice@contoso.com");
    assert_eq!(rows[1][9], "-");
    assert_eq!(rows[3][9], "True");
}

#[test]
fn test_user_registration_canonical_csv() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let input = create_auth_export(input_dir.path());
    create_registration_export(input_dir.path());

    use mfa_audit_tools::commands::analyze;
    let summary = analyze::run(&input, output_dir.path()).unwrap();

    let rows = read_csv(&output_dir.path().join("CSV/UserRegistrationDetails.csv"));
    let header = &rows[0];
    let col = |name: &str| header.iter().position(|h| h == name).unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1][col("UserType")], "Member");
    assert_eq!(rows[2][col("UserType")], "Guest");
    assert_eq!(
        rows[1][col("MethodsRegistered")],
        "Email, MicrosoftAuthenticator"
    );
    assert_eq!(rows[2][col("MethodsRegistered")], "");
    assert_eq!(rows[1][col("LastUpdatedDateTime")], "2025-01-24 13:05:00");
    assert_eq!(rows[3][col("LastUpdatedDateTime")], "2025-01-26 09:30:15");
    assert_eq!(
        rows[1][col("UserPreferredMethodForSecondaryAuthentication")],
        "push"
    );

    let (_, stats) = summary.registration.unwrap();
    assert_eq!(stats.methods_registered.denominator, 4);
    assert_eq!(
        stats.methods_registered.rows[0].label,
        "MicrosoftAuthenticator"
    );
    assert_eq!(stats.methods_registered.rows[0].percentage, "50.00%");
    assert_eq!(stats.admins_without_mfa.count, 1);
}

#[test]
fn test_missing_registration_export_keeps_first_section() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let input = create_auth_export(input_dir.path());

    use mfa_audit_tools::commands::analyze;
    let summary = analyze::run(&input, output_dir.path()).unwrap();

    assert!(summary.registration.is_none());
    assert!(summary
        .registration_error
        .as_deref()
        .unwrap()
        .contains("UserRegistrationDetails"));
    assert!(output_dir
        .path()
        .join("CSV/AuthenticationMethods.csv")
        .exists());
    assert!(!output_dir
        .path()
        .join("CSV/UserRegistrationDetails.csv")
        .exists());
}

#[test]
fn test_no_registered_methods_anomaly() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let input = create_auth_export(input_dir.path());
    fs::write(
        input_dir.path().join("20250124-UserRegistrationDetails.csv"),
        format!(
            "{}\n1,a@contoso.com,A,member,False,False,False,False,False,False,False,False,1/24/2025 1:05:00 PM,,,\n",
            REGISTRATION_HEADER
        ),
    )
    .unwrap();

    use mfa_audit_tools::commands::analyze;
    let summary = analyze::run(&input, output_dir.path()).unwrap();

    let (batch, stats) = summary.registration.unwrap();
    assert!(stats.no_methods_registered);
    assert!(stats.methods_registered.is_empty());
    assert_eq!(
        mfa_audit_tools::utils::time::format_timestamp(batch.records[0].last_updated.as_ref().unwrap()),
        "2025-01-24 13:05:00"
    );
    assert!(!output_dir
        .path()
        .join("Stats/CSV/MethodsRegistered.csv")
        .exists());
}

#[test]
fn test_runs_are_byte_identical() {
    let input_dir = TempDir::new().unwrap();
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let input = create_auth_export(input_dir.path());
    create_registration_export(input_dir.path());

    use mfa_audit_tools::commands::analyze;
    analyze::run(&input, first.path()).unwrap();
    analyze::run(&input, second.path()).unwrap();

    for name in [
        "CSV/AuthenticationMethods.csv",
        "CSV/UserRegistrationDetails.csv",
        "Stats/CSV/MFA-Status.csv",
        "Stats/CSV/AuthenticationMethod.csv",
        "Stats/CSV/MethodsRegistered.csv",
    ] {
        assert_eq!(
            fs::read(first.path().join(name)).unwrap(),
            fs::read(second.path().join(name)).unwrap(),
            "{} differs between runs",
            name
        );
    }
}

#[test]
fn test_row_count_preserved_with_blank_users() {
    let input_dir = TempDir::new().unwrap();
    let path = input_dir.path().join("AuthenticationMethods.csv");
    let mut content = format!("{}\n", AUTH_HEADER);
    for i in 0..50 {
        if i % 10 == 0 {
            content.push_str(",Disabled,True,,,,,,,,\n");
        } else {
            content.push_str(&format!("user{}@contoso.com,Enabled,True,True\n", i));
        }
    }
    fs::write(&path, content).unwrap();

    let records = mfa_audit_tools::records::load_authentication_methods(&path).unwrap();
    assert_eq!(records.len(), 50);
    assert_eq!(
        records
            .iter()
            .filter(|r| r.user_principal_name.is_none())
            .count(),
        5
    );
}

#[test]
fn test_registered_methods_percentages_sum_to_hundred() {
    let input_dir = TempDir::new().unwrap();
    let path = create_registration_export(input_dir.path());

    use mfa_audit_tools::records::load_user_registrations;
    use mfa_audit_tools::stats::RegistrationStats;
    let batch = load_user_registrations(&path).unwrap();
    let stats = RegistrationStats::compute(&batch.records);

    assert!((stats.methods_registered.total_percentage() - 100.0).abs() < 1e-9);
}
