//! Human-readable run summary printed to stdout.

use crate::records::RegistrationBatch;
use crate::stats::{AuthMethodStats, FrequencyTable, RegistrationStats, Share};
use crate::utils::format::format_number;

const WIDTH: usize = 80;

fn print_share(label: &str, share: &Share) {
    println!(
        "{:<45} {:>15} {:>12}",
        label,
        format_number(share.count),
        share.percentage()
    );
}

fn print_table(title: &str, table: &FrequencyTable) {
    println!("\n{}", title);
    println!("{}", "-".repeat(WIDTH));
    if table.is_empty() {
        println!("(no data)");
        return;
    }
    println!(
        "{:<45} {:>15} {:>12}",
        table.label_header, "Count", "Percentage"
    );
    println!("{}", "-".repeat(WIDTH));
    for row in &table.rows {
        let label = if row.label.is_empty() {
            "(blank)"
        } else {
            row.label.as_str()
        };
        println!(
            "{:<45} {:>15} {:>12}",
            label,
            format_number(row.count),
            row.percentage
        );
    }
}

/// Print the Authentication Methods section.
pub fn print_auth_method_summary(stats: &AuthMethodStats) {
    println!("\n{}", "=".repeat(WIDTH));
    println!("Authentication Methods");
    println!("{}", "=".repeat(WIDTH));

    println!("Total Users: {}", format_number(stats.total_users));
    println!("{}", "-".repeat(WIDTH));
    print_share("Single-factor authentication", &stats.single_factor);
    print_share("Multi-factor authentication", &stats.multi_factor);
    print_share("Temporary Access Pass present", &stats.temporary_access_pass);

    print_table("MFA Status", &stats.mfa_status);
    print_table("Authentication Method Usage", &stats.method_usage);
}

/// Print the User Registration Details section, including anomalies.
pub fn print_registration_summary(stats: &RegistrationStats, batch: &RegistrationBatch) {
    println!("\n{}", "=".repeat(WIDTH));
    println!("User Registration Details");
    println!("{}", "=".repeat(WIDTH));

    println!("Total Users: {}", format_number(stats.total_users));
    match batch.timestamp_layout {
        Some(layout) => println!("LastUpdatedDateTime layout: {}", layout),
        None => println!("LastUpdatedDateTime layout: (not detected)"),
    }
    println!("{}", "-".repeat(WIDTH));
    print_share("MFA capable", &stats.mfa_capable);
    print_share("MFA registered", &stats.mfa_registered);
    print_share("Passwordless capable", &stats.passwordless_capable);
    print_share("SSPR capable", &stats.sspr_capable);
    print_share("Admins", &stats.admins);
    print_share("Guests", &stats.guests);

    print_table("Methods Registered", &stats.methods_registered);

    let mut alerts = Vec::new();
    if stats.no_methods_registered {
        alerts.push("No user has any authentication method registered".to_string());
    }
    if stats.admins_without_mfa.count > 0 {
        alerts.push(format!(
            "{} of {} admins are not registered for MFA",
            format_number(stats.admins_without_mfa.count),
            format_number(stats.admins_without_mfa.denominator)
        ));
    }
    if batch.unparsed_timestamps > 0 {
        alerts.push(format!(
            "{} LastUpdatedDateTime values could not be parsed",
            format_number(batch.unparsed_timestamps)
        ));
    }

    if !alerts.is_empty() {
        println!("\nAlerts");
        println!("{}", "-".repeat(WIDTH));
        for alert in alerts {
            println!("[ALERT] {}", alert);
        }
    }
}
