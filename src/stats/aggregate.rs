//! Statistics over the normalized exports.

use super::{FrequencyTable, Share};
use crate::records::{AuthMethod, AuthenticationMethodRecord, UserRegistrationRecord, UserType};

/// Label header for the MFA status table.
pub const MFA_STATUS_HEADER: &str = "MFAStatus";
/// Label header for the authentication method usage table.
pub const AUTH_METHOD_HEADER: &str = "AuthenticationMethod";
/// Label header for the registered methods table.
pub const METHODS_REGISTERED_HEADER: &str = "MethodsRegistered";

/// Statistics over the Authentication Methods export.
#[derive(Debug, Clone)]
pub struct AuthMethodStats {
    pub total_users: usize,
    /// MFA disabled and password set.
    pub single_factor: Share,
    /// MFA enabled.
    pub multi_factor: Share,
    /// Per-method share of all users, in [`AuthMethod::ALL`] order.
    pub method_shares: Vec<(AuthMethod, Share)>,
    /// Users carrying a Temporary Access Pass value.
    pub temporary_access_pass: Share,
    /// Share of users per literal MFA status value.
    pub mfa_status: FrequencyTable,
    /// Method usage sorted by count, denominator = total users.
    pub method_usage: FrequencyTable,
}

impl AuthMethodStats {
    pub fn compute(records: &[AuthenticationMethodRecord]) -> Self {
        let total_users = records.len();

        let method_shares: Vec<(AuthMethod, Share)> = AuthMethod::ALL
            .iter()
            .map(|&method| (method, Share::of(records, |r| r.uses(method))))
            .collect();

        let method_usage = FrequencyTable::from_counts(
            AUTH_METHOD_HEADER,
            method_shares
                .iter()
                .map(|(method, share)| (method.label().to_string(), share.count))
                .collect(),
            total_users,
        );

        Self {
            total_users,
            single_factor: Share::of(records, AuthenticationMethodRecord::is_single_factor),
            multi_factor: Share::of(records, AuthenticationMethodRecord::is_multi_factor),
            temporary_access_pass: Share::of(records, |r| r.temporary_access_pass.is_some()),
            mfa_status: FrequencyTable::from_values(
                MFA_STATUS_HEADER,
                records.iter().map(|r| r.mfa_status.as_str()),
            ),
            method_shares,
            method_usage,
        }
    }

    pub fn share(&self, method: AuthMethod) -> Share {
        self.method_shares
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, share)| *share)
            .unwrap_or_default()
    }
}

/// Statistics over the User Registration Details export.
#[derive(Debug, Clone)]
pub struct RegistrationStats {
    pub total_users: usize,
    pub mfa_capable: Share,
    pub mfa_registered: Share,
    pub passwordless_capable: Share,
    pub sspr_capable: Share,
    pub admins: Share,
    pub guests: Share,
    /// Admins that are not registered for MFA.
    pub admins_without_mfa: Share,
    /// Raised when no user has any registered method.
    pub no_methods_registered: bool,
    /// Every registered method occurrence, denominator = total occurrences.
    pub methods_registered: FrequencyTable,
}

impl RegistrationStats {
    pub fn compute(records: &[UserRegistrationRecord]) -> Self {
        let no_methods_registered = records.iter().all(|r| r.methods_registered.is_empty());

        let methods_registered = FrequencyTable::from_values(
            METHODS_REGISTERED_HEADER,
            records
                .iter()
                .flat_map(|r| r.methods_registered.methods.iter()),
        );

        let admins: Vec<&UserRegistrationRecord> = records.iter().filter(|r| r.is_admin).collect();

        Self {
            total_users: records.len(),
            mfa_capable: Share::of(records, |r| r.is_mfa_capable),
            mfa_registered: Share::of(records, |r| r.is_mfa_registered),
            passwordless_capable: Share::of(records, |r| r.is_passwordless_capable),
            sspr_capable: Share::of(records, |r| r.is_sspr_capable),
            admins: Share::new(admins.len(), records.len()),
            guests: Share::of(records, |r| r.user_type == UserType::Guest),
            admins_without_mfa: Share::new(
                admins.iter().filter(|r| !r.is_mfa_registered).count(),
                admins.len(),
            ),
            no_methods_registered,
            methods_registered,
        }
    }
}
