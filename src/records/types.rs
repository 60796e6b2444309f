//! Canonical records produced by normalization.
//!
//! Records are built once per input row and never modified afterwards.

use chrono::NaiveDateTime;

/// Placeholder shown when a user has no Temporary Access Pass value.
pub const TAP_PLACEHOLDER: &str = "-";

/// Per-user MFA state reported by the Authentication Methods export.
///
/// Classification is case-insensitive and ignores surrounding whitespace.
/// The record keeps the source literal, so `enabled` and `Enabled` classify
/// alike but remain distinct in the written CSV and the status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MfaStatus {
    Enabled,
    Disabled,
    Other,
}

impl MfaStatus {
    pub fn classify(literal: &str) -> Self {
        let literal = literal.trim();
        if literal.eq_ignore_ascii_case("enabled") {
            Self::Enabled
        } else if literal.eq_ignore_ascii_case("disabled") {
            Self::Disabled
        } else {
            Self::Other
        }
    }
}

/// Directory user type, relabeled from the lowercase values Graph returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserType {
    Member,
    Guest,
    Other(String),
}

impl UserType {
    pub fn from_source(value: Option<&str>) -> Self {
        let value = value.unwrap_or("");
        if value.eq_ignore_ascii_case("member") {
            Self::Member
        } else if value.eq_ignore_ascii_case("guest") {
            Self::Guest
        } else {
            Self::Other(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Member => "Member",
            Self::Guest => "Guest",
            Self::Other(literal) => literal,
        }
    }
}

/// Authentication methods tracked per user in the Authentication Methods export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    Password,
    AuthenticatorApp,
    Phone,
    Email,
    Fido2,
    SoftwareOath,
    HelloForBusiness,
    CertificateBasedAuth,
}

impl AuthMethod {
    pub const ALL: [AuthMethod; 8] = [
        AuthMethod::Password,
        AuthMethod::AuthenticatorApp,
        AuthMethod::Phone,
        AuthMethod::Email,
        AuthMethod::Fido2,
        AuthMethod::SoftwareOath,
        AuthMethod::HelloForBusiness,
        AuthMethod::CertificateBasedAuth,
    ];

    /// Human-readable label used in the usage table.
    pub fn label(self) -> &'static str {
        match self {
            AuthMethod::Password => "Password",
            AuthMethod::AuthenticatorApp => "Microsoft Authenticator",
            AuthMethod::Phone => "Phone",
            AuthMethod::Email => "Email",
            AuthMethod::Fido2 => "FIDO2 Security Key",
            AuthMethod::SoftwareOath => "Software OATH Token",
            AuthMethod::HelloForBusiness => "Windows Hello for Business",
            AuthMethod::CertificateBasedAuth => "Certificate-Based Authentication",
        }
    }
}

/// One user from the Authentication Methods export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationMethodRecord {
    /// Source `user` value as written; `None` when the cell was empty.
    pub user_principal_name: Option<String>,
    /// Source `MFAstatus` literal as written.
    pub mfa_status: String,
    pub password: bool,
    pub authenticator_app: bool,
    pub phone: bool,
    pub email: bool,
    pub fido2: bool,
    pub software_oath: bool,
    pub hello_for_business: bool,
    pub certificate_based_auth: bool,
    /// Verbatim source value; `None` when the source was blank.
    pub temporary_access_pass: Option<String>,
}

impl AuthenticationMethodRecord {
    pub fn uses(&self, method: AuthMethod) -> bool {
        match method {
            AuthMethod::Password => self.password,
            AuthMethod::AuthenticatorApp => self.authenticator_app,
            AuthMethod::Phone => self.phone,
            AuthMethod::Email => self.email,
            AuthMethod::Fido2 => self.fido2,
            AuthMethod::SoftwareOath => self.software_oath,
            AuthMethod::HelloForBusiness => self.hello_for_business,
            AuthMethod::CertificateBasedAuth => self.certificate_based_auth,
        }
    }

    pub fn status(&self) -> MfaStatus {
        MfaStatus::classify(&self.mfa_status)
    }

    /// Single-factor sign-in: MFA disabled and a password set.
    pub fn is_single_factor(&self) -> bool {
        self.status() == MfaStatus::Disabled && self.password
    }

    pub fn is_multi_factor(&self) -> bool {
        self.status() == MfaStatus::Enabled
    }

    /// TAP value as displayed, with `-` standing in for a blank source.
    pub fn temporary_access_pass_display(&self) -> &str {
        self.temporary_access_pass
            .as_deref()
            .unwrap_or(TAP_PLACEHOLDER)
    }
}

/// The registered-methods cell in both its flattened and parsed forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisteredMethods {
    /// Methods joined with `", "`, as written to the canonical CSV.
    pub display: String,
    /// Individual method names in source order.
    pub methods: Vec<String>,
}

impl RegisteredMethods {
    /// Flatten a multi-line cell (`"Email\r\nMicrosoftAuthenticator\r\n"`)
    /// into `"Email, MicrosoftAuthenticator"` and its parsed list.
    pub fn from_source(value: Option<&str>) -> Self {
        let value = value.unwrap_or("");
        let display = value
            .replace('\r', "")
            .replace('\n', ", ")
            .trim_end_matches([',', ' '])
            .to_string();
        let methods = display
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();

        Self { display, methods }
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// One user from the User Registration Details export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRegistrationRecord {
    pub id: String,
    pub display_name: String,
    pub user_principal_name: String,
    pub user_type: UserType,
    pub is_admin: bool,
    pub is_mfa_capable: bool,
    pub is_mfa_registered: bool,
    pub is_passwordless_capable: bool,
    pub is_sspr_capable: bool,
    pub is_sspr_enabled: bool,
    pub is_sspr_registered: bool,
    pub is_system_preferred_method_enabled: bool,
    pub system_preferred_methods: String,
    pub user_preferred_secondary_method: Option<String>,
    pub methods_registered: RegisteredMethods,
    /// `None` when the value was blank or did not match the file's layout.
    pub last_updated: Option<NaiveDateTime>,
}
