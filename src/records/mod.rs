//! Export records and their normalization.
//!
//! - [`raw`] - Rows as read from the extractor's CSV exports
//! - [`types`] - Canonical, strongly typed records
//! - [`normalize`] - Mapping from raw rows to canonical records

pub mod normalize;
pub mod raw;
pub mod types;

pub use normalize::{load_authentication_methods, load_user_registrations, RegistrationBatch};
pub use types::{
    AuthMethod, AuthenticationMethodRecord, MfaStatus, RegisteredMethods, UserRegistrationRecord,
    UserType,
};
