//! Registration service seam

use async_trait::async_trait;

use crate::domain::{Member, RegisteredMember};
use crate::error::RegistrationError;

/// Persists new members.
///
/// Resolves once the service has accepted the member; any failure is
/// returned as a [`RegistrationError`]. Called from the single-threaded UI
/// executor, hence `?Send`.
#[async_trait(?Send)]
pub trait MemberLibrary {
    async fn register_member(&self, member: &Member)
        -> Result<RegisteredMember, RegistrationError>;
}
