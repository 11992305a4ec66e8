mod aws;
mod mock;

pub use mock::MockDirectory;

use async_trait::async_trait;
use cognito::{CognitoError, PoolUser, UserPage};

/// Outbound port for the identity directory holding the user records.
///
/// Implemented by the Cognito-backed `UserPoolClient` and by an in-memory
/// mock for tests.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetches one page of the directory's user listing.
    async fn fetch_users_page(
        &self,
        pagination_token: Option<String>,
    ) -> Result<UserPage, CognitoError>;

    /// Looks up verified users whose email equals `email` exactly.
    async fn find_verified_by_email(&self, email: &str) -> Result<Vec<PoolUser>, CognitoError>;

    /// Points the user's email at `new_email` and marks it verified, as a
    /// single attribute batch.
    async fn update_email(&self, username: &str, new_email: &str) -> Result<(), CognitoError>;
}
