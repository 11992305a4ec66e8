use aws_sdk_cognitoidentityprovider::types::AttributeType;
use aws_sdk_cognitoidentityprovider::Client;
use thiserror::Error;
use tracing::debug;

use crate::{PoolUser, UserPage, VerifiedEmailFilter};

/// Thin client over the Cognito Identity Provider API, scoped to a single
/// user pool.
pub struct UserPoolClient {
    client: Client,
    user_pool_id: String,
}

impl UserPoolClient {
    /// Creates a client for the given pool and region. Credentials are
    /// resolved through the SDK default provider chain.
    pub async fn new(user_pool_id: &str, region: &str) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_owned()))
            .load()
            .await;

        Self {
            client: Client::new(&sdk_config),
            user_pool_id: user_pool_id.to_owned(),
        }
    }

    /// Fetches one page of the pool's user listing. Pass the token from the
    /// previous page to continue; `next_token == None` means the listing is
    /// exhausted.
    pub async fn list_users_page(
        &self,
        pagination_token: Option<String>,
    ) -> Result<UserPage, CognitoError> {
        let response = self
            .client
            .list_users()
            .user_pool_id(&self.user_pool_id)
            .set_pagination_token(pagination_token)
            .send()
            .await
            .map_err(|e| CognitoError::ListUsers(e.to_string()))?;

        debug!(
            count = response.users().len(),
            has_next = response.pagination_token().is_some(),
            "fetched user page"
        );

        Ok(UserPage {
            users: response.users().iter().map(PoolUser::from).collect(),
            next_token: response.pagination_token().map(str::to_string),
        })
    }

    /// Lists users whose verified email equals `email`, filtered
    /// server-side.
    pub async fn list_verified_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<PoolUser>, CognitoError> {
        let filter = VerifiedEmailFilter::new(email);
        let response = self
            .client
            .list_users()
            .user_pool_id(&self.user_pool_id)
            .filter(filter.as_filter_string())
            .send()
            .await
            .map_err(|e| CognitoError::ListUsers(e.to_string()))?;

        Ok(response.users().iter().map(PoolUser::from).collect())
    }

    /// Sets the user's `email` attribute and marks it verified, in a single
    /// attribute batch.
    pub async fn update_email(&self, username: &str, email: &str) -> Result<(), CognitoError> {
        let email_attr = AttributeType::builder()
            .name("email")
            .value(email)
            .build()
            .map_err(|e| CognitoError::InvalidAttribute(e.to_string()))?;
        let verified_attr = AttributeType::builder()
            .name("email_verified")
            .value("true")
            .build()
            .map_err(|e| CognitoError::InvalidAttribute(e.to_string()))?;

        self.client
            .admin_update_user_attributes()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .user_attributes(email_attr)
            .user_attributes(verified_attr)
            .send()
            .await
            .map_err(|e| CognitoError::UpdateUser(e.to_string()))?;

        debug!(username, email, "user attributes updated");
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum CognitoError {
    #[error("ListUsers failed: {0}")]
    ListUsers(String),
    #[error("AdminUpdateUserAttributes failed: {0}")]
    UpdateUser(String),
    #[error("invalid user attribute: {0}")]
    InvalidAttribute(String),
}
