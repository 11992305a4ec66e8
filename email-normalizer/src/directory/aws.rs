use async_trait::async_trait;
use cognito::{CognitoError, PoolUser, UserPage, UserPoolClient};

use super::UserDirectory;

#[async_trait]
impl UserDirectory for UserPoolClient {
    async fn fetch_users_page(
        &self,
        pagination_token: Option<String>,
    ) -> Result<UserPage, CognitoError> {
        self.list_users_page(pagination_token).await
    }

    async fn find_verified_by_email(&self, email: &str) -> Result<Vec<PoolUser>, CognitoError> {
        self.list_verified_by_email(email).await
    }

    async fn update_email(&self, username: &str, new_email: &str) -> Result<(), CognitoError> {
        UserPoolClient::update_email(self, username, new_email).await
    }
}
