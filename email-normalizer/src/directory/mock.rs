//! Mock directory implementation for testing.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use cognito::{CognitoError, PoolUser, UserPage};

use super::UserDirectory;

/// In-memory directory backed by a `Vec` of users.
///
/// Records every attempted email update so tests can assert on the calls
/// the normalizer makes. Failures can be injected per operation.
#[derive(Clone)]
pub struct MockDirectory {
    users: Arc<RwLock<Vec<PoolUser>>>,
    updates: Arc<RwLock<Vec<(String, String)>>>,
    page_size: usize,
    fail_pages: bool,
    fail_lookups: bool,
    fail_updates: bool,
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self {
            users: Arc::default(),
            updates: Arc::default(),
            page_size: 50,
            fail_pages: false,
            fail_lookups: false,
            fail_updates: false,
        }
    }
}

#[allow(dead_code)]
impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the directory with initial users.
    pub fn with_users(self, users: Vec<PoolUser>) -> Self {
        *self.users.write().unwrap() = users;
        self
    }

    /// Split the listing into pages of `page_size` users.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_failing_pages(mut self) -> Self {
        self.fail_pages = true;
        self
    }

    pub fn with_failing_lookups(mut self) -> Self {
        self.fail_lookups = true;
        self
    }

    pub fn with_failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    /// Every `(username, new_email)` pair passed to `update_email`,
    /// including attempts that were failed on purpose.
    pub fn recorded_updates(&self) -> Vec<(String, String)> {
        self.updates.read().unwrap().clone()
    }

    /// Current state of a user, for test assertions.
    pub fn user(&self, username: &str) -> Option<PoolUser> {
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }
}

#[async_trait]
impl UserDirectory for MockDirectory {
    async fn fetch_users_page(
        &self,
        pagination_token: Option<String>,
    ) -> Result<UserPage, CognitoError> {
        if self.fail_pages {
            return Err(CognitoError::ListUsers("injected page failure".to_string()));
        }

        let users = self.users.read().unwrap();
        let start = pagination_token
            .as_deref()
            .map(|t| t.parse::<usize>().unwrap_or(0))
            .unwrap_or(0);
        let end = (start + self.page_size).min(users.len());
        let next_token = (end < users.len()).then(|| end.to_string());

        Ok(UserPage {
            users: users[start..end].to_vec(),
            next_token,
        })
    }

    async fn find_verified_by_email(&self, email: &str) -> Result<Vec<PoolUser>, CognitoError> {
        if self.fail_lookups {
            return Err(CognitoError::ListUsers(
                "injected lookup failure".to_string(),
            ));
        }

        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .filter(|u| u.email_verified && u.email.as_deref() == Some(email))
            .cloned()
            .collect())
    }

    async fn update_email(&self, username: &str, new_email: &str) -> Result<(), CognitoError> {
        self.updates
            .write()
            .unwrap()
            .push((username.to_string(), new_email.to_string()));

        if self.fail_updates {
            return Err(CognitoError::UpdateUser(
                "injected update failure".to_string(),
            ));
        }

        let mut users = self.users.write().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.username == username) {
            user.email = Some(new_email.to_string());
            user.email_verified = true;
        }
        Ok(())
    }
}
