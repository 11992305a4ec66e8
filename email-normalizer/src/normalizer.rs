use tracing::{error, info, warn};

use cognito::{CognitoError, PoolUser};

use crate::directory::UserDirectory;
use crate::domain::EmailAddress;

/// Walks the whole user listing and lowercases every verified email whose
/// local part contains uppercase characters, unless the lowercased address
/// already belongs to a verified user.
pub struct EmailNormalizer<D> {
    directory: D,
}

impl<D: UserDirectory> EmailNormalizer<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Processes every record in the directory, one page at a time. A page
    /// fetch failure aborts the run; per-record failures are logged and the
    /// run moves on to the next record.
    pub async fn run(&self) -> Result<(), CognitoError> {
        let mut pagination_token = None;

        loop {
            let page = self.directory.fetch_users_page(pagination_token).await?;
            for user in &page.users {
                self.process_user(user).await;
            }

            pagination_token = page.next_token;
            if pagination_token.is_none() {
                break;
            }
        }

        Ok(())
    }

    async fn process_user(&self, user: &PoolUser) {
        if !user.email_verified {
            return;
        }
        let Some(email) = user.email.as_deref().filter(|e| !e.is_empty()) else {
            return;
        };
        // An unparseable address is skipped like any other malformed record.
        let Ok(address) = EmailAddress::try_from(email) else {
            return;
        };
        if !address.needs_normalization() {
            return;
        }

        let lowered = address.normalized();
        match self.directory.find_verified_by_email(&lowered).await {
            Ok(owners)
                if owners
                    .iter()
                    .any(|o| o.email.as_deref() == Some(lowered.as_str())) =>
            {
                info!(
                    username = %user.username,
                    email = %lowered,
                    "lowercased address already has a verified owner, leaving record as is"
                );
                return;
            }
            Ok(_) => {}
            Err(e) => {
                // Fail open: an address we cannot check is treated as free,
                // so a transient lookup failure can still end in a duplicate
                // email.
                warn!(
                    username = %user.username,
                    error = %e,
                    "existence check failed, treating address as unused"
                );
            }
        }

        info!(
            username = %user.username,
            from = %email,
            to = %lowered,
            "normalizing user email"
        );
        match self.directory.update_email(&user.username, &lowered).await {
            Ok(()) => {
                info!(
                    username = %user.username,
                    email = %lowered,
                    enabled = user.enabled,
                    status = %user.status,
                    "user email updated"
                );
            }
            Err(e) => {
                error!(
                    username = %user.username,
                    error = %e,
                    "could not update email, record left unchanged"
                );
            }
        }
    }
}
