use std::fmt;
use thiserror::Error;

/// An email address split at the first `@` into local part and domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    local: String,
    domain: String,
}

#[derive(Error, Debug, PartialEq)]
pub enum EmailError {
    #[error("'{0}' is not a valid email: missing '@' separator")]
    MissingSeparator(String),
}

impl TryFrom<&str> for EmailAddress {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let Some((local, domain)) = value.split_once('@') else {
            return Err(EmailError::MissingSeparator(value.to_string()));
        };

        Ok(Self {
            local: local.to_string(),
            domain: domain.to_string(),
        })
    }
}

impl EmailAddress {
    pub fn local_part(&self) -> &str {
        &self.local
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// True if the local part contains any uppercase character. The domain
    /// is not inspected.
    pub fn needs_normalization(&self) -> bool {
        self.local.chars().any(char::is_uppercase)
    }

    /// The whole address lowercased to its canonical form.
    pub fn normalized(&self) -> String {
        format!(
            "{}@{}",
            self.local.to_lowercase(),
            self.domain.to_lowercase()
        )
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_is_accepted() {
        let address = EmailAddress::try_from("john.doe@example.com").unwrap();

        assert_eq!(address.local_part(), "john.doe");
        assert_eq!(address.domain(), "example.com");
    }

    #[test]
    fn missing_at_symbol_is_rejected() {
        assert_eq!(
            EmailAddress::try_from("johnexample.com").unwrap_err(),
            EmailError::MissingSeparator("johnexample.com".to_string())
        );
    }

    #[test]
    fn address_splits_at_the_first_at_symbol() {
        let address = EmailAddress::try_from("john@doe@example.com").unwrap();

        assert_eq!(address.local_part(), "john");
        assert_eq!(address.domain(), "doe@example.com");
    }

    #[test]
    fn uppercase_local_part_needs_normalization() {
        let address = EmailAddress::try_from("John.Doe@example.com").unwrap();

        assert!(address.needs_normalization());
    }

    #[test]
    fn lowercase_local_part_is_already_normalized() {
        let address = EmailAddress::try_from("jane@example.com").unwrap();

        assert!(!address.needs_normalization());
    }

    #[test]
    fn uppercase_domain_does_not_trigger_normalization() {
        let address = EmailAddress::try_from("jane@EXAMPLE.COM").unwrap();

        assert!(!address.needs_normalization());
    }

    #[test]
    fn normalized_lowercases_local_part_and_domain() {
        let address = EmailAddress::try_from("John.Doe@Example.com").unwrap();

        assert_eq!(address.normalized(), "john.doe@example.com");
    }
}
