use aws_sdk_cognitoidentityprovider::types::UserType;

/// A user pool member with the attributes this crate cares about pulled out
/// of the raw name/value attribute list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolUser {
    pub username: String,
    pub email: Option<String>,
    /// True only when the raw `email_verified` attribute is the literal
    /// string `"true"`.
    pub email_verified: bool,
    pub enabled: bool,
    pub status: String,
}

/// One page of a user listing, along with the service's opaque token for
/// the next page.
#[derive(Clone, Debug, Default)]
pub struct UserPage {
    pub users: Vec<PoolUser>,
    pub next_token: Option<String>,
}

impl From<&UserType> for PoolUser {
    fn from(user: &UserType) -> Self {
        let attr = |name: &str| {
            user.attributes()
                .iter()
                .find(|a| a.name() == name)
                .and_then(|a| a.value())
        };

        Self {
            username: user.username().unwrap_or_default().to_string(),
            email: attr("email").map(str::to_string),
            email_verified: attr("email_verified") == Some("true"),
            enabled: user.enabled(),
            status: user
                .user_status()
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_cognitoidentityprovider::types::{AttributeType, UserStatusType, UserType};

    use super::*;

    fn attribute(name: &str, value: &str) -> AttributeType {
        AttributeType::builder()
            .name(name)
            .value(value)
            .build()
            .unwrap()
    }

    #[test]
    fn attributes_are_pulled_into_named_fields() {
        let raw = UserType::builder()
            .username("u1")
            .attributes(attribute("email", "John.Doe@Example.com"))
            .attributes(attribute("email_verified", "true"))
            .enabled(true)
            .user_status(UserStatusType::Confirmed)
            .build();

        let user = PoolUser::from(&raw);

        assert_eq!(user.username, "u1");
        assert_eq!(user.email.as_deref(), Some("John.Doe@Example.com"));
        assert!(user.email_verified);
        assert!(user.enabled);
        assert_eq!(user.status, "CONFIRMED");
    }

    #[test]
    fn only_the_literal_true_counts_as_verified() {
        let raw = UserType::builder()
            .username("u2")
            .attributes(attribute("email", "jane@example.com"))
            .attributes(attribute("email_verified", "True"))
            .build();

        assert!(!PoolUser::from(&raw).email_verified);
    }

    #[test]
    fn missing_attributes_map_to_absent_fields() {
        let raw = UserType::builder().username("u3").build();

        let user = PoolUser::from(&raw);

        assert_eq!(user.email, None);
        assert!(!user.email_verified);
    }
}
