/// Server-side `ListUsers` filter matching verified owners of a single
/// email address.
pub struct VerifiedEmailFilter {
    email: String,
}

impl VerifiedEmailFilter {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Renders the filter expression. The address is interpolated as-is;
    /// an address containing a `"` yields a malformed filter.
    pub fn as_filter_string(&self) -> String {
        format!(r#"email = "{}" and email_verified = "true""#, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_matches_address_and_verified_flag() {
        let filter = VerifiedEmailFilter::new("john.doe@example.com");

        assert_eq!(
            filter.as_filter_string(),
            r#"email = "john.doe@example.com" and email_verified = "true""#
        );
    }
}
