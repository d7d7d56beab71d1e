use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email_format"))
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email_format("user@example.com").is_ok());
        assert!(validate_email_format("a.b+c@mail.co.uk").is_ok());
    }

    #[test]
    fn rejects_addresses_without_domain_dot_or_with_spaces() {
        assert!(validate_email_format("user@example").is_err());
        assert!(validate_email_format("user example@mail.com").is_err());
        assert!(validate_email_format("@example.com").is_err());
        assert!(validate_email_format("user@@example.com").is_err());
    }

    #[test]
    fn blank_means_whitespace_only() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank(" x ").is_ok());
    }
}
