use email_address::EmailAddress;

/// Returns `true` if the provided string is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// Returns `true` if the provided string can serve as a username.
///
/// Usernames are trust-based identifiers; the only requirement is that they are
/// non-empty after trimming and carry no interior whitespace.
pub fn is_valid_username(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && !trimmed.chars().any(char::is_whitespace)
}
