//! Shape checks for account fields.
//!
//! `None` means "not provided" and is always valid; required-ness is decided by
//! the caller.

const USERNAME_LEN: std::ops::RangeInclusive<usize> = 3..=32;
const PASSWORD_LEN: std::ops::RangeInclusive<usize> = 8..=32;
const NICKNAME_MAX_CHARS: usize = 32;

fn is_ascii_alphanumeric_within(s: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// `^[A-Za-z0-9]{3,32}$`
pub fn validate_username(username: Option<&str>) -> bool {
    username.is_none_or(|u| is_ascii_alphanumeric_within(u, USERNAME_LEN))
}

/// `^[A-Za-z0-9]{8,32}$`
pub fn validate_password(password: Option<&str>) -> bool {
    password.is_none_or(|p| is_ascii_alphanumeric_within(p, PASSWORD_LEN))
}

/// At most 32 characters (not bytes).
pub fn validate_nickname(nickname: Option<&str>) -> bool {
    nickname.is_none_or(|n| n.chars().count() <= NICKNAME_MAX_CHARS)
}
