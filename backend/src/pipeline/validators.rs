use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

// Vietnamese mobile numbers: 10 digits, leading 0, second digit 3/5/7/8/9.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0[35789][0-9]{8}$").expect("phone regex"));

/// Whether `s` looks like an email address. The empty string is not valid
/// under this check; emptiness is handled separately by the batch validator,
/// since email is mandatory while phone is not.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Whether `s` is an acceptable phone value. The phone field is optional, so
/// the empty string passes; anything non-empty must be a Vietnamese mobile
/// number.
pub fn is_valid_vietnamese_phone(s: &str) -> bool {
    s.is_empty() || PHONE_RE.is_match(s)
}
