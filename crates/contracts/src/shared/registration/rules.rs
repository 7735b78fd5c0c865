use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum password length, counted in UTF-16 code units like a browser input.
pub const MIN_PASSWORD_LEN: usize = 8;

// Same members as `is_js_whitespace`, plus `@`.
const EMAIL_PART: &str =
    r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{part}@{part}\.{part}$", part = EMAIL_PART))
        .expect("email pattern is a valid regex")
});

/// Whitespace as browsers define it for `trim()` and `\s`.
///
/// Differs from Unicode `White_Space`: includes U+FEFF, excludes U+0085.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Trims browser whitespace from both ends.
pub fn trim_js(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

/// Structural email check: `local@domain.tld`, no whitespace in any part.
///
/// Deliberately permissive, this is not RFC 5322 validation.
/// Example: "user@example.com" -> true, "user@example" -> false
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Password strength check: at least 8 characters with one lowercase letter,
/// one uppercase letter and one digit (ASCII), in any order.
///
/// Line terminators are not allowed anywhere in the value.
pub fn is_valid_password(password: &str) -> bool {
    if password.chars().any(is_line_terminator) {
        return false;
    }

    password.encode_utf16().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
