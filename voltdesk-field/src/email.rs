//! Email address syntax.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum length of a complete address.
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum length of the part before `@`.
pub const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Dot-atom local part, then two or more domain labels. The last label must
/// start with a letter so all-numeric top-level domains are rejected.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+",            // first atom
        r"(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",       // further atoms
        r"@",
        r"(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+", // labels
        r"[A-Za-z](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",  // top-level label
    )) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid email regex: {err}"),
    }
});

/// Check that `candidate` is a syntactically valid email address.
///
/// Only the address itself is accepted: no display names, no comments,
/// no quoted local parts and no IP-literal domains.
#[must_use]
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.len() > EMAIL_MAX_LENGTH {
        return false;
    }
    let Some((local, _domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.len() > LOCAL_PART_MAX_LENGTH {
        return false;
    }
    EMAIL_PATTERN.is_match(candidate)
}
