//! Email address syntax check

use validator::ValidateEmail;

/// Returns whether `email` is a syntactically valid `local-part@domain` address.
///
/// Only the bare address form is accepted; display names (`Ada <ada@x.io>`)
/// and surrounding whitespace are rejected. The local part follows the HTML5
/// grammar, which allows leading and consecutive dots (`.a@b.com`,
/// `a..b@c.com`) that RFC 5322 would refuse.
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}
