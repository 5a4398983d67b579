// Document password marking: an HTML-comment marker carrying the encoded
// password, prepended to the body. An obfuscation hint for the embedding UI,
// not an access-control mechanism.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

const MARKER_PREFIX: &str = "<!-- password:";
const MARKER_SUFFIX: &str = " -->";

/// Prepend a password marker line to a document body.
pub fn set_password(content: &str, password: &str) -> String {
    let encoded = STANDARD.encode(password);
    format!("{MARKER_PREFIX}{encoded}{MARKER_SUFFIX}\n{content}")
}

/// True iff the marker for exactly this password appears in the body.
pub fn verify_password(content: &str, password: &str) -> bool {
    let encoded = STANDARD.encode(password);
    content.contains(&format!("{MARKER_PREFIX}{encoded}{MARKER_SUFFIX}"))
}

/// True iff any password marker appears in the body.
pub fn is_protected(content: &str) -> bool {
    content.contains(MARKER_PREFIX)
}
