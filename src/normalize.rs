//! Computed-key cleanup for previously generated TypeTable fragments.
//!
//! Earlier tooling emitted template-literal expressions as object keys
//! (`` {`…`}: ``), which are invalid in an object literal. This pass rewrites
//! them to quoted literal keys.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A template-literal expression used directly as an object key.
static BAD_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(\s+)\{`(.*?)`\}:").unwrap());

/// Rewrite computed object keys to quoted literal keys.
///
/// Returns the fixed text, or `None` when no substitution applies. Documents
/// without a template-literal marker are skipped before any regex work.
#[must_use]
pub fn fix_keys(content: &str) -> Option<String> {
    if !content.contains("{`") {
        return None;
    }

    let fixed = BAD_KEY.replace_all(content, |caps: &Captures<'_>| {
        let indent = &caps[1];
        let inner = caps[2].replace("\\`", "").replace('"', "\\\"");
        format!("{indent}\"{inner}\":")
    });

    match fixed {
        Cow::Borrowed(_) => None,
        Cow::Owned(s) => Some(s),
    }
}
