//! Commit body normalization.

use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAKS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.?(?:\r\n)+").expect("invalid regex"));

static CONTROL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\t\r\n]").expect("invalid regex"));

static SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").expect("invalid regex"));

/// Cleans free-form commit body text.
///
/// Rules, applied in order:
/// 1. runs of CRLF pairs, optionally preceded by a period, become `". "`
/// 2. remaining tabs, line feeds and carriage returns become spaces
/// 3. runs of spaces collapse to one and the ends are trimmed
///
/// Bullet markers (`* `) are left in place so the report can split on them.
/// The function is idempotent.
#[must_use]
pub fn normalize_body(body: &str) -> String {
    let body = LINE_BREAKS_RE.replace_all(body, ". ");
    let body = CONTROL_RE.replace_all(&body, " ");
    let body = SPACES_RE.replace_all(&body, " ");
    body.trim().to_string()
}
