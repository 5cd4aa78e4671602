//
//  gitlab-cli
//  api/params.rs
//

//! Query/body parameter helpers and path-segment escaping.
//!
//! Resource methods accept free-form options the same way the API does:
//! [`Params`] is an ordered list of query pairs, [`BodyMap`] an open JSON
//! object for request bodies. Path parameters go through [`url_encode`] so
//! that reserved characters in project names or slugs cannot alter the route.

use serde_json::{Map, Value};

/// Ordered query-string parameters.
///
/// Order is preserved so generated URLs are deterministic.
///
/// # Example
///
/// ```rust
/// use gitlab_cli::api::Params;
///
/// let params = Params::new().set("page", 2).set("per_page", 40);
/// assert_eq!(params.as_pairs().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one query pair. Values are stringified with `ToString`.
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// Appends the pair only when `value` is `Some`.
    pub fn set_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Open-ended JSON object used as a request body.
pub type BodyMap = Map<String, Value>;

/// Builds a [`BodyMap`] from literal pairs.
pub fn body_from(pairs: &[(&str, Value)]) -> BodyMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Merges `extra` into `base`, with `extra` winning on key collisions.
pub fn merge_body(mut base: BodyMap, extra: BodyMap) -> BodyMap {
    base.extend(extra);
    base
}

/// Percent-encodes a path parameter exactly once.
///
/// Everything outside `A-Z a-z 0-9 - _ ~` is escaped, including `/` (so an
/// injected slash cannot change the route), `%` (so pre-encoded input is not
/// double-decoded server-side) and `.` (GitLab rejects bare dots in
/// namespaced paths).
pub fn url_encode(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

/// A path parameter that is either a numeric ID or a namespaced path.
///
/// Mirrors endpoints that accept `5` as well as `group/project`. String
/// forms are percent-encoded when interpolated; numeric IDs pass through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceId {
    Id(u64),
    Path(String),
}

impl ResourceId {
    /// Renders the ID as a single escaped path segment.
    pub fn to_segment(&self) -> String {
        match self {
            ResourceId::Id(id) => id.to_string(),
            ResourceId::Path(path) => url_encode(path),
        }
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        ResourceId::Id(id)
    }
}

impl From<&str> for ResourceId {
    fn from(path: &str) -> Self {
        ResourceId::Path(path.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(path: String) -> Self {
        ResourceId::Path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_encode_reserved_characters() {
        assert_eq!(url_encode("gitlab-org/gitlab"), "gitlab-org%2Fgitlab");
        assert_eq!(url_encode("a b&c?d"), "a%20b%26c%3Fd");
        assert_eq!(url_encode("dot.file"), "dot%2Efile");
        assert_eq!(url_encode("plain-id_1~"), "plain-id_1~");
    }

    #[test]
    fn test_url_encode_is_single_pass() {
        // A percent sign is escaped, so encoded input is not decoded twice
        // server-side; the function itself is never applied twice.
        assert_eq!(url_encode("100%"), "100%25");
        assert_eq!(url_encode("%2F"), "%252F");
    }

    #[test]
    fn test_url_encode_non_ascii() {
        assert_eq!(url_encode("café"), "caf%C3%A9");
    }

    #[test]
    fn test_resource_id_segments() {
        assert_eq!(ResourceId::from(42).to_segment(), "42");
        assert_eq!(
            ResourceId::from("diaspora/diaspora").to_segment(),
            "diaspora%2Fdiaspora"
        );
    }

    #[test]
    fn test_params_preserve_order() {
        let params = Params::new()
            .set("page", 1)
            .set("per_page", 20)
            .set_opt("search", None::<&str>)
            .set_opt("sort", Some("asc"));
        let pairs = params.as_pairs();
        assert_eq!(pairs[0], ("page".to_string(), "1".to_string()));
        assert_eq!(pairs[1], ("per_page".to_string(), "20".to_string()));
        assert_eq!(pairs[2], ("sort".to_string(), "asc".to_string()));
    }

    #[test]
    fn test_merge_body_extra_wins() {
        let base = body_from(&[("name", json!("env")), ("tier", json!("staging"))]);
        let extra = body_from(&[("tier", json!("production"))]);
        let merged = merge_body(base, extra);
        assert_eq!(merged["name"], json!("env"));
        assert_eq!(merged["tier"], json!("production"));
    }
}
