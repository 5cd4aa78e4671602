//
//  gitlab-cli
//  api/pagination.rs
//

//! # Paginated Collections
//!
//! List endpoints return a JSON array plus RFC 5988 `Link` response headers
//! carrying `first`/`prev`/`next`/`last` page URLs. A [`PaginatedCollection`]
//! wraps the array as an ordered sequence of [`Record`]s together with those
//! cursor links, each kept verbatim as returned by the server.
//!
//! A single-page result simply has no `Link` header: all four links are
//! `None` and the sequence is the complete result. Following a link issues a
//! new, independent HTTP request via [`GitlabClient::follow_link`].
//!
//! ## Example
//!
//! ```rust,no_run
//! # async fn example(client: gitlab_cli::GitlabClient) -> gitlab_cli::api::Result<()> {
//! let mut page = client.users(Default::default()).await?;
//! loop {
//!     for user in page.records() {
//!         println!("{}", user.get_str("username").unwrap_or("-"));
//!     }
//!     match page.next_page(&client).await? {
//!         Some(next) => page = next,
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use super::client::GitlabClient;
use super::error::{Error, Result};
use super::record::Record;

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<([^>]+)>;\s*rel="([^"]+)""#).expect("valid link regex"));

/// Cursor links extracted from a `Link` response header.
///
/// Each link is a full URL including the page cursor parameter, kept exactly
/// as the server sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub first: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

impl PageLinks {
    /// Parses a raw `Link` header value.
    ///
    /// Unknown relations are ignored; a malformed segment is skipped rather
    /// than failing the whole response.
    pub fn parse(header: &str) -> Self {
        let mut links = PageLinks::default();
        for caps in LINK_RE.captures_iter(header) {
            let url = caps[1].to_string();
            match &caps[2] {
                "first" => links.first = Some(url),
                "prev" => links.prev = Some(url),
                "next" => links.next = Some(url),
                "last" => links.last = Some(url),
                _ => {}
            }
        }
        links
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.prev.is_none() && self.next.is_none() && self.last.is_none()
    }
}

/// An ordered page of records plus its pagination cursors.
///
/// Constructed once per response and never mutated. Sequence order matches
/// the server's array order exactly.
#[derive(Debug, Clone)]
pub struct PaginatedCollection {
    records: Vec<Record>,
    links: PageLinks,
}

impl PaginatedCollection {
    pub fn new(records: Vec<Record>, links: PageLinks) -> Self {
        Self { records, links }
    }

    /// The records on this page, in server order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the page, returning its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn links(&self) -> &PageLinks {
        &self.links
    }

    pub fn has_next_page(&self) -> bool {
        self.links.next.is_some()
    }

    pub fn has_prev_page(&self) -> bool {
        self.links.prev.is_some()
    }

    pub fn has_first_page(&self) -> bool {
        self.links.first.is_some()
    }

    pub fn has_last_page(&self) -> bool {
        self.links.last.is_some()
    }

    /// Fetches the next page, or `None` on the last page.
    pub async fn next_page(&self, client: &GitlabClient) -> Result<Option<PaginatedCollection>> {
        self.fetch(client, self.links.next.as_deref()).await
    }

    /// Fetches the previous page, or `None` on the first page.
    pub async fn prev_page(&self, client: &GitlabClient) -> Result<Option<PaginatedCollection>> {
        self.fetch(client, self.links.prev.as_deref()).await
    }

    /// Fetches the first page, or `None` when the server sent no link.
    pub async fn first_page(&self, client: &GitlabClient) -> Result<Option<PaginatedCollection>> {
        self.fetch(client, self.links.first.as_deref()).await
    }

    /// Fetches the last page, or `None` when the server sent no link.
    pub async fn last_page(&self, client: &GitlabClient) -> Result<Option<PaginatedCollection>> {
        self.fetch(client, self.links.last.as_deref()).await
    }

    /// Follows `next` links to the end, returning every record in order,
    /// starting with this page's.
    pub async fn auto_paginate(self, client: &GitlabClient) -> Result<Vec<Record>> {
        let mut all = self.records;
        let mut next = self.links.next;
        while let Some(url) = next {
            let page = client.follow_link(&url).await?.into_collection()?;
            next = page.links.next.clone();
            all.extend(page.records);
        }
        Ok(all)
    }

    async fn fetch(
        &self,
        client: &GitlabClient,
        url: Option<&str>,
    ) -> Result<Option<PaginatedCollection>> {
        match url {
            Some(url) => {
                let page = client.follow_link(url).await?.into_collection()?;
                Ok(Some(page))
            }
            None => Ok(None),
        }
    }
}

impl<'a> IntoIterator for &'a PaginatedCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for PaginatedCollection {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Wraps a JSON array into a collection, failing on non-object elements.
pub(crate) fn collection_from_array(
    items: Vec<serde_json::Value>,
    links: PageLinks,
) -> Result<PaginatedCollection> {
    let records = items
        .into_iter()
        .map(|item| {
            Record::try_from(item).map_err(|_| {
                Error::Decode("array response contained a non-object element".to_string())
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(PaginatedCollection::new(records, links))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HEADER: &str = "<https://api.example.com/users?page=3&per_page=20>; rel=\"next\", \
         <https://api.example.com/users?page=1&per_page=20>; rel=\"first\", \
         <https://api.example.com/users?page=5&per_page=20>; rel=\"last\"";

    #[test]
    fn test_parse_link_header() {
        let links = PageLinks::parse(HEADER);
        assert_eq!(
            links.next.as_deref(),
            Some("https://api.example.com/users?page=3&per_page=20")
        );
        assert_eq!(
            links.first.as_deref(),
            Some("https://api.example.com/users?page=1&per_page=20")
        );
        assert_eq!(
            links.last.as_deref(),
            Some("https://api.example.com/users?page=5&per_page=20")
        );
        assert!(links.prev.is_none());
    }

    #[test]
    fn test_parse_ignores_unknown_relations() {
        let links = PageLinks::parse("<https://example.com/x>; rel=\"alternate\"");
        assert!(links.is_empty());
    }

    #[test]
    fn test_single_page_has_no_links() {
        let collection =
            collection_from_array(vec![json!({"id": 1}), json!({"id": 2})], PageLinks::default())
                .unwrap();
        assert!(!collection.has_next_page());
        assert!(!collection.has_prev_page());
        assert!(!collection.has_first_page());
        assert!(!collection.has_last_page());
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_order_preserved() {
        let items = vec![json!({"id": 3}), json!({"id": 1}), json!({"id": 2})];
        let collection = collection_from_array(items, PageLinks::default()).unwrap();
        let ids: Vec<i64> = collection
            .records()
            .iter()
            .map(|r| r.get_i64("id").unwrap())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_non_object_element_rejected() {
        let err = collection_from_array(vec![json!(1)], PageLinks::default());
        assert!(err.is_err());
    }
}
