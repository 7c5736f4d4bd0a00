//! Generic listing contract: pagination + sorting + free-text search.
//!
//! Every collection-returning operation (users, codes, roles) goes
//! through [`list`], so the envelope shape and the graceful fallback
//! for unknown sort fields are decided exactly once.

use serde::{Deserialize, Serialize};

/// Items returned per page when the request does not say otherwise.
pub const DEFAULT_LIMIT: u64 = 20;

/// Sort direction. Callers decide the default per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Client-supplied listing parameters.
///
/// All fields are optional; missing values fall back to the defaults
/// documented on each field. Deserializes directly from a query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRequest {
    /// Items to skip before the first returned item. Default 0.
    pub offset: Option<u64>,
    /// Maximum items returned. Default [`DEFAULT_LIMIT`].
    pub limit: Option<u64>,
    /// Field to sort by; unknown fields degrade to the default field.
    #[serde(rename = "sortField")]
    pub sort_field: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<SortOrder>,
    /// Case-insensitive substring match over the collection's
    /// searchable fields, applied before pagination.
    pub search: Option<String>,
}

/// Listing metadata: `count` is the number of items in this page,
/// `total_count` the number matching the filter before pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u64,
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}

/// Result envelope for every listed collection.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T> {
    pub data: Vec<T>,
    pub meta: ListMeta,
}

/// A collection item that can be listed through the shared contract.
pub trait Listable {
    /// Resource name reported in the envelope's `meta.type`.
    const RESOURCE: &'static str;

    /// Field used when no (or an unknown) sort field is requested.
    const DEFAULT_SORT_FIELD: &'static str;

    /// Fields accepted for sorting. Anything else falls back to
    /// [`Self::DEFAULT_SORT_FIELD`] rather than erroring.
    const SORT_FIELDS: &'static [&'static str];

    /// Comparable key for a recognized sort field.
    ///
    /// Only called with members of [`Self::SORT_FIELDS`]; the key for
    /// the default field must be returned for anything else.
    fn sort_key(&self, field: &str) -> String;

    /// Text fields matched by `search`.
    fn search_text(&self) -> Vec<&str>;
}

/// Filter, sort, and paginate `items` per `page`.
///
/// Search is applied first, so `meta.total_count` reflects the filtered
/// set; pagination never affects `total_count`. Unknown sort fields are
/// not an error: they sort by the collection's default field.
pub fn list<T: Listable>(mut items: Vec<T>, page: &PageRequest) -> Listing<T> {
    if let Some(needle) = page.search.as_deref().filter(|s| !s.is_empty()) {
        let needle = needle.to_lowercase();
        items.retain(|item| {
            item.search_text()
                .iter()
                .any(|text| text.to_lowercase().contains(&needle))
        });
    }

    let field = match page.sort_field.as_deref() {
        Some(f) if T::SORT_FIELDS.contains(&f) => f,
        _ => T::DEFAULT_SORT_FIELD,
    };
    let order = page.sort_order.unwrap_or_default();
    items.sort_by(|a, b| {
        let ordering = a.sort_key(field).cmp(&b.sort_key(field));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let total_count = items.len() as u64;
    let offset = page.offset.unwrap_or(0) as usize;
    let limit = page.limit.unwrap_or(DEFAULT_LIMIT).max(1) as usize;
    let data: Vec<T> = items.into_iter().skip(offset).take(limit).collect();

    Listing {
        meta: ListMeta {
            kind: T::RESOURCE.to_string(),
            count: data.len() as u64,
            total_count,
        },
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        name: String,
        rank: i32,
    }

    impl Entry {
        fn new(name: &str, rank: i32) -> Self {
            Self {
                name: name.to_string(),
                rank,
            }
        }
    }

    impl Listable for Entry {
        const RESOURCE: &'static str = "entries";
        const DEFAULT_SORT_FIELD: &'static str = "name";
        const SORT_FIELDS: &'static [&'static str] = &["name", "rank"];

        fn sort_key(&self, field: &str) -> String {
            match field {
                "rank" => format!("{:010}", self.rank),
                _ => self.name.to_lowercase(),
            }
        }

        fn search_text(&self) -> Vec<&str> {
            vec![&self.name]
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("charlie", 3),
            Entry::new("alice", 1),
            Entry::new("bob", 2),
        ]
    }

    #[test]
    fn default_listing_sorts_by_default_field() {
        let listing = list(sample(), &PageRequest::default());

        let names: Vec<&str> = listing.data.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "charlie"]);
        assert_eq!(listing.meta.kind, "entries");
        assert_eq!(listing.meta.count, 3);
        assert_eq!(listing.meta.total_count, 3);
    }

    #[test]
    fn unknown_sort_field_falls_back_to_default() {
        let page = PageRequest {
            sort_field: Some("nonsense".to_string()),
            ..Default::default()
        };
        let fallback = list(sample(), &page);
        let default = list(sample(), &PageRequest::default());

        assert_eq!(fallback.data, default.data);
    }

    #[test]
    fn descending_order_reverses_the_comparison() {
        let page = PageRequest {
            sort_field: Some("rank".to_string()),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        let listing = list(sample(), &page);

        let ranks: Vec<i32> = listing.data.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![3, 2, 1]);
    }

    #[test]
    fn pagination_bounds_data_but_not_total_count() {
        let page = PageRequest {
            offset: Some(1),
            limit: Some(1),
            ..Default::default()
        };
        let listing = list(sample(), &page);

        assert_eq!(listing.data, vec![Entry::new("bob", 2)]);
        assert_eq!(listing.meta.count, 1);
        assert_eq!(listing.meta.total_count, 3);
    }

    #[test]
    fn offset_past_the_end_yields_empty_data() {
        let page = PageRequest {
            offset: Some(10),
            ..Default::default()
        };
        let listing = list(sample(), &page);

        assert!(listing.data.is_empty());
        assert_eq!(listing.meta.count, 0);
        assert_eq!(listing.meta.total_count, 3);
    }

    #[test]
    fn search_is_case_insensitive_and_precedes_pagination() {
        let page = PageRequest {
            search: Some("ALICE".to_string()),
            ..Default::default()
        };
        let listing = list(sample(), &page);

        assert_eq!(listing.data, vec![Entry::new("alice", 1)]);
        assert_eq!(listing.meta.total_count, 1);
    }
}
