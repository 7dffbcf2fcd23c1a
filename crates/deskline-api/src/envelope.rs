// The platform wraps every response in a fixed envelope:
//
//   { "data": T | null, "message": "...", "meta": { "pagination": {...} } }
//
// The client strips the envelope before callers see the payload; list
// endpoints additionally surface the pagination meta.

use serde::{Deserialize, Serialize};

/// Fixed response wrapper returned by every endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Response metadata. Currently only pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub pagination: Option<Pagination>,
}

/// Pagination metadata attached to index responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub per_page: u32,
    /// 1-based index of the first record on this page, if any.
    pub from: Option<u32>,
    /// 1-based index of the last record on this page, if any.
    pub to: Option<u32>,
    pub total: u64,
    pub last_page: u32,
}

/// One page of records plus its pagination meta, as returned by index
/// endpoints.
#[derive(Debug)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether another page follows this one.
    pub fn has_more(&self) -> bool {
        self.pagination
            .as_ref()
            .is_some_and(|p| p.current_page < p.last_page)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{Envelope, Page, Pagination};

    #[test]
    fn envelope_parses_full_shape() {
        let body = r#"{
            "data": [1, 2, 3],
            "message": "ok",
            "meta": { "pagination": {
                "current_page": 1, "per_page": 25,
                "from": 1, "to": 3, "total": 3, "last_page": 1
            }}
        }"#;
        let env: Envelope<Vec<u32>> = serde_json::from_str(body).unwrap();
        assert_eq!(env.data.unwrap(), vec![1, 2, 3]);
        assert_eq!(env.message, "ok");
        let pagination = env.meta.unwrap().pagination.unwrap();
        assert_eq!(pagination.total, 3);
    }

    #[test]
    fn envelope_tolerates_null_data_and_missing_meta() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"data": null, "message": "deleted"}"#).unwrap();
        assert!(env.data.is_none());
        assert!(env.meta.is_none());
    }

    #[test]
    fn page_has_more() {
        let page = |current_page, last_page| Page {
            records: vec![0u8],
            pagination: Some(Pagination {
                current_page,
                per_page: 25,
                from: Some(1),
                to: Some(1),
                total: 50,
                last_page,
            }),
        };
        assert!(page(1, 2).has_more());
        assert!(!page(2, 2).has_more());
    }
}
