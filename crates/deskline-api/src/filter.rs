// List filters for index endpoints.
//
// Filters travel as query-string parameters. Encoding and decoding are
// symmetric: a filter encoded to pairs and parsed back from the URL
// reconstructs an equivalent filter, so cache keys built from filters
// survive a round-trip through navigation state.

use url::form_urlencoded;

/// Filter and pagination parameters accepted by every index endpoint.
///
/// `is_archived` follows the server convention of `"1"` / `"0"` flags;
/// leaving it unset lists non-archived records (the server default).
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ListQuery {
    /// Filter by a search term.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    /// Filter to archived records only.
    pub fn archived() -> Self {
        Self {
            is_archived: Some(true),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Encode to query pairs in a fixed parameter order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref search) = self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(archived) = self.is_archived {
            pairs.push(("is_archived", if archived { "1" } else { "0" }.to_owned()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        pairs
    }

    /// Encode to a `key=value&…` query string.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// Decode from a query string. Unknown parameters are ignored;
    /// unparseable numeric values are treated as unset.
    pub fn from_query_string(query: &str) -> Self {
        let mut filter = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "search" => filter.search = Some(value.into_owned()),
                "is_archived" => filter.is_archived = Some(value == "1" || value == "true"),
                "page" => filter.page = value.parse().ok(),
                "per_page" => filter.per_page = value.parse().ok(),
                _ => {}
            }
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::ListQuery;

    #[test]
    fn round_trips_through_query_string() {
        let filter = ListQuery {
            search: Some("abc".into()),
            is_archived: Some(true),
            page: Some(2),
            per_page: Some(25),
        };
        let encoded = filter.to_query_string();
        assert_eq!(encoded, "search=abc&is_archived=1&page=2&per_page=25");
        assert_eq!(ListQuery::from_query_string(&encoded), filter);
    }

    #[test]
    fn round_trips_empty_filter() {
        let filter = ListQuery::default();
        assert_eq!(filter.to_query_string(), "");
        assert_eq!(ListQuery::from_query_string(""), filter);
    }

    #[test]
    fn round_trips_search_with_reserved_characters() {
        let filter = ListQuery::search("a&b =c");
        let encoded = filter.to_query_string();
        assert_eq!(ListQuery::from_query_string(&encoded), filter);
    }

    #[test]
    fn unarchived_flag_encodes_as_zero() {
        let filter = ListQuery {
            is_archived: Some(false),
            ..ListQuery::default()
        };
        let encoded = filter.to_query_string();
        assert_eq!(encoded, "is_archived=0");
        assert_eq!(ListQuery::from_query_string(&encoded), filter);
    }

    #[test]
    fn ignores_unknown_parameters() {
        let filter = ListQuery::from_query_string("search=x&utm_source=mail");
        assert_eq!(filter, ListQuery::search("x"));
    }
}
