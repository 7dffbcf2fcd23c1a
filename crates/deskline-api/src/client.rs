// Helpdesk API HTTP client
//
// Wraps `reqwest::Client` with base-URL construction, envelope unwrapping,
// and status-code error mapping. All endpoint groups (admins, tickets,
// etc.) are implemented as inherent methods via separate files to keep
// this module focused on transport mechanics.

use std::future::Future;
use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::envelope::{Envelope, Page};
use crate::error::Error;
use crate::filter::ListQuery;
use crate::transport::TransportConfig;

/// Error body shape returned by the helpdesk backend on failures.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Maximum number of body bytes quoted in diagnostics.
const PREVIEW_LEN: usize = 200;

/// Take the leading slice of `body` for error messages, backing off to the
/// nearest char boundary so multi-byte UTF-8 never splits mid-character.
fn preview(body: &str) -> &str {
    if body.len() <= PREVIEW_LEN {
        return body;
    }
    let mut end = PREVIEW_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// Raw HTTP client for the helpdesk REST API.
///
/// Handles the `{ data, message, meta }` envelope and cookie-based session
/// auth. All methods return unwrapped `data` payloads -- the envelope is
/// stripped before the caller sees it, and a success response missing its
/// `data` surfaces as [`Error::BadResponse`].
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    /// Cookie jar reference for session inspection after login.
    cookie_jar: Option<Arc<Jar>>,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Create a new client from a `TransportConfig`.
    ///
    /// If the config doesn't already include a cookie jar, one is created
    /// automatically (session auth requires cookies). The `base_url` is the
    /// server root (e.g. `https://desk.example.com`); the `/api/` path
    /// segment is appended here.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let config = if transport.cookie_jar.is_some() {
            transport.clone()
        } else {
            transport.clone().with_cookie_jar()
        };
        let cookie_jar = config.cookie_jar.clone();
        let http = config.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            cookie_jar,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages cookies).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            cookie_jar: None,
        })
    }

    /// Normalize the server root into an API base ending in `/api/`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;

        // Strip trailing slash for uniform handling
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/api") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/"));
        }

        Ok(url)
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Extract the session cookie header value, if a session is active.
    pub fn cookie_header(&self) -> Option<String> {
        let jar = self.cookie_jar.as_ref()?;
        let cookies = jar.cookies(&self.base_url)?;
        cookies.to_str().ok().map(String::from)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"tickets/42"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        // base_url always ends with `/api/`, so joining relative paths works.
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    /// GET a single record.
    pub(crate) async fn get_record<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_record(resp).await
    }

    /// GET a filtered, paginated listing.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<Page<T>, Error> {
        let url = self.url(path)?;
        let pairs = query.to_pairs();
        debug!("GET {url} params={pairs:?}");

        let resp = self.http.get(url).query(&pairs).send().await?;
        self.handle_page(resp).await
    }

    /// POST a JSON body and unwrap the created record.
    pub(crate) async fn post_record<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_record(resp).await
    }

    /// POST a JSON body where the response carries no record.
    pub(crate) async fn post_empty(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_empty(resp).await
    }

    /// PUT a JSON body and unwrap the updated record.
    pub(crate) async fn put_record<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.handle_record(resp).await
    }

    /// PUT with no body, unwrapping the resulting record (archive/restore).
    pub(crate) async fn put_action<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).send().await?;
        self.handle_record(resp).await
    }

    /// DELETE a record. The backend soft-deletes and returns only a message.
    pub(crate) async fn delete_record(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    /// Parse the envelope and require a `data` payload.
    async fn handle_record<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let envelope: Envelope<T> = self.parse_envelope(resp).await?;
        envelope.data.ok_or_else(|| Error::BadResponse {
            message: "response envelope has no data".into(),
            body: envelope.message,
        })
    }

    /// Parse the envelope into a page, pairing `data` with `meta.pagination`.
    ///
    /// A listing without pagination meta (unpaginated endpoints) becomes a
    /// single terminal page.
    async fn handle_page<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Page<T>, Error> {
        let envelope: Envelope<Vec<T>> = self.parse_envelope(resp).await?;
        let records = envelope.data.ok_or_else(|| Error::BadResponse {
            message: "listing envelope has no data".into(),
            body: envelope.message,
        })?;
        let pagination = envelope.meta.and_then(|m| m.pagination);

        Ok(Page {
            records,
            pagination,
        })
    }

    /// Parse the envelope, ignoring any `data` payload.
    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let _: Envelope<serde_json::Value> = self.parse_envelope(resp).await?;
        Ok(())
    }

    async fn parse_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Envelope<T>, Error> {
        let status = resp.status();
        if !status.is_success() {
            return Err(self.parse_error(status, resp).await);
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview = preview(&body);
            Error::BadResponse {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    /// Map a non-2xx response onto the error taxonomy.
    ///
    /// Each status keeps its server-supplied `message` so callers can show
    /// it verbatim. Anything 5xx (and unmapped 4xx) is an internal error.
    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorBody>(&raw)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| {
                if raw.is_empty() {
                    status.to_string()
                } else {
                    preview(&raw).to_owned()
                }
            });

        use reqwest::StatusCode;
        match status {
            StatusCode::BAD_REQUEST => Error::BadRequest { message },
            StatusCode::UNAUTHORIZED => Error::Unauthorized { message },
            StatusCode::FORBIDDEN => Error::Forbidden { message },
            StatusCode::NOT_FOUND => Error::NotFound { message },
            StatusCode::CONFLICT => Error::Conflict { message },
            _ => Error::Internal {
                message,
                status: status.as_u16(),
            },
        }
    }

    // ── Pagination helper ────────────────────────────────────────────

    /// Walk every page of a listing and collect the records.
    ///
    /// `fetch` receives the query with its `page` set; iteration stops when
    /// the returned page reports no further pages.
    pub async fn paginate_all<T, F, Fut>(&self, query: &ListQuery, fetch: F) -> Result<Vec<T>, Error>
    where
        F: Fn(ListQuery) -> Fut,
        Fut: Future<Output = Result<Page<T>, Error>>,
    {
        let mut all = Vec::new();
        let mut page_no: u32 = 1;

        loop {
            let page = fetch(query.clone().with_page(page_no)).await?;
            let done = !page.has_more();
            all.extend(page.records);

            if done {
                break;
            }
            page_no += 1;
        }

        Ok(all)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{ApiClient, preview};
    use crate::error::Error;

    #[test]
    fn preview_backs_off_to_char_boundary() {
        let mut body = "x".repeat(199);
        body.push('é');
        body.push_str("tail");
        // Byte 200 lands inside the two-byte char, so the cut moves back one.
        assert_eq!(preview(&body), "x".repeat(199));
    }

    #[test]
    fn preview_keeps_short_bodies_whole() {
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn join_failure_maps_to_invalid_url() {
        // A cannot-be-a-base URL parses fine but rejects relative joins.
        let client =
            ApiClient::from_reqwest("data:text/plain,hello", reqwest::Client::new()).unwrap();
        let result = client.url("tickets");
        assert!(matches!(result, Err(Error::InvalidUrl(_))), "got: {result:?}");
    }
}
