// ── Desk facade ──
//
// The main entry point for consumers. Owns the API client, the query
// cache, and the session record, and hands out the read (`Queries`)
// and write (`Mutations`) facades that share them.

use std::sync::{Arc, RwLock};

use secrecy::SecretString;
use tracing::{debug, info};

use deskline_api::{ApiClient, TransportConfig};

use crate::cache::QueryCache;
use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::model::Admin;
use crate::mutation::Mutations;
use crate::query::Queries;
use crate::session::{Session, SessionStore, require_authenticated, require_super_admin};

/// Connected helpdesk handle. Cheaply cloneable.
#[derive(Clone)]
pub struct Desk {
    inner: Arc<DeskInner>,
}

struct DeskInner {
    config: ClientConfig,
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    session_store: SessionStore,
    session: RwLock<Option<Session>>,
}

impl Desk {
    /// Build a handle from configuration. Does not authenticate; call
    /// [`login`](Self::login) or [`resume`](Self::resume) first.
    pub fn new(config: ClientConfig, session_store: SessionStore) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: (&config.tls).into(),
            timeout: config.timeout,
            cookie_jar: None,
        };
        let api = Arc::new(ApiClient::new(config.url.as_str(), &transport)?);

        Ok(Self {
            inner: Arc::new(DeskInner {
                config,
                api,
                cache: Arc::new(QueryCache::new()),
                session_store,
                session: RwLock::new(None),
            }),
        })
    }

    /// Build against the platform-default session store location.
    pub fn open(config: ClientConfig) -> Result<Self, CoreError> {
        let store = SessionStore::open_default()?;
        Self::new(config, store)
    }

    // ── Facades ──────────────────────────────────────────────────────

    pub fn queries(&self) -> Queries {
        Queries::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.cache))
    }

    pub fn mutations(&self) -> Mutations {
        Mutations::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.cache))
    }

    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    pub fn cache(&self) -> &QueryCache {
        &self.inner.cache
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Sign in, persist the session record, and return the admin.
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<Admin, CoreError> {
        let record = self.inner.api.login(email, password).await?;
        let admin: Admin = record.into();
        info!("signed in as {} ({})", admin.email, admin.role);

        let session = Session::new(admin.clone(), self.inner.config.url.as_str());
        self.inner.session_store.save(&session)?;
        self.set_session(Some(session));
        Ok(admin)
    }

    /// Resume a persisted session, re-validating it against the server.
    ///
    /// Returns `Ok(None)` when no session is recorded or the recorded
    /// one targets a different server. An expired session clears the
    /// record and surfaces as [`CoreError::SessionExpired`].
    pub async fn resume(&self) -> Result<Option<Admin>, CoreError> {
        let Some(recorded) = self.inner.session_store.load()? else {
            return Ok(None);
        };
        if recorded.server != self.inner.config.url.as_str() {
            debug!(
                "ignoring session for {} (connecting to {})",
                recorded.server, self.inner.config.url
            );
            return Ok(None);
        }

        match self.inner.api.current_admin().await {
            Ok(record) => {
                let admin: Admin = record.into();
                let session = Session::new(admin.clone(), recorded.server);
                self.set_session(Some(session));
                Ok(Some(admin))
            }
            Err(e) if e.is_auth_expired() => {
                self.inner.session_store.clear()?;
                self.set_session(None);
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Sign out: tear down the server session, drop the cache, and
    /// remove the persisted record.
    pub async fn logout(&self) -> Result<(), CoreError> {
        self.inner.api.logout().await?;
        self.inner.cache.clear();
        self.inner.session_store.clear()?;
        self.set_session(None);
        Ok(())
    }

    /// The current session, if signed in.
    pub fn session(&self) -> Option<Session> {
        self.inner
            .session
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Guard: any signed-in admin.
    pub fn require_authenticated(&self) -> Result<Session, CoreError> {
        let session = self.session();
        require_authenticated(session.as_ref())?;
        session.ok_or(CoreError::AuthenticationRequired)
    }

    /// Guard: signed-in super admin.
    pub fn require_super_admin(&self) -> Result<Session, CoreError> {
        let session = self.session();
        require_super_admin(session.as_ref())?;
        session.ok_or(CoreError::AuthenticationRequired)
    }

    fn set_session(&self, session: Option<Session>) {
        *self
            .inner
            .session
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = session;
    }
}
