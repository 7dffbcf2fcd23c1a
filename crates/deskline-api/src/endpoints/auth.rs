// Session endpoints.
//
// Login establishes a cookie session in the client's jar; the returned
// admin record identifies who is signed in. `current_admin` re-validates
// an existing session (e.g. after process restart with a persisted
// session record).

use secrecy::{ExposeSecret, SecretString};

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{AdminRecord, LoginRequest};

impl ApiClient {
    /// Sign in with email and password, establishing a cookie session.
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<AdminRecord, Error> {
        self.post_record(
            "login",
            &LoginRequest {
                email,
                password: password.expose_secret(),
            },
        )
        .await
    }

    /// Tear down the server-side session.
    pub async fn logout(&self) -> Result<(), Error> {
        self.post_empty("logout", &serde_json::json!({})).await
    }

    /// The admin attached to the current session.
    ///
    /// Fails with [`Error::Unauthorized`] when no session is active.
    pub async fn current_admin(&self) -> Result<AdminRecord, Error> {
        self.get_record("me").await
    }
}
