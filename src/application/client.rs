//! Client facade: authentication and the social graph
//!
//! Entry pagination and export requests live in `entries` and `export`.

use crate::domain::fields::Fields;
use crate::domain::{Child, Following, Journal, User};
use crate::error::{Result, TinybeansError};
use crate::infrastructure::{ApiConfig, ApiRequest, HttpTransport, Transport};
use serde_json::{json, Value};

/// Credentials obtained from a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

/// Blocking client for the Tinybeans API
#[derive(Debug)]
pub struct TinybeansClient<T: Transport = HttpTransport> {
    transport: T,
    client_id: String,
    session: Option<Session>,
}

impl TinybeansClient<HttpTransport> {
    /// Create a client for the public API with the default client id
    pub fn new() -> Result<Self> {
        Self::from_config(&ApiConfig::default())
    }

    /// Create a client from API settings
    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        let transport = HttpTransport::new(&api.base_url)?;
        Ok(Self::with_transport(transport, &api.client_id))
    }
}

impl<T: Transport> TinybeansClient<T> {
    /// Create a client over any transport
    pub fn with_transport(transport: T, client_id: &str) -> Self {
        TinybeansClient {
            transport,
            client_id: client_id.to_string(),
            session: None,
        }
    }

    /// Resume a previously obtained session instead of logging in
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The authenticated user, once logged in
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    /// Send a request with the session token attached and decode the JSON body
    pub(crate) fn call(&self, request: ApiRequest) -> Result<Value> {
        let token = self.session.as_ref().map(|s| s.access_token.as_str());
        let request = request.access_token(token);
        self.transport.send(&request)?.json()
    }

    /// Authenticate with username and password.
    ///
    /// Does nothing when a session is already held; the existing token is
    /// not re-validated.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if the response has no `accessToken` or `user`.
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        if self.is_logged_in() {
            tracing::debug!("Already logged in, skipping authentication");
            return Ok(());
        }

        let request = ApiRequest::post("authenticate").json(json!({
            "username": username,
            "password": password,
            "clientId": self.client_id,
        }));
        let body = self.call(request)?;

        let fields = Fields::new("AuthenticateResponse", &body)?;
        let access_token = fields.str("accessToken")?;
        let user = User::from_json(fields.value("user")?)?;

        tracing::info!(username = %user.username, "Logged in");
        self.session = Some(Session { access_token, user });
        Ok(())
    }

    /// Fetch the journals the user follows.
    ///
    /// Each call issues a fresh request. Followings are decoded one at a
    /// time as the returned iterator is consumed.
    pub fn get_followings(&self) -> Result<Followings> {
        let request = ApiRequest::get("followings").query("clientId", &self.client_id);
        let body = self.call(request)?;
        let items = Fields::new("FollowingsResponse", &body)?
            .array("followings")?
            .clone();

        tracing::debug!(count = items.len(), "Fetched followings");
        Ok(Followings {
            items: items.into_iter(),
        })
    }

    /// Every child of every followed journal, in order.
    /// Followings are fetched again on each call.
    pub fn children(&self) -> Result<Vec<Child>> {
        let mut children = Vec::new();
        for following in self.get_followings()? {
            children.extend(following?.journal.children);
        }
        Ok(children)
    }

    /// Look up a followed journal by id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no following grants access to that journal.
    pub fn find_journal(&self, journal_id: i64) -> Result<Journal> {
        for following in self.get_followings()? {
            let journal = following?.journal;
            if journal.id == journal_id {
                return Ok(journal);
            }
        }
        Err(TinybeansError::NotFound(format!("journal {}", journal_id)))
    }

    /// Look up a child across all followed journals
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no followed journal has that child.
    pub fn find_child(&self, child_id: i64) -> Result<Child> {
        self.children()?
            .into_iter()
            .find(|child| child.id == child_id)
            .ok_or_else(|| TinybeansError::NotFound(format!("child {}", child_id)))
    }
}

/// Iterator over followings returned by `get_followings`
#[derive(Debug)]
pub struct Followings {
    items: std::vec::IntoIter<Value>,
}

impl Iterator for Followings {
    type Item = Result<Following>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|item| Following::from_json(&item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}
