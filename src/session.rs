//! # Session Module
//!
//! Server-side session state bound to the browser through a signed cookie.
//!
//! ## Overview
//!
//! Handlers never touch a global map. They receive a [`SessionStore`] trait
//! object through the application state and address it by session id:
//!
//! - [`SessionStore::get`] - look a session up, `None` when unknown or expired
//! - [`SessionStore::set`] - create or replace a session
//! - [`SessionStore::destroy`] - drop a session
//! - [`SessionStore::len`] - count live sessions, reported by `/health`
//!
//! [`MemorySessionStore`] is the store the server runs with. Sessions live
//! only as long as the process, so a restart signs every player out.
//!
//! ## Cookie
//!
//! The browser holds nothing but an opaque id in the `lyricquiz.sid` cookie.
//! The cookie is signed, so ids cannot be forged or guessed into existence,
//! and it carries no `Max-Age`, ending with the browser session. Expiry on
//! the server side is an idle timeout refreshed on every read.
//!
//! ## Concurrency
//!
//! Each id is only used by the requests of one browser. Two parallel
//! requests of the same browser may overwrite each other's write; the last
//! writer wins.

use std::collections::HashMap;

use async_trait::async_trait;
use axum_extra::extract::{
    SignedCookieJar,
    cookie::{Cookie, SameSite},
};
use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::Mutex;

use crate::{types::Session, utils};

pub const SESSION_COOKIE_NAME: &str = "lyricquiz.sid";

/// Key-value store of sessions addressed by id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, id: &str) -> Option<Session>;

    async fn set(&self, id: &str, session: Session);

    async fn destroy(&self, id: &str);

    /// Number of live sessions.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

struct StoredSession {
    session: Session,
    last_seen: DateTime<Utc>,
}

/// In-process session store with an optional idle timeout.
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, StoredSession>>,
    ttl: Option<TimeDelta>,
}

impl MemorySessionStore {
    /// Creates a store whose sessions never expire.
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl: None,
        }
    }

    /// Creates a store that forgets sessions idle for `ttl` or longer.
    pub fn with_ttl(ttl: TimeDelta) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl: Some(ttl),
        }
    }

    /// Creates a store from the `SESSION_TTL_SECS` setting.
    ///
    /// `None` disables expiry. Out-of-range values are rejected while the
    /// settings are parsed.
    pub fn from_ttl_secs(ttl_secs: Option<i64>) -> Self {
        match ttl_secs.and_then(TimeDelta::try_seconds) {
            Some(ttl) => Self::with_ttl(ttl),
            None => Self::new(),
        }
    }

    fn is_expired(&self, stored: &StoredSession, now: DateTime<Utc>) -> bool {
        match self.ttl {
            Some(ttl) => now - stored.last_seen >= ttl,
            None => false,
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: &str) -> Option<Session> {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().await;

        let expired = match sessions.get(id) {
            Some(stored) => self.is_expired(stored, now),
            None => return None,
        };
        if expired {
            sessions.remove(id);
            return None;
        }

        let stored = sessions.get_mut(id)?;
        stored.last_seen = now;
        Some(stored.session.clone())
    }

    async fn set(&self, id: &str, session: Session) {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().await;

        // Writes are rare (login, artist refresh), a good moment to sweep.
        if let Some(ttl) = self.ttl {
            sessions.retain(|_, stored| now - stored.last_seen < ttl);
        }

        sessions.insert(
            id.to_string(),
            StoredSession {
                session,
                last_seen: now,
            },
        );
    }

    async fn destroy(&self, id: &str) {
        self.sessions.lock().await.remove(id);
    }

    async fn len(&self) -> usize {
        let now = Utc::now();
        let sessions = self.sessions.lock().await;
        sessions
            .values()
            .filter(|stored| !self.is_expired(stored, now))
            .count()
    }
}

/// Reads the session id from the signed cookie, if the browser sent one.
pub fn session_id(jar: &SignedCookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|id| !id.is_empty())
}

/// Loads the browser's session, or an empty one when there is none.
pub async fn load(store: &dyn SessionStore, jar: &SignedCookieJar) -> Session {
    match session_id(jar) {
        Some(id) => store.get(&id).await.unwrap_or_default(),
        None => Session::default(),
    }
}

/// Stores `session` under the browser's id, minting a new id if needed.
///
/// Returns the jar with the session cookie set and the id used.
pub async fn save(
    store: &dyn SessionStore,
    jar: SignedCookieJar,
    session: Session,
    secure: bool,
) -> (SignedCookieJar, String) {
    let id = session_id(&jar).unwrap_or_else(utils::generate_session_id);
    store.set(&id, session).await;
    let jar = jar.add(session_cookie(&id, secure));
    (jar, id)
}

/// Builds the session cookie. No `Max-Age`: it ends with the browser session.
pub fn session_cookie(id: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, id.to_string()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}
