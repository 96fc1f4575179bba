//! Browser sessions, each owning one ledger
//!
//! Sessions live only in memory. A session is created when a browser without
//! a known id records or resets something, and is discarded after it has been
//! idle longer than the configured timeout or evicted when the store is full.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tallyweb_config::{Config, LedgerMode};
use tallyweb_utils::generate_id;

use crate::ledger::Ledger;

/// One browser's state
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub ledger: Ledger,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    fn new(id: String, mode: LedgerMode, now: DateTime<Utc>) -> Self {
        Self {
            id,
            ledger: Ledger::new(mode),
            created_at: now,
            last_seen: now,
        }
    }
}

/// All live sessions, keyed by session id
#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
    mode: LedgerMode,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(mode: LedgerMode, idle_timeout: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            mode,
            idle_timeout,
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.ledger.mode,
            Duration::minutes(config.session.idle_timeout_minutes.min(i64::MAX as u64 / 60_000) as i64),
            config.session.max_sessions,
        )
    }

    /// Look up the session for `id`, creating a new one if it is unknown.
    pub fn session(&mut self, id: Option<&str>) -> &mut Session {
        self.session_at(id, Utc::now())
    }

    /// Same as [`SessionStore::session`] with an explicit clock
    pub fn session_at(&mut self, id: Option<&str>, now: DateTime<Utc>) -> &mut Session {
        self.prune_idle(now);

        // Unknown ids are never adopted; the browser gets a fresh one instead.
        let key = match id {
            Some(id) if self.sessions.contains_key(id) => id.to_string(),
            _ => {
                self.make_room();
                generate_id()
            }
        };

        let mode = self.mode;
        let session = self.sessions.entry(key.clone()).or_insert_with(|| {
            log::info!(target: "tallyweb::session", "Session created: {}", short_id(&key));
            Session::new(key.clone(), mode, now)
        });
        session.last_seen = now;
        session
    }

    /// Look up a live session without ever creating one.
    ///
    /// Refreshes the idle timer of the session it finds.
    pub fn existing(&mut self, id: Option<&str>) -> Option<&mut Session> {
        self.existing_at(id, Utc::now())
    }

    /// Same as [`SessionStore::existing`] with an explicit clock
    pub fn existing_at(&mut self, id: Option<&str>, now: DateTime<Utc>) -> Option<&mut Session> {
        self.prune_idle(now);
        let session = self.sessions.get_mut(id?)?;
        session.last_seen = now;
        Some(session)
    }

    /// Read-only lookup that does not refresh the idle timer
    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    /// Throw away a session's ledger and start again with an empty one.
    ///
    /// A browser whose session is unknown or has expired gets a new session.
    pub fn reset(&mut self, id: Option<&str>) -> &mut Session {
        let mode = self.mode;
        let session = self.session(id);
        session.ledger = Ledger::new(mode);
        log::info!(target: "tallyweb::session", "Session reset: {}", short_id(&session.id));
        session
    }

    /// Drop sessions idle for longer than the timeout; returns how many went
    pub fn prune_idle(&mut self, now: DateTime<Utc>) -> usize {
        let timeout = self.idle_timeout;
        let before = self.sessions.len();
        self.sessions.retain(|id, session| {
            let keep = now - session.last_seen <= timeout;
            if !keep {
                log::info!(target: "tallyweb::session", "Session expired: {}", short_id(id));
            }
            keep
        });
        before - self.sessions.len()
    }

    /// Evict least recently seen sessions until one more fits
    fn make_room(&mut self) {
        while self.sessions.len() >= self.max_sessions {
            let oldest = self
                .sessions
                .values()
                .min_by_key(|session| session.last_seen)
                .map(|session| session.id.clone());
            match oldest {
                Some(id) => {
                    self.sessions.remove(&id);
                    log::info!(target: "tallyweb::session", "Session evicted: {}", short_id(&id));
                }
                None => break,
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn mode(&self) -> LedgerMode {
        self.mode
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }
}

/// Enough of an id to correlate log lines without printing the whole token
fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((pos, _)) => &id[..pos],
        None => id,
    }
}
