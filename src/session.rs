
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::storage::{Storage, StorageError};

pub const SESSION_KEY: &str = "session";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Could not access session storage: {0}")]
    Storage(#[from] StorageError),
    #[error("Could not serialise session: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Who's using the app, as far as the core is concerned: signed in or not
pub trait SessionHandling {
    fn is_signed_in(&self) -> bool;
}

#[derive(Debug, Deserialize, Serialize)]
struct SessionRecord {
    signed_in_at: DateTime<Utc>,
}

/// A session whose signed-in status lives in a storage slot
pub struct LocalSession<S: Storage> {
    storage: S,
    signed_in_at: Option<DateTime<Utc>>,
}

impl<S: Storage> LocalSession<S> {
    pub fn load(storage: S) -> Result<LocalSession<S>> {
        let signed_in_at = match storage.get(SESSION_KEY)? {
            None => None,
            Some(raw) => match serde_json::from_str::<SessionRecord>(&raw) {
                Ok(record) => Some(record.signed_in_at),
                Err(e) => {
                    warn!(error = %e, "Ignoring malformed session in storage; treating as signed out");
                    None
                }
            },
        };

        Ok(LocalSession { storage, signed_in_at })
    }

    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.signed_in_at
    }

    pub fn sign_in(&mut self, now: DateTime<Utc>) -> Result<()> {
        let raw = serde_json::to_string(&SessionRecord { signed_in_at: now })?;
        self.storage.set(SESSION_KEY, &raw)?;
        self.signed_in_at = Some(now);
        info!("Signed in");
        Ok(())
    }

    pub fn sign_out(&mut self) -> Result<()> {
        self.storage.remove(SESSION_KEY)?;
        self.signed_in_at = None;
        info!("Signed out");
        Ok(())
    }
}

impl<S: Storage> SessionHandling for LocalSession<S> {
    fn is_signed_in(&self) -> bool {
        self.signed_in_at.is_some()
    }
}
