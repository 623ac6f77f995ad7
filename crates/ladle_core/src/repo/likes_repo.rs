//! Liked-set repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the full liked-recipes set as one namespaced payload.
//! - Keep SQL and serialization details inside the core persistence
//!   boundary.
//!
//! # Invariants
//! - The whole set is written in a single statement per mutation;
//!   concurrent writers resolve as last-write-wins.
//! - `load_likes` distinguishes "nothing persisted yet" (empty set) from
//!   malformed payloads (`InvalidData`).

use crate::db::DbError;
use crate::model::likes::LikedRecipe;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage namespace of the serialized liked-recipes set.
pub const LIKES_NAMESPACE: &str = "likes.v1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for liked-set persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted likes data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for liked-set persistence.
pub trait LikesRepository {
    /// Loads the persisted set. An absent entry is an empty set.
    fn load_likes(&self) -> RepoResult<Vec<LikedRecipe>>;
    /// Replaces the persisted set wholesale.
    fn save_likes(&self, likes: &[LikedRecipe]) -> RepoResult<()>;
}

/// SQLite-backed liked-set repository.
///
/// Owns its connection: the liked set outlives any single call and the
/// repository is held by long-lived app state.
pub struct SqliteLikesRepository {
    conn: Connection,
}

impl SqliteLikesRepository {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl LikesRepository for SqliteLikesRepository {
    fn load_likes(&self) -> RepoResult<Vec<LikedRecipe>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM kv_entries WHERE namespace = ?1;",
                params![LIKES_NAMESPACE],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(payload) => serde_json::from_str(&payload).map_err(|err| {
                RepoError::InvalidData(format!("likes payload does not deserialize: {err}"))
            }),
            None => Ok(Vec::new()),
        }
    }

    fn save_likes(&self, likes: &[LikedRecipe]) -> RepoResult<()> {
        let payload = serde_json::to_string(likes).map_err(|err| {
            RepoError::InvalidData(format!("likes payload does not serialize: {err}"))
        })?;

        self.conn.execute(
            "INSERT INTO kv_entries (namespace, payload, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(namespace) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![LIKES_NAMESPACE, payload],
        )?;

        Ok(())
    }
}
