// src/auth/store.rs

use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a signup attempt. Validation of empty fields happens in
/// the form layer; the store only rules on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    Created,
    DuplicateUsername,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    UnknownUser,
    WrongPassword,
}

#[derive(Debug)]
pub enum StoreError {
    Db(rusqlite::Error),
    Hash(bcrypt::BcryptError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Db(e) => write!(f, "database error: {}", e),
            StoreError::Hash(e) => write!(f, "password hashing error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Db(e)
    }
}

impl From<bcrypt::BcryptError> for StoreError {
    fn from(e: bcrypt::BcryptError) -> Self {
        StoreError::Hash(e)
    }
}

/// Local credential table: username -> bcrypt hash. Accessed only from
/// the UI thread, single-statement commits.
pub struct UserStore {
    conn: Connection,
}

impl UserStore {
    /// Opens (creating if needed) the store at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                username TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Standard OS location of the credential database
    /// (e.g., ~/.local/share/elemental/users.db)
    pub fn default_path() -> PathBuf {
        if let Some(proj) = ProjectDirs::from("com", "example", "elemental") {
            proj.data_dir().join("users.db")
        } else {
            PathBuf::from("users.db")
        }
    }

    pub fn signup(&self, username: &str, password: &str) -> Result<SignupOutcome, StoreError> {
        if self.stored_hash(username)?.is_some() {
            return Ok(SignupOutcome::DuplicateUsername);
        }

        let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
        self.conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            params![username, hash],
        )?;
        log::info!("Registered user '{}'", username);
        Ok(SignupOutcome::Created)
    }

    pub fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, StoreError> {
        let Some(hash) = self.stored_hash(username)? else {
            return Ok(LoginOutcome::UnknownUser);
        };

        if bcrypt::verify(password, &hash)? {
            Ok(LoginOutcome::Success)
        } else {
            Ok(LoginOutcome::WrongPassword)
        }
    }

    fn stored_hash(&self, username: &str) -> Result<Option<String>, StoreError> {
        let hash = self
            .conn
            .query_row(
                "SELECT password FROM users WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()?;
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_then_login() {
        let store = UserStore::open_in_memory().unwrap();
        assert_eq!(store.signup("alice", "hunter2").unwrap(), SignupOutcome::Created);
        assert_eq!(store.login("alice", "hunter2").unwrap(), LoginOutcome::Success);
    }

    #[test]
    fn test_duplicate_signup_keeps_original_hash() {
        let store = UserStore::open_in_memory().unwrap();
        store.signup("alice", "first").unwrap();
        let original = store.stored_hash("alice").unwrap().unwrap();

        assert_eq!(
            store.signup("alice", "second").unwrap(),
            SignupOutcome::DuplicateUsername
        );
        assert_eq!(store.stored_hash("alice").unwrap().unwrap(), original);

        // The first password still logs in, the rejected one does not
        assert_eq!(store.login("alice", "first").unwrap(), LoginOutcome::Success);
        assert_eq!(store.login("alice", "second").unwrap(), LoginOutcome::WrongPassword);
    }

    #[test]
    fn test_login_is_idempotent() {
        let store = UserStore::open_in_memory().unwrap();
        store.signup("bob", "pw").unwrap();
        for _ in 0..3 {
            assert_eq!(store.login("bob", "pw").unwrap(), LoginOutcome::Success);
        }
    }

    #[test]
    fn test_wrong_password_is_not_unknown_user() {
        let store = UserStore::open_in_memory().unwrap();
        store.signup("carol", "right").unwrap();

        assert_eq!(store.login("carol", "wrong").unwrap(), LoginOutcome::WrongPassword);
        assert_eq!(store.login("nobody", "right").unwrap(), LoginOutcome::UnknownUser);
    }

    #[test]
    fn test_hash_is_salted() {
        let store = UserStore::open_in_memory().unwrap();
        store.signup("dave", "same").unwrap();
        store.signup("erin", "same").unwrap();

        let a = store.stored_hash("dave").unwrap().unwrap();
        let b = store.stored_hash("erin").unwrap().unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$2"));
    }
}
