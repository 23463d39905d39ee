//! Account persistence and the authentication outcome boundary.
//!
//! `AccountStore` is the only seam the UI talks to for registration and
//! login. It never raises across the boundary: every code path resolves to
//! an [`AuthOutcome`] with a user-facing message. Underneath it sits the
//! [`AccountRecords`] seam — a durable record set keyed by normalized email
//! with a uniqueness constraint — implemented by [`FileAccountRecords`].

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// Error shown when registering an email that already has an account.
pub const MSG_DUPLICATE_EMAIL: &str = "User with this email already exists";

/// Error shown when the store failed to produce a valid identity.
pub const MSG_CREATE_FAILED: &str = "Could not create user";

/// Error shown for any credential mismatch on login.
///
/// Deliberately does not distinguish unknown email from wrong password.
pub const MSG_WRONG_CREDENTIALS: &str = "Wrong email or password";

/// Error shown when the login lookup itself faulted.
pub const MSG_LOGIN_FAILED: &str = "Could not sign in";

/// A persisted user identity.
///
/// The email is stored normalized (trimmed + lowercased) and is unique
/// across all accounts. The password is an opaque string stored verbatim;
/// hashing is out of scope for this application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// A candidate account prior to identity assignment.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Result of a register or login call.
///
/// Produced only by [`AccountStore`]; faults never cross this boundary as
/// errors or panics.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    Success(Account),
    Error(String),
}

impl AuthOutcome {
    /// Returns true for the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success(_))
    }
}

/// Why the record store rejected an insert.
///
/// The uniqueness violation is a dedicated variant so callers never have to
/// pattern-match on a generic fault to detect the duplicate-email path.
#[derive(Debug)]
pub enum InsertError {
    /// An account with the same normalized email already exists.
    Duplicate,
    /// Any other storage fault (I/O, corrupt records, ...).
    Storage(anyhow::Error),
}

impl std::fmt::Display for InsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsertError::Duplicate => write!(f, "duplicate email"),
            InsertError::Storage(err) => write!(f, "storage fault: {err}"),
        }
    }
}

impl std::error::Error for InsertError {}

/// Normalizes an email for storage and lookup: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Durable account record set with a uniqueness constraint on normalized
/// email.
///
/// `insert_unique` must be atomic with respect to concurrent registration
/// attempts for the same email: only one registrant may win.
pub trait AccountRecords {
    /// Inserts a candidate, assigning a fresh identity.
    ///
    /// The candidate's email is expected to be normalized already.
    async fn insert_unique(&self, candidate: NewAccount) -> Result<i64, InsertError>;

    /// Finds the account matching exact normalized email AND exact password.
    async fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<Account>>;
}

/// JSON-file-backed account records.
///
/// The whole record set lives in one file; a mutex makes the
/// check-then-insert sequence atomic within the process. Identities are
/// max(id)+1, mirroring an autoincrement column.
pub struct FileAccountRecords {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileAccountRecords {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<Vec<Account>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read accounts at {}", self.path.display()))?;
        let accounts: Vec<Account> = serde_json::from_str(&contents)
            .with_context(|| format!("Corrupt account records at {}", self.path.display()))?;
        Ok(accounts)
    }

    fn write_all(&self, accounts: &[Account]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents =
            serde_json::to_string_pretty(accounts).context("Failed to serialize accounts")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write accounts at {}", self.path.display()))?;
        Ok(())
    }
}

impl AccountRecords for FileAccountRecords {
    async fn insert_unique(&self, candidate: NewAccount) -> Result<i64, InsertError> {
        let _guard = self.lock.lock().await;

        let mut accounts = self.read_all().map_err(InsertError::Storage)?;
        if accounts.iter().any(|a| a.email == candidate.email) {
            return Err(InsertError::Duplicate);
        }

        let id = accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        accounts.push(Account {
            id,
            full_name: candidate.full_name,
            email: candidate.email,
            password: candidate.password,
        });
        self.write_all(&accounts).map_err(InsertError::Storage)?;
        Ok(id)
    }

    async fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<Account>> {
        let _guard = self.lock.lock().await;

        let accounts = self.read_all()?;
        Ok(accounts
            .into_iter()
            .find(|a| a.email == email && a.password == password))
    }
}

/// The persistence boundary for registration and login.
pub struct AccountStore<R> {
    records: R,
}

/// The store used by the application: file-backed records.
pub type FileAccountStore = AccountStore<FileAccountRecords>;

impl FileAccountStore {
    /// Opens the file-backed store at the given path.
    pub fn open(path: PathBuf) -> Self {
        AccountStore::new(FileAccountRecords::new(path))
    }
}

impl<R: AccountRecords> AccountStore<R> {
    pub fn new(records: R) -> Self {
        Self { records }
    }

    /// Registers a new account.
    ///
    /// Normalizes the email before persisting. A duplicate normalized email
    /// yields the duplicate-user error; any other store fault yields the
    /// generic create error.
    pub async fn register(&self, full_name: &str, email: &str, password: &str) -> AuthOutcome {
        let candidate = NewAccount {
            full_name: full_name.trim().to_string(),
            email: normalize_email(email),
            password: password.to_string(),
        };

        match self.records.insert_unique(candidate.clone()).await {
            Ok(id) if id > 0 => AuthOutcome::Success(Account {
                id,
                full_name: candidate.full_name,
                email: candidate.email,
                password: candidate.password,
            }),
            Ok(id) => {
                tracing::warn!(id, "account insert produced an invalid identity");
                AuthOutcome::Error(MSG_CREATE_FAILED.to_string())
            }
            Err(InsertError::Duplicate) => AuthOutcome::Error(MSG_DUPLICATE_EMAIL.to_string()),
            Err(InsertError::Storage(err)) => {
                tracing::warn!("account insert failed: {err:#}");
                AuthOutcome::Error(MSG_CREATE_FAILED.to_string())
            }
        }
    }

    /// Logs into an existing account.
    ///
    /// Normalizes the email, then matches exact email AND exact password.
    /// Any mismatch yields the same error so the response does not leak
    /// which part was wrong.
    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        let email = normalize_email(email);
        match self.records.find_by_credentials(&email, password).await {
            Ok(Some(account)) => AuthOutcome::Success(account),
            Ok(None) => AuthOutcome::Error(MSG_WRONG_CREDENTIALS.to_string()),
            Err(err) => {
                tracing::warn!("account lookup failed: {err:#}");
                AuthOutcome::Error(MSG_LOGIN_FAILED.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn store_in(dir: &std::path::Path) -> FileAccountStore {
        FileAccountStore::open(dir.join("accounts.json"))
    }

    #[tokio::test]
    async fn test_register_normalizes_email() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        let outcome = store.register("Ann", " Ann@Test.com ", "abcdef").await;
        match outcome {
            AuthOutcome::Success(account) => {
                assert_eq!(account.email, "ann@test.com");
                assert_eq!(account.full_name, "Ann");
                assert!(account.id > 0);
            }
            AuthOutcome::Error(msg) => panic!("expected success, got {msg}"),
        }
    }

    #[tokio::test]
    async fn test_register_duplicate_email_casing_variants() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        assert!(store.register("A", "A@X.com", "secret1").await.is_success());

        let outcome = store.register("B", "a@x.com ", "secret2").await;
        match outcome {
            AuthOutcome::Error(msg) => assert_eq!(msg, MSG_DUPLICATE_EMAIL),
            AuthOutcome::Success(_) => panic!("duplicate email must be rejected"),
        }
    }

    #[tokio::test]
    async fn test_login_requires_exact_credentials() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(
            store
                .register("User", "user@x.com", "secret")
                .await
                .is_success()
        );

        assert!(store.login("user@x.com", "secret").await.is_success());
        assert!(store.login("USER@X.COM  ", "secret").await.is_success());

        // Wrong password and unknown email produce the same message.
        for (email, password) in [("user@x.com", "wrong"), ("other@x.com", "secret")] {
            match store.login(email, password).await {
                AuthOutcome::Error(msg) => assert_eq!(msg, MSG_WRONG_CREDENTIALS),
                AuthOutcome::Success(_) => panic!("login must fail for {email}/{password}"),
            }
        }
    }

    #[tokio::test]
    async fn test_register_login_round_trip_same_identity() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        let registered = match store.register("Ann", " Ann@Test.com ", "abcdef").await {
            AuthOutcome::Success(account) => account,
            AuthOutcome::Error(msg) => panic!("register failed: {msg}"),
        };

        let logged_in = match store.login("ann@test.com", "abcdef").await {
            AuthOutcome::Success(account) => account,
            AuthOutcome::Error(msg) => panic!("login failed: {msg}"),
        };

        assert_eq!(registered.id, logged_in.id);
        assert_eq!(registered, logged_in);
    }

    #[tokio::test]
    async fn test_failed_logins_leave_records_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("accounts.json");
        let store = FileAccountStore::open(path.clone());

        assert!(store.register("A", "a@x.com", "secret").await.is_success());
        let before = std::fs::read_to_string(&path).unwrap();

        for _ in 0..2 {
            assert!(!store.login("a@x.com", "wrong").await.is_success());
        }

        let after = std::fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_identities_are_monotonic() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        let first = match store.register("A", "a@x.com", "secret1").await {
            AuthOutcome::Success(account) => account.id,
            AuthOutcome::Error(msg) => panic!("register failed: {msg}"),
        };
        let second = match store.register("B", "b@x.com", "secret2").await {
            AuthOutcome::Success(account) => account.id,
            AuthOutcome::Error(msg) => panic!("register failed: {msg}"),
        };
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_corrupt_records_surface_as_create_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("accounts.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileAccountStore::open(path);

        match store.register("A", "a@x.com", "secret").await {
            AuthOutcome::Error(msg) => assert_eq!(msg, MSG_CREATE_FAILED),
            AuthOutcome::Success(_) => panic!("corrupt store must not succeed"),
        }
    }
}
