use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::errors::CoreError;
use crate::models::auth::TokenPair;

use super::{format, lock};

/// Durable storage for the session's token pair.
///
/// The pair is the only shared mutable resource of the client: it is read
/// before every request and written only by login, refresh and logout.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<TokenPair>, CoreError>;
    fn save(&self, tokens: &TokenPair) -> Result<(), CoreError>;
    fn clear(&self) -> Result<(), CoreError>;
}

/// Process-local store; the session ends with the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(tokens: TokenPair) -> Self {
        Self {
            tokens: Mutex::new(Some(tokens)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<TokenPair>, CoreError> {
        Ok(lock(&self.tokens).clone())
    }

    fn save(&self, tokens: &TokenPair) -> Result<(), CoreError> {
        *lock(&self.tokens) = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        *lock(&self.tokens) = None;
        Ok(())
    }
}

/// Tokens persisted to a JSON file so a session survives restarts.
/// A missing file means "not logged in".
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<TokenPair>, CoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => format::read_file(&bytes).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, tokens: &TokenPair) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = format::write_file(tokens)?;
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, bytes)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Owner-only before the file takes its final name.
            std::fs::set_permissions(&temp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Handle on the current session, injected into every HTTP client.
///
/// Cloning is cheap; all clones share one store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// Stored pair. An unreadable store counts as no session.
    pub fn tokens(&self) -> Option<TokenPair> {
        match self.store.load() {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::warn!("could not read stored session: {e}");
                None
            }
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.tokens().map(|t| t.access).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.tokens().map(|t| t.refresh).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn store_tokens(&self, tokens: &TokenPair) -> Result<(), CoreError> {
        self.store.save(tokens)
    }

    /// Replace the access token, keeping the stored refresh token unless a
    /// rotated one is given.
    pub fn update_access_token(&self, access: &str, rotated_refresh: Option<&str>) -> Result<(), CoreError> {
        let refresh = rotated_refresh
            .map(str::to_string)
            .or_else(|| self.refresh_token())
            .unwrap_or_default();
        self.store.save(&TokenPair::new(access, refresh))
    }

    pub fn clear(&self) -> Result<(), CoreError> {
        self.store.clear()
    }
}
