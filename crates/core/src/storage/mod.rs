pub mod cache;
pub mod filter_store;
pub mod format;
pub mod session;

pub use cache::{QueryCache, ResourceTag, Tag, TagId};
pub use filter_store::FilterStore;
pub use session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};

/// Lock a std mutex, recovering the data if a holder panicked.
pub(crate) fn lock<T>(m: &std::sync::Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
