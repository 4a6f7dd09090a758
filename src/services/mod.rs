pub mod api_client;
pub mod language_cache;
pub mod storage_service;

pub use api_client::{ApiClient, LanguageSource, UploadTransport};
pub use language_cache::LanguageCache;
pub use storage_service::{BrowserStore, KeyValueStore};
