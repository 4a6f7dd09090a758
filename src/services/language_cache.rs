// ============================================================================
// LANGUAGE CACHE - Persistencia de idioma actual y bundles de traducción
// ============================================================================
// Claves: `currentLang`, `langData-<code>`, `langData-version`.
// Sin TTL: un bundle cacheado se sirve hasta que cambie la versión.
// ============================================================================

use crate::models::{Language, LocalizationError, TranslationBundle};
use crate::services::storage_service::KeyValueStore;
use crate::utils::constants::{CURRENT_LANG_KEY, LANG_CACHE_VERSION_KEY, LANG_DATA_KEY_PREFIX};

pub fn bundle_key(code: &str) -> String {
    format!("{}{}", LANG_DATA_KEY_PREFIX, code)
}

pub struct LanguageCache<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LanguageCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn current_language(&self) -> Option<String> {
        self.store
            .get(CURRENT_LANG_KEY)
            .filter(|code| !code.is_empty())
    }

    pub fn set_current_language(&self, code: &str) -> Result<(), LocalizationError> {
        self.store
            .set(CURRENT_LANG_KEY, code)
            .map_err(LocalizationError::Storage)
    }

    /// Bundle cacheado. Una entrada ilegible cuenta como ausente.
    pub fn load(&self, code: &str) -> Option<TranslationBundle> {
        let json = self.store.get(&bundle_key(code))?;
        match serde_json::from_str(&json) {
            Ok(bundle) => Some(bundle),
            Err(e) => {
                log::warn!("⚠️ [I18N] Caché ilegible para '{}', se descartará: {}", code, e);
                None
            }
        }
    }

    pub fn save(&self, code: &str, bundle: &TranslationBundle) -> Result<(), LocalizationError> {
        let json =
            serde_json::to_string(bundle).map_err(|e| LocalizationError::Parse(e.to_string()))?;
        self.store
            .set(&bundle_key(code), &json)
            .map_err(LocalizationError::Storage)
    }

    /// Si la versión guardada no coincide con `version`, borra los bundles de
    /// los idiomas conocidos y guarda la nueva versión. Devuelve cuántos borró.
    pub fn reconcile_version(&self, version: &str) -> Result<usize, LocalizationError> {
        if self.store.get(LANG_CACHE_VERSION_KEY).as_deref() == Some(version) {
            return Ok(0);
        }

        let mut purged = 0;
        for language in Language::ALL {
            let key = bundle_key(language.code());
            if self.store.get(&key).is_some() {
                self.store.remove(&key).map_err(LocalizationError::Storage)?;
                purged += 1;
            }
        }

        self.store
            .set(LANG_CACHE_VERSION_KEY, version)
            .map_err(LocalizationError::Storage)?;
        log::info!("🗑️ [I18N] Versión de caché {} ({} bundles descartados)", version, purged);
        Ok(purged)
    }
}
