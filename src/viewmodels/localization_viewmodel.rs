// ============================================================================
// LOCALIZATION VIEWMODEL - Idioma activo + caché de traducciones
// ============================================================================
// Caché primero: un bundle cacheado se aplica sin tocar la red, aunque esté
// desactualizado. Los fallos se registran y la página sigue como estaba.
// ============================================================================

use crate::models::{Language, LocalizationError, TranslationBundle};
use crate::services::{KeyValueStore, LanguageCache, LanguageSource};
use crate::state::AppState;
use crate::utils::constants::{DEFAULT_LANGUAGE, LANG_CACHE_VERSION};
use crate::views::LocalizationView;

pub struct LocalizationViewModel<S, F, V>
where
    S: KeyValueStore,
    F: LanguageSource,
    V: LocalizationView,
{
    cache: LanguageCache<S>,
    source: F,
    view: V,
    state: AppState,
    cache_version: String,
}

impl<S, F, V> LocalizationViewModel<S, F, V>
where
    S: KeyValueStore,
    F: LanguageSource,
    V: LocalizationView,
{
    pub fn new(store: S, source: F, view: V, state: AppState) -> Self {
        Self {
            cache: LanguageCache::new(store),
            source,
            view,
            state,
            cache_version: LANG_CACHE_VERSION.to_string(),
        }
    }

    /// Sustituir la versión de caché configurada en compilación
    #[cfg(test)]
    pub fn with_cache_version(mut self, version: &str) -> Self {
        self.cache_version = version.to_string();
        self
    }

    /// Arranque: idioma persistido (o `bg`), versión de caché, selector, bandera
    pub async fn initialize(&self) {
        if let Err(e) = self.cache.reconcile_version(&self.cache_version) {
            log::error!("❌ [I18N] No se pudo verificar la versión de caché: {}", e);
        }

        let code = self
            .cache
            .current_language()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        log::info!("🌐 [I18N] Idioma inicial: {}", code);

        self.view.select_language(&code);
        self.show_flag(&code);
        self.activate(&code).await;
    }

    /// Cambio de idioma desde el selector
    pub async fn on_language_changed(&self, code: &str) {
        if let Err(e) = self.cache.set_current_language(code) {
            log::error!("❌ [I18N] No se pudo guardar el idioma: {}", e);
        }
        self.show_flag(code);
        self.activate(code).await;
    }

    pub async fn activate(&self, code: &str) {
        self.state.set_language(code);

        if let Some(bundle) = self.cache.load(code) {
            log::info!("💾 [I18N] Usando traducciones cacheadas ({})", code);
            self.apply(&bundle);
            return;
        }

        log::info!("🌐 [I18N] Descargando traducciones ({})", code);
        match self.fetch_and_cache(code).await {
            // Otro idioma pudo activarse mientras se descargaba
            Ok(_) if self.state.language() != code => {
                log::info!("⏭️ [I18N] '{}' llegó tarde, activo: {}", code, self.state.language());
            }
            Ok(bundle) => self.apply(&bundle),
            Err(e) => log::error!("❌ [I18N] No se pudo cargar el idioma '{}': {}", code, e),
        }
    }

    async fn fetch_and_cache(&self, code: &str) -> Result<TranslationBundle, LocalizationError> {
        let data = self.source.fetch_language_data().await?;
        let bundle = data.bundle_for(code)?;
        if let Err(e) = self.cache.save(code, &bundle) {
            // Sin caché se sigue aplicando: solo se volverá a descargar
            log::warn!("⚠️ [I18N] No se pudo cachear '{}': {}", code, e);
        }
        Ok(bundle)
    }

    pub fn apply(&self, bundle: &TranslationBundle) {
        self.view.apply_texts(bundle);
        self.state.apply_bundle_templates(bundle);
    }

    fn show_flag(&self, code: &str) {
        match Language::from_code(code) {
            Some(language) => self.view.show_flag(language),
            None => log::warn!("⚠️ [I18N] Sin bandera para '{}'", code),
        }
    }
}
