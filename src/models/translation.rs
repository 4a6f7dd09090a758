// ============================================================================
// TRADUCCIONES - Bundle por idioma + plantillas de mensajes
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Separador que se agrega (una sola vez) al prefijo `processSuccess`
pub const PROCESS_SUCCESS_SEPARATOR: &str = ": ";

/// Textos visibles de la página para un idioma (una entrada de lang.json)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationBundle {
    pub title: String,
    pub upload_heading: String,
    pub execution_date_label: String,
    pub iban_label: String,
    pub company_name_label: String,
    pub select_file_label: String,
    pub upload_button: String,
    pub download_success: String,
    pub process_success: String,
}

/// Documento completo de lang.json: código de idioma → bundle
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct LanguageData(HashMap<String, serde_json::Value>);

impl LanguageData {
    /// Extraer el bundle de un idioma sin exigir que los demás sean válidos
    pub fn bundle_for(&self, code: &str) -> Result<TranslationBundle, LocalizationError> {
        let raw = self
            .0
            .get(code)
            .ok_or_else(|| LocalizationError::MissingLanguage(code.to_string()))?;
        serde_json::from_value(raw.clone()).map_err(|e| LocalizationError::Parse(e.to_string()))
    }
}

/// Plantillas que usa el controlador de carga para los mensajes de éxito
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageTemplates {
    pub download_success: String,
    pub process_success: String,
}

impl MessageTemplates {
    pub fn from_bundle(bundle: &TranslationBundle) -> Self {
        Self {
            download_success: bundle.download_success.clone(),
            process_success: format!("{}{}", bundle.process_success, PROCESS_SUCCESS_SEPARATOR),
        }
    }
}

/// Fallos de localización: nunca bloquean el formulario, solo se registran
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocalizationError {
    #[error("Network error: {0}")]
    Fetch(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Language '{0}' not found in language data")]
    MissingLanguage(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
