// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO interpreta respuestas de carga: devuelve Content-Type + bytes y la
// clasificación se hace en models::upload
// ============================================================================

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};
use crate::models::{FormPart, LanguageData, LocalizationError, RawResponse, UploadError, UploadForm};
use crate::utils::constants::{language_data_url, upload_url};

/// Origen del documento lang.json
pub trait LanguageSource {
    async fn fetch_language_data(&self) -> Result<LanguageData, LocalizationError>;
}

/// Envío del formulario de carga
pub trait UploadTransport {
    async fn upload(&self, form: &UploadForm, file: Option<File>) -> Result<RawResponse, UploadError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    upload_url: String,
    language_data_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            upload_url: upload_url(),
            language_data_url: language_data_url(),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageSource for ApiClient {
    async fn fetch_language_data(&self) -> Result<LanguageData, LocalizationError> {
        log::info!("🌐 [I18N] Descargando {}", self.language_data_url);

        let response = Request::get(&self.language_data_url)
            .send()
            .await
            .map_err(|e| LocalizationError::Fetch(e.to_string()))?;

        if !response.ok() {
            return Err(LocalizationError::Fetch(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<LanguageData>()
            .await
            .map_err(|e| LocalizationError::Parse(e.to_string()))
    }
}

impl UploadTransport for ApiClient {
    async fn upload(&self, form: &UploadForm, file: Option<File>) -> Result<RawResponse, UploadError> {
        let body = build_form_data(form, file.as_ref())
            .map_err(|e| UploadError::Transport(format!("Request build error: {:?}", e)))?;

        log::info!(
            "📤 [UPLOAD] Enviando {} ({})",
            form.file_name.as_deref().unwrap_or("sin fichero"),
            form.execution_date
        );

        // Sin reintentos ni timeout propio: el navegador decide
        let response = Request::post(&self.upload_url)
            .body(body)
            .map_err(|e| UploadError::Transport(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| UploadError::Transport(format!("Network error: {}", e)))?;

        let content_type = response.headers().get("content-type");
        let body = response
            .binary()
            .await
            .map_err(|e| UploadError::Transport(format!("Read error: {}", e)))?;

        log::info!(
            "📥 [UPLOAD] HTTP {} ({}, {} bytes)",
            response.status(),
            content_type.as_deref().unwrap_or("sin Content-Type"),
            body.len()
        );

        Ok(RawResponse { content_type, body })
    }
}

/// Multipart con `executionDate`, `iban`, `companyName` y `file` (si hay)
fn build_form_data(form: &UploadForm, file: Option<&File>) -> Result<FormData, JsValue> {
    let data = FormData::new()?;
    for (name, part) in form.multipart_parts(file) {
        match part {
            FormPart::Text(value) => data.append_with_str(name, value)?,
            FormPart::File(file) => data.append_with_blob(name, file)?,
        }
    }
    Ok(data)
}
