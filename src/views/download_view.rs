// ============================================================================
// DOWNLOAD VIEW - Guardar bytes como fichero desde el navegador
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};
use crate::dom::{append_child, body, create_element};

pub trait ArtifactSaver {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<(), String>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownloader;

impl BrowserDownloader {
    fn trigger(bytes: &[u8], filename: &str) -> Result<(), JsValue> {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let blob = Blob::new_with_u8_array_sequence(&parts)?;
        let url = Url::create_object_url_with_blob(&blob)?;

        let clicked = Self::click_anchor(&url, filename);
        // Liberar el object URL pase lo que pase
        Url::revoke_object_url(&url)?;
        clicked
    }

    fn click_anchor(url: &str, filename: &str) -> Result<(), JsValue> {
        let anchor = create_element("a")?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| JsValue::from_str("<a> is not an HtmlAnchorElement"))?;
        anchor.set_href(url);
        anchor.set_download(filename);

        let body = body()?;
        append_child(&body, &anchor)?;
        anchor.click();
        anchor.remove();
        Ok(())
    }
}

impl ArtifactSaver for BrowserDownloader {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<(), String> {
        Self::trigger(bytes, filename).map_err(|e| {
            e.as_string()
                .unwrap_or_else(|| format!("Download error: {:?}", e))
        })?;
        log::info!("💾 [UPLOAD] Descarga iniciada: {} ({} bytes)", filename, bytes.len());
        Ok(())
    }
}
