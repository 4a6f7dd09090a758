// ============================================================================
// APP - Conecta viewmodels, vistas y eventos del documento
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use crate::dom::{get_element_by_id, on_change, on_click, query_selector};
use crate::services::{ApiClient, BrowserStore};
use crate::state::AppState;
use crate::utils::constants::{LANGUAGE_SELECT_ID, RESPONSE_MESSAGE_ID, SUBMIT_BUTTON_SELECTOR};
use crate::utils::TimeoutScheduler;
use crate::viewmodels::{LocalizationViewModel, UploadViewModel};
use crate::views::{read_upload_form, BrowserDownloader, DomLocalizationView, DomStatusView};

type Localization = LocalizationViewModel<BrowserStore, ApiClient, DomLocalizationView>;
type Upload = UploadViewModel<ApiClient, TimeoutScheduler, DomStatusView, BrowserDownloader>;

/// Aplicación principal
pub struct App {
    state: AppState,
    localization: Rc<Localization>,
    upload: Rc<Upload>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let status_element = get_element_by_id(RESPONSE_MESSAGE_ID)
            .ok_or_else(|| JsValue::from_str("No #response-message element found"))?;

        let state = AppState::new();
        let api = ApiClient::new();

        let localization = LocalizationViewModel::new(
            BrowserStore::new(),
            api.clone(),
            DomLocalizationView,
            state.clone(),
        );
        let upload = UploadViewModel::new(
            api,
            TimeoutScheduler,
            DomStatusView::new(status_element),
            BrowserDownloader,
            state.clone(),
        );

        Ok(Self {
            state,
            localization: Rc::new(localization),
            upload: Rc::new(upload),
        })
    }

    /// Registrar listeners (una sola vez) y cargar el idioma inicial
    pub fn start(&self) -> Result<(), JsValue> {
        self.bind_language_select()?;
        self.bind_submit_button()?;

        let localization = self.localization.clone();
        wasm_bindgen_futures::spawn_local(async move {
            localization.initialize().await;
        });
        Ok(())
    }

    fn bind_language_select(&self) -> Result<(), JsValue> {
        let Some(select) = get_element_by_id(LANGUAGE_SELECT_ID) else {
            log::warn!("⚠️ [APP] #{} no encontrado, sin cambio de idioma", LANGUAGE_SELECT_ID);
            return Ok(());
        };

        let localization = self.localization.clone();
        on_change(&select, move |event: web_sys::Event| {
            let Some(code) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
                .map(|s| s.value())
            else {
                return;
            };
            log::info!("🌐 [APP] Idioma seleccionado: {}", code);
            let localization = localization.clone();
            wasm_bindgen_futures::spawn_local(async move {
                localization.on_language_changed(&code).await;
            });
        })
    }

    fn bind_submit_button(&self) -> Result<(), JsValue> {
        let button = query_selector(SUBMIT_BUTTON_SELECTOR)?
            .ok_or_else(|| JsValue::from_str("No upload button found"))?;

        let upload = self.upload.clone();
        on_click(&button, move |event: web_sys::MouseEvent| {
            // El botón puede estar dentro de un <form>: sin navegación
            event.prevent_default();
            match read_upload_form() {
                Ok((form, file)) => {
                    let upload = upload.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        upload.submit(form, file).await;
                    });
                }
                Err(e) => log::error!("❌ [APP] No se pudo leer el formulario: {:?}", e),
            }
        })
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
