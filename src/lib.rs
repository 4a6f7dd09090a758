// ============================================================================
// MASSPAY WEB - CLIENTE DE CARGA (RUST PURO + WASM)
// ============================================================================
// Arquitectura:
// - Views: lectura/escritura del DOM (sin lógica)
// - ViewModels: localización (caché de traducciones) y carga (estado)
// - Services: SOLO HTTP y almacenamiento
// - State: AppState con Rc<RefCell>
// - Models: formulario, respuestas, traducciones, mensaje de estado
// ============================================================================

mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use std::cell::RefCell;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🚀 MassPay Web - Rust Puro");

    let app = App::new()?;
    app.start()?;
    log::info!("✅ [APP] Iniciada (idioma por defecto: {})", app.state().language());

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}
