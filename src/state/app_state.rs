// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Creado al arrancar. El idioma y las plantillas solo los escribe la
// localización; la carga solo los lee.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{MessageTemplates, TranslationBundle};
use crate::utils::constants::DEFAULT_LANGUAGE;

#[derive(Clone)]
pub struct AppState {
    language: Rc<RefCell<String>>,
    templates: Rc<RefCell<MessageTemplates>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            language: Rc::new(RefCell::new(DEFAULT_LANGUAGE.to_string())),
            templates: Rc::new(RefCell::new(MessageTemplates::default())),
        }
    }

    pub fn language(&self) -> String {
        self.language.borrow().clone()
    }

    pub fn set_language(&self, code: &str) {
        *self.language.borrow_mut() = code.to_string();
    }

    /// Copia de las plantillas actuales (vacías hasta el primer bundle)
    pub fn templates(&self) -> MessageTemplates {
        self.templates.borrow().clone()
    }

    pub fn apply_bundle_templates(&self, bundle: &TranslationBundle) {
        *self.templates.borrow_mut() = MessageTemplates::from_bundle(bundle);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
