// ============================================================================
// STATUS VIEW - Región #response-message
// ============================================================================

use web_sys::Element;
use crate::dom::{add_class, remove_class, set_text_content};
use crate::models::StatusMessage;
use crate::utils::constants::{ERROR_CLASS, SUCCESS_CLASS};

pub trait StatusSink {
    fn render(&self, status: &StatusMessage);
}

pub struct DomStatusView {
    element: Element,
}

impl DomStatusView {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl StatusSink for DomStatusView {
    fn render(&self, status: &StatusMessage) {
        // Quitar siempre la decoración previa antes de aplicar la nueva
        for class in [SUCCESS_CLASS, ERROR_CLASS] {
            if let Err(e) = remove_class(&self.element, class) {
                log::error!("❌ [STATUS] Error quitando clase {}: {:?}", class, e);
            }
        }

        set_text_content(&self.element, status.text());

        if let Some(class) = status.decoration() {
            if let Err(e) = add_class(&self.element, class) {
                log::error!("❌ [STATUS] Error agregando clase {}: {:?}", class, e);
            }
        }
    }
}
