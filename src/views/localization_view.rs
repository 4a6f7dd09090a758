// ============================================================================
// LOCALIZATION VIEW - Aplica traducciones, bandera y selector al DOM
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, HtmlSelectElement};
use crate::dom::{document, get_element_by_id, get_typed_by_id, query_selector, set_text_content};
use crate::models::{Language, TranslationBundle};
use crate::utils::constants::{
    COMPANY_NAME_ID, EXECUTION_DATE_ID, FILE_INPUT_ID, FLAG_ICON_ID, IBAN_ID,
    LANGUAGE_SELECT_ID, SUBMIT_BUTTON_SELECTOR, UPLOAD_HEADING_ID,
};

pub trait LocalizationView {
    fn apply_texts(&self, bundle: &TranslationBundle);
    fn show_flag(&self, language: Language);
    fn select_language(&self, code: &str);
}

/// Vista sobre los IDs fijos del documento. Un elemento ausente solo se registra.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomLocalizationView;

impl DomLocalizationView {
    /// El texto de cada campo vive en el elemento hermano anterior (su label)
    fn set_label_before(field_id: &str, text: &str) {
        match get_element_by_id(field_id).and_then(|field| field.previous_element_sibling()) {
            Some(label) => set_text_content(&label, text),
            None => log::warn!("⚠️ [I18N] Sin label para #{}", field_id),
        }
    }
}

impl LocalizationView for DomLocalizationView {
    fn apply_texts(&self, bundle: &TranslationBundle) {
        if let Some(doc) = document() {
            doc.set_title(&bundle.title);
        }

        match get_element_by_id(UPLOAD_HEADING_ID) {
            Some(heading) => set_text_content(&heading, &bundle.upload_heading),
            None => log::warn!("⚠️ [I18N] #{} no encontrado", UPLOAD_HEADING_ID),
        }

        Self::set_label_before(EXECUTION_DATE_ID, &bundle.execution_date_label);
        Self::set_label_before(IBAN_ID, &bundle.iban_label);
        Self::set_label_before(COMPANY_NAME_ID, &bundle.company_name_label);
        Self::set_label_before(FILE_INPUT_ID, &bundle.select_file_label);

        match query_selector(SUBMIT_BUTTON_SELECTOR) {
            Ok(Some(button)) => set_text_content(&button, &bundle.upload_button),
            _ => log::warn!("⚠️ [I18N] Botón de carga no encontrado"),
        }
    }

    fn show_flag(&self, language: Language) {
        match get_element_by_id(FLAG_ICON_ID).and_then(|el| el.dyn_into::<HtmlImageElement>().ok()) {
            Some(flag) => flag.set_src(&language.flag_url()),
            None => log::warn!("⚠️ [I18N] #{} no encontrado", FLAG_ICON_ID),
        }
    }

    fn select_language(&self, code: &str) {
        match get_typed_by_id::<HtmlSelectElement>(LANGUAGE_SELECT_ID) {
            Ok(select) => select.set_value(code),
            Err(e) => log::warn!("⚠️ [I18N] Selector de idioma: {:?}", e),
        }
    }
}
