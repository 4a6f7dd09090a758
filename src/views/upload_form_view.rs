// ============================================================================
// UPLOAD FORM VIEW - Lectura del formulario en el momento del envío
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{File, HtmlInputElement};
use crate::dom::get_typed_by_id;
use crate::models::UploadForm;
use crate::utils::constants::{COMPANY_NAME_ID, EXECUTION_DATE_ID, FILE_INPUT_ID, IBAN_ID};

/// Formulario normalizado + primer fichero seleccionado
pub fn read_upload_form() -> Result<(UploadForm, Option<File>), JsValue> {
    let date = get_typed_by_id::<HtmlInputElement>(EXECUTION_DATE_ID)?.value();
    let iban = get_typed_by_id::<HtmlInputElement>(IBAN_ID)?.value();
    let company = get_typed_by_id::<HtmlInputElement>(COMPANY_NAME_ID)?.value();
    let file = get_typed_by_id::<HtmlInputElement>(FILE_INPUT_ID)?
        .files()
        .and_then(|files| files.get(0));

    let form = UploadForm::new(&date, &iban, &company, file.as_ref().map(|f| f.name()));
    Ok((form, file))
}
