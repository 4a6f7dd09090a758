// ============================================================================
// UPLOAD - Formulario, respuesta cruda y clasificación del resultado
// ============================================================================
// `classify_response` es puro: no toca el DOM ni la red
// ============================================================================

use serde_json::Value;
use thiserror::Error;

const JSON_CONTENT_TYPE: &str = "application/json";
const BINARY_CONTENT_TYPE: &str = "application/octet-stream";
const MISSING_HEADER_TEXT: &str = "null";

/// Nombre del fichero descargado si no se eligió ningún fichero
pub const FALLBACK_ARTIFACT_NAME: &str = "download";

/// Campos del formulario ya normalizados tal como se envían
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadForm {
    /// Solo dígitos (`2024-05-01` → `20240501`)
    pub execution_date: String,
    pub iban: String,
    /// En mayúsculas
    pub company_name: String,
    /// Nombre del fichero seleccionado, si hay uno
    pub file_name: Option<String>,
}

impl UploadForm {
    pub fn new(raw_date: &str, iban: &str, raw_company: &str, file_name: Option<String>) -> Self {
        Self {
            execution_date: normalize_execution_date(raw_date),
            iban: iban.to_string(),
            company_name: normalize_company_name(raw_company),
            file_name,
        }
    }

    /// Pares (nombre, valor) de las partes de texto del multipart, en orden
    pub fn text_parts(&self) -> [(&'static str, &str); 3] {
        [
            ("executionDate", self.execution_date.as_str()),
            ("iban", self.iban.as_str()),
            ("companyName", self.company_name.as_str()),
        ]
    }

    /// Partes multipart en orden de envío. `file` solo aparece si hay fichero.
    pub fn multipart_parts<'a, F>(&'a self, file: Option<&'a F>) -> Vec<(&'static str, FormPart<'a, F>)> {
        let mut parts: Vec<_> = self
            .text_parts()
            .into_iter()
            .map(|(name, value)| (name, FormPart::Text(value)))
            .collect();
        if let Some(file) = file {
            parts.push(("file", FormPart::File(file)));
        }
        parts
    }
}

/// Valor de una parte multipart (texto o fichero del navegador)
#[derive(Debug, PartialEq)]
pub enum FormPart<'a, F> {
    Text(&'a str),
    File(&'a F),
}

pub fn normalize_execution_date(raw: &str) -> String {
    raw.replace('-', "")
}

pub fn normalize_company_name(raw: &str) -> String {
    raw.to_uppercase()
}

/// Respuesta HTTP tal como llega del endpoint de carga
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawResponse {
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    /// La petición falló o el cuerpo no se pudo leer
    #[error("{0}")]
    Transport(String),
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),
    /// El servidor respondió `success: false`
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    MalformedBody(String),
}

/// Resultado clasificado de una carga
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseOutcome {
    Acknowledgement { message: String },
    Artifact { bytes: Vec<u8>, suggested_filename: String },
    Failure { reason: String },
}

impl ResponseOutcome {
    pub fn failure(error: UploadError) -> Self {
        ResponseOutcome::Failure {
            reason: error.to_string(),
        }
    }
}

/// Clasificar la respuesta según su Content-Type.
/// El nombre del artefacto sale siempre del fichero elegido, nunca del servidor.
pub fn classify_response(
    content_type: Option<&str>,
    body: Vec<u8>,
    selected_file_name: Option<&str>,
) -> ResponseOutcome {
    let declared = content_type.unwrap_or_default();

    if declared.contains(JSON_CONTENT_TYPE) {
        match interpret_json(&body) {
            Ok(message) => ResponseOutcome::Acknowledgement { message },
            Err(e) => ResponseOutcome::failure(e),
        }
    } else if declared.contains(BINARY_CONTENT_TYPE) {
        ResponseOutcome::Artifact {
            bytes: body,
            suggested_filename: selected_file_name
                .unwrap_or(FALLBACK_ARTIFACT_NAME)
                .to_string(),
        }
    } else {
        // Sin cabecera el mensaje muestra `null`, como el navegador
        let shown = content_type.unwrap_or(MISSING_HEADER_TEXT);
        ResponseOutcome::failure(UploadError::UnsupportedContentType(shown.to_string()))
    }
}

fn interpret_json(body: &[u8]) -> Result<String, UploadError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| UploadError::MalformedBody(e.to_string()))?;

    if !is_truthy(value.get("success")) {
        return Err(UploadError::Rejected(text_field(&value, "msg")));
    }
    Ok(text_field(&value, "message"))
}

/// `success` ausente, `null`, `false`, `0` o `""` cuentan como fallo
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn text_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json(body: &str) -> ResponseOutcome {
        classify_response(Some("application/json"), body.as_bytes().to_vec(), Some("O123456p.dp1"))
    }

    #[test]
    fn test_form_normalization() {
        let form = UploadForm::new("2024-05-01", "BG80FINV91501234567890", "acme ltd", None);
        assert_eq!(form.execution_date, "20240501");
        assert_eq!(form.company_name, "ACME LTD");
        assert_eq!(form.iban, "BG80FINV91501234567890");
    }

    #[test]
    fn test_text_parts_names() {
        let form = UploadForm::new("2024-05-01", "iban", "x", None);
        let names: Vec<_> = form.text_parts().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["executionDate", "iban", "companyName"]);
    }

    #[test]
    fn test_file_part_only_when_file_selected() {
        let form = UploadForm::new("2024-05-01", "BG80", "acme", None);
        let names: Vec<_> = form.multipart_parts::<()>(None).iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["executionDate", "iban", "companyName"]);

        let file = "payments.xlsx";
        let parts = form.multipart_parts(Some(&file));
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], ("executionDate", FormPart::Text("20240501")));
        assert_eq!(parts[3], ("file", FormPart::File(&file)));
    }

    #[test]
    fn test_empty_fields_are_sent_as_is() {
        let form = UploadForm::new("", "", "", None);
        assert_eq!(form.text_parts().map(|(_, v)| v), ["", "", ""]);
    }

    #[test]
    fn test_json_success_is_acknowledgement() {
        assert_eq!(
            json(r#"{"success":true,"message":"OK"}"#),
            ResponseOutcome::Acknowledgement { message: "OK".to_string() }
        );
    }

    #[test]
    fn test_json_failure_carries_msg() {
        assert_eq!(
            json(r#"{"success":false,"msg":"bad iban"}"#),
            ResponseOutcome::Failure { reason: "bad iban".to_string() }
        );
    }

    #[test]
    fn test_falsy_success_values_are_failures() {
        for body in [
            r#"{"msg":"m"}"#,
            r#"{"success":null,"msg":"m"}"#,
            r#"{"success":0,"msg":"m"}"#,
            r#"{"success":"","msg":"m"}"#,
        ] {
            assert_eq!(json(body), ResponseOutcome::Failure { reason: "m".to_string() }, "{}", body);
        }
    }

    #[test]
    fn test_success_without_message_is_empty_acknowledgement() {
        assert_eq!(
            json(r#"{"success":1}"#),
            ResponseOutcome::Acknowledgement { message: String::new() }
        );
    }

    #[test]
    fn test_json_content_type_with_charset() {
        let outcome = classify_response(
            Some("application/json; charset=utf-8"),
            br#"{"success":true,"message":"done"}"#.to_vec(),
            None,
        );
        assert_eq!(outcome, ResponseOutcome::Acknowledgement { message: "done".to_string() });
    }

    #[test]
    fn test_malformed_json_is_failure() {
        assert!(matches!(json("<html>oops"), ResponseOutcome::Failure { .. }));
    }

    #[test]
    fn test_binary_uses_selected_file_name() {
        let outcome = classify_response(
            Some("application/octet-stream"),
            vec![1, 2, 3],
            Some("O240501p.dp7"),
        );
        assert_eq!(
            outcome,
            ResponseOutcome::Artifact {
                bytes: vec![1, 2, 3],
                suggested_filename: "O240501p.dp7".to_string(),
            }
        );
    }

    #[test]
    fn test_binary_without_selected_file_uses_fallback_name() {
        match classify_response(Some("application/octet-stream"), vec![], None) {
            ResponseOutcome::Artifact { suggested_filename, .. } => {
                assert_eq!(suggested_filename, FALLBACK_ARTIFACT_NAME)
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_text_plain_is_unsupported() {
        let outcome = classify_response(Some("text/plain"), b"hello".to_vec(), None);
        assert_eq!(
            outcome,
            ResponseOutcome::Failure { reason: "Unsupported content type: text/plain".to_string() }
        );
    }

    #[test]
    fn test_missing_content_type_is_unsupported() {
        let outcome = classify_response(None, vec![], None);
        assert_eq!(
            outcome,
            ResponseOutcome::Failure { reason: "Unsupported content type: null".to_string() }
        );
    }
}
