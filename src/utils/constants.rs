/// Prefijo común del servidor MassPay (endpoint de carga, estáticos y lang.json)
/// Configurado en tiempo de compilación:
/// - Por defecto: ./masspay (relativo a la página servida en /masspay)
/// - Otro despliegue: via MASSPAY_BASE_URL env var o .env
pub const MASSPAY_BASE_URL: &str = match option_env!("MASSPAY_BASE_URL") {
    Some(url) => url,
    None => "./masspay",
};

/// Etiqueta de versión del caché de traducciones.
/// Mientras no cambie, las traducciones cacheadas no expiran nunca.
pub const LANG_CACHE_VERSION: &str = match option_env!("LANG_CACHE_VERSION") {
    Some(version) => version,
    None => "1",
};

pub const DEFAULT_LANGUAGE: &str = "bg";

/// Tiempo que el mensaje de estado permanece visible
pub const STATUS_CLEAR_DELAY_MS: u32 = 10_000;

// localStorage
pub const CURRENT_LANG_KEY: &str = "currentLang";
pub const LANG_DATA_KEY_PREFIX: &str = "langData-";
pub const LANG_CACHE_VERSION_KEY: &str = "langData-version";

// IDs del documento
pub const LANGUAGE_SELECT_ID: &str = "languageSelect";
pub const FLAG_ICON_ID: &str = "flagIcon";
pub const UPLOAD_HEADING_ID: &str = "uploadHeading";
pub const EXECUTION_DATE_ID: &str = "executionDate";
pub const IBAN_ID: &str = "iban";
pub const COMPANY_NAME_ID: &str = "companyName";
pub const FILE_INPUT_ID: &str = "fileInput";
pub const RESPONSE_MESSAGE_ID: &str = "response-message";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button";

// Clases CSS del mensaje de estado
pub const RESPONSE_MESSAGE_CLASS: &str = "response-message";
pub const SUCCESS_CLASS: &str = "success";
pub const ERROR_CLASS: &str = "error";

pub fn upload_url() -> String {
    format!("{}/api/upload", MASSPAY_BASE_URL)
}

pub fn language_data_url() -> String {
    format!("{}/static/lang.json", MASSPAY_BASE_URL)
}

pub fn static_asset_url(file: &str) -> String {
    format!("{}/static/{}", MASSPAY_BASE_URL, file)
}
