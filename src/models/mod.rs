pub mod language;
pub mod translation;
pub mod upload;
pub mod status;

pub use language::Language;
pub use translation::{LanguageData, LocalizationError, MessageTemplates, TranslationBundle};
pub use upload::{classify_response, FormPart, RawResponse, ResponseOutcome, UploadError, UploadForm};
pub use status::{StatusBoard, StatusMessage};
