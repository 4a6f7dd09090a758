// ============================================================================
// VIEWS - Escritura/lectura del DOM (sin lógica)
// ============================================================================

pub mod download_view;
pub mod localization_view;
pub mod status_view;
pub mod upload_form_view;

pub use download_view::{ArtifactSaver, BrowserDownloader};
pub use localization_view::{DomLocalizationView, LocalizationView};
pub use status_view::{DomStatusView, StatusSink};
pub use upload_form_view::read_upload_form;
