pub mod localization_viewmodel;
pub mod upload_viewmodel;

pub use localization_viewmodel::LocalizationViewModel;
pub use upload_viewmodel::UploadViewModel;
