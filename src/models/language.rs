use crate::utils::constants::static_asset_url;

/// Idiomas con bandera y traducciones publicadas en lang.json
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Bulgarian,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Bulgarian, Language::English];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Bulgarian => "bg",
            Language::English => "en",
        }
    }

    /// `None` para códigos fuera de la lista (no es un error)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "bg" => Some(Language::Bulgarian),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    pub fn flag_file(&self) -> &'static str {
        match self {
            Language::Bulgarian => "bg.png",
            Language::English => "uk.png",
        }
    }

    pub fn flag_url(&self) -> String {
        static_asset_url(self.flag_file())
    }
}
