// ============================================================================
// STATUS MESSAGE - Mensaje de estado transitorio tras cada carga
// ============================================================================
// Cada envío recibe un número de secuencia; solo la respuesta y el timer del
// último envío pueden modificar el mensaje visible.
// ============================================================================

use crate::utils::constants::{ERROR_CLASS, SUCCESS_CLASS};

pub const UPLOAD_ERROR_PREFIX: &str = "Error uploading file: ";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum StatusMessage {
    #[default]
    Empty,
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn upload_error(reason: &str) -> Self {
        StatusMessage::Error(format!("{}{}", UPLOAD_ERROR_PREFIX, reason))
    }

    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Empty => "",
            StatusMessage::Success(text) | StatusMessage::Error(text) => text,
        }
    }

    /// Clase CSS de decoración (ninguna para `Empty`)
    pub fn decoration(&self) -> Option<&'static str> {
        match self {
            StatusMessage::Empty => None,
            StatusMessage::Success(_) => Some(SUCCESS_CLASS),
            StatusMessage::Error(_) => Some(ERROR_CLASS),
        }
    }
}

/// Estado del mensaje + secuencia del último envío + timer armado
#[derive(Debug, Default)]
pub struct StatusBoard {
    current: StatusMessage,
    latest_seq: u64,
    armed_seq: Option<u64>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &StatusMessage {
        &self.current
    }

    /// Nuevo envío: limpia el mensaje y desarma cualquier timer anterior
    pub fn begin(&mut self) -> u64 {
        self.latest_seq += 1;
        self.current = StatusMessage::Empty;
        self.armed_seq = None;
        self.latest_seq
    }

    /// Fijar el mensaje de un envío. `false` si el envío ya fue superado.
    pub fn settle(&mut self, seq: u64, message: StatusMessage) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.current = message;
        self.armed_seq = Some(seq);
        true
    }

    /// Disparo del timer de `seq`. `true` si el mensaje se limpió.
    pub fn expire(&mut self, seq: u64) -> bool {
        if self.armed_seq != Some(seq) || seq != self.latest_seq {
            return false;
        }
        self.current = StatusMessage::Empty;
        self.armed_seq = None;
        true
    }
}
