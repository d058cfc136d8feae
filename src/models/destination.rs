use std::collections::HashMap;

use serde::Deserialize;

pub const QUALITY_GATE_STATUS_FILTER: &str = "quality_gate_status";
pub const GOOGLE_CHAT_WEBHOOK_URL: &str = "google_chat_webhook_url";

/// A configured routing target: inbound path key plus named parameters
/// (status filter, chat webhook URL).
#[derive(Debug, Clone, Deserialize)]
pub struct Destination {
    pub path: String,

    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

impl Destination {
    /// The optional quality-gate status filter. Empty counts as unset.
    pub fn status_filter(&self) -> Option<&str> {
        self.parameters
            .get(QUALITY_GATE_STATUS_FILTER)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn delivery_url(&self) -> Option<&str> {
        self.parameters
            .get(GOOGLE_CHAT_WEBHOOK_URL)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}
