use std::fmt::{Display, Formatter, Result};

/// A formatted chat message body ready for transmission.
///
/// The text carries literal `\n` escape tokens rather than control
/// characters: the body is spliced into a JSON string literal on delivery
/// and the chat service decodes the escapes on its side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage(String);

impl RenderedMessage {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RenderedMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0)
    }
}
