use chrono_tz::Tz;
use tracing::debug;

use crate::{
    error::RelayError,
    models::{
        destination::Destination,
        event::{BranchKind, NotificationEvent},
        message::RenderedMessage,
    },
    utils::convert_timestamp,
};

/// Transforms one inbound notification into a chat message for one
/// destination.
pub struct MessageComposer<'a> {
    event: NotificationEvent,
    destination: &'a Destination,
}

impl<'a> MessageComposer<'a> {
    pub fn new(destination: &'a Destination, payload: &[u8]) -> Result<Self, RelayError> {
        let event = serde_json::from_slice::<NotificationEvent>(payload)
            .map_err(|e| RelayError::MalformedPayload(e.to_string()))?;

        Ok(Self { event, destination })
    }

    pub fn destination(&self) -> &Destination {
        self.destination
    }

    /// Renders the chat message body, or reports why there is nothing to
    /// deliver.
    ///
    /// The body is `\n`-token delimited: the escape sequences stay literal
    /// so they reach the chat service unmodified inside a JSON string.
    pub fn render(&self, timezone: Tz) -> Result<RenderedMessage, RelayError> {
        if self.event.analysed_at.is_empty() {
            return Err(RelayError::MalformedPayload(
                "missing analysedAt timestamp".to_string(),
            ));
        }

        if let Some(filter) = self.destination.status_filter() {
            if self.event.quality_gate.status != filter {
                debug!(
                    path = %self.destination.path,
                    status = %self.event.quality_gate.status,
                    filter,
                    "Quality gate status does not match destination filter"
                );
                return Err(RelayError::FilteredOut(
                    self.event.quality_gate.status.clone(),
                ));
            }
        }

        let analysed_at = convert_timestamp(&self.event.analysed_at, timezone)?;

        let mut body = String::new();

        body.push_str("*SonarQube Quality Gate*\\n");
        body.push_str(&format!("Analysed at: {analysed_at}\\n\\n"));

        match self.event.quality_gate.status.as_str() {
            "OK" => body.push_str("*Status*: PASS ✅\\n\\n"),
            "ERROR" => body.push_str("*Status*: FAILED 🚫\\n\\n"),
            _ => {}
        }

        body.push_str(&format!("*Project:* {}\\n", self.event.project.name));

        match self.event.branch.kind {
            BranchKind::Branch => {
                body.push_str(&format!("*Branch:* {}\\n", self.event.branch.name));
            }
            BranchKind::PullRequest => {
                body.push_str(&format!(
                    "*Pull request*: ID {}\\n",
                    self.event.branch.name
                ));
            }
            BranchKind::Unknown => {}
        }

        body.push_str(&format!(
            "<{}|*Click here for results*>\\n",
            self.event.branch.url
        ));

        Ok(RenderedMessage::new(body))
    }
}
