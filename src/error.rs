use thiserror::Error;

/// Failure kinds of the transform-and-deliver pipeline. `FilteredOut` is
/// deliberate suppression, not a delivery failure.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("malformed notification payload: {0}")]
    MalformedPayload(String),

    #[error("ignoring status: {0}")]
    FilteredOut(String),

    #[error("no Google Chat webhook URL provided")]
    MissingDestination,

    #[error("failed to deliver notification: {0}")]
    DeliveryFailed(String),
}
