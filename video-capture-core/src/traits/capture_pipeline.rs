use crate::models::capture_request::CaptureRequest;

/// Camera capture pipeline the host has already opened.
///
/// Implemented by platform backends. Recording sessions never mutate the
/// pipeline beyond submitting (and on failed start, withdrawing) the
/// repeating request for their take.
pub trait CapturePipeline: Send + Sync {
    /// Replace the pipeline's repeating request with `request`.
    fn submit_repeating(&self, request: &CaptureRequest) -> Result<(), String>;

    /// Withdraw the current repeating request.
    fn stop_repeating(&self) -> Result<(), String>;
}
