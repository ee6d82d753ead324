use crate::dns::wire::{decode_message, encode_error_response, encode_response};
use ferrous_ns_application::use_cases::ResolveQueryUseCase;
use ferrous_ns_domain::ResponseCode;
use std::sync::Arc;
use tracing::{debug, error};

/// Transport independent request pipeline: decode, resolve, encode.
#[derive(Clone)]
pub struct DnsRequestHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsRequestHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the bytes to send back, or `None` when the request is too
    /// short to even carry an id.
    pub async fn handle(&self, request: &[u8]) -> Option<Vec<u8>> {
        let message = match decode_message(request) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, len = request.len(), "Rejecting malformed request");
                let id = request.get(..2)?;
                return Some(encode_error_response(
                    u16::from_be_bytes([id[0], id[1]]),
                    ResponseCode::FormErr,
                ));
            }
        };

        let resolution = self.use_case.execute(&message).await;

        match encode_response(
            message.id,
            resolution.response_flags(),
            &resolution.answers,
            &resolution.authority,
        ) {
            Ok(response) => Some(response),
            Err(e) => {
                error!(id = message.id, error = %e, "Failed to encode response");
                Some(encode_error_response(message.id, ResponseCode::ServFail))
            }
        }
    }
}
