//! Hand-off between the HTTP task and the main loop.

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use robo_face_core::{
    http::{PageResponse, RequestBuffer},
    ports::NetworkService,
};

/// Complete request heads waiting for the main loop.
pub(crate) static REQUESTS: Channel<CriticalSectionRawMutex, RequestBuffer, 1> = Channel::new();

/// Pages waiting to be written back to the connection.
pub(crate) static RESPONSES: Channel<CriticalSectionRawMutex, PageResponse, 1> = Channel::new();

/// Main loop side of the exchange. Never blocks.
#[derive(Debug, Default)]
pub struct ChannelNetwork;

impl NetworkService for ChannelNetwork {
    fn next_request(&mut self) -> Option<RequestBuffer> {
        REQUESTS.try_receive().ok()
    }

    fn respond(&mut self, response: PageResponse) {
        if RESPONSES.try_send(response).is_err() {
            log::warn!("http: response slot busy, page dropped");
        }
    }
}
