//! The platform peer connection seen from the negotiating client.
//!
//! ICE, DTLS and media transport all live behind [`PeerConnection`]; the
//! client only asks it for an offer, waits for candidate gathering and
//! hands it the answer.

pub mod event;
pub mod state;

use crate::configuration::media_constraints::MediaConstraints;
use event::RTCPeerConnectionEvent;
use shared::error::Result;
use signal::RTCSessionDescription;
use state::{RTCIceConnectionState, RTCIceGatheringState, RTCSignalingState};

#[allow(async_fn_in_trait)]
pub trait PeerConnection {
    /// Captures local media matching `constraints` and adds its tracks to
    /// the connection.
    async fn acquire_media(&mut self, constraints: &MediaConstraints) -> Result<()>;

    fn create_offer(&mut self) -> Result<RTCSessionDescription>;

    /// Applies `desc` locally; candidate gathering starts here.
    fn set_local_description(&mut self, desc: RTCSessionDescription) -> Result<()>;

    /// The local description including the candidates gathered so far.
    fn local_description(&self) -> Option<&RTCSessionDescription>;

    fn set_remote_description(&mut self, desc: RTCSessionDescription) -> Result<()>;

    fn ice_gathering_state(&self) -> RTCIceGatheringState;

    fn ice_connection_state(&self) -> RTCIceConnectionState;

    fn signaling_state(&self) -> RTCSignalingState;

    /// Waits for the next notification of the connection.
    async fn next_event(&mut self) -> Result<RTCPeerConnectionEvent>;

    fn stop_transceivers(&mut self) -> Result<()>;

    /// Stops the local tracks of every sender, releasing the capture
    /// devices acquired by [`acquire_media`](Self::acquire_media).
    fn stop_tracks(&mut self) -> Result<()>;

    fn close(&mut self) -> Result<()>;
}
