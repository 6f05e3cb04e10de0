use crate::peer_connection::state::{
    RTCIceConnectionState, RTCIceGatheringState, RTCSignalingState,
};
use sdp::MediaKind;

/// Notifications a peer connection reports while it negotiates.
#[allow(clippy::enum_variant_names)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RTCPeerConnectionEvent {
    OnSignalingStateChangeEvent(RTCSignalingState),
    OnIceConnectionStateChangeEvent(RTCIceConnectionState),
    OnIceGatheringStateChangeEvent(RTCIceGatheringState),

    /// A remote track of the given kind was added.
    OnTrack(MediaKind),
}
