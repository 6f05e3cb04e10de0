//! Peer connection state types and the trail of observed transitions.
//!
//! The offering client watches three independent state machines:
//!
//! - **[`RTCIceGatheringState`]** - candidate gathering progress (new, gathering, complete)
//! - **[`RTCIceConnectionState`]** - ICE transport connectivity (new, checking, connected, ...)
//! - **[`RTCSignalingState`]** - offer/answer progress (stable, have-local-offer, ...)
//!
//! ```
//! use rtc::peer_connection::state::{RTCIceGatheringState, RTCSignalingState};
//!
//! let state: RTCSignalingState = "have-local-offer".into();
//! assert_eq!(state, RTCSignalingState::HaveLocalOffer);
//! assert_eq!(RTCIceGatheringState::Complete.to_string(), "complete");
//! ```

pub(crate) mod ice_connection_state;
pub(crate) mod ice_gathering_state;
pub(crate) mod signaling_state;
pub(crate) mod state_log;

pub use ice_connection_state::RTCIceConnectionState;
pub use ice_gathering_state::RTCIceGatheringState;
pub use signaling_state::RTCSignalingState;
pub use state_log::{StateLog, StateTrail};
