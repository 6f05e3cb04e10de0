use std::fmt;

use crate::peer_connection::event::RTCPeerConnectionEvent;

/// Notification queued by the [`Negotiator`](super::Negotiator) for its
/// owner, drained with `poll_event`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegotiationEvent {
    /// A notification forwarded from the peer connection.
    PeerConnection(RTCPeerConnectionEvent),

    /// The offer was sent; carries the SDP exactly as posted.
    OfferSent(String),

    /// The answer was applied.
    AnswerReceived { pc_id: Option<String> },

    /// Negotiation gave up; carries the error message.
    Failed(String),

    Stopped,
}

impl fmt::Display for NegotiationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NegotiationEvent::PeerConnection(event) => write!(f, "{event:?}"),
            NegotiationEvent::OfferSent(_) => write!(f, "offer sent"),
            NegotiationEvent::AnswerReceived { pc_id: Some(pc_id) } => {
                write!(f, "answer received from {pc_id}")
            }
            NegotiationEvent::AnswerReceived { pc_id: None } => write!(f, "answer received"),
            NegotiationEvent::Failed(err) => write!(f, "negotiation failed: {err}"),
            NegotiationEvent::Stopped => write!(f, "stopped"),
        }
    }
}
