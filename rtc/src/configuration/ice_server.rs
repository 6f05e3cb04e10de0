use serde::{Deserialize, Serialize};

/// STUN server used when the client opts into server-reflexive candidates.
pub const DEFAULT_STUN_SERVER: &str = "stun:stun.l.google.com:19302";

/// ICEServer describes a single STUN and TURN server that can be used by
/// the ICEAgent to establish a connection with a peer.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RTCIceServer {
    pub urls: Vec<String>,
    pub username: String,
    pub credential: String,
}

impl RTCIceServer {
    pub fn stun(url: &str) -> Self {
        RTCIceServer {
            urls: vec![url.to_owned()],
            ..Default::default()
        }
    }
}
