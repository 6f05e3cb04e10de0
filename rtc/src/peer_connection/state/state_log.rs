use std::fmt;

use crate::peer_connection::event::RTCPeerConnectionEvent;
use crate::peer_connection::state::{
    RTCIceConnectionState, RTCIceGatheringState, RTCSignalingState,
};

/// Ordered list of the states one state machine went through, rendered as
/// `new -> gathering -> complete`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct StateTrail(Vec<String>);

impl StateTrail {
    pub fn new(initial: impl fmt::Display) -> Self {
        StateTrail(vec![initial.to_string()])
    }

    pub fn push(&mut self, state: impl fmt::Display) {
        self.0.push(state.to_string());
    }

    pub fn states(&self) -> &[String] {
        &self.0
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl fmt::Display for StateTrail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}

/// State trails of one negotiation, seeded with the states the peer
/// connection reported when it was created.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct StateLog {
    pub ice_gathering: StateTrail,
    pub ice_connection: StateTrail,
    pub signaling: StateTrail,
}

impl StateLog {
    pub fn new(
        ice_gathering: RTCIceGatheringState,
        ice_connection: RTCIceConnectionState,
        signaling: RTCSignalingState,
    ) -> Self {
        StateLog {
            ice_gathering: StateTrail::new(ice_gathering),
            ice_connection: StateTrail::new(ice_connection),
            signaling: StateTrail::new(signaling),
        }
    }

    /// Appends the state carried by `event`, if it is a state change.
    /// Returns whether anything was recorded.
    pub fn record(&mut self, event: &RTCPeerConnectionEvent) -> bool {
        match event {
            RTCPeerConnectionEvent::OnIceGatheringStateChangeEvent(state) => {
                self.ice_gathering.push(state)
            }
            RTCPeerConnectionEvent::OnIceConnectionStateChangeEvent(state) => {
                self.ice_connection.push(state)
            }
            RTCPeerConnectionEvent::OnSignalingStateChangeEvent(state) => {
                self.signaling.push(state)
            }
            RTCPeerConnectionEvent::OnTrack(_) => return false,
        }
        true
    }
}

impl fmt::Display for StateLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ICE gathering state: {}", self.ice_gathering)?;
        writeln!(f, "ICE connection state: {}", self.ice_connection)?;
        write!(f, "Signaling state: {}", self.signaling)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sdp::MediaKind;

    #[test]
    fn test_state_log_record() {
        let mut log = StateLog::new(
            RTCIceGatheringState::New,
            RTCIceConnectionState::New,
            RTCSignalingState::Stable,
        );

        let events = vec![
            RTCPeerConnectionEvent::OnSignalingStateChangeEvent(RTCSignalingState::HaveLocalOffer),
            RTCPeerConnectionEvent::OnIceGatheringStateChangeEvent(RTCIceGatheringState::Gathering),
            RTCPeerConnectionEvent::OnIceGatheringStateChangeEvent(RTCIceGatheringState::Complete),
            RTCPeerConnectionEvent::OnTrack(MediaKind::Video),
            RTCPeerConnectionEvent::OnSignalingStateChangeEvent(RTCSignalingState::Stable),
            RTCPeerConnectionEvent::OnIceConnectionStateChangeEvent(
                RTCIceConnectionState::Checking,
            ),
        ];
        let recorded: Vec<bool> = events.iter().map(|event| log.record(event)).collect();
        assert_eq!(recorded, vec![true, true, true, false, true, true]);

        assert_eq!(log.ice_gathering.to_string(), "new -> gathering -> complete");
        assert_eq!(log.ice_connection.to_string(), "new -> checking");
        assert_eq!(
            log.signaling.to_string(),
            "stable -> have-local-offer -> stable"
        );
        assert_eq!(log.ice_gathering.last(), Some("complete"));
    }

    #[test]
    fn test_state_log_display() {
        let log = StateLog::new(
            RTCIceGatheringState::New,
            RTCIceConnectionState::New,
            RTCSignalingState::Stable,
        );
        assert_eq!(
            log.to_string(),
            "ICE gathering state: new\nICE connection state: new\nSignaling state: stable"
        );
    }
}
