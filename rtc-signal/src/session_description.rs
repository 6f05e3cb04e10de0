use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::sdp_type::RTCSdpType;

/// A session description in the SDP offer/answer model.
///
/// The `sdp` text is carried verbatim: codec pinning produces a new
/// description rather than editing one in place.
///
/// ## Specifications
///
/// * [W3C]
///
/// [W3C]: https://w3c.github.io/webrtc-pc/#rtcsessiondescription-class
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RTCSessionDescription {
    #[serde(rename = "type")]
    pub sdp_type: RTCSdpType,

    pub sdp: String,
}

impl Display for RTCSessionDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "type: {}, sdp:\n{}",
            self.sdp_type,
            self.sdp.replace("\r\n", "\n")
        )
    }
}

impl RTCSessionDescription {
    /// Given SDP representing an answer, wrap it in an RTCSessionDescription
    /// that can be given to a peer connection.
    pub fn answer(sdp: String) -> RTCSessionDescription {
        RTCSessionDescription {
            sdp,
            sdp_type: RTCSdpType::Answer,
        }
    }

    /// Given SDP representing an offer, wrap it in an RTCSessionDescription
    /// that can be given to a peer connection.
    pub fn offer(sdp: String) -> RTCSessionDescription {
        RTCSessionDescription {
            sdp,
            sdp_type: RTCSdpType::Offer,
        }
    }

    /// Given SDP representing an answer, wrap it in an RTCSessionDescription
    /// that can be given to a peer connection. This is used for pranswer
    /// descriptions, which are not final answers.
    pub fn pranswer(sdp: String) -> RTCSessionDescription {
        RTCSessionDescription {
            sdp,
            sdp_type: RTCSdpType::Pranswer,
        }
    }

    /// Returns a copy carrying `sdp` instead of the current text.
    pub fn with_sdp(&self, sdp: String) -> RTCSessionDescription {
        RTCSessionDescription {
            sdp_type: self.sdp_type,
            sdp,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_session_description_json() {
        let tests = vec![
            (
                RTCSessionDescription::offer("sdp".to_owned()),
                r#"{"type":"offer","sdp":"sdp"}"#,
            ),
            (
                RTCSessionDescription::pranswer("sdp".to_owned()),
                r#"{"type":"pranswer","sdp":"sdp"}"#,
            ),
            (
                RTCSessionDescription::answer("sdp".to_owned()),
                r#"{"type":"answer","sdp":"sdp"}"#,
            ),
            (
                RTCSessionDescription {
                    sdp_type: RTCSdpType::Rollback,
                    sdp: "sdp".to_owned(),
                },
                r#"{"type":"rollback","sdp":"sdp"}"#,
            ),
        ];

        for (desc, expected_string) in tests {
            let result = serde_json::to_string(&desc);
            assert!(result.is_ok(), "testCase: marshal err: {result:?}");
            let desc_data = result.unwrap();
            assert_eq!(desc_data, expected_string, "string is not expected");

            let result = serde_json::from_str::<RTCSessionDescription>(&desc_data);
            assert!(result.is_ok(), "testCase: unmarshal err: {result:?}");
            assert_eq!(result.unwrap(), desc);
        }
    }

    #[test]
    fn test_session_description_display() {
        let desc = RTCSessionDescription::offer("v=0\r\ns=-\r\n".to_owned());
        assert_eq!(desc.to_string(), "type: offer, sdp:\nv=0\ns=-\n");
    }

    #[test]
    fn test_with_sdp_keeps_type() {
        let offer = RTCSessionDescription::offer("v=0\r\n".to_owned());
        let rewritten = offer.with_sdp("v=1\r\n".to_owned());
        assert_eq!(rewritten.sdp_type, RTCSdpType::Offer);
        assert_eq!(rewritten.sdp, "v=1\r\n");
        assert_eq!(offer.sdp, "v=0\r\n");
    }
}
