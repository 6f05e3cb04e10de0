use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::session_description::RTCSessionDescription;

/// Field of the answer identifying the peer connection on the remote side.
pub const PC_ID_FIELD: &str = "pc_id";

/// Body POSTed to the signaling endpoint: `{sdp, type, <extra fields>}`.
///
/// Extra fields are flattened next to `sdp` and `type`; the remote
/// endpoint decides what they mean (e.g. `video_transform`).
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferRequest {
    #[serde(flatten)]
    pub description: RTCSessionDescription,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OfferRequest {
    pub fn new(description: RTCSessionDescription) -> Self {
        OfferRequest {
            description,
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn with_fields(mut self, fields: &Map<String, Value>) -> Self {
        for (key, value) in fields {
            self.extra.insert(key.clone(), value.clone());
        }
        self
    }
}

/// Body returned by the signaling endpoint: `{sdp, type, <extra fields>}`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResponse {
    #[serde(flatten)]
    pub description: RTCSessionDescription,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnswerResponse {
    pub fn new(description: RTCSessionDescription) -> Self {
        AnswerResponse {
            description,
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn description(&self) -> &RTCSessionDescription {
        &self.description
    }

    /// The remote peer connection id, when the endpoint reports one.
    pub fn pc_id(&self) -> Option<String> {
        match self.extra.get(PC_ID_FIELD)? {
            Value::Null => None,
            Value::String(id) => Some(id.clone()),
            other => Some(other.to_string()),
        }
    }
}
