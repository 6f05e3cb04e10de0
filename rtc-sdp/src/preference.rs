use std::fmt;

use log::debug;

use crate::codec_filter::filter_codec;
use crate::media_kind::MediaKind;

/// Codec value meaning "leave this media kind as the platform offered it".
pub const DEFAULT_CODEC: &str = "default";

/// A codec pinned for one media kind, e.g. `video` / `H264`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecPreference {
    pub kind: MediaKind,
    pub codec: String,
}

impl CodecPreference {
    /// Returns `None` when `codec` is empty or [`DEFAULT_CODEC`], in which
    /// case the media kind must not be filtered.
    pub fn new(kind: MediaKind, codec: &str) -> Option<Self> {
        if codec.is_empty() || codec == DEFAULT_CODEC {
            None
        } else {
            Some(CodecPreference {
                kind,
                codec: codec.to_owned(),
            })
        }
    }
}

impl fmt::Display for CodecPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.codec)
    }
}

/// Filters `sdp` once per preference, in the given order.
pub fn apply_codec_preferences(sdp: &str, preferences: &[CodecPreference]) -> String {
    let mut filtered = sdp.to_owned();
    for preference in preferences {
        debug!("pinning codec {preference}");
        filtered = filter_codec(preference.kind, &preference.codec, &filtered);
    }
    filtered
}
