use std::fmt;

pub(crate) const UNSPECIFIED_STR: &str = "Unspecified";

const MEDIA_KIND_AUDIO_STR: &str = "audio";
const MEDIA_KIND_VIDEO_STR: &str = "video";

/// Media kind named by an `m=` line.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Unspecified or unknown media kind
    #[default]
    Unspecified = 0,

    /// Audio media section
    Audio = 1,

    /// Video media section
    Video = 2,
}

impl MediaKind {
    /// The `m=<kind> ` prefix opening a media section of this kind.
    pub fn media_line_prefix(&self) -> String {
        format!("m={self} ")
    }
}

impl From<&str> for MediaKind {
    fn from(raw: &str) -> Self {
        match raw {
            MEDIA_KIND_AUDIO_STR => MediaKind::Audio,
            MEDIA_KIND_VIDEO_STR => MediaKind::Video,
            _ => MediaKind::Unspecified,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            MediaKind::Audio => MEDIA_KIND_AUDIO_STR,
            MediaKind::Video => MEDIA_KIND_VIDEO_STR,
            MediaKind::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}
