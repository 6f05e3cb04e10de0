use std::fmt;
use std::str::FromStr;

use shared::error::{Error, Result};

/// Video capture request.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum VideoConstraint {
    #[default]
    Disabled,

    /// Capture with the platform's default settings.
    Enabled,

    Resolution {
        width: u32,
        height: u32,
    },
}

/// Parses `WIDTHxHEIGHT` (e.g. `640x480`); the empty string selects
/// [`VideoConstraint::Enabled`].
impl FromStr for VideoConstraint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(VideoConstraint::Enabled);
        }

        let (width, height) = s
            .split_once('x')
            .ok_or_else(|| Error::ErrInvalidResolution(s.to_owned()))?;
        let parse = |v: &str| -> Result<u32> {
            match v.trim().parse::<u32>() {
                Ok(v) if v > 0 => Ok(v),
                _ => Err(Error::ErrInvalidResolution(s.to_owned())),
            }
        };

        Ok(VideoConstraint::Resolution {
            width: parse(width)?,
            height: parse(height)?,
        })
    }
}

impl fmt::Display for VideoConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            VideoConstraint::Disabled => write!(f, "false"),
            VideoConstraint::Enabled => write!(f, "true"),
            VideoConstraint::Resolution { width, height } => write!(f, "{width}x{height}"),
        }
    }
}

/// Local media to capture before the offer is created.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct MediaConstraints {
    pub audio: bool,
    pub video: VideoConstraint,
}

impl MediaConstraints {
    /// Whether no media at all is requested, in which case negotiation
    /// starts right away.
    pub fn is_empty(&self) -> bool {
        !self.audio && self.video == VideoConstraint::Disabled
    }
}

impl fmt::Display for MediaConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "audio: {}, video: {}", self.audio, self.video)
    }
}
