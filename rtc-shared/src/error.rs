#![allow(dead_code)]

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// ErrConnectionClosed indicates an operation executed after connection
    /// has already been closed.
    #[error("connection closed")]
    ErrConnectionClosed,

    //PeerConnection errors
    #[error("provided value is not a valid enum value of type SDPType")]
    ErrPeerConnSDPTypeInvalidValue,
    #[error("localDescription has not been set yet")]
    ErrPeerConnLocalDescriptionNil,
    #[error("invalid state change op")]
    ErrPeerConnStateChangeInvalid,

    //Negotiation errors
    #[error("negotiation has already been started")]
    ErrNegotiatorAlreadyStarted,
    #[error("negotiation has not been started")]
    ErrNegotiatorNotStarted,
    #[error("media kind must be audio or video")]
    ErrMediaKindUnspecified,
    #[error("no {kind} payload type matches codec {codec}")]
    ErrCodecNotFound { kind: String, codec: String },
    #[error("invalid video resolution: {0}")]
    ErrInvalidResolution(String),

    //Signaling errors
    #[error("signaling endpoint replied with status {0}")]
    ErrSignalingStatus(u16),
    #[error("invalid signaling endpoint: {0}")]
    ErrSignalingEndpoint(String),

    //SDP
    #[error("SdpInvalidValue: {0}")]
    SdpInvalidValue(String),

    //Third Party Error
    #[error("{0}")]
    Io(#[source] IoError),
    #[error("utf8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("{0}")]
    Std(#[source] StdError),

    //Other Errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn from_std<T>(error: T) -> Self
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        Error::Std(StdError(Box::new(error)))
    }

    pub fn downcast_ref<T: std::error::Error + 'static>(&self) -> Option<&T> {
        if let Error::Std(s) = self {
            return s.0.downcast_ref();
        }

        None
    }
}

#[derive(Debug, Error)]
#[error("io error: {0}")]
pub struct IoError(#[from] pub io::Error);

// Workaround for wanting PartialEq for io::Error.
impl PartialEq for IoError {
    fn eq(&self, other: &Self) -> bool {
        self.0.kind() == other.0.kind()
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(IoError(e))
    }
}

/// An escape hatch to preserve stack traces when we don't know the error.
///
/// Third party errors without a `PartialEq` implementation (JSON, HTTP,
/// base64, regex) are wrapped here through `Error::from_std`.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StdError(pub Box<dyn std::error::Error + Send + Sync>);

impl PartialEq for StdError {
    fn eq(&self, _: &Self) -> bool {
        false
    }
}

/// flatten_errs flattens multiple errors into one
pub fn flatten_errs(errs: Vec<impl Into<Error>>) -> Result<()> {
    if errs.is_empty() {
        Ok(())
    } else {
        let errs_strs: Vec<String> = errs.into_iter().map(|e| e.into().to_string()).collect();
        Err(Error::Other(errs_strs.join("\n")))
    }
}
