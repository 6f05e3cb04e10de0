#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod message;
pub mod sdp_type;
pub mod session_description;
pub mod signaler;

pub use message::{AnswerResponse, OfferRequest};
pub use sdp_type::RTCSdpType;
pub use session_description::RTCSessionDescription;
pub use signaler::{HttpSignaler, Signaler};

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use shared::error::{Error, Result};
use std::io::BufRead;

/// Reads one non-empty line from stdin, e.g. a pasted session description.
pub fn must_read_stdin() -> Result<String> {
    let mut line = String::new();

    std::io::stdin().lock().read_line(&mut line)?;
    let line = line.trim().to_owned();
    if line.is_empty() {
        return Err(Error::Other("stdin: empty input".to_owned()));
    }

    Ok(line)
}

/// encode encodes the input in base64
pub fn encode(b: &str) -> String {
    BASE64_STANDARD.encode(b)
}

/// decode decodes the input from base64
pub fn decode(s: &str) -> Result<String> {
    let b = BASE64_STANDARD.decode(s).map_err(Error::from_std)?;
    Ok(String::from_utf8(b)?)
}
