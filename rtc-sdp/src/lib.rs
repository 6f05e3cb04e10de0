//! Session description rewriting used to pin a preferred codec per media
//! section before an offer leaves the local peer.

#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod codec_filter;
pub mod escape;
pub mod media_kind;
pub mod preference;
pub mod section;

pub use codec_filter::{CodecFilter, PayloadType, filter_codec};
pub use escape::escape_literal;
pub use media_kind::MediaKind;
pub use preference::{CodecPreference, apply_codec_preferences};
