//! # RTC - Codec-pinning WebRTC offer client
//!
//! Drives one offer/answer round against an HTTP signaling endpoint and
//! restricts the offer to the audio and video codecs the caller asks for.
//!
//! The crate is sans-I/O at the media layer: ICE, DTLS and the media
//! transport belong to the platform peer connection, which is plugged in
//! through the [`PeerConnection`](peer_connection::PeerConnection) trait.
//! Signaling goes through a [`Signaler`](signal::Signaler).
//!
//! ## Quick Start
//!
//! ```no_run
//! use rtc::configuration::RTCConfigurationBuilder;
//! use rtc::configuration::media_constraints::{MediaConstraints, VideoConstraint};
//! use rtc::negotiator::Negotiator;
//! use rtc::peer_connection::PeerConnection;
//! use rtc::sdp::MediaKind;
//! use rtc::signal::HttpSignaler;
//!
//! # async fn example(pc: impl PeerConnection) -> Result<(), Box<dyn std::error::Error>> {
//! let config = RTCConfigurationBuilder::new()
//!     .with_stun_server(true)
//!     .with_media_constraints(MediaConstraints {
//!         audio: true,
//!         video: "640x480".parse::<VideoConstraint>()?,
//!     })
//!     .with_codec_preference(MediaKind::Audio, "opus")
//!     .with_codec_preference(MediaKind::Video, "H264")
//!     .with_offer_field("video_transform", "none")
//!     .build();
//!
//! let signaler = HttpSignaler::new("http://127.0.0.1:8080/offer")?;
//! let mut negotiator = Negotiator::new(config, pc, signaler);
//!
//! negotiator.start().await?;
//! while let Some(event) = negotiator.poll_event() {
//!     println!("{event}");
//! }
//! println!("{}", negotiator.state_log());
//!
//! negotiator.stop()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - **[`configuration`]** - ICE servers, media constraints and codec preferences
//! - **[`negotiator`]** - the offer/answer round and its notifications
//! - **[`peer_connection`]** - platform peer connection seam, events and state types

#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub use {sdp, shared, signal};

pub mod configuration;
pub mod negotiator;
pub mod peer_connection;

pub(crate) const UNSPECIFIED_STR: &str = "Unspecified";
