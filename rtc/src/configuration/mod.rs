pub mod ice_server;
pub mod media_constraints;

use sdp::{CodecPreference, MediaKind};
use serde_json::{Map, Value};

use ice_server::{DEFAULT_STUN_SERVER, RTCIceServer};
use media_constraints::MediaConstraints;

/// A Configuration defines how one negotiation round is carried out: which
/// ICE servers the peer connection may use, which local media it captures,
/// which codecs the offer is pinned to and which extra fields travel with
/// the offer. Configurations are treated as readonly once built.
#[derive(Default, Debug, Clone)]
pub struct RTCConfiguration {
    /// ice_servers defines a slice describing servers available to be used by
    /// ICE, such as STUN and TURN servers.
    pub(crate) ice_servers: Vec<RTCIceServer>,

    /// media_constraints selects the local audio/video captured before the
    /// offer is created.
    pub(crate) media_constraints: MediaConstraints,

    /// codec_preferences are applied to the local offer in order, at most
    /// one per media kind.
    pub(crate) codec_preferences: Vec<CodecPreference>,

    /// require_codec_match fails the negotiation when a codec preference
    /// matches no payload type, instead of sending an offer whose media
    /// section advertises nothing.
    pub(crate) require_codec_match: bool,

    /// offer_fields are sent next to `sdp` and `type` in the offer body.
    pub(crate) offer_fields: Map<String, Value>,
}

impl RTCConfiguration {
    pub fn ice_servers(&self) -> &[RTCIceServer] {
        &self.ice_servers
    }

    pub fn media_constraints(&self) -> &MediaConstraints {
        &self.media_constraints
    }

    pub fn codec_preferences(&self) -> &[CodecPreference] {
        &self.codec_preferences
    }

    pub fn require_codec_match(&self) -> bool {
        self.require_codec_match
    }

    pub fn offer_fields(&self) -> &Map<String, Value> {
        &self.offer_fields
    }
}

#[derive(Default)]
pub struct RTCConfigurationBuilder {
    configuration: RTCConfiguration,
}

impl RTCConfigurationBuilder {
    pub fn new() -> Self {
        RTCConfigurationBuilder::default()
    }

    pub fn with_ice_servers(mut self, ice_servers: Vec<RTCIceServer>) -> Self {
        self.configuration.ice_servers = ice_servers;
        self
    }

    /// Adds the public STUN server when `use_stun` is set.
    pub fn with_stun_server(mut self, use_stun: bool) -> Self {
        if use_stun {
            self.configuration
                .ice_servers
                .push(RTCIceServer::stun(DEFAULT_STUN_SERVER));
        }
        self
    }

    pub fn with_media_constraints(mut self, media_constraints: MediaConstraints) -> Self {
        self.configuration.media_constraints = media_constraints;
        self
    }

    /// Pins `kind` to `codec`. `default` (or an empty codec) clears the
    /// preference for that kind; a later call for the same kind replaces
    /// the earlier one. An unspecified kind is ignored.
    pub fn with_codec_preference(mut self, kind: MediaKind, codec: &str) -> Self {
        if kind == MediaKind::Unspecified {
            return self;
        }
        let preferences = &mut self.configuration.codec_preferences;
        preferences.retain(|preference| preference.kind != kind);
        if let Some(preference) = CodecPreference::new(kind, codec) {
            preferences.push(preference);
        }
        // audio is always filtered before video
        preferences.sort_by_key(|preference| preference.kind as u8);
        self
    }

    pub fn with_require_codec_match(mut self, require_codec_match: bool) -> Self {
        self.configuration.require_codec_match = require_codec_match;
        self
    }

    pub fn with_offer_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.configuration
            .offer_fields
            .insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> RTCConfiguration {
        self.configuration
    }
}
