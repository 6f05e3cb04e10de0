#[cfg(test)]
mod codec_filter_test;

use lazy_static::lazy_static;
use log::{trace, warn};
use regex::{Captures, Regex};

use crate::escape::escape_literal;
use crate::media_kind::MediaKind;
use crate::section::{SdpLine, SectionScope, sdp_lines};
use shared::error::{Error, Result};

/// PayloadType identifies the format of an RTP payload within one media
/// section. Numbers outside the 7-bit RTP range are carried through as
/// written.
pub type PayloadType = u32;

lazy_static! {
    static ref RTX_REGEX: Regex = Regex::new(r"a=fmtp:(\d+) apt=(\d+)$").unwrap();
    static ref PAYLOAD_ATTRIBUTE_REGEX: Regex =
        Regex::new(r"a=(fmtp|rtcp-fb|rtpmap):([0-9]+)").unwrap();
}

/// Restricts one media section of a session description to a single codec.
///
/// Discovery walks the target section top to bottom: every
/// `a=rtpmap:<pt> <codec>` line adds `<pt>` to the allowed list, and every
/// `a=fmtp:<pt> apt=<apt>` line adds `<pt>` when `<apt>` was already allowed
/// at that point. A retransmission association written before the rtpmap
/// of the codec it protects is therefore not picked up.
///
/// The rewrite then drops `a=fmtp`, `a=rtcp-fb` and `a=rtpmap` lines for
/// payload types outside the allowed list and replaces the payload list of
/// the section's `m=` line with the allowed list. Every other line, and
/// every line outside the target section, is copied through unchanged.
#[derive(Debug, Clone)]
pub struct CodecFilter {
    kind: MediaKind,
    codec: String,
    media_line_prefix: String,
    codec_regex: Regex,
    media_line_regex: Regex,
}

impl CodecFilter {
    pub fn new(kind: MediaKind, codec: &str) -> Result<Self> {
        if kind == MediaKind::Unspecified {
            return Err(Error::ErrMediaKindUnspecified);
        }

        let codec_regex = Regex::new(&format!(r"a=rtpmap:([0-9]+) {}", escape_literal(codec)))
            .map_err(|err| Error::SdpInvalidValue(err.to_string()))?;
        let media_line_regex = Regex::new(&format!(
            r"^(m={} .*?)( ([0-9]+))*\s*$",
            escape_literal(&kind.to_string())
        ))
        .map_err(|err| Error::SdpInvalidValue(err.to_string()))?;

        Ok(CodecFilter {
            kind,
            codec: codec.to_owned(),
            media_line_prefix: kind.media_line_prefix(),
            codec_regex,
            media_line_regex,
        })
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn codec(&self) -> &str {
        &self.codec
    }

    /// Payload types of the target section that survive filtering, in
    /// discovery order. Duplicates are kept.
    pub fn allowed_payload_types(&self, sdp: &str) -> Vec<PayloadType> {
        let mut allowed = vec![];

        let mut scope = SectionScope::default();
        for line in sdp_lines(sdp) {
            scope = scope.advance(line.body, &self.media_line_prefix);
            if !scope.is_inside() {
                continue;
            }

            if let Some(payload_type) = self
                .codec_regex
                .captures(line.body)
                .and_then(|caps| capture_payload_type(&caps, 1))
            {
                allowed.push(payload_type);
            }

            if let Some(caps) = RTX_REGEX.captures(line.body) {
                if let (Some(rtx), Some(apt)) =
                    (capture_payload_type(&caps, 1), capture_payload_type(&caps, 2))
                {
                    if allowed.contains(&apt) {
                        allowed.push(rtx);
                    }
                }
            }
        }

        allowed
    }

    /// Returns a rewritten copy of `sdp`; the input is left untouched.
    pub fn filter(&self, sdp: &str) -> String {
        let allowed = self.allowed_payload_types(sdp);
        trace!(
            "{} payload types allowed for codec {}: {:?}",
            self.kind, self.codec, allowed
        );
        self.rewrite(sdp, &allowed)
    }

    fn rewrite(&self, sdp: &str, allowed: &[PayloadType]) -> String {
        let mut filtered = String::with_capacity(sdp.len());

        let mut scope = SectionScope::default();
        for line in sdp_lines(sdp) {
            scope = scope.advance(line.body, &self.media_line_prefix);
            if !scope.is_inside() {
                line.write(&mut filtered);
                continue;
            }

            if let Some(caps) = PAYLOAD_ATTRIBUTE_REGEX.captures(line.body) {
                let keep = capture_payload_type(&caps, 2)
                    .is_some_and(|payload_type| allowed.contains(&payload_type));
                if !keep {
                    trace!("dropping {}", line.body);
                    continue;
                }
                line.write(&mut filtered);
            } else if line.body.starts_with(&self.media_line_prefix) {
                self.write_media_line(line, allowed, &mut filtered);
            } else {
                line.write(&mut filtered);
            }
        }

        filtered
    }

    fn write_media_line(&self, line: SdpLine<'_>, allowed: &[PayloadType], out: &mut String) {
        match self.media_line_regex.captures(line.body) {
            Some(caps) => {
                let payload_types: Vec<String> = allowed.iter().map(|pt| pt.to_string()).collect();
                let body = format!("{} {}", &caps[1], payload_types.join(" "));
                line.write_with_body(&body, out);
            }
            None => line.write(out),
        }
    }
}

fn capture_payload_type(caps: &Captures<'_>, group: usize) -> Option<PayloadType> {
    caps.get(group)?.as_str().parse().ok()
}

/// Restricts the `kind` media section of `sdp` to `codec` and the
/// retransmission payload types associated with it.
///
/// Never fails: a description without a matching section comes back
/// unchanged, and a section without any matching codec ends up advertising
/// an empty payload list. Callers that need a codec to be present should
/// check [`CodecFilter::allowed_payload_types`] first.
pub fn filter_codec(kind: MediaKind, codec: &str, sdp: &str) -> String {
    match CodecFilter::new(kind, codec) {
        Ok(filter) => filter.filter(sdp),
        Err(err) => {
            warn!("{kind} codec {codec} left unfiltered: {err}");
            sdp.to_owned()
        }
    }
}
