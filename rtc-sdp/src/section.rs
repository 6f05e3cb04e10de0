/// Position of a line scan relative to the media section being rewritten.
///
/// Transitions happen only on `m=` lines: a line opening a section of the
/// target kind enters it, any other `m=` line leaves it.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SectionScope {
    #[default]
    OutsideTarget,
    InsideTarget,
}

impl SectionScope {
    /// Returns the scope in effect for `line`, given the `m=<kind> ` prefix
    /// of the target section.
    pub fn advance(self, line: &str, media_line_prefix: &str) -> Self {
        if line.starts_with(media_line_prefix) {
            SectionScope::InsideTarget
        } else if line.starts_with("m=") {
            SectionScope::OutsideTarget
        } else {
            self
        }
    }

    pub fn is_inside(&self) -> bool {
        *self == SectionScope::InsideTarget
    }
}

/// One line of a session description with its carriage return, if any,
/// kept apart from the content.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SdpLine<'a> {
    pub body: &'a str,
    pub carriage_return: bool,
}

impl<'a> SdpLine<'a> {
    fn new(raw: &'a str) -> Self {
        match raw.strip_suffix('\r') {
            Some(body) => SdpLine {
                body,
                carriage_return: true,
            },
            None => SdpLine {
                body: raw,
                carriage_return: false,
            },
        }
    }

    /// Appends `body` followed by this line's terminator to `out`.
    pub(crate) fn write_with_body(&self, body: &str, out: &mut String) {
        out.push_str(body);
        if self.carriage_return {
            out.push('\r');
        }
        out.push('\n');
    }

    pub(crate) fn write(&self, out: &mut String) {
        self.write_with_body(self.body, out);
    }
}

/// Splits `sdp` on `\n`. A trailing newline does not produce an empty last
/// line.
pub fn sdp_lines(sdp: &str) -> impl Iterator<Item = SdpLine<'_>> {
    sdp.strip_suffix('\n')
        .unwrap_or(sdp)
        .split('\n')
        .filter(move |_| !sdp.is_empty())
        .map(SdpLine::new)
}
