const SPECIAL_CHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Escapes `s` so it can be interpolated into a regular expression and
/// match itself literally.
///
/// Each of `. * + ? ^ $ { } ( ) | [ ] \` is prefixed with a backslash; every
/// other character is copied through, so a string without any of them is
/// returned unchanged.
///
/// ```
/// use rtc_sdp::escape_literal;
///
/// assert_eq!(escape_literal("H264"), "H264");
/// assert_eq!(escape_literal("a.b+c"), r"a\.b\+c");
/// ```
pub fn escape_literal(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if SPECIAL_CHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
