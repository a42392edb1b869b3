//! Marker scanning for format strings.
//!
//! A marker is `{}` or `{:SPEC}`, where `SPEC` carries printf flags, width and
//! precision (`{:08.3}`, `{:-12}`, `{:#}`). `{{` and `}}` are literal braces.
//! A brace pair whose content is not a valid marker is copied as literal text,
//! including a width or precision above [`MAX_FIELD`](crate::MAX_FIELD).

use crate::directive::Spec;

/// One marker located in a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Marker<'a> {
    pub spec: Spec,
    /// The marker exactly as written, braces included.
    pub text: &'a str,
    /// Format text following the marker.
    pub rest: &'a str,
}

/// Copies literal text from `fmt` into `out` up to the next marker.
///
/// Escaped braces are collapsed while copying. Returns `None` once the whole
/// of `fmt` has been copied without finding a marker.
pub(crate) fn next_marker<'a>(fmt: &'a str, out: &mut String) -> Option<Marker<'a>> {
    let bytes = fmt.as_bytes();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' | b'}' if bytes.get(i + 1) == Some(&bytes[i]) => {
                out.push_str(&fmt[literal_start..=i]);
                i += 2;
                literal_start = i;
            }
            b'{' => {
                if let Some(len) = fmt[i + 1..].find('}') {
                    if let Some(spec) = parse_content(&fmt[i + 1..i + 1 + len]) {
                        out.push_str(&fmt[literal_start..i]);
                        let end = i + len + 2;
                        return Some(Marker {
                            spec,
                            text: &fmt[i..end],
                            rest: &fmt[end..],
                        });
                    }
                }
                i += 1;
            }
            _ => i += 1,
        }
    }

    out.push_str(&fmt[literal_start..]);
    None
}

fn parse_content(content: &str) -> Option<Spec> {
    if content.is_empty() {
        Some(Spec::default())
    } else {
        Spec::parse(content.strip_prefix(':')?)
    }
}

/// Counts the markers in a format string.
///
/// Useful for checking at a call site that the argument count matches;
/// the formatter itself never checks.
///
/// ```
/// use typed_logger::count_markers;
///
/// assert_eq!(count_markers("{} of {}"), 2);
/// assert_eq!(count_markers("{{}} {:08.3} {oops}"), 1);
/// ```
pub fn count_markers(fmt: &str) -> usize {
    let mut scratch = String::new();
    let mut rest = fmt;
    let mut count = 0;
    while let Some(marker) = next_marker(rest, &mut scratch) {
        count += 1;
        rest = marker.rest;
    }
    count
}
