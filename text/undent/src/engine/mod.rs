//! Dedent pipeline over fragment sequences.
//!
//! The pipeline runs five passes over the literal fragments before any
//! value is interpolated:
//!
//! 1. Trim a single trailing blank line from the last fragment.
//! 2. Scan every fragment for line-start indentation runs.
//! 3. Take the minimum run length (the common indentation).
//! 4. Strip exactly that many tab/space characters after each line break.
//! 5. Trim a single leading line break from the first fragment.
//!
//! Interpolation then stitches fragments and values back together,
//! prefixing each inserted multi-line string value with the indentation
//! of the line it lands on.
//!
//! All scanning is byte-based. Line breaks are located with `memchr`;
//! indentation runs are raw counts of `0x20`/`0x09` bytes, tabs never
//! expanded. Both passes stay on UTF-8 character boundaries because a
//! byte after `\n`, `\t`, or `0x20` is always a boundary.

use memchr::{memchr_iter, memrchr};

use crate::template::Value;

/// Runs the full dedent pipeline over interleaved fragments and values.
///
/// Callers guarantee `fragments.len() == values.len() + 1`; the
/// [`Template`](crate::Template) builder establishes that shape by
/// construction and the plain-string form passes one fragment and no
/// values. An empty fragment slice yields an empty string.
pub(crate) fn run(fragments: &[&str], values: &[Value<'_>]) -> String {
    let Some((last, rest)) = fragments.split_last() else {
        return String::new();
    };

    let mut parts: Vec<String> = rest.iter().map(|f| (*f).to_string()).collect();
    parts.push(trim_trailing_blank_line(last).to_string());

    // Strip the common indentation. Zero width means some line starts
    // flush left, so there is nothing to remove.
    if let Some(width) = common_indent(&parts) {
        if width > 0 {
            for part in &mut parts {
                *part = strip_indent(part, width);
            }
        }
    }

    if let Some(first) = parts.first_mut() {
        trim_leading_break(first);
    }

    interpolate(&parts, values)
}

/// Removes one trailing blank line: an optional `\r`, a `\n`, and a run
/// of tabs/spaces reaching end-of-string. Anything else after the last
/// line break keeps the fragment untouched, and at most one line break
/// is ever removed.
fn trim_trailing_blank_line(fragment: &str) -> &str {
    let bytes = fragment.as_bytes();
    let mut end = bytes.len();
    while end > 0 && matches!(bytes[end - 1], b' ' | b'\t') {
        end -= 1;
    }
    if end > 0 && bytes[end - 1] == b'\n' {
        end -= 1;
        if end > 0 && bytes[end - 1] == b'\r' {
            end -= 1;
        }
        &fragment[..end]
    } else {
        fragment
    }
}

/// Finds the common indentation width across all fragments.
///
/// Every line break followed by a tab/space run contributes the run's
/// length; a line break followed directly by a non-whitespace character
/// contributes zero. Blank lines (a break followed by another break or
/// end of fragment) contribute nothing at all. Returns `None` when no
/// line contributed, which is the single-line case.
fn common_indent(parts: &[String]) -> Option<usize> {
    let mut min: Option<usize> = None;

    for part in parts {
        let bytes = part.as_bytes();
        for nl in memchr_iter(b'\n', bytes) {
            let after = nl + 1;
            let run = indent_run(&bytes[after..]);
            let contribution = if run > 0 {
                run
            } else if part[after..].chars().next().is_some_and(|c| !c.is_whitespace()) {
                0
            } else {
                continue;
            };
            min = Some(min.map_or(contribution, |m| m.min(contribution)));
        }
    }

    min
}

/// Counts leading tab/space bytes.
fn indent_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| matches!(b, b' ' | b'\t')).count()
}

/// Removes exactly `width` tab/space characters after every line break.
///
/// A line break followed by fewer than `width` tab/space characters is
/// left alone; by construction of the minimum that only happens on blank
/// or flush-left lines. Lines indented deeper than `width` keep the
/// excess as relative indentation.
fn strip_indent(text: &str, width: usize) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut start = 0;

    for nl in memchr_iter(b'\n', bytes) {
        out.push_str(&text[start..=nl]);
        let after = nl + 1;
        let run = indent_run(&bytes[after..]);
        start = if run >= width { after + width } else { after };
    }
    out.push_str(&text[start..]);

    out
}

/// Removes a single leading line break (`\n` or `\r\n`), if present.
/// Additional leading blank lines stay.
fn trim_leading_break(first: &mut String) {
    if first.starts_with("\r\n") {
        first.drain(..2);
    } else if first.starts_with('\n') {
        first.drain(..1);
    }
}

/// Stitches fragments and values together, re-indenting multi-line
/// string values to the column they are inserted at.
fn interpolate(parts: &[String], values: &[Value<'_>]) -> String {
    let Some((first, rest)) = parts.split_first() else {
        return String::new();
    };

    let mut out = first.clone();
    for (value, part) in values.iter().zip(rest) {
        let indent = insertion_indent(&out);
        match value {
            Value::Text(text) if text.contains('\n') => {
                push_reindented(&mut out, text, indent);
            }
            Value::Text(text) => out.push_str(text),
            Value::Rendered(text) => out.push_str(text),
        }
        out.push_str(part);
    }

    out
}

/// Width of the indentation at the current insertion point: the
/// all-spaces tail of the accumulated result after its last line break
/// (or the whole result when it has none). A tab or any other character
/// in the tail disqualifies it, giving width zero.
fn insertion_indent(out: &str) -> usize {
    let tail = match memrchr(b'\n', out.as_bytes()) {
        Some(nl) => &out[nl + 1..],
        None => out,
    };
    if tail.bytes().all(|b| b == b' ') {
        tail.len()
    } else {
        0
    }
}

/// Appends a multi-line value, prefixing every physical line after the
/// first with `indent` spaces. The first line lands on the insertion
/// column and needs no prefix.
fn push_reindented(out: &mut String, text: &str, indent: usize) {
    let mut lines = text.split('\n');
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push('\n');
        for _ in 0..indent {
            out.push(' ');
        }
        out.push_str(line);
    }
}
