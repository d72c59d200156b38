//! Content line folding.
//!
//! Ordinary lines continue with CRLF and a space; quoted-printable values
//! continue with a soft break (`=` CRLF) and no leading space. Both cut
//! the line with [`split_octets`], which never splits a UTF-8 sequence.

/// Maximum line length in octets (not characters) per RFC 6350.
const MAX_LINE_OCTETS: usize = 75;

/// Octet limits of one folding mode.
struct Budget {
    /// Octets available on a continuation line.
    continuation: usize,
    /// Octets a continued line reserves for its break marker.
    marker: usize,
}

/// Leading space on every continuation.
const LINE_BUDGET: Budget = Budget {
    continuation: MAX_LINE_OCTETS - 1,
    marker: 0,
};

/// Trailing `=` on every continued line.
const SOFT_BREAK_BUDGET: Budget = Budget {
    continuation: MAX_LINE_OCTETS,
    marker: 1,
};

/// Cuts `line` into physical lines that fit `budget`.
///
/// `step_back` may move a proposed cut offset to an earlier one; the cut
/// is then moved back to a character boundary.
fn split_octets<'a>(
    line: &'a str,
    budget: &Budget,
    step_back: impl Fn(&[u8], usize) -> usize,
) -> Vec<&'a str> {
    let mut segments = Vec::with_capacity(line.len() / budget.continuation + 1);
    let mut start = 0;
    let mut available = MAX_LINE_OCTETS;

    while line.len() - start > available {
        let mut end = step_back(line.as_bytes(), start + available - budget.marker);
        while !line.is_char_boundary(end) {
            end -= 1;
        }

        segments.push(&line[start..end]);
        start = end;
        available = budget.continuation;
    }

    segments.push(&line[start..]);
    segments
}

/// Moves a cut that would land inside an `=XX` escape before the `=`.
fn before_escape(bytes: &[u8], end: usize) -> usize {
    bytes[end.saturating_sub(2)..end]
        .iter()
        .rposition(|b| *b == b'=')
        .map_or(end, |eq| end.saturating_sub(2) + eq)
}

/// Folds a line to the maximum length.
///
/// Lines longer than 75 octets are folded by inserting CRLF + space.
/// Folds at UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    split_octets(line, &LINE_BUDGET, |_, end| end).join("\r\n ")
}

/// Folds a quoted-printable content line with soft line breaks.
///
/// Each physical line ends in `=` and the continuation starts without
/// whitespace, as vCard 2.1 readers expect. An `=XX` escape is never
/// split.
#[must_use]
pub fn fold_quoted_printable(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    split_octets(line, &SOFT_BREAK_BUDGET, before_escape).join("=\r\n")
}
