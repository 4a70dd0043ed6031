use crate::links::{
    anchor::find_anchor,
    kinds::{Anchor, MdLink, WikiLink},
};

use super::{cursor::Cursor, span::Span};

/// A link-shaped fragment found while scanning a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// `[..](..)`, `[[..]]` or `[[..]](..)`, possibly `!`-prefixed.
    Markdown(Span),
    /// A whole `<a>...</a>` element, or just the start tag when unclosed.
    Anchor(Span),
}

impl Candidate {
    pub fn span(self) -> Span {
        match self {
            Candidate::Markdown(sp) | Candidate::Anchor(sp) => sp,
        }
    }
}

/// Closing positions for the delimiters of one line, computed in a single
/// pass so a failed match is never rescanned from the next opener.
struct Delimiters {
    /// Local index of the matching `]` or `)` for each `[` or `(`.
    close_of: Vec<Option<usize>>,
    /// Start of the last `]]` on the line.
    last_wiki_close: Option<usize>,
}

impl Delimiters {
    fn new(s: &str) -> Self {
        let mut close_of = vec![None; s.len()];
        let mut titles = vec![];
        let mut dests = vec![];

        for (i, b) in s.bytes().enumerate() {
            let (stack, opens) = match b {
                MdLink::TITLE_OPEN | MdLink::TITLE_CLOSE => {
                    (&mut titles, b == MdLink::TITLE_OPEN)
                }
                MdLink::DEST_OPEN | MdLink::DEST_CLOSE => (&mut dests, b == MdLink::DEST_OPEN),
                _ => continue,
            };
            if opens {
                stack.push(i);
            } else if let Some(open) = stack.pop() {
                close_of[open] = Some(i);
            }
        }

        Self {
            close_of,
            last_wiki_close: s.rfind(WikiLink::CLOSE),
        }
    }
}

/// Scans a single line (without its terminator) for link candidates.
///
/// Code spans are raw zones and are skipped whole, as are backslash
/// escapes. Candidates never overlap and come out in source order.
pub fn scan_line(base: usize, s: &str) -> Vec<Candidate> {
    let delims = Delimiters::new(s);
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];

    while !cur.eof() {
        if cur.peek() == Some(b'\\') {
            cur.bump();
            if cur.peek().is_some_and(|b| b.is_ascii_punctuation()) {
                cur.bump();
            }
            continue;
        }
        if skip_code_span(&mut cur) {
            continue;
        }
        if let Some(sp) = try_scan_anchor(&mut cur) {
            out.push(Candidate::Anchor(sp));
            continue;
        }
        if let Some(sp) = try_scan_markdown_link(&mut cur, &delims) {
            out.push(Candidate::Markdown(sp));
            continue;
        }
        cur.bump();
    }

    out
}

/// Skips a code span opened by a run of backticks and closed by a run of
/// the same length. An unclosed run is skipped as plain text.
fn skip_code_span(cur: &mut Cursor<'_>) -> bool {
    let ticks = cur.run_of(b'`');
    if ticks == 0 {
        return false;
    }
    cur.bump_n(ticks);

    let saved = cur.clone();
    while !cur.eof() {
        let run = cur.run_of(b'`');
        if run == ticks {
            cur.bump_n(run);
            return true;
        }
        cur.bump_n(run.max(1));
    }

    // Unclosed: only the opening run is consumed
    *cur = saved;
    true
}

fn try_scan_anchor(cur: &mut Cursor<'_>) -> Option<Span> {
    if !cur.starts_with_ignore_case(Anchor::OPEN_PREFIX) {
        return None;
    }
    let range = find_anchor(cur.rest())?;
    if range.start != 0 {
        return None;
    }

    let start = cur.pos();
    cur.bump_n(range.end);
    Some(Span {
        start,
        end: cur.pos(),
    })
}

/// Attempts to scan a markdown or wiki link starting at the current position.
///
/// On failure the cursor is restored.
fn try_scan_markdown_link(cur: &mut Cursor<'_>, delims: &Delimiters) -> Option<Span> {
    let saved = cur.clone();
    let start = cur.pos();

    if cur.starts_with(MdLink::EMBED.as_bytes()) && cur.peek_at(1) == Some(MdLink::TITLE_OPEN) {
        cur.bump();
    }

    let scanned = if cur.starts_with(WikiLink::OPEN.as_bytes()) {
        scan_wikilink_shape(cur, delims)
    } else if cur.peek() == Some(MdLink::TITLE_OPEN) {
        scan_balanced(cur, delims, MdLink::TITLE_OPEN)
            && scan_balanced(cur, delims, MdLink::DEST_OPEN)
    } else {
        false
    };

    if !scanned {
        *cur = saved;
        return None;
    }

    Some(Span {
        start,
        end: cur.pos(),
    })
}

/// `[[name]]` with an optional `(destination)` directly after it.
fn scan_wikilink_shape(cur: &mut Cursor<'_>, delims: &Delimiters) -> bool {
    cur.bump_n(WikiLink::OPEN.len());
    if delims.last_wiki_close.is_none_or(|last| last < cur.i) {
        return false;
    }
    let Some(close) = cur.rest().find(WikiLink::CLOSE) else {
        return false;
    };
    cur.bump_n(close + WikiLink::CLOSE.len());

    // An unmatched `(` leaves the cursor where it is
    scan_balanced(cur, delims, MdLink::DEST_OPEN);
    true
}

/// Consumes from an `open` delimiter to its matching close, honouring
/// nesting. Leaves the cursor alone when there is no match.
fn scan_balanced(cur: &mut Cursor<'_>, delims: &Delimiters, open: u8) -> bool {
    if cur.peek() != Some(open) {
        return false;
    }
    match delims.close_of.get(cur.i).copied().flatten() {
        Some(close) => {
            cur.bump_n(close + 1 - cur.i);
            true
        }
        None => false,
    }
}
