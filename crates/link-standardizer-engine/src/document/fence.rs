#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    fn from_marker(c: char) -> Option<Self> {
        match c {
            CodeFence::BACKTICK => Some(Self::Backticks),
            CodeFence::TILDE => Some(Self::Tildes),
            _ => None,
        }
    }
}

/// The opening line of a fenced block: which character and how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    pub kind: FenceKind,
    pub len: usize,
}

/// Fenced code block delimiters. Lines inside a fence are never rewritten.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: char = '`';
    pub const TILDE: char = '~';
    pub const MIN_LEN: usize = 3;

    /// Splits `line` into its marker run and whatever follows it.
    ///
    /// Leading indentation and blockquote markers are ignored.
    fn marker_run(line: &str) -> Option<(Fence, &str)> {
        let t = line
            .trim_end_matches(['\r', '\n'])
            .trim_start_matches(|c: char| c.is_whitespace() || c == '>');
        let marker = t.chars().next()?;
        let kind = FenceKind::from_marker(marker)?;
        let len = t.len() - t.trim_start_matches(marker).len();
        if len < Self::MIN_LEN {
            return None;
        }
        Some((Fence { kind, len }, &t[len..]))
    }

    /// Returns the fence if `line` opens one.
    ///
    /// A backtick fence's info string may not contain backticks; such a
    /// line is an inline code span instead.
    pub fn sig(line: &str) -> Option<Fence> {
        let (fence, info) = Self::marker_run(line)?;
        if fence.kind == FenceKind::Backticks && info.contains(Self::BACKTICK) {
            return None;
        }
        Some(fence)
    }

    /// True when `line` closes `open`: a run of the same character at
    /// least as long, followed by nothing but whitespace.
    pub fn closes(open: Fence, line: &str) -> bool {
        Self::marker_run(line).is_some_and(|(fence, rest)| {
            fence.kind == open.kind && fence.len >= open.len && rest.trim().is_empty()
        })
    }
}
