//! Box-drawing character sets and junction merging.

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set to use for box-drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

impl CharSet {
    pub fn from_unicode_flag(unicode: bool) -> Self {
        if unicode {
            CharSet::Unicode
        } else {
            CharSet::Ascii
        }
    }
}

// ─── BoxChars ─────────────────────────────────────────────────────────────────

/// Characters used to outline a node box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
        }
    }

    /// Rounded corners, used for leaf nodes.
    pub fn rounded() -> Self {
        Self {
            top_left: '╭',
            top_right: '╮',
            bottom_left: '╰',
            bottom_right: '╯',
            ..Self::unicode()
        }
    }

    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
        }
    }

    /// Box characters for a node; leaves get rounded corners when the
    /// charset allows it.
    pub fn for_node(cs: CharSet, leaf: bool) -> Self {
        match (cs, leaf) {
            (CharSet::Ascii, _) => Self::ascii(),
            (CharSet::Unicode, true) => Self::rounded(),
            (CharSet::Unicode, false) => Self::unicode(),
        }
    }
}

// ─── Arms ────────────────────────────────────────────────────────────────────

/// Set of directions a line cell connects to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Arms(u8);

impl Arms {
    pub const NONE: Self = Self(0);
    pub const UP: Self = Self(1);
    pub const DOWN: Self = Self(2);
    pub const LEFT: Self = Self(4);
    pub const RIGHT: Self = Self(8);

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Decode a line-drawing character. Returns None for anything else.
    pub fn from_char(c: char) -> Option<Self> {
        let (up, down, left, right) = match c {
            '─' | '-' => (false, false, true, true),
            '│' | '|' => (true, true, false, false),
            '┌' | '╭' => (false, true, false, true),
            '┐' | '╮' => (false, true, true, false),
            '└' | '╰' => (true, false, false, true),
            '┘' | '╯' => (true, false, true, false),
            '├' => (true, true, false, true),
            '┤' => (true, true, true, false),
            '┬' => (false, true, true, true),
            '┴' => (true, false, true, true),
            '┼' | '+' => (true, true, true, true),
            _ => return None,
        };
        Some(Self::from_flags(up, down, left, right))
    }

    fn from_flags(up: bool, down: bool, left: bool, right: bool) -> Self {
        let mut arms = Self::NONE;
        for (on, arm) in [
            (up, Self::UP),
            (down, Self::DOWN),
            (left, Self::LEFT),
            (right, Self::RIGHT),
        ] {
            if on {
                arms = arms.union(arm);
            }
        }
        arms
    }

    /// Character drawing exactly these arms in the given charset.
    pub fn to_char(self, cs: CharSet) -> char {
        let up = self.contains(Self::UP);
        let down = self.contains(Self::DOWN);
        let left = self.contains(Self::LEFT);
        let right = self.contains(Self::RIGHT);
        if cs == CharSet::Ascii {
            return match (up || down, left || right) {
                (false, false) => ' ',
                (true, false) => '|',
                (false, true) => '-',
                (true, true) => '+',
            };
        }
        match (up, down, left, right) {
            (false, false, false, false) => ' ',
            (_, _, false, false) => '│',
            (false, false, _, _) => '─',
            (false, true, false, true) => '┌',
            (false, true, true, false) => '┐',
            (true, false, false, true) => '└',
            (true, false, true, false) => '┘',
            (true, true, false, true) => '├',
            (true, true, true, false) => '┤',
            (false, true, true, true) => '┬',
            (true, false, true, true) => '┴',
            (true, true, true, true) => '┼',
        }
    }
}

impl std::ops::BitOr for Arms {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_charset.rs"]
mod tests;
