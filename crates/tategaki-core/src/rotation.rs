//! Which glyphs lie on their side in vertical text
//!
//! Fonts draw dashes, brackets and the long vowel mark for horizontal
//! text. Set vertically they must turn a quarter clockwise. The ideographic
//! comma and full stop sit in the wrong corner of the cell for vertical
//! text; a half turn moves them to the diagonally opposite one.
//!
//! Angles use the counter-clockwise-positive convention, so a quarter turn
//! clockwise is −90°.

/// Long vowel marks, dashes, brackets and equals signs
const QUARTER_TURN: &[char] = &[
    '－', 'ー', 'ｰ', '–', '−', '—', '「', '」', '[', ']', '［', '］', '【', '】', '(', ')',
    '（', '）', '=', '＝',
];

/// Ideographic comma and full stop
const HALF_TURN: &[char] = &['、', '。'];

/// How a glyph is turned before it lands in its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Upright,
    QuarterClockwise,
    HalfTurn,
}

impl Rotation {
    /// Classify one character
    pub fn for_char(ch: char) -> Self {
        if QUARTER_TURN.contains(&ch) {
            Self::QuarterClockwise
        } else if HALF_TURN.contains(&ch) {
            Self::HalfTurn
        } else {
            Self::Upright
        }
    }

    /// Angle in degrees, counter-clockwise positive
    pub fn degrees(&self) -> i32 {
        match self {
            Self::Upright => 0,
            Self::QuarterClockwise => -90,
            Self::HalfTurn => 180,
        }
    }

    pub fn is_upright(&self) -> bool {
        matches!(self, Self::Upright)
    }
}

/// Rotation angle for `ch` in degrees, counter-clockwise positive
pub fn rotation_angle(ch: char) -> i32 {
    Rotation::for_char(ch).degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashes_and_brackets_turn_a_quarter() {
        for ch in ['ー', '−', '（', '）', '［', '］', '【', '】', '「', '」', '＝', '－', '—'] {
            assert_eq!(rotation_angle(ch), -90, "{ch} should turn a quarter");
        }
    }

    #[test]
    fn test_half_width_brackets_turn_a_quarter() {
        for ch in ['(', ')', '[', ']', '=', 'ｰ', '–'] {
            assert_eq!(Rotation::for_char(ch), Rotation::QuarterClockwise);
        }
    }

    #[test]
    fn test_comma_and_full_stop_turn_half() {
        assert_eq!(rotation_angle('、'), 180);
        assert_eq!(rotation_angle('。'), 180);
    }

    #[test]
    fn test_everything_else_stays_upright() {
        for ch in ['あ', '漢', 'Ａ', '1', ' ', '・', '！'] {
            assert_eq!(rotation_angle(ch), 0, "{ch} should stay upright");
            assert!(Rotation::for_char(ch).is_upright());
        }
    }

    #[test]
    fn test_classes_are_disjoint() {
        for ch in QUARTER_TURN {
            assert!(!HALF_TURN.contains(ch));
        }
    }
}
