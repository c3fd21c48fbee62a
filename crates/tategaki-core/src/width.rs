//! Half-width to full-width normalization
//!
//! Every glyph of vertical text occupies one square cell, so narrow forms
//! are widened once, up front, before the text is split into columns:
//!
//! - half-width katakana and punctuation (U+FF61–U+FF9F) become their
//!   full-width counterparts; the voiced sound marks stay separate spacing
//!   marks rather than being composed into the preceding kana
//! - printable ASCII (U+0021–U+007E) becomes U+FF01–U+FF5E, except `"`,
//!   `'`, `\` and `~`, which have no unambiguous full-width partner
//!
//! Spaces and line breaks pass through untouched.

/// Full-width forms of U+FF61..=U+FF9F, in code point order
const HALF_WIDTH_KATAKANA: [char; 63] = [
    '。', '「', '」', '、', '・', 'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ', 'ー',
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ',
    'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ン', '゛', '゜',
];

const HALF_WIDTH_KATAKANA_START: u32 = 0xFF61;
const FULL_WIDTH_ASCII_OFFSET: u32 = 0xFEE0;

/// Widen a single character, or return it unchanged
pub fn to_full_width_char(ch: char) -> char {
    let cp = ch as u32;
    match ch {
        '\u{FF61}'..='\u{FF9F}' => HALF_WIDTH_KATAKANA[(cp - HALF_WIDTH_KATAKANA_START) as usize],
        '"' | '\'' | '\\' | '~' => ch,
        '!'..='~' => char::from_u32(cp + FULL_WIDTH_ASCII_OFFSET).unwrap_or(ch),
        _ => ch,
    }
}

/// Widen every narrow character in `text`
pub fn to_full_width(text: &str) -> String {
    text.chars().map(to_full_width_char).collect()
}
