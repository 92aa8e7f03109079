//! Static line-breaking tables for CJK and Latin text.
//!
//! Two punctuation sets are involved. [`LINE_START_PROHIBITED`] holds the
//! characters that must not open a line (closing brackets, commas, stops,
//! closing quotes, dashes). [`TRAILING_PUNCTUATION`] is wider: it also holds
//! opening brackets and symbols, and describes the run a line may end with
//! when a prohibited character has to be pulled back together with it.

/// Characters that must not begin a line.
pub const LINE_START_PROHIBITED: &[char] = &[
    '\u{FF0C}', // ，
    '\u{3002}', // 。
    '\u{FF1A}', // ：
    '\u{FF1B}', // ；
    '\u{FF01}', // ！
    '\u{FF1F}', // ？
    '\u{3001}', // 、
    '\u{FF09}', // ）
    '\u{300B}', // 》
    '\u{300D}', // 」
    '\u{3011}', // 】
    ',',
    '.',
    ':',
    ';',
    '!',
    '?',
    '^',
    ')',
    '>',
    '}',
    ']',
    '\u{2026}', // …
    '~',
    '%',
    '\u{00B7}', // ·
    '\u{2019}', // ’
    '\u{201D}', // ”
    '`',
    '-',
    '\u{2014}', // —
    '_',
    '|',
    '\\',
    '/',
];

/// Characters forming the punctuation run at the end of a line.
pub const TRAILING_PUNCTUATION: &[char] = &[
    '\u{FF0C}', '\u{3002}', '\u{FF1A}', '\u{FF1B}', '\u{FF01}', '\u{FF1F}', '\u{3001}',
    '\u{FF09}', '\u{300B}', '\u{300D}', '\u{3011}', ',', '.', ':', ';', '!', '?', '^', ')', '>',
    '}', ']', '\u{2026}', '~', '%', '\u{00B7}', '\u{2019}', '\u{201D}', '`', '-', '\u{2014}',
    '_', '|', '\\', '/',
    // openers and symbols
    '\u{FF08}', '\u{300A}', '\u{300C}', '\u{3010}', '(', '<', '{', '[', '\u{2018}', '\u{201C}',
    '@', '#', '\u{FFE5}', '$', '&',
];

/// `ch` may not open a line.
pub fn is_line_start_prohibited(ch: char) -> bool {
    LINE_START_PROHIBITED.contains(&ch)
}

/// `ch` belongs to the trailing punctuation run set.
pub fn is_trailing_punctuation(ch: char) -> bool {
    TRAILING_PUNCTUATION.contains(&ch)
}

/// `ch` is an ASCII digit.
pub fn is_numeral(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// `ch` is an ASCII Latin letter.
pub fn is_latin(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Length of the longest suffix of `chars` whose characters all satisfy `pred`.
pub fn trailing_run_len(chars: &[char], pred: impl Fn(char) -> bool) -> usize {
    chars.iter().rev().take_while(|&&ch| pred(ch)).count()
}
