//! Feedback pattern calculation and representation
//!
//! A pattern encodes the per-letter feedback for a guess using base-3
//! encoding: 0 = absent, 1 = present (wrong position), 2 = correct. The
//! digits are packed into a single `u64`, position 0 in the lowest digit,
//! alongside the word length. With lengths capped at
//! [`MAX_WORD_LEN`](super::word::MAX_WORD_LEN) the code always fits.

use super::Word;
use super::word::MAX_WORD_LEN;
use std::fmt;

/// Per-letter feedback symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter does not occur in the remaining answer letters
    Absent,
    /// Letter occurs in the answer but at a different position
    Present,
    /// Letter is in the correct position
    Correct,
}

impl Feedback {
    /// Base-3 digit used in the packed pattern code
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u64 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    #[inline]
    const fn from_digit(digit: u64) -> Self {
        match digit {
            0 => Self::Absent,
            1 => Self::Present,
            _ => Self::Correct,
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - 'W'/'w'/'-'/'_'/⬜ for absent
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'W' | 'w' | '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Letter rendering (G/Y/W)
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Absent => 'W',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }

    /// Glyph rendering (🟩/🟨/⬜)
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Feedback pattern for a whole guess
///
/// `Copy + Eq + Hash`, so it works directly as a partition key when
/// bucketing candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    code: u64,
    len: u8,
}

/// Error for a pattern calculation over words of different lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    pub guess_len: usize,
    pub answer_len: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Guess length {} does not match answer length {}",
            self.guess_len, self.answer_len
        )
    }
}

impl std::error::Error for LengthMismatch {}

impl Pattern {
    /// All-correct pattern of the given length (perfect match)
    ///
    /// # Panics
    /// Panics if `len` exceeds [`MAX_WORD_LEN`].
    #[must_use]
    pub fn all_correct(len: usize) -> Self {
        assert!(
            len <= MAX_WORD_LEN,
            "Pattern length must be at most {MAX_WORD_LEN}, got {len}"
        );

        let mut code = 0u64;
        let mut multiplier = 1u64;
        for _ in 0..len {
            code += 2 * multiplier;
            multiplier *= 3;
        }
        Self {
            code,
            len: len as u8,
        }
    }

    /// All-absent pattern of the given length
    ///
    /// # Panics
    /// Panics if `len` exceeds [`MAX_WORD_LEN`].
    #[must_use]
    pub fn all_absent(len: usize) -> Self {
        assert!(
            len <= MAX_WORD_LEN,
            "Pattern length must be at most {MAX_WORD_LEN}, got {len}"
        );

        Self {
            code: 0,
            len: len as u8,
        }
    }

    /// Get the raw base-3 code
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.code
    }

    /// Number of per-letter symbols in the pattern
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// True only for the zero-length pattern, which no valid word produces
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if every position is Correct (the winning feedback)
    #[inline]
    #[must_use]
    pub fn is_all_correct(self) -> bool {
        self == Self::all_correct(self.len())
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Implements the game's exact feedback rules, including duplicate
    /// letters: a letter earns Present or Correct marks at most as many
    /// times as it occurs in the answer.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches Correct and consume that
    ///    occurrence from the answer's letter pool.
    /// 2. Second pass: mark remaining guess letters Present while the pool
    ///    still holds an unconsumed occurrence, consuming one per mark.
    /// 3. Encode as a base-3 number.
    ///
    /// # Errors
    /// Fails with [`LengthMismatch`] when the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer).unwrap();
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(pattern.letters(), "WWGWG");
    /// ```
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self, LengthMismatch> {
        if guess.len() != answer.len() {
            return Err(LengthMismatch {
                guess_len: guess.len(),
                answer_len: answer.len(),
            });
        }

        let len = guess.len();
        let guess_bytes = guess.bytes();
        let answer_bytes = answer.bytes();
        let mut marks = vec![Feedback::Absent; len];
        let mut available = answer.letter_counts();

        // First pass: exact position matches consume from the answer pool
        for i in 0..len {
            if guess_bytes[i] == answer_bytes[i] {
                marks[i] = Feedback::Correct;
                if let Some(count) = available.get_mut(&guess_bytes[i]) {
                    *count -= 1;
                }
            }
        }

        // Second pass: displaced letters, limited by remaining occurrences
        for i in 0..len {
            if marks[i] == Feedback::Absent
                && let Some(count) = available.get_mut(&guess_bytes[i])
                && *count > 0
            {
                marks[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Ok(Self::from_symbols(&marks))
    }

    /// Build a pattern from a symbol slice (position 0 first)
    ///
    /// # Panics
    /// Panics if the slice is longer than [`MAX_WORD_LEN`].
    #[must_use]
    pub fn from_symbols(symbols: &[Feedback]) -> Self {
        assert!(
            symbols.len() <= MAX_WORD_LEN,
            "Pattern length must be at most {MAX_WORD_LEN}, got {}",
            symbols.len()
        );

        let mut code = 0u64;
        let mut multiplier = 1u64;
        for &mark in symbols {
            code += mark.digit() * multiplier;
            multiplier *= 3;
        }
        Self {
            code,
            len: symbols.len() as u8,
        }
    }

    /// Decode the pattern into per-position symbols, position 0 first
    #[must_use]
    pub fn symbols(self) -> Vec<Feedback> {
        let mut val = self.code;
        (0..self.len)
            .map(|_| {
                let digit = val % 3;
                val /= 3;
                Feedback::from_digit(digit)
            })
            .collect()
    }

    /// Count the Correct positions
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.symbols()
            .iter()
            .filter(|&&m| m == Feedback::Correct)
            .count()
    }

    /// Count the Present positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.symbols()
            .iter()
            .filter(|&&m| m == Feedback::Present)
            .count()
    }

    /// Parse a pattern from a string like "GYWGY" or "🟩🟨⬜🟩🟨"
    ///
    /// Symbols as accepted by [`Feedback::from_char`]; any length up to the
    /// word-length cap. The letter and glyph encodings are equivalent and
    /// round-trip losslessly through [`Pattern::letters`] and
    /// [`Pattern::glyphs`].
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GYWGY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut symbols = Vec::new();
        for ch in s.chars() {
            symbols.push(Feedback::from_char(ch)?);
        }

        if symbols.is_empty() || symbols.len() > MAX_WORD_LEN {
            return None;
        }

        Some(Self::from_symbols(&symbols))
    }

    /// Render as G/Y/W letters
    #[must_use]
    pub fn letters(self) -> String {
        self.symbols().iter().map(|m| m.letter()).collect()
    }

    /// Render as colored glyphs
    #[must_use]
    pub fn glyphs(self) -> String {
        self.symbols().iter().map(|m| m.glyph()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pat(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap()).unwrap()
    }

    #[test]
    fn pattern_self_is_all_correct() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let pattern = pat(word, word);
            assert!(pattern.is_all_correct());
            assert_eq!(pattern, Pattern::all_correct(5));
        }
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = pat("abcde", "fghij");
        assert_eq!(pattern, Pattern::all_absent(5));
        assert_eq!(pattern.count_correct(), 0);
        assert_eq!(pattern.count_present(), 0);
    }

    #[test]
    fn pattern_base3_encoding_matches_positions() {
        // G=2, Y=1, W=0, position 0 in the lowest digit:
        // GYGWW = 2 + 1×3 + 2×9 + 0×27 + 0×81 = 23
        let pattern = Pattern::parse("GYGWW").unwrap();
        assert_eq!(pattern.value(), 23);
        assert_eq!(pattern.len(), 5);
    }

    #[test]
    fn pattern_duplicate_letters_conservation() {
        // SPEED vs ERASE: ERASE has only two E's, so the guess's two E's
        // are both Present but no third E mark may appear.
        let pattern = pat("speed", "erase");
        assert_eq!(pattern.letters(), "YWYYW");
        assert_eq!(pattern.count_correct(), 0);
        assert_eq!(pattern.count_present(), 3); // S, E, E
    }

    #[test]
    fn pattern_duplicate_letters_green_consumes_first() {
        // ROBOT vs FLOOR: the second O is an exact match and consumes one O,
        // leaving one O for the first (displaced) O.
        let pattern = pat("robot", "floor");
        assert_eq!(pattern.letters(), "YYWGW");
    }

    #[test]
    fn pattern_triple_duplicate_guess() {
        // EEEEE vs ERASE: exact matches at 0 and 4 consume both E's, so the
        // middle E's stay Absent rather than Present.
        let pattern = pat("eeeee", "erase");
        assert_eq!(pattern.letters(), "GWWWG");
    }

    #[test]
    fn pattern_duplicate_guess_single_answer_occurrence() {
        // ALLEY vs LOYAL: guess has two L's, answer has two; A and Y also
        // displaced. Pass 2 consumes occurrences left to right.
        let pattern = pat("alley", "loyal");
        assert_eq!(pattern.letters(), "YYYWY");
    }

    #[test]
    fn pattern_real_game_example() {
        // CRANE vs SLATE: A and E are exact, R is absent from SLATE
        let pattern = pat("crane", "slate");
        assert_eq!(pattern.letters(), "WWGWG");
        assert_eq!(pattern.count_correct(), 2);
        assert_eq!(pattern.count_present(), 0);
    }

    #[test]
    fn pattern_length_mismatch_rejected() {
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("ox").unwrap();
        assert_eq!(
            Pattern::calculate(&guess, &answer),
            Err(LengthMismatch {
                guess_len: 5,
                answer_len: 2,
            })
        );
    }

    #[test]
    fn pattern_parse_equivalent_encodings() {
        let p1 = Pattern::parse("GYGWW").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("gyg--").unwrap();
        let p4 = Pattern::parse("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert!(Pattern::parse("GXGGY").is_none()); // Invalid symbol
        assert!(Pattern::parse("").is_none()); // Empty
        assert!(Pattern::parse(&"G".repeat(40)).is_none()); // Over the cap
    }

    #[test]
    fn pattern_roundtrip_letters_and_glyphs() {
        for s in ["GYWGY", "WWWWW", "GGGGG", "YGW", "GYWYGYW"] {
            let p = Pattern::parse(s).unwrap();
            assert_eq!(Pattern::parse(&p.letters()), Some(p));
            assert_eq!(Pattern::parse(&p.glyphs()), Some(p));
        }
    }

    #[test]
    fn pattern_works_for_other_lengths() {
        // The engine never assumes five letters
        let pattern = pat("abc", "cab");
        assert_eq!(pattern.letters(), "YYY");

        let pattern = pat("lantern", "lantern");
        assert!(pattern.is_all_correct());
    }

    #[test]
    #[should_panic(expected = "Pattern length must be at most")]
    fn pattern_all_correct_rejects_oversized_length() {
        let _ = Pattern::all_correct(MAX_WORD_LEN + 1);
    }

    #[test]
    #[should_panic(expected = "Pattern length must be at most")]
    fn pattern_from_symbols_rejects_oversized_slice() {
        let symbols = vec![Feedback::Correct; MAX_WORD_LEN + 1];
        let _ = Pattern::from_symbols(&symbols);
    }

    #[test]
    fn pattern_symbols_roundtrip() {
        let p = Pattern::parse("GYWGY").unwrap();
        assert_eq!(Pattern::from_symbols(&p.symbols()), p);
    }
}
