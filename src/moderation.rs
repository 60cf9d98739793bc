//! Chirp validation and banned-word redaction.
//!
//! [`Moderator::moderate`] is the whole pipeline: reject over-long chirps,
//! then replace every banned token with [`MASK`]. Finding a banned word is
//! not an error; it is reported through [`Moderation::flagged`] alongside a
//! successful result.
//!
//! ```rust
//! use chirpy::moderation::Moderator;
//!
//! let out = Moderator::default().moderate("what a Kerfuffle today").unwrap();
//! assert_eq!(out.body, "what a **** today");
//! assert!(out.flagged);
//! ```

use std::collections::HashSet;

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Longest accepted chirp, in characters.
pub const MAX_CHIRP_LEN: usize = 140;

/// Replacement for a banned token.
pub const MASK: &str = "****";

const DEFAULT_BANNED: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Returned when a chirp cannot be accepted at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Chirp is too long")]
    TooLong { len: usize, max: usize },
}

// ── BannedWords ───────────────────────────────────────────────────────────────

/// The set of banned terms, stored lowercase.
#[derive(Debug, Clone)]
pub struct BannedWords {
    words: HashSet<String>,
}

impl BannedWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// True when `token`, lowercased, is exactly a banned term.
    ///
    /// A token containing any Unicode punctuation is never banned, so
    /// `"kerfuffle!"` passes through untouched.
    pub fn is_banned(&self, token: &str) -> bool {
        if has_punctuation(token) {
            return false;
        }
        self.words.contains(&token.to_lowercase())
    }
}

impl Default for BannedWords {
    fn default() -> Self {
        Self::new(DEFAULT_BANNED)
    }
}

fn has_punctuation(s: &str) -> bool {
    s.chars()
        .any(|c| c.general_category_group() == GeneralCategoryGroup::Punctuation)
}

// ── Moderator ─────────────────────────────────────────────────────────────────

/// Result of moderating one chirp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moderation {
    /// The chirp with banned tokens replaced by [`MASK`].
    pub body: String,
    /// Whether at least one token was replaced.
    pub flagged: bool,
}

/// Validates and redacts chirps against a [`BannedWords`] set.
#[derive(Debug, Clone, Default)]
pub struct Moderator {
    banned: BannedWords,
}

impl Moderator {
    pub fn new(banned: BannedWords) -> Self {
        Self { banned }
    }

    /// Validates `body` and redacts banned tokens.
    ///
    /// Tokens are split on a single literal space. Runs of spaces are kept:
    /// `"a  b"` has an empty token in the middle and comes back as `"a  b"`.
    pub fn moderate(&self, body: &str) -> Result<Moderation, ValidationError> {
        let len = body.chars().count();
        if len > MAX_CHIRP_LEN {
            return Err(ValidationError::TooLong { len, max: MAX_CHIRP_LEN });
        }

        // The lowercase copy splits on the same delimiter; positions line up
        // with the original tokens so casing survives in the output.
        let lowered = body.to_lowercase();
        let mut flagged = false;
        let tokens: Vec<&str> = body
            .split(' ')
            .zip(lowered.split(' '))
            .map(|(original, lower)| {
                if self.banned.is_banned(lower) {
                    flagged = true;
                    MASK
                } else {
                    original
                }
            })
            .collect();

        Ok(Moderation { body: tokens.join(" "), flagged })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moderate(body: &str) -> Result<Moderation, ValidationError> {
        Moderator::default().moderate(body)
    }

    #[test]
    fn classifier_matches_exact_terms_case_insensitively() {
        let banned = BannedWords::default();
        assert!(banned.is_banned("kerfuffle"));
        assert!(banned.is_banned("SHARBERT"));
        assert!(banned.is_banned("ForNax"));
        assert!(!banned.is_banned("kerfuffles"));
        assert!(!banned.is_banned("fornaxx"));
        assert!(!banned.is_banned(""));
    }

    #[test]
    fn classifier_skips_punctuated_tokens() {
        let banned = BannedWords::default();
        assert!(!banned.is_banned("kerfuffle!"));
        assert!(!banned.is_banned("'sharbert'"));
        assert!(!banned.is_banned("fornax…"));
        assert!(!banned.is_banned("«fornax»"));
    }

    #[test]
    fn custom_terms_are_lowercased() {
        let banned = BannedWords::new(["Grumble"]);
        assert!(banned.is_banned("grumble"));
        assert!(banned.is_banned("GRUMBLE"));
        assert!(!banned.is_banned("kerfuffle"));
    }

    #[test]
    fn redacts_banned_word_in_sentence() {
        let out = moderate("This is a kerfuffle opinion I need to share with the world").unwrap();
        assert_eq!(out.body, "This is a **** opinion I need to share with the world");
        assert!(out.flagged);
    }

    #[test]
    fn redacts_every_occurrence_and_keeps_casing_elsewhere() {
        let out = moderate("Sharbert and FORNAX met a Kerfuffle").unwrap();
        assert_eq!(out.body, "**** and **** met a ****");
        assert!(out.flagged);
    }

    #[test]
    fn case_insensitive() {
        let out = moderate("KerFuffle").unwrap();
        assert_eq!(out, Moderation { body: MASK.to_owned(), flagged: true });
    }

    #[test]
    fn punctuation_adjacent_words_pass_through() {
        let out = moderate("kerfuffle!").unwrap();
        assert_eq!(out, Moderation { body: "kerfuffle!".to_owned(), flagged: false });

        let out = moderate("kerfuffle").unwrap();
        assert_eq!(out, Moderation { body: "****".to_owned(), flagged: true });
    }

    #[test]
    fn clean_input_is_returned_unchanged() {
        for body in [
            "",
            " ",
            "   ",
            "a  b",
            " leading and trailing ",
            "tabs\tare\tnot delimiters",
            "I had something interesting for breakfast",
            "héllo wörld ✨",
        ] {
            let out = moderate(body).unwrap();
            assert_eq!(out.body, body);
            assert!(!out.flagged, "{body:?} should not be flagged");
        }
    }

    #[test]
    fn tab_separated_banned_word_is_not_a_token() {
        let out = moderate("kerfuffle\tnow").unwrap();
        assert_eq!(out.body, "kerfuffle\tnow");
        assert!(!out.flagged);
    }

    #[test]
    fn double_spaces_survive_redaction() {
        let out = moderate("a  fornax  b").unwrap();
        assert_eq!(out.body, "a  ****  b");
    }

    #[test]
    fn length_limit_is_inclusive_at_140() {
        let body = "a".repeat(MAX_CHIRP_LEN);
        assert_eq!(moderate(&body).unwrap().body, body);
    }

    #[test]
    fn over_limit_fails_regardless_of_content() {
        let body = "a".repeat(MAX_CHIRP_LEN + 1);
        assert_eq!(
            moderate(&body),
            Err(ValidationError::TooLong { len: 141, max: 140 })
        );

        let banned = "kerfuffle ".repeat(20);
        assert!(matches!(moderate(&banned), Err(ValidationError::TooLong { .. })));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 140 two-byte characters is 280 bytes but still a valid chirp.
        let body = "é".repeat(MAX_CHIRP_LEN);
        assert!(moderate(&body).is_ok());
    }

    #[test]
    fn moderation_is_idempotent() {
        let first = moderate("sharbert says hi to fornax").unwrap();
        let second = moderate(&first.body).unwrap();
        assert_eq!(second.body, first.body);
        assert!(!second.flagged);
    }

    #[test]
    fn too_long_error_message() {
        let err = ValidationError::TooLong { len: 141, max: 140 };
        assert_eq!(err.to_string(), "Chirp is too long");
    }
}
