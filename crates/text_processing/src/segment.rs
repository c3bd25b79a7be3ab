//! Lossless segmentation and fixed-size chunking
//!
//! Segmentation splits text into two interleaved classes: word tokens
//! (contiguous `\w` runs: letters, digits, underscore) and separator tokens
//! (contiguous `\W` runs). Every character belongs to exactly one token and
//! concatenating the tokens in order reconstructs the input exactly. No
//! normalization is applied here; correction stages decide that.

use once_cell::sync::Lazy;
use regex::Regex;

/// A classified unit of text produced by [`segment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Contiguous run of word characters (letters, digits, underscore)
    Word(&'a str),
    /// Contiguous run of non-word characters (whitespace, punctuation)
    Separator(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(s) | Token::Separator(s) => s,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)|(\W+)").expect("token pattern is valid"));

/// Split text into classified word/separator tokens.
///
/// Total and order-preserving: concatenating the returned tokens yields the
/// input unchanged.
pub fn segment(text: &str) -> Vec<Token<'_>> {
    TOKEN_RE
        .captures_iter(text)
        .map(|caps| {
            if let Some(word) = caps.get(1) {
                Token::Word(&text[word.range()])
            } else {
                let sep = caps.get(2).expect("alternation always captures");
                Token::Separator(&text[sep.range()])
            }
        })
        .collect()
}

/// Split text into chunks of at most `bound` characters.
///
/// Splits at fixed character offsets `[0, bound, 2*bound, ...]` regardless
/// of word boundaries, so a word may be split across two chunks.
///
/// Concatenating the chunks reproduces the input; the chunk count is
/// `ceil(char_count / bound)` and empty input yields no chunks.
pub fn chunk(text: &str, bound: usize) -> Vec<&str> {
    assert!(bound > 0, "chunk bound must be positive");

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut chars_in_chunk = 0;

    for (byte_idx, _) in text.char_indices() {
        if chars_in_chunk == bound {
            chunks.push(&text[start..byte_idx]);
            start = byte_idx;
            chars_in_chunk = 0;
        }
        chars_in_chunk += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}
