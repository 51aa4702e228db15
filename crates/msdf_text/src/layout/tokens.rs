//! Break-opportunity tokenization
//!
//! Splits input text into words, spaces, and forced line breaks according
//! to the `white-space` mode. Collapsing modes (`normal`, `nowrap`) reduce
//! whitespace runs to single breakable spaces and never emit leading or
//! trailing space tokens; `pre` keeps every whitespace character.

use crate::metrics::WhiteSpace;

/// One break-opportunity unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Maximal run of non-whitespace characters; never split by wrapping
    Word(String),
    /// A single space. In collapsing modes this stands for a collapsed
    /// whitespace run; in `pre` mode one token per whitespace character.
    Space,
    /// Forced line break (`pre` mode only)
    Newline,
}

pub(crate) fn tokenize(text: &str, mode: WhiteSpace) -> Vec<Token> {
    match mode {
        WhiteSpace::Normal | WhiteSpace::Nowrap => tokenize_collapsing(text),
        WhiteSpace::Pre => tokenize_preserving(text),
    }
}

fn tokenize_collapsing(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        if !tokens.is_empty() {
            tokens.push(Token::Space);
        }
        tokens.push(Token::Word(word.to_string()));
    }
    tokens
}

fn tokenize_preserving(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for ch in text.chars() {
        match ch {
            '\n' => {
                flush_word(&mut word, &mut tokens);
                tokens.push(Token::Newline);
            }
            // Carriage returns carry no layout meaning of their own
            '\r' => flush_word(&mut word, &mut tokens),
            c if c.is_whitespace() => {
                flush_word(&mut word, &mut tokens);
                tokens.push(Token::Space);
            }
            c => word.push(c),
        }
    }
    flush_word(&mut word, &mut tokens);

    tokens
}

fn flush_word(word: &mut String, tokens: &mut Vec<Token>) {
    if !word.is_empty() {
        tokens.push(Token::Word(std::mem::take(word)));
    }
}
