//! Damage and critical expressions.
//!
//! Both parsers run the same pipeline: [`lex`] turns free text into
//! integer and punctuation tokens (anything else becomes a [`Token::Gap`]),
//! then a shape matcher picks out the documented forms. Callers decide
//! what happens when no shape matches; the roll engine falls back to
//! fixed defaults instead of failing.

pub mod crit;
pub mod damage;

pub use crit::CritRule;
pub use damage::{DamageExpr, DamageRoll, roll_damage};

use logos::Logos;

/// A token of a damage or critical expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A run of decimal digits. Values past `u64::MAX` saturate.
    Int(u64),
    /// The die marker `d`.
    Die,
    /// The multiplier marker `x`.
    Times,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `/`
    Slash,
    /// Any other character, including whitespace.
    Gap,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex("[0-9]+", |lex| saturating_int(lex.slice()))]
    Int(u64),

    #[token("d")]
    #[token("D")]
    Die,

    #[token("x")]
    #[token("X")]
    Times,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("/")]
    Slash,
}

fn saturating_int(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

/// Lex an expression into tokens. Never fails.
pub fn lex(source: &str) -> Vec<Token> {
    RawToken::lexer(source)
        .map(|result| match result {
            Ok(RawToken::Int(n)) => Token::Int(n),
            Ok(RawToken::Die) => Token::Die,
            Ok(RawToken::Times) => Token::Times,
            Ok(RawToken::Plus) => Token::Plus,
            Ok(RawToken::Minus) => Token::Minus,
            Ok(RawToken::Slash) => Token::Slash,
            Err(()) => Token::Gap,
        })
        .collect()
}
