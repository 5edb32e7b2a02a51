//! Lexical tokens and the statement tokenizer

use std::fmt;

use logos::Logos;

/// Binary operator recognized by the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `^`
    Pow,
}

impl Op {
    /// Binding strength used by the infix-to-postfix conversion.
    ///
    /// `+ -` bind weakest, `* / %` in the middle, `^` strongest.
    pub fn precedence(&self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div | Op::Rem => 2,
            Op::Pow => 3,
        }
    }

    /// The source character for this operator.
    pub fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
            Op::Rem => '%',
            Op::Pow => '^',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A lexical token of a single statement.
///
/// Tokens are immutable once produced. Numeric literals stay textual until
/// evaluation, so the tokenizer never has to care about integer range.
/// Characters the grammar does not know (`Symbol`) are still tokenized here
/// and rejected by later stages.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// A maximal run of decimal digits, e.g. `42`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Number(String),

    /// An identifier: letter or underscore start, alnum/underscore continuation.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Ident(String),

    /// One of the six arithmetic operators.
    #[token("+", |_| Op::Add)]
    #[token("-", |_| Op::Sub)]
    #[token("*", |_| Op::Mul)]
    #[token("/", |_| Op::Div)]
    #[token("%", |_| Op::Rem)]
    #[token("^", |_| Op::Pow)]
    Op(Op),

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// Any other non-space character, one token per character.
    ///
    /// This covers `=` and `,` in statement position as well as symbols the
    /// grammar rejects downstream.
    #[regex(r"[^ \t\r\n\f]", |lex| lex.slice().chars().next(), priority = 1)]
    Symbol(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) | Token::Ident(text) => write!(f, "{text}"),
            Token::Op(op) => write!(f, "{op}"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Symbol(c) => write!(f, "{c}"),
        }
    }
}

/// Tokenize one statement's text into a flat token sequence.
///
/// Whitespace is skipped. Tokenization is total: every non-space character
/// lands in some token, so this never fails.
pub fn tokenize(input: &str) -> Vec<Token> {
    Token::lexer(input).flatten().collect()
}
