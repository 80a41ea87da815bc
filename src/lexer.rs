use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{Token, TokenKind, UNARY_MINUS};

/// Single-character operators and parentheses, each always its own token.
const OPERATOR_CHARS: &str = "+-*/^()";

/// Names split out of the input wherever they occur, checked in this order.
const KEYWORDS: [&str; 5] = ["pi", "e", "sin", "cos", "tan"];

/// The lexer, which produces classified tokens from an input string.
///
/// The input is lowercased up front. Numbers (`digits(.digits)?`), operator
/// characters and keywords are always separate tokens, even without whitespace
/// around them; any other run of characters becomes one token of kind
/// [`TokenKind::None`].
///
/// A `-` is binary only when the previous token is a number or a constant.
/// Every other `-` is emitted as [`TokenKind::UnaryMinus`] with the text `~`.
#[derive(Clone)]
pub struct Lexer {
    input: String,
    pos: usize,
    prev: Option<TokenKind>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_lowercase(),
            pos: 0,
            prev: None,
        }
    }

    /// Peek at the current character.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advance the position by one character.
    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Skip whitespace.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn keyword_at(&self, pos: usize) -> Option<&'static str> {
        let rest = &self.input[pos..];
        KEYWORDS.into_iter().find(|kw| rest.starts_with(kw))
    }

    /// Starts a new token: whitespace, digits, operator characters and keywords.
    fn is_boundary(&self, c: char) -> bool {
        c.is_whitespace()
            || c.is_ascii_digit()
            || OPERATOR_CHARS.contains(c)
            || self.keyword_at(self.pos).is_some()
    }

    /// Consumes `digits(.digits)?`. The dot is only taken when a digit follows it.
    fn scan_number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let mut rest = self.input[self.pos..].chars();
        if rest.next() == Some('.') && rest.next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }
    }

    /// Get the next token from the input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        let start_pos = self.pos;
        let c = self.peek()?;

        if c.is_ascii_digit() {
            self.scan_number();
        } else if OPERATOR_CHARS.contains(c) {
            self.advance();
        } else if let Some(keyword) = self.keyword_at(start_pos) {
            self.pos += keyword.len();
        } else {
            // Unknown run, e.g. "$" or "xp" in "exp"
            self.advance();
            while let Some(nc) = self.peek() {
                if self.is_boundary(nc) {
                    break;
                }
                self.advance();
            }
        }

        let text = &self.input[start_pos..self.pos];
        let mut token = Token::classify(text, start_pos);
        if token.kind == TokenKind::Minus && !self.prev.is_some_and(TokenKind::is_operand) {
            token = Token::new(TokenKind::UnaryMinus, UNARY_MINUS, start_pos);
        }
        log::trace!(
            "lexed {:?} '{}' at position {}",
            token.kind,
            token.text,
            token.position
        );
        self.prev = Some(token.kind);
        Some(token)
    }

    /// Collects the remaining tokens.
    pub fn tokenize(self) -> Vec<Token> {
        self.collect()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenizes `input` in one call.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

/// Renders the normalized token stream: lowercased tokens separated by single
/// spaces, with unary minus written as `~`.
///
/// ```
/// use rpn_rs::lexer::normalize;
///
/// assert_eq!(normalize("3+-2"), "3 + ~ 2");
/// assert_eq!(normalize("  SIN(Pi/2) "), "sin ( pi / 2 )");
/// ```
pub fn normalize(input: &str) -> String {
    let mut normalized = String::new();
    for token in tokenize(input) {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(&token.text);
    }
    normalized
}

/// Texts of the tokens, in input order.
pub fn token_texts(input: &str) -> Vec<String> {
    tokenize(input).into_iter().map(|t| t.text).collect()
}
