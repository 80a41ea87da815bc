//! Type definitions for the converter and evaluator.
//!
//! This module contains the token data model shared by the lexer, the
//! shunting-yard converter and the postfix evaluator, the operator
//! precedence table, and the [`Postfix`] program type.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Real;
use crate::error::ExprError;

/// Capacity of the operator stack and of the value stack.
///
/// Deeper nesting than this fails with [`ExprError::CapacityExceeded`].
pub const EXP_RPN_MAX_STACK_DEPTH: usize = 256;

/// Size of the error message buffer in [`crate::ffi::RpnResult`], including the NUL.
pub const EXP_RPN_ERROR_BUFFER_SIZE: usize = 128;

/// Text used for the unary minus operator in postfix output.
pub const UNARY_MINUS: &str = "~";

/// A named constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constant {
    /// π
    Pi,
    /// Euler's number
    E,
}

impl Constant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }

    pub fn value(self) -> Real {
        match self {
            Constant::Pi => crate::constants::PI,
            Constant::E => crate::constants::E,
        }
    }
}

/// A single-argument function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Function {
    Sine,
    Cosine,
    Tangent,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Function::Sine),
            "cos" => Some(Function::Cosine),
            "tan" => Some(Function::Tangent),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sine => "sin",
            Function::Cosine => "cos",
            Function::Tangent => "tan",
        }
    }

    /// Applies the function to an argument in radians.
    pub fn apply(self, x: Real) -> Real {
        match self {
            Function::Sine => crate::functions::sin(x),
            Function::Cosine => crate::functions::cos(x),
            Function::Tangent => crate::functions::tan(x),
        }
    }
}

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// A numeric literal such as `42` or `3.14`.
    Number,
    /// `pi` or `e`.
    Constant(Constant),
    Plus,
    Minus,
    Multiply,
    Divide,
    Exponent,
    /// Negation, written `~` in postfix output.
    UnaryMinus,
    LeftParen,
    RightParen,
    /// `sin`, `cos` or `tan`.
    Function(Function),
    /// Anything else. Never part of a valid program.
    None,
}

impl TokenKind {
    /// Classifies the text of a single token.
    ///
    /// Numbers must look like `digits(.digits)?`; signs, exponents and names such
    /// as `inf` are not numbers.
    pub fn classify(text: &str) -> TokenKind {
        match text {
            "+" => TokenKind::Plus,
            "-" => TokenKind::Minus,
            "*" => TokenKind::Multiply,
            "/" => TokenKind::Divide,
            "^" => TokenKind::Exponent,
            UNARY_MINUS => TokenKind::UnaryMinus,
            "(" => TokenKind::LeftParen,
            ")" => TokenKind::RightParen,
            _ => {
                if let Some(constant) = Constant::from_name(text) {
                    TokenKind::Constant(constant)
                } else if let Some(function) = Function::from_name(text) {
                    TokenKind::Function(function)
                } else if is_numeric_literal(text) {
                    TokenKind::Number
                } else {
                    TokenKind::None
                }
            }
        }
    }

    /// Operator precedence, higher binds tighter. `None` for anything that is
    /// not an operator.
    ///
    /// | Precedence | Operators   | Associativity |
    /// |------------|-------------|---------------|
    /// | 1          | `+` `-`     | Left          |
    /// | 2          | `*` `/`     | Left          |
    /// | 3          | `^` `~`     | Right         |
    pub fn precedence(self) -> Option<u8> {
        match self {
            TokenKind::Plus | TokenKind::Minus => Some(1),
            TokenKind::Multiply | TokenKind::Divide => Some(2),
            TokenKind::Exponent | TokenKind::UnaryMinus => Some(3),
            _ => None,
        }
    }

    pub fn is_operator(self) -> bool {
        self.precedence().is_some()
    }

    pub fn is_right_associative(self) -> bool {
        matches!(self, TokenKind::Exponent | TokenKind::UnaryMinus)
    }

    pub fn is_function(self) -> bool {
        matches!(self, TokenKind::Function(_))
    }

    /// Number or constant.
    pub fn is_operand(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Constant(_))
    }

    /// Number of values the token pops from the value stack when evaluated.
    pub fn arity(self) -> usize {
        match self {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Multiply
            | TokenKind::Divide
            | TokenKind::Exponent => 2,
            TokenKind::UnaryMinus | TokenKind::Function(_) => 1,
            _ => 0,
        }
    }
}

/// `digits(.digits)?` with ASCII digits.
pub fn is_numeric_literal(text: &str) -> bool {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.is_none_or(all_digits)
}

/// A classified token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Byte offset in the lowercased input.
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Builds a token from its text using [`TokenKind::classify`].
    pub fn classify(text: &str, position: usize) -> Self {
        Self::new(TokenKind::classify(text), text, position)
    }
}

/// A postfix program: tokens in evaluation order.
///
/// Renders as its tokens joined by single spaces.
///
/// ```
/// use rpn_rs::types::Postfix;
///
/// let program: Postfix = "2 3 2 ^ ^".parse().unwrap();
/// assert_eq!(program.len(), 5);
/// assert_eq!(program.to_string(), "2 3 2 ^ ^");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    /// Wraps tokens that are already in postfix order.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a Token;
    type IntoIter = core::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&token.text)?;
        }
        Ok(())
    }
}

/// Reads a whitespace separated postfix program, such as `"1 2 +"`.
///
/// `-` is always binary here; write `~` for negation. Keywords are
/// case-insensitive and positions refer to the lowercased text.
impl FromStr for Postfix {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let source = s.to_lowercase();
        let mut tokens = Vec::new();
        let mut start = None;

        // A trailing space closes the last word
        for (i, c) in source.char_indices().chain(core::iter::once((source.len(), ' '))) {
            match (c.is_whitespace(), start) {
                (false, None) => start = Some(i),
                (true, Some(begin)) => {
                    tokens.push(postfix_token(&source[begin..i], begin)?);
                    start = None;
                }
                _ => {}
            }
        }

        Ok(Self { tokens })
    }
}

fn postfix_token(text: &str, position: usize) -> Result<Token, ExprError> {
    let token = Token::classify(text, position);
    match token.kind {
        TokenKind::None => Err(ExprError::UnrecognizedToken {
            position,
            text: text.to_string(),
        }),
        TokenKind::LeftParen | TokenKind::RightParen => Err(ExprError::Syntax(alloc::format!(
            "parenthesis '{}' at position {} in postfix notation",
            text, position
        ))),
        _ => Ok(token),
    }
}
