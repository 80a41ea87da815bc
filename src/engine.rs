use alloc::string::{String, ToString};

use heapless::Vec as StackVec;

use crate::Real;
use crate::context::{EvalContext, UnrecognizedTokenPolicy};
use crate::error::ExprError;
use crate::eval::eval_postfix_with_context;
use crate::lexer::Lexer;
use crate::types::{EXP_RPN_MAX_STACK_DEPTH, Postfix, Token, TokenKind};

/// Shunting-yard converter state for a single expression.
struct ShuntingYard<'c> {
    ctx: &'c EvalContext,
    output: Postfix,
    operators: StackVec<Token, EXP_RPN_MAX_STACK_DEPTH>,
}

impl<'c> ShuntingYard<'c> {
    fn new(ctx: &'c EvalContext) -> Self {
        Self {
            ctx,
            output: Postfix::default(),
            operators: StackVec::new(),
        }
    }

    fn push_operator(&mut self, token: Token) -> Result<(), ExprError> {
        self.operators
            .push(token)
            .map_err(|_| ExprError::CapacityExceeded("operator stack"))
    }

    /// Moves operators that bind at least as tightly as `incoming` to the output.
    ///
    /// Right-associative operators only give way to strictly higher precedence,
    /// so `2^3^2` keeps both `^` stacked and groups as `2^(3^2)`.
    fn pop_operators_for(&mut self, incoming: TokenKind) {
        let Some(precedence) = incoming.precedence() else {
            return;
        };
        while let Some(top) = self.operators.last() {
            let Some(top_precedence) = top.kind.precedence() else {
                break;
            };
            let yields = if incoming.is_right_associative() {
                top_precedence > precedence
            } else {
                top_precedence >= precedence
            };
            if !yields {
                break;
            }
            if let Some(op) = self.operators.pop() {
                self.output.push(op);
            }
        }
    }

    /// Pops operators up to the matching `(`, then a function call owning the group.
    fn close_group(&mut self, close: Token) -> Result<(), ExprError> {
        loop {
            match self.operators.pop() {
                Some(top) if top.kind == TokenKind::LeftParen => break,
                Some(top) => self.output.push(top),
                None => {
                    return Err(ExprError::UnbalancedParenthesis {
                        position: close.position,
                        found: close.text,
                    });
                }
            }
        }
        if self.operators.last().is_some_and(|t| t.kind.is_function()) {
            if let Some(function) = self.operators.pop() {
                self.output.push(function);
            }
        }
        Ok(())
    }

    fn shunt(&mut self, token: Token) -> Result<(), ExprError> {
        log::trace!(
            "shunting {:?} '{}' at position {} (operator stack depth {})",
            token.kind,
            token.text,
            token.position,
            self.operators.len()
        );
        match token.kind {
            TokenKind::Number | TokenKind::Constant(_) => self.output.push(token),
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Multiply
            | TokenKind::Divide
            | TokenKind::Exponent
            | TokenKind::UnaryMinus => {
                self.pop_operators_for(token.kind);
                self.push_operator(token)?;
            }
            TokenKind::LeftParen | TokenKind::Function(_) => self.push_operator(token)?,
            TokenKind::RightParen => self.close_group(token)?,
            TokenKind::None => match self.ctx.unrecognized_tokens {
                UnrecognizedTokenPolicy::Reject => {
                    return Err(ExprError::UnrecognizedToken {
                        position: token.position,
                        text: token.text,
                    });
                }
                UnrecognizedTokenPolicy::Ignore => {
                    log::debug!(
                        "ignoring unrecognized token '{}' at position {}",
                        token.text,
                        token.position
                    );
                }
            },
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Postfix, ExprError> {
        while let Some(top) = self.operators.pop() {
            if top.kind == TokenKind::LeftParen {
                return Err(ExprError::UnbalancedParenthesis {
                    position: top.position,
                    found: top.text,
                });
            }
            self.output.push(top);
        }
        Ok(self.output)
    }
}

/// Converts tokens, already in infix order, to a postfix program.
pub fn convert_tokens<I>(tokens: I, ctx: &EvalContext) -> Result<Postfix, ExprError>
where
    I: IntoIterator<Item = Token>,
{
    let mut converter = ShuntingYard::new(ctx);
    for token in tokens {
        converter.shunt(token)?;
    }
    converter.finish()
}

/// Parse an infix expression into a postfix program using the default context.
///
/// ```
/// use rpn_rs::engine::parse;
///
/// let postfix = parse("3 + 4 * 2").unwrap();
/// assert_eq!(postfix.to_string(), "3 4 2 * +");
/// ```
pub fn parse(input: &str) -> Result<Postfix, ExprError> {
    parse_with_context(input, &EvalContext::default())
}

/// Parse an infix expression into a postfix program.
///
/// The conversion is a pure function of `input` and `ctx`: the same arguments
/// always give the same program.
pub fn parse_with_context(input: &str, ctx: &EvalContext) -> Result<Postfix, ExprError> {
    let postfix = convert_tokens(Lexer::new(input), ctx)?;
    log::debug!("'{}' => postfix '{}'", input, postfix);
    Ok(postfix)
}

/// Converts an infix expression and renders the postfix program as text.
///
/// ```
/// use rpn_rs::engine::to_postfix;
///
/// assert_eq!(to_postfix("2^3^2").unwrap(), "2 3 2 ^ ^");
/// assert_eq!(to_postfix("sin(-pi)").unwrap(), "pi ~ sin");
/// ```
pub fn to_postfix(input: &str) -> Result<String, ExprError> {
    Ok(parse(input)?.to_string())
}

/// Interprets a string as a mathematical expression, evaluates it, and returns the result.
///
/// This parses the expression into a postfix program and then evaluates the program,
/// using the default [`EvalContext`] when `ctx` is `None`.
///
/// # Examples
///
/// ```
/// use rpn_rs::engine::interp;
///
/// assert_eq!(interp("2 * (3 + 4)", None).unwrap(), 14.0);
/// assert_eq!(interp("cos(0)", None).unwrap(), 1.0);
/// ```
///
/// Error handling:
///
/// ```
/// use rpn_rs::engine::interp;
/// use rpn_rs::error::ExprError;
///
/// match interp("(1 + 2", None) {
///     Err(ExprError::UnbalancedParenthesis { position, .. }) => assert_eq!(position, 0),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
pub fn interp(expression: &str, ctx: Option<&EvalContext>) -> Result<Real, ExprError> {
    let default_ctx = EvalContext::default();
    let ctx = ctx.unwrap_or(&default_ctx);
    let postfix = parse_with_context(expression, ctx)?;
    eval_postfix_with_context(&postfix, ctx)
}
