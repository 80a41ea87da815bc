//! Property-based tests for conversion and evaluation
//!
//! Expressions are generated from a small grammar and checked against direct
//! arithmetic on the same values.

use proptest::prelude::*;
use rpn_rs::engine::{interp, parse, to_postfix};
use rpn_rs::eval::eval_postfix;
use rpn_rs::lexer::tokenize;
use rpn_rs::types::{Postfix, TokenKind};
use rpn_rs::{EvalContext, Real};

/// Non-negative integer literals that survive a round trip through text exactly
fn operand_strategy() -> impl Strategy<Value = u32> {
    0u32..1000
}

fn binary_operator_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/'), Just('^')]
}

/// Generate well formed infix expressions
fn infix_expr_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        operand_strategy().prop_map(|n| n.to_string()),
        Just("pi".to_string()),
        Just("e".to_string()),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), binary_operator_strategy(), inner.clone())
                .prop_map(|(a, op, b)| format!("{} {} {}", a, op, b)),
            inner.clone().prop_map(|a| format!("({})", a)),
            inner.clone().prop_map(|a| format!("-({})", a)),
            inner.prop_map(|a| format!("sin({})", a)),
        ]
    })
}

fn same_value(a: Real, b: Real) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

proptest! {
    /// Converting the same input twice gives the same program
    #[test]
    fn prop_conversion_is_deterministic(input in ".{0,40}") {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    /// Arbitrary input never panics, it converts or fails with an error
    #[test]
    fn prop_arbitrary_input_does_not_panic(input in ".{0,64}") {
        let _ = interp(&input, None);
        let _ = interp(&input, Some(&EvalContext::lenient()));
        let _ = input.parse::<Postfix>();
    }

    /// Well formed expressions convert, and the program re-reads to the same value
    #[test]
    fn prop_generated_expressions_round_trip(expr in infix_expr_strategy()) {
        let postfix = parse(&expr).unwrap();
        let rendered = postfix.to_string();
        let reread: Postfix = rendered.parse().unwrap();
        prop_assert_eq!(reread.to_string(), rendered);

        // A minus right after `)` is unary, so some generated programs do not evaluate
        match (eval_postfix(&postfix), eval_postfix(&reread)) {
            (Ok(direct), Ok(again)) => {
                prop_assert!(same_value(direct, again), "{} vs {} for '{}'", direct, again, expr);
            }
            (Err(direct), Err(again)) => prop_assert_eq!(direct.error_code(), again.error_code()),
            (direct, again) => prop_assert!(false, "{:?} vs {:?} for '{}'", direct, again, expr),
        }
    }

    /// Expressions built only from operands, binary operators and prefix minus evaluate
    #[test]
    fn prop_flat_expressions_evaluate(
        first in operand_strategy(),
        rest in prop::collection::vec((binary_operator_strategy(), any::<bool>(), operand_strategy()), 0..8),
    ) {
        let mut expr = first.to_string();
        for (op, negate, n) in rest {
            let sign = if negate { "-" } else { "" };
            expr.push_str(&format!(" {} {}{}", op, sign, n));
        }
        prop_assert!(interp(&expr, None).is_ok(), "'{}' failed: {:?}", expr, interp(&expr, None));
    }

    /// The postfix program holds the same operands and operators as the input,
    /// minus the parentheses
    #[test]
    fn prop_conversion_keeps_every_operand(expr in infix_expr_strategy()) {
        let infix: Vec<TokenKind> = tokenize(&expr)
            .into_iter()
            .map(|t| t.kind)
            .filter(|k| !matches!(k, TokenKind::LeftParen | TokenKind::RightParen))
            .collect();
        let postfix = parse(&expr).unwrap();
        prop_assert_eq!(postfix.len(), infix.len());
        prop_assert!(postfix.iter().all(|t| !matches!(t.kind, TokenKind::LeftParen | TokenKind::RightParen)));
    }

    /// `a op1 b op2 c` groups like ordinary arithmetic
    #[test]
    fn prop_precedence_matches_arithmetic(
        a in 1u32..50,
        b in 1u32..50,
        c in 1u32..50,
    ) {
        let (a, b, c) = (a as Real, b as Real, c as Real);
        let eval = |expr: String| interp(&expr, None).unwrap();

        prop_assert_eq!(eval(format!("{} + {} * {}", a, b, c)), a + b * c);
        prop_assert_eq!(eval(format!("{} * {} + {}", a, b, c)), a * b + c);
        prop_assert_eq!(eval(format!("{} - {} - {}", a, b, c)), (a - b) - c);
        prop_assert_eq!(eval(format!("{} - {} + {}", a, b, c)), (a - b) + c);
        prop_assert_eq!(eval(format!("({} + {}) * {}", a, b, c)), (a + b) * c);
        prop_assert_eq!(eval(format!("{} * -{}", a, b)), a * -b);
    }

    /// Division chains are left-associative
    #[test]
    fn prop_division_is_left_associative(a in 1u32..1000, b in 1u32..20, c in 1u32..20) {
        let rendered = to_postfix(&format!("{}/{}/{}", a, b, c)).unwrap();
        prop_assert_eq!(rendered, format!("{} {} / {} /", a, b, c));
    }

    /// Exponent chains are right-associative
    #[test]
    fn prop_exponent_is_right_associative(a in 0u32..10, b in 0u32..10, c in 0u32..10) {
        let rendered = to_postfix(&format!("{}^{}^{}", a, b, c)).unwrap();
        prop_assert_eq!(rendered, format!("{} {} {} ^ ^", a, b, c));
    }
}
