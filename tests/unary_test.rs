use rpn_rs::{Real, assert_approx_eq, constants, engine::interp};

use test_helpers::rpn;

#[test]
fn test_unary_expression_evaluation() {
    let test_cases = [
        // Simple unary
        ("-1", -1.0),
        ("--1", 1.0),
        ("---1", -1.0),
        ("-(-(-1))", -1.0),
        // Unary after binary operators
        ("3*-2", -6.0),
        ("3--2", 5.0),
        ("3+-2", 1.0),
        ("6/-2", -3.0),
        ("2^-1", 0.5),
        // Functions with unary
        ("-sin(1)", -0.8414709848078965),
        ("sin(-1)", -0.8414709848078965),
        ("-sin(-cos(1))", 0.5143952585235492),
        // Unary binds like ^ and groups to the right
        ("-2^2", -4.0),
        ("(-2)^2", 4.0),
        ("-pi", -constants::PI as f64),
        ("-e^2", -(constants::E as f64).powi(2)),
    ];

    for &(expr, expected) in &test_cases {
        let result = interp(expr, None).unwrap();
        println!("{:<15} => {}", expr, result);
        assert_approx_eq!(
            result,
            expected as Real,
            1e-5 as Real,
            "Expression '{}' evaluated to {}, expected {}",
            expr,
            result,
            expected
        );
    }
}

#[test]
fn test_unary_postfix_rendering() {
    assert_eq!(rpn("-2^2"), "2 2 ^ ~");
    assert_eq!(rpn("(-2)^2"), "2 ~ 2 ^");
    assert_eq!(rpn("3*-2"), "3 2 ~ *");
    assert_eq!(rpn("-(1+2)"), "1 2 + ~");
    assert_eq!(rpn("---1"), "1 ~ ~ ~");
    assert_eq!(rpn("-sin(pi)"), "pi sin ~");
}

#[test]
fn test_minus_after_operand_is_binary() {
    assert_eq!(rpn("5-3"), "5 3 -");
    assert_eq!(rpn("pi-3"), "pi 3 -");
    assert_eq!(rpn("e - e"), "e e -");
    assert_eq!(rpn("1.5-0.5"), "1.5 0.5 -");
}

#[test]
fn test_minus_after_group_is_unary() {
    // A closing parenthesis does not make the next minus binary
    assert_eq!(rpn("(1)-2"), "1 2 ~");
    assert!(interp("(1)-2", None).is_err());
    assert!(interp("sin(0)-1", None).is_err());
    // Spelled out with an explicit plus it works
    assert_eq!(interp("(1)+-2", None).unwrap(), -1.0);
}

#[test]
fn test_tilde_is_accepted_as_unary_minus() {
    assert_eq!(rpn("~3"), "3 ~");
    assert_eq!(interp("~3", None).unwrap(), -3.0);
}
