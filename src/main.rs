//! Command line front end.
//!
//! Converts one infix expression and prints the postfix form and the value:
//!
//! ```text
//! $ rpn-rs "3+4*2/(1-5)^2^3"
//! original input: 3+4*2/(1-5)^2^3
//! postfix expression: 3 4 2 * 1 5 - 2 3 ^ ^ / +
//! result: 3.00
//! ```
//!
//! With no arguments the expression is read from the first line of stdin.
//! Arguments are joined with spaces, so `rpn-rs 1 + 2` also works.

use std::io::{self, BufRead};
use std::process::ExitCode;

use rpn_rs::engine::parse;
use rpn_rs::eval::eval_postfix;

fn read_expression() -> io::Result<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> ExitCode {
    let expression = match read_expression() {
        Ok(expression) => expression,
        Err(err) => {
            eprintln!("error: failed to read expression: {}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("original input: {}", expression);

    let postfix = match parse(&expression) {
        Ok(postfix) => postfix,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    println!("postfix expression: {}", postfix);

    match eval_postfix(&postfix) {
        Ok(value) => {
            println!("result: {:.2}", value);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
