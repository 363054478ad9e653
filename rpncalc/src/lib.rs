//! Evaluate postfix arithmetic and move expressions between postfix and
//! infix notation.
//!
//! ```
//! assert_eq!(rpncalc::evaluate_postfix("8 5 2 4 + * +"), Ok(38.0));
//! assert_eq!(rpncalc::postfix_to_infix("8 5 2 4 + * +").as_deref(), Ok("8+5*(2+4)"));
//! assert_eq!(rpncalc::infix_to_postfix("8+5*(2+4)").as_deref(), Ok("8 5 2 4 + * +"));
//! ```
extern crate lexers;

pub use error::{ConversionError, EvalError, ExprError, Result};
pub use expression::Expression;
pub use parser::{RPNExpr, ShuntingParser};
pub use rpneval::{AngleUnit, MathContext};
pub use rpnprint::strip_outer_parens;
pub use stack::DEFAULT_MAX_DEPTH;

mod error;
mod expression;
mod stack;

pub mod parser;
#[cfg(test)]
mod parser_test;

mod rpneval;

mod rpnprint;

/// Value of a space delimited postfix expression.
pub fn evaluate_postfix(expression: &str) -> Result<f32> {
    MathContext::default().eval_str(expression)
}

/// Infix form of a postfix expression, without spaces.
pub fn postfix_to_infix(expression: &str) -> Result<String> {
    MathContext::default().infix_str(expression)
}

/// Postfix form of an infix expression, tokens separated by single spaces.
pub fn infix_to_postfix(expression: &str) -> Result<String> {
    Ok(MathContext::default().parse_infix(expression)?.to_string())
}

/// Value of an infix expression, converted to postfix first.
pub fn evaluate_infix(expression: &str) -> Result<f32> {
    let cx = MathContext::default();
    cx.eval(&cx.parse_infix(expression)?)
}
