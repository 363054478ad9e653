use thiserror::Error;

/// Everything that can stop an expression from being converted or evaluated.
///
/// Every error is terminal for the call that produced it, no partial result
/// is ever handed back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("unrecognized input: {0}")]
    LexicalError(String),
    #[error("operator is missing operands")]
    InsufficientOperands,
    #[error("expression does not reduce to a single value")]
    MalformedExpression,
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of a negative number")]
    NegativeRoot,
    #[error("logarithm of a non-positive number")]
    NonPositiveLog,
    #[error("tangent is undefined at odd multiples of 90 degrees")]
    UndefinedTangent,
    #[error("result is not a number")]
    NotANumber,
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    #[error("stack depth limit of {0} exceeded")]
    StackOverflow(usize),
}

pub type EvalError = ExprError;
pub type ConversionError = ExprError;

pub type Result<T> = std::result::Result<T, ExprError>;
