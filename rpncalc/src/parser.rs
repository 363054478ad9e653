use crate::error::{ExprError, Result};
use crate::rpneval::MathContext;
use crate::stack::{Stack, DEFAULT_MAX_DEPTH};
use lexers::{MathToken, MathTokenizer, RpnTokenizer};
use log::{debug, trace};
use std::fmt;
use std::ops::Deref;

/// Tokens in postfix order.
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<MathToken>);

impl RPNExpr {
    /// Tokenize space delimited postfix text. Nothing is rejected here,
    /// bad words stay in the stream and fail whoever consumes them.
    pub fn from_postfix(expr: &str) -> RPNExpr {
        RPNExpr(RpnTokenizer::new(expr.chars()).collect())
    }
}

impl Deref for RPNExpr {
    type Target = [MathToken];
    fn deref(&self) -> &[MathToken] {
        &self.0
    }
}

// postfix text: lexemes joined by single spaces
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let words = self.0.iter().map(MathToken::lexeme).collect::<Vec<String>>();
        write!(f, "{}", words.join(" "))
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr> {
        Self::parse(&mut MathTokenizer::new(expr.chars()))
    }

    pub fn parse(lex: &mut impl Iterator<Item = MathToken>) -> Result<RPNExpr> {
        Self::parse_bounded(lex, DEFAULT_MAX_DEPTH)
    }

    pub fn parse_bounded(lex: &mut impl Iterator<Item = MathToken>, max_depth: usize)
        -> Result<RPNExpr>
    {
        let mut lex = lex.peekable();
        let mut out = Vec::new();
        let mut stack = Stack::new(max_depth);

        while let Some(token) = lex.next() {
            trace!("shunting {:?} stack={:?}", token, stack);
            match token {
                MathToken::Number(..) => out.push(token),
                MathToken::OParen => stack.push(token)?,
                MathToken::Function(_, ref name) => {
                    // held back until its argument has been emitted
                    if lex.peek() != Some(&MathToken::OParen) {
                        return Err(ExprError::InvalidToken(name.clone()));
                    }
                    stack.push(token)?;
                }
                MathToken::CParen => {
                    let mut matched = false;
                    while let Some(top) = stack.pop() {
                        if top == MathToken::OParen {
                            matched = true;
                            break;
                        }
                        out.push(top);
                    }
                    if !matched {
                        return Err(ExprError::UnbalancedParentheses);
                    }
                    // end of grouping: check if this was a function call
                    if matches!(stack.last(), Some(MathToken::Function(..))) {
                        out.extend(stack.pop());
                    }
                }
                MathToken::BOp(op) => {
                    while let Some(MathToken::BOp(top)) = stack.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        out.extend(stack.pop());
                    }
                    stack.push(token)?;
                }
                MathToken::Variable(name) => return Err(ExprError::UnknownFunction(name)),
                MathToken::Unknown(lexeme) => return Err(ExprError::LexicalError(lexeme)),
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                MathToken::OParen => return Err(ExprError::UnbalancedParentheses),
                token => out.push(token),
            }
        }
        Ok(RPNExpr(out))
    }
}

impl MathContext {
    /// Convert infix text to postfix honoring this context's depth limit.
    pub fn parse_infix(&self, expr: &str) -> Result<RPNExpr> {
        let mut lex = MathTokenizer::new(expr.chars());
        ShuntingParser::parse_bounded(&mut lex, self.max_depth())
            .inspect_err(|e| debug!("parsing '{}' failed: {}", expr, e))
    }
}
