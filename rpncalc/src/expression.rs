use crate::error::Result;
use crate::parser::RPNExpr;
use crate::rpneval::MathContext;

/// One expression in every form the crate knows about.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub postfix: String,
    pub infix: String,
    pub value: f32,
}

impl Expression {
    pub fn from_postfix(postfix: &str) -> Result<Expression> {
        Self::build(&MathContext::default(), &RPNExpr::from_postfix(postfix))
    }

    pub fn from_infix(infix: &str) -> Result<Expression> {
        let cx = MathContext::default();
        Self::build(&cx, &cx.parse_infix(infix)?)
    }

    /// Evaluation errors are reported first, then rewriting errors.
    pub fn build(cx: &MathContext, rpn: &RPNExpr) -> Result<Expression> {
        let value = cx.eval(rpn)?;
        let infix = cx.to_infix(rpn)?;
        Ok(Expression { postfix: rpn.to_string(), infix, value })
    }
}
