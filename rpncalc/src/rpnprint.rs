use crate::error::{ExprError, Result};
use crate::parser::RPNExpr;
use crate::rpneval::MathContext;
use crate::stack::Stack;
use lexers::{MathToken, ATOM_PRECEDENCE};
use log::{debug, trace};

// An infix sub-expression and the precedence of its outermost construct
#[derive(Debug)]
struct Fragment {
    text: String,
    prec: usize,
    // produced by a binary operator
    compound: bool,
}

impl Fragment {
    fn literal(lexeme: &str) -> Fragment {
        // a negative literal reads like a unary minus, so it always gets
        // grouped when used as an operand
        let prec = if lexeme.starts_with('-') { 0 } else { ATOM_PRECEDENCE };
        Fragment { text: lexeme.to_string(), prec, compound: false }
    }

    fn grouped_if(self, group: bool) -> String {
        if group { format!("({})", self.text) } else { self.text }
    }
}

impl MathContext {
    pub fn infix_str(&self, postfix: &str) -> Result<String> {
        self.to_infix(&RPNExpr::from_postfix(postfix))
    }

    /// Rewrite postfix as infix keeping only the parentheses that
    /// precedence requires. All operators are left associative, so an
    /// operand on the right with the same precedence stays grouped: `a-(b-c)`.
    /// A function argument built from operators is grouped once more
    /// inside the call parentheses: `raiz((1+2))`.
    pub fn to_infix(&self, rpn: &RPNExpr) -> Result<String> {
        self.print_tokens(rpn)
            .inspect_err(|e| debug!("rewriting '{}' failed: {}", rpn, e))
    }

    fn print_tokens(&self, rpn: &RPNExpr) -> Result<String> {
        let mut fragments: Stack<Fragment> = Stack::new(self.max_depth());

        for token in rpn.iter() {
            trace!("print {:?} fragments={:?}", token, fragments);
            let fragment = match *token {
                MathToken::Number(_, ref lexeme) => Fragment::literal(lexeme),
                MathToken::BOp(op) => {
                    let (lhs, rhs) = fragments.pop_operands()?;
                    let prec = op.precedence();
                    let (group_lhs, group_rhs) = (lhs.prec < prec, rhs.prec <= prec);
                    let lh = lhs.grouped_if(group_lhs);
                    let rh = rhs.grouped_if(group_rhs);
                    let text = format!("{}{}{}", lh, op.symbol(), rh);
                    Fragment { text, prec, compound: true }
                }
                MathToken::Function(_, ref name) => {
                    // an operation keeps its own pair inside the call: log((2+3))
                    let arg = fragments.pop_operand()?;
                    let compound = arg.compound;
                    let text = format!("{}({})", name, arg.grouped_if(compound));
                    Fragment { text, prec: ATOM_PRECEDENCE, compound: false }
                }
                _ => return Err(ExprError::InvalidToken(token.lexeme())),
            };
            fragments.push(fragment)?;
        }
        let infix = fragments.into_result()?.text;
        Ok(strip_outer_parens(&infix).to_string())
    }
}

/// Drop one pair of parentheses wrapping the whole expression, only if the
/// opening one really matches the closing one: `(1+2)` but not `(1)*(2)`.
pub fn strip_outer_parens(expr: &str) -> &str {
    let inner = match expr.strip_prefix('(').and_then(|e| e.strip_suffix(')')) {
        Some(inner) if !inner.is_empty() => inner,
        _ => return expr,
    };
    let mut depth = 0;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return expr,
            ')' => depth -= 1,
            _ => (),
        }
    }
    if depth == 0 { inner } else { expr }
}
