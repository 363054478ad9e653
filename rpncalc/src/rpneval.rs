use crate::error::{ExprError, Result};
use crate::parser::RPNExpr;
use crate::stack::{Stack, DEFAULT_MAX_DEPTH};
use lexers::{Func, MathToken, Operator};
use log::{debug, trace};

/// How sen/cos/tg read their argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

/// Settings shared by evaluation and conversion.
///
/// The default reads angles in degrees and allows 512 pending operands.
#[derive(Clone, Debug, PartialEq)]
pub struct MathContext {
    max_depth: usize,
    angle: AngleUnit,
}

impl Default for MathContext {
    fn default() -> Self {
        MathContext { max_depth: DEFAULT_MAX_DEPTH, angle: AngleUnit::Degrees }
    }
}

impl MathContext {
    pub fn new() -> MathContext {
        MathContext::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_angle_unit(mut self, angle: AngleUnit) -> Self {
        self.angle = angle;
        self
    }

    pub fn max_depth(&self) -> usize { self.max_depth }

    pub fn angle_unit(&self) -> AngleUnit { self.angle }

    pub fn eval_str(&self, postfix: &str) -> Result<f32> {
        self.eval(&RPNExpr::from_postfix(postfix))
    }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<f32> {
        self.eval_tokens(rpn)
            .inspect_err(|e| debug!("evaluating '{}' failed: {}", rpn, e))
    }

    fn eval_tokens(&self, rpn: &RPNExpr) -> Result<f32> {
        let mut operands = Stack::new(self.max_depth);

        for token in rpn.iter() {
            trace!("eval {:?} operands={:?}", token, operands);
            let value = match *token {
                MathToken::Number(num, _) => num,
                MathToken::BOp(op) => {
                    let (l, r) = operands.pop_operands()?;
                    Self::eval_bop(op, l, r)?
                }
                MathToken::Function(func, _) => {
                    let x = operands.pop_operand()?;
                    self.eval_fn(func, x)?
                }
                _ => return Err(ExprError::InvalidToken(token.lexeme())),
            };
            if value.is_nan() {
                return Err(ExprError::NotANumber);
            }
            operands.push(value)?;
        }
        operands.into_result()
    }

    fn eval_bop(op: Operator, l: f32, r: f32) -> Result<f32> {
        match op {
            Operator::Add => Ok(l + r),
            Operator::Sub => Ok(l - r),
            Operator::Mul => Ok(l * r),
            Operator::Div | Operator::Rem if r == 0.0 => Err(ExprError::DivisionByZero),
            Operator::Div => Ok(l / r),
            // same as C's fmod: the result takes the sign of the dividend
            Operator::Rem => Ok(l % r),
            Operator::Pow => Ok(l.powf(r)),
        }
    }

    fn eval_fn(&self, func: Func, x: f32) -> Result<f32> {
        // trigonometry runs in f64, sen(30) must come back as exactly 0.5f32
        let (deg, rad) = match self.angle {
            AngleUnit::Degrees => (f64::from(x), f64::from(x).to_radians()),
            AngleUnit::Radians => (f64::from(x).to_degrees(), f64::from(x)),
        };
        match func {
            Func::Sqrt if x < 0.0 => Err(ExprError::NegativeRoot),
            Func::Sqrt => Ok(x.sqrt()),
            Func::Sin => Ok(rad.sin() as f32),
            Func::Cos => Ok(rad.cos() as f32),
            Func::Tan if is_odd_right_angle(deg) => Err(ExprError::UndefinedTangent),
            Func::Tan => Ok(rad.tan() as f32),
            Func::Log if x <= 0.0 => Err(ExprError::NonPositiveLog),
            Func::Log => Ok(x.log10()),
        }
    }
}

// 90, 270, -90, 450...
fn is_odd_right_angle(degrees: f64) -> bool {
    let quarters = degrees / 90.0;
    quarters.fract() == 0.0 && quarters % 2.0 != 0.0
}
