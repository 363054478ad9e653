use crate::error::{ExprError, Result};

pub const DEFAULT_MAX_DEPTH: usize = 512;

/// A Vec with a depth limit. Every algorithm in the crate runs on one.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
    limit: usize,
}

impl<T> Stack<T> {
    pub fn new(limit: usize) -> Self {
        Stack { items: Vec::new(), limit }
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        if self.items.len() >= self.limit {
            return Err(ExprError::StackOverflow(self.limit));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pop one operand, or fail without touching the stack.
    pub fn pop_operand(&mut self) -> Result<T> {
        self.items.pop().ok_or(ExprError::InsufficientOperands)
    }

    /// Pop (lhs, rhs) for a binary operator, rhs being the most recent push.
    /// Fails without touching the stack if there are fewer than two.
    pub fn pop_operands(&mut self) -> Result<(T, T)> {
        if self.len() < 2 {
            return Err(ExprError::InsufficientOperands);
        }
        let rhs = self.pop_operand()?;
        let lhs = self.pop_operand()?;
        Ok((lhs, rhs))
    }

    /// The single item a well formed expression reduces to.
    pub fn into_result(mut self) -> Result<T> {
        match (self.items.pop(), self.is_empty()) {
            (Some(item), true) => Ok(item),
            _ => Err(ExprError::MalformedExpression),
        }
    }
}
