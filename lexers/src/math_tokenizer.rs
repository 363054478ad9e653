#![deny(warnings)]

use crate::math_token::{MathToken, Operator};
use crate::scanner::Scanner;

/// Tokenizer for free-form infix input.
pub struct MathTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    prev: Option<MathToken>
}

impl<I: Iterator<Item=char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer { src: Scanner::new(source), prev: None }
    }

    // a '-' right where an operand is expected glues onto the number after it
    fn makes_negative(prev: &Option<MathToken>) -> bool {
        match *prev {
            Some(MathToken::Number(..)) => false,
            Some(MathToken::Variable(_)) => false,
            Some(MathToken::CParen) => false,
            _ => true
        }
    }

    fn get_token(&mut self) -> Option<MathToken> {
        self.src.ignore_ws(); // discard whatever came before and spaces
        if let Some(op) = self.src.scan_math_op() {
            match op.as_ref() {
                "(" => Some(MathToken::OParen),
                ")" => Some(MathToken::CParen),
                "-" if Self::makes_negative(&self.prev) => match self.src.scan_number() {
                    Some(num) => Some(MathToken::number(format!("-{}", num))),
                    None => Some(MathToken::BOp(Operator::Sub)),
                },
                _ => op.chars().next()
                    .and_then(Operator::from_symbol)
                    .map(MathToken::BOp)
                    .or_else(|| Some(MathToken::Unknown(op.clone()))),
            }
        } else if let Some(id) = self.src.scan_identifier() {
            Some(MathToken::word(id))
        } else if let Some(num) = self.src.scan_number() {
            Some(MathToken::number(num))
        } else if self.src.next().is_some() {
            Some(MathToken::Unknown(self.src.extract_string()))
        } else {
            None
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for MathTokenizer<I> {
    type Item = MathToken;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        self.prev = token.clone();
        token
    }
}

///////////////////////////////////////////////////////////////////////////////
