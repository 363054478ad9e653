use crate::helpers::{self, WHITE};
use crate::math_token::{MathToken, Operator};
use crate::scanner::Scanner;

/// Splits postfix input on whitespace and classifies each word.
///
/// A word like `-4` is a negative literal, a lone `-` is subtraction:
/// postfix has no unary minus.
pub struct RpnTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> RpnTokenizer<I> {
    pub fn new(source: I) -> Self {
        RpnTokenizer { src: Scanner::new(source) }
    }

    fn classify(word: String) -> MathToken {
        if helpers::is_number_literal(&word) {
            return MathToken::number(word);
        }
        match word.as_str() {
            "(" => return MathToken::OParen,
            ")" => return MathToken::CParen,
            _ => (),
        }
        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(op) = Operator::from_symbol(c) {
                return MathToken::BOp(op);
            }
        }
        if helpers::is_identifier(&word) {
            MathToken::word(word)
        } else {
            MathToken::Unknown(word)
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for RpnTokenizer<I> {
    type Item = MathToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.ignore_ws();
        if self.src.until_any(WHITE) {
            Some(Self::classify(self.src.extract_string()))
        } else {
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::RpnTokenizer;
    use crate::math_token::{Func, MathToken, Operator};

    #[test]
    fn postfix_words() {
        let lx = RpnTokenizer::new("8 5 2.50 + * raiz".chars());
        let expect = vec![
            MathToken::Number(8.0, format!("8")),
            MathToken::Number(5.0, format!("5")),
            MathToken::Number(2.5, format!("2.50")),
            MathToken::BOp(Operator::Add),
            MathToken::BOp(Operator::Mul),
            MathToken::Function(Func::Sqrt, format!("raiz")),
        ];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
    }

    #[test]
    fn negative_literals() {
        let lx = RpnTokenizer::new("-4 3 - -0.5".chars());
        let expect = vec![
            MathToken::Number(-4.0, format!("-4")),
            MathToken::Number(3.0, format!("3")),
            MathToken::BOp(Operator::Sub),
            MathToken::Number(-0.5, format!("-0.5")),
        ];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
    }

    #[test]
    fn bare_decimal_points() {
        let lx = RpnTokenizer::new("5. .5 -.5 .".chars());
        let expect = vec![
            MathToken::Number(5.0, format!("5.")),
            MathToken::Number(0.5, format!(".5")),
            MathToken::Number(-0.5, format!("-.5")),
            MathToken::Unknown(format!(".")),
        ];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
    }

    #[test]
    fn odd_words() {
        let lx = RpnTokenizer::new("  ( x1 $ 4! ) ** ".chars());
        let expect = vec![
            MathToken::OParen,
            MathToken::Variable(format!("x1")),
            MathToken::Unknown(format!("$")),
            MathToken::Unknown(format!("4!")),
            MathToken::CParen,
            MathToken::Unknown(format!("**")),
        ];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
    }

    #[test]
    fn blank_input() {
        assert_eq!(RpnTokenizer::new("".chars()).next(), None);
        assert_eq!(RpnTokenizer::new(" \t\n".chars()).next(), None);
    }
}
