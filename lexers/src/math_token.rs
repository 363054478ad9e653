use std::fmt;

/// Binary operators, all of them left-associative.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl Operator {
    pub fn from_symbol(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '%' => Some(Operator::Rem),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Rem => '%',
            Operator::Pow => '^',
        }
    }

    pub fn precedence(self) -> usize {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div | Operator::Rem => 2,
            Operator::Pow => 3,
        }
    }
}

/// Unary functions. Some of them answer to two spellings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Func {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Log,
}

impl Func {
    pub fn from_name(name: &str) -> Option<Func> {
        match name {
            "raiz" | "sqrt" => Some(Func::Sqrt),
            "sen" | "sin" => Some(Func::Sin),
            "cos" => Some(Func::Cos),
            "tg" | "tan" => Some(Func::Tan),
            "log" => Some(Func::Log),
            _ => None,
        }
    }
}

/// Functions and literals bind tighter than any operator.
pub const ATOM_PRECEDENCE: usize = 9;

#[derive(Clone, PartialEq, Debug)]
pub enum MathToken {
    Unknown(String),
    Number(f32, String), // value, literal as written
    Variable(String),
    Function(Func, String), // spelling as written
    BOp(Operator),
    OParen,
    CParen,
}

impl MathToken {
    /// Text of the token as it would be written back out.
    pub fn lexeme(&self) -> String {
        match self {
            MathToken::Unknown(s) | MathToken::Variable(s) => s.clone(),
            MathToken::Number(_, lit) => lit.clone(),
            MathToken::Function(_, name) => name.clone(),
            MathToken::BOp(op) => op.symbol().to_string(),
            MathToken::OParen => "(".to_string(),
            MathToken::CParen => ")".to_string(),
        }
    }

    pub(crate) fn number(lexeme: String) -> MathToken {
        match lexeme.parse::<f32>() {
            Ok(value) => MathToken::Number(value, lexeme),
            Err(_) => MathToken::Unknown(lexeme),
        }
    }

    pub(crate) fn word(word: String) -> MathToken {
        match Func::from_name(&word) {
            Some(func) => MathToken::Function(func, word),
            None => MathToken::Variable(word),
        }
    }
}

impl fmt::Display for MathToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}
