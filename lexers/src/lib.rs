mod scanner;
mod helpers;
mod math_token;
mod math_tokenizer;
mod rpn_tokenizer;

pub use scanner::Scanner;
pub use math_token::{Func, MathToken, Operator, ATOM_PRECEDENCE};
pub use math_tokenizer::MathTokenizer;
pub use rpn_tokenizer::RpnTokenizer;

pub use helpers::is_identifier;
pub use helpers::is_number_literal;
