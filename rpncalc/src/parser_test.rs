use crate::error::ExprError;
use crate::parser::{RPNExpr, ShuntingParser};
use crate::rpneval::MathContext;
use crate::infix_to_postfix;
use lexers::{Func, MathToken, Operator};

fn num(lit: &str) -> MathToken {
    MathToken::Number(lit.parse().unwrap(), lit.to_string())
}

#[test]
fn test_parse1() {
    let rpn = ShuntingParser::parse_str("3+4*2/(1-5)^2%3").unwrap();
    let expect = [
        num("3"),
        num("4"),
        num("2"),
        MathToken::BOp(Operator::Mul),
        num("1"),
        num("5"),
        MathToken::BOp(Operator::Sub),
        num("2"),
        MathToken::BOp(Operator::Pow),
        MathToken::BOp(Operator::Div),
        num("3"),
        MathToken::BOp(Operator::Rem),
        MathToken::BOp(Operator::Add),
    ];
    assert_eq!(rpn.len(), expect.len());
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn[i], *token);
    }
}

#[test]
fn test_parse_functions() {
    let rpn = ShuntingParser::parse_str("sen(45)*cos(60)+tg(30)").unwrap();
    let expect = [
        num("45"),
        MathToken::Function(Func::Sin, format!("sen")),
        num("60"),
        MathToken::Function(Func::Cos, format!("cos")),
        MathToken::BOp(Operator::Mul),
        num("30"),
        MathToken::Function(Func::Tan, format!("tg")),
        MathToken::BOp(Operator::Add),
    ];
    assert_eq!(rpn, RPNExpr(expect.to_vec()));
}

#[test]
fn test_parse_nested_functions() {
    assert_eq!(infix_to_postfix("raiz(log(100)*8)").as_deref(), Ok("100 log 8 * raiz"));
    assert_eq!(infix_to_postfix("sqrt((2+3))").as_deref(), Ok("2 3 + sqrt"));
}

#[test]
fn postfix_text() {
    assert_eq!(infix_to_postfix("3*4+5").as_deref(), Ok("3 4 * 5 +"));
    assert_eq!(infix_to_postfix("8+5*(2+4)").as_deref(), Ok("8 5 2 4 + * +"));
    assert_eq!(infix_to_postfix("(6/2+3)*4").as_deref(), Ok("6 2 / 3 + 4 *"));
    assert_eq!(infix_to_postfix(" 10 % 3 + 5 ").as_deref(), Ok("10 3 % 5 +"));
    assert_eq!(infix_to_postfix("0.50+2.0").as_deref(), Ok("0.50 2.0 +"));
    assert_eq!(infix_to_postfix("7").as_deref(), Ok("7"));
    assert_eq!(infix_to_postfix("").as_deref(), Ok(""));
}

#[test]
fn bare_decimal_points() {
    assert_eq!(infix_to_postfix(".5+1").as_deref(), Ok(".5 1 +"));
    assert_eq!(infix_to_postfix("5.+1").as_deref(), Ok("5. 1 +"));
    assert_eq!(infix_to_postfix("2*-.5").as_deref(), Ok("2 -.5 *"));
    assert_eq!(infix_to_postfix("1+.").as_deref(), Err(&ExprError::LexicalError(format!("."))));
}

#[test]
fn left_associative() {
    assert_eq!(infix_to_postfix("1-2-3").as_deref(), Ok("1 2 - 3 -"));
    assert_eq!(infix_to_postfix("2^3^2").as_deref(), Ok("2 3 ^ 2 ^"));
    assert_eq!(infix_to_postfix("8/4*2").as_deref(), Ok("8 4 / 2 *"));
}

#[test]
fn negative_literals() {
    assert_eq!(infix_to_postfix("3-(-4)").as_deref(), Ok("3 -4 -"));
    assert_eq!(infix_to_postfix("-2^2").as_deref(), Ok("-2 2 ^"));
    assert_eq!(infix_to_postfix("5*-1").as_deref(), Ok("5 -1 *"));
}

#[test]
fn bad_parse() {
    let rpn = ShuntingParser::parse_str("(1+2");
    assert_eq!(rpn, Err(ExprError::UnbalancedParentheses));

    let rpn = ShuntingParser::parse_str("1+2)");
    assert_eq!(rpn, Err(ExprError::UnbalancedParentheses));

    let rpn = ShuntingParser::parse_str("raiz(4");
    assert_eq!(rpn, Err(ExprError::UnbalancedParentheses));

    let rpn = ShuntingParser::parse_str("ln(4)");
    assert_eq!(rpn, Err(ExprError::UnknownFunction(format!("ln"))));

    let rpn = ShuntingParser::parse_str("raiz 4");
    assert_eq!(rpn, Err(ExprError::InvalidToken(format!("raiz"))));

    let rpn = ShuntingParser::parse_str("3 # 4");
    assert_eq!(rpn, Err(ExprError::LexicalError(format!("#"))));
}

#[test]
fn depth_limit() {
    let cx = MathContext::new().with_max_depth(4);
    assert!(cx.parse_infix("((1+2))").is_ok());
    assert_eq!(cx.parse_infix("(((((1)))))"), Err(ExprError::StackOverflow(4)));
}
