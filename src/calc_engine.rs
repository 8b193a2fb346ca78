use std::fmt;

use tracing::trace;

use crate::error::{CalcError, Result};

/// Decimal digits kept when a result is rounded for display.
pub const DISPLAY_PRECISION: usize = 12;

/// Binary operators understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Recognizes a raw buffer entry consisting of exactly one operator symbol.
    pub fn from_symbol(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Sub => Ok(a - b),
            Operator::Mul => Ok(a * b),
            Operator::Div => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Op(Operator),
}

pub struct Step {
    pub operation: String,
    pub result: f64,
}

pub struct EvaluationTrace {
    pub steps: Vec<Step>,
    pub detailed_mode: bool,
}

impl EvaluationTrace {
    pub fn new(detailed_mode: bool) -> Self {
        EvaluationTrace {
            steps: Vec::new(),
            detailed_mode,
        }
    }

    pub fn add_step(&mut self, operation: String, result: f64) {
        trace!(%operation, result, "reduced");
        if self.detailed_mode {
            self.steps.push(Step { operation, result });
        }
    }
}

/// Parses an operand the lenient way: anything unparsable becomes NaN and
/// fails later, when the result is checked.
pub fn parse_operand(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Turns the raw interleaved entries (operands and operator symbols) into tokens.
pub fn tokenize<S: AsRef<str>>(entries: &[S]) -> Vec<Token> {
    entries
        .iter()
        .map(|entry| {
            let entry = entry.as_ref();
            match Operator::from_symbol(entry) {
                Some(op) => Token::Op(op),
                None => Token::Number(parse_operand(entry)),
            }
        })
        .collect()
}

/// Shunting-yard: reorders infix tokens into postfix order.
///
/// Operators of equal precedence are popped before the incoming one is
/// pushed, so `8 - 3 - 2` comes out as `8 3 - 2 -`.
pub fn to_rpn(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Operator> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Op(op) => {
                while let Some(&top) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    output.push(Token::Op(top));
                }
                ops.push(op);
            }
        }
    }

    while let Some(op) = ops.pop() {
        output.push(Token::Op(op));
    }
    output
}

/// Reduces a postfix token sequence to a single value.
pub fn eval_rpn(rpn: &[Token], trace: &mut EvaluationTrace) -> Result<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for token in rpn {
        match *token {
            Token::Number(n) => stack.push(n),
            Token::Op(op) => {
                let (b, a) = match (stack.pop(), stack.pop()) {
                    (Some(b), Some(a)) => (b, a),
                    _ => {
                        return Err(CalcError::malformed(format!(
                            "missing operand for '{}'",
                            op
                        )))
                    }
                };
                let result = op.apply(a, b)?;
                trace.add_step(format!("{} {} {}", a, op, b), result);
                stack.push(result);
            }
        }
    }

    match stack.len() {
        1 => Ok(stack[0]),
        0 => Err(CalcError::malformed("empty expression")),
        n => Err(CalcError::malformed(format!(
            "{} values left without an operator",
            n
        ))),
    }
}

/// Full pipeline: tokenize, resolve precedence, evaluate, and reject
/// non-finite results.
pub fn evaluate<S: AsRef<str>>(entries: &[S], trace: &mut EvaluationTrace) -> Result<f64> {
    let tokens = tokenize(entries);
    let rpn = to_rpn(tokens);
    let value = eval_rpn(&rpn, trace)?;
    if !value.is_finite() {
        return Err(CalcError::NonFiniteResult(value));
    }
    Ok(value)
}

/// Rounds to `DISPLAY_PRECISION` decimal digits to hide floating-point noise.
pub fn round_to_precision(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{:.*}", DISPLAY_PRECISION, x)
        .parse::<f64>()
        .unwrap_or(x)
}

/// Shortest decimal string that reads back as `x`; never prints `-0`.
pub fn format_number(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    x.to_string()
}

pub fn format_result(x: f64) -> String {
    format_number(round_to_precision(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(entries: &[&str]) -> Result<f64> {
        evaluate(entries, &mut EvaluationTrace::new(false))
    }

    #[test]
    fn tokenize_splits_operands_and_operators() {
        let tokens = tokenize(&["12.5", "*", "3"]);
        assert_eq!(
            tokens,
            vec![
                Token::Number(12.5),
                Token::Op(Operator::Mul),
                Token::Number(3.0)
            ]
        );
    }

    #[test]
    fn tokenize_keeps_garbage_as_nan() {
        let tokens = tokenize(&["Error", "+", "1"]);
        match tokens[0] {
            Token::Number(n) => assert!(n.is_nan()),
            _ => panic!("expected a number token"),
        }
    }

    #[test]
    fn operator_symbol_must_be_exact() {
        assert_eq!(Operator::from_symbol("-"), Some(Operator::Sub));
        assert_eq!(Operator::from_symbol("--"), None);
        assert_eq!(Operator::from_symbol("-5"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }

    #[test]
    fn rpn_respects_precedence() {
        let rpn = to_rpn(tokenize(&["2", "+", "3", "*", "4"]));
        assert_eq!(
            rpn,
            vec![
                Token::Number(2.0),
                Token::Number(3.0),
                Token::Number(4.0),
                Token::Op(Operator::Mul),
                Token::Op(Operator::Add),
            ]
        );
    }

    #[test]
    fn rpn_is_left_associative() {
        let rpn = to_rpn(tokenize(&["8", "-", "3", "-", "2"]));
        assert_eq!(
            rpn,
            vec![
                Token::Number(8.0),
                Token::Number(3.0),
                Token::Op(Operator::Sub),
                Token::Number(2.0),
                Token::Op(Operator::Sub),
            ]
        );
    }

    #[test]
    fn evaluates_mixed_expression() {
        assert_eq!(eval(&["2", "+", "3", "*", "4"]), Ok(14.0));
        assert_eq!(eval(&["8", "-", "3", "-", "2"]), Ok(3.0));
        assert_eq!(eval(&["12", "/", "3", "/", "2"]), Ok(2.0));
        assert_eq!(eval(&["1", "-", "6", "/", "3", "+", "4"]), Ok(3.0));
    }

    #[test]
    fn single_operand_evaluates_to_itself() {
        assert_eq!(eval(&["42"]), Ok(42.0));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(eval(&["5", "/", "0"]), Err(CalcError::DivisionByZero));
        assert_eq!(eval(&["1", "+", "5", "/", "0."]), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn nan_operand_surfaces_as_non_finite() {
        assert!(matches!(
            eval(&["Error", "+", "1"]),
            Err(CalcError::NonFiniteResult(_))
        ));
    }

    #[test]
    fn malformed_postfix_is_rejected() {
        let mut trace = EvaluationTrace::new(false);
        let underflow = [Token::Number(1.0), Token::Op(Operator::Add)];
        assert!(matches!(
            eval_rpn(&underflow, &mut trace),
            Err(CalcError::MalformedExpression(_))
        ));

        let leftover = [Token::Number(1.0), Token::Number(2.0)];
        assert!(matches!(
            eval_rpn(&leftover, &mut trace),
            Err(CalcError::MalformedExpression(_))
        ));

        assert!(matches!(
            eval_rpn(&[], &mut trace),
            Err(CalcError::MalformedExpression(_))
        ));
    }

    #[test]
    fn trace_records_steps_in_evaluation_order() {
        let mut trace = EvaluationTrace::new(true);
        let result = evaluate(&["2", "+", "3", "*", "4"], &mut trace);
        assert_eq!(result, Ok(14.0));
        let ops: Vec<&str> = trace.steps.iter().map(|s| s.operation.as_str()).collect();
        assert_eq!(ops, vec!["3 * 4", "2 + 12"]);
    }

    #[test]
    fn format_hides_float_noise() {
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(1.0 / 3.0), "0.333333333333");
        assert_eq!(format_result(14.0), "14");
        assert_eq!(format_result(-2.5), "-2.5");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(1e20), "100000000000000000000");
        assert_eq!(format_result(123456.789), "123456.789");
        assert_eq!(format_result(1e-13), "0");
    }
}
