use crate::postfix::{PostfixExpr, PostfixToken, PostfixTokenizer};
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum EvalErr {
    #[error("empty expression")]
    EmptyExpression,
    #[error("bad token: {0:?}")]
    BadToken(char),
    #[error("operator needs two operands")]
    WrongNumberOfArgs,
    #[error("{0} operands left on the stack")]
    LeftoverOperands(usize),
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow")]
    Overflow,
}

/// Evaluate a postfix expression of single digit operands, eg: "32+4*" = 20
pub fn evaluate(expr: &str) -> Result<i64, EvalErr> {
    eval_tokens(PostfixTokenizer::new(expr.chars()))
}

impl PostfixExpr {
    pub fn eval(&self) -> Result<i64, EvalErr> {
        eval_tokens(self.0.iter().cloned())
    }
}

fn eval_tokens(tokens: impl Iterator<Item = PostfixToken>) -> Result<i64, EvalErr> {
    let mut operands = Vec::new();

    for token in tokens {
        match token {
            PostfixToken::Operand(value) => {
                debug!("push {}", value);
                operands.push(value)
            }
            PostfixToken::Op(op) => {
                let r = operands.pop().ok_or(EvalErr::WrongNumberOfArgs)?;
                let l = operands.pop().ok_or(EvalErr::WrongNumberOfArgs)?;
                let result = op.apply(l, r)?;
                debug!("{} {} {} = {}", l, op.symbol(), r, result);
                operands.push(result);
            }
            PostfixToken::Unknown(c) => return Err(EvalErr::BadToken(c)),
        }
    }
    match operands.len() {
        0 => Err(EvalErr::EmptyExpression),
        1 => operands.pop().ok_or(EvalErr::EmptyExpression),
        n => Err(EvalErr::LeftoverOperands(n)),
    }
}
