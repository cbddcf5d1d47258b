use crate::postfix::{BinOp, PostfixExpr, PostfixToken};
use std::fmt;

#[derive(Debug, Clone)]
enum AST {
    Leaf(i64),
    Node(BinOp, Box<AST>, Box<AST>),
}

// all operators are left associative
fn precedence(op: BinOp) -> usize {
    match op {
        BinOp::Add | BinOp::Sub => 1,
        BinOp::Mul | BinOp::Div => 2,
    }
}

impl PostfixExpr {
    // None if the tokens don't reduce to a single tree
    fn build_ast(&self) -> Option<AST> {
        let mut nodes = Vec::new();
        for token in self.0.iter() {
            match *token {
                PostfixToken::Operand(value) => nodes.push(AST::Leaf(value)),
                PostfixToken::Op(op) => {
                    let rhs = nodes.pop()?;
                    let lhs = nodes.pop()?;
                    nodes.push(AST::Node(op, Box::new(lhs), Box::new(rhs)));
                }
                PostfixToken::Unknown(_) => return None,
            }
        }
        match nodes.len() {
            1 => nodes.pop(),
            _ => None,
        }
    }

    fn raw(&self) -> String {
        self.0
            .iter()
            .map(|token| match *token {
                PostfixToken::Operand(value) => value.to_string(),
                PostfixToken::Op(op) => op.symbol().to_string(),
                PostfixToken::Unknown(c) => c.to_string(),
            })
            .collect()
    }
}

impl fmt::Display for PostfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn printer(root: &AST) -> (String, usize) {
            match root {
                AST::Leaf(value) => (format!("{}", value), usize::MAX),
                AST::Node(op, lhs, rhs) => {
                    let (lhs, rhs) = (printer(lhs), printer(rhs));
                    let prec = precedence(*op);
                    let lh = if lhs.1 < prec {
                        format!("({})", lhs.0)
                    } else {
                        lhs.0
                    };
                    // same precedence on the right changes meaning, eg: 3-(2-1)
                    let rh = if rhs.1 <= prec {
                        format!("({})", rhs.0)
                    } else {
                        rhs.0
                    };
                    (format!("{} {} {}", lh, op.symbol(), rh), prec)
                }
            }
        }

        match self.build_ast() {
            Some(ast) => write!(f, "{}", printer(&ast).0),
            None => write!(f, "{}", self.raw()),
        }
    }
}
