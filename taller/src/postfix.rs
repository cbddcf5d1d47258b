use crate::rpneval::EvalErr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinOp {
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOp {
    /// Only these four characters are operators, anything else is an operand.
    pub fn from_char(c: char) -> Option<BinOp> {
        match c {
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Add => '+',
            BinOp::Sub => '-',
        }
    }

    /// `l OP r` with i64 checked arithmetic. Division truncates toward zero.
    pub fn apply(self, l: i64, r: i64) -> Result<i64, EvalErr> {
        let result = match self {
            BinOp::Mul => l.checked_mul(r),
            BinOp::Add => l.checked_add(r),
            BinOp::Sub => l.checked_sub(r),
            BinOp::Div if r == 0 => return Err(EvalErr::DivisionByZero),
            BinOp::Div => l.checked_div(r),
        };
        result.ok_or(EvalErr::Overflow)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PostfixToken {
    Operand(i64),
    Op(BinOp),
    Unknown(char),
}

/// Classifies each input char on its own: no whitespace skipping and no
/// multi-digit numbers.
pub struct PostfixTokenizer<I: Iterator<Item = char>> {
    src: I,
}

impl<I: Iterator<Item = char>> PostfixTokenizer<I> {
    pub fn new(source: I) -> Self {
        PostfixTokenizer { src: source }
    }

    fn classify(c: char) -> PostfixToken {
        if let Some(op) = BinOp::from_char(c) {
            return PostfixToken::Op(op);
        }
        match c.to_digit(10) {
            Some(d) => PostfixToken::Operand(d as i64),
            None => PostfixToken::Unknown(c),
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for PostfixTokenizer<I> {
    type Item = PostfixToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.next().map(Self::classify)
    }
}

#[derive(PartialEq, Debug)]
pub struct PostfixExpr(pub Vec<PostfixToken>);

impl PostfixExpr {
    pub fn parse_str(expr: &str) -> Result<PostfixExpr, EvalErr> {
        Self::parse(PostfixTokenizer::new(expr.chars()))
    }

    /// Collect tokens checking the expression leaves exactly one value:
    /// every operator needs two pending operands.
    pub fn parse(lex: impl Iterator<Item = PostfixToken>) -> Result<PostfixExpr, EvalErr> {
        let mut out = Vec::new();
        let mut depth = 0usize;
        for token in lex {
            match token {
                PostfixToken::Operand(_) => depth += 1,
                PostfixToken::Op(_) if depth < 2 => return Err(EvalErr::WrongNumberOfArgs),
                PostfixToken::Op(_) => depth -= 1,
                PostfixToken::Unknown(c) => return Err(EvalErr::BadToken(c)),
            }
            out.push(token);
        }
        match depth {
            0 => Err(EvalErr::EmptyExpression),
            1 => Ok(PostfixExpr(out)),
            n => Err(EvalErr::LeftoverOperands(n)),
        }
    }
}
