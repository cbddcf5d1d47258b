#![deny(warnings)]

// trace to stderr only when built with the 'debug' feature
macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

pub mod stack;
#[cfg(test)]
mod stack_test;

pub mod queue;
#[cfg(test)]
mod queue_test;

pub use postfix::{BinOp, PostfixExpr, PostfixToken, PostfixTokenizer};
pub mod postfix;

pub use self::rpneval::evaluate;
pub use self::rpneval::EvalErr;

mod rpnprint;
mod rpneval;
