use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, Write};

/// Remove elements from the front of `queue` until it's empty,
/// handing each one to `serve` in arrival order.
pub fn drain<T, F: FnMut(T)>(queue: &mut VecDeque<T>, mut serve: F) {
    while let Some(front) = queue.pop_front() {
        serve(front);
    }
}

pub fn serving_message<T: Display>(customer: &T) -> String {
    format!("Now serving {}", customer)
}

/// Drain `queue` writing one serving line per element to `out`.
/// Stops at the first failed write, that element is already off the queue.
pub fn serve_all<T: Display, W: Write>(queue: &mut VecDeque<T>, out: &mut W) -> io::Result<()> {
    while let Some(front) = queue.pop_front() {
        debug!("serving {} ({} waiting)", front, queue.len());
        writeln!(out, "{}", serving_message(&front))?;
    }
    Ok(())
}
