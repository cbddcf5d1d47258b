//! LIFO helpers. A `Vec` is the stack, its last element is the top.

/// Pop every element of `from` and push it onto `to`.
/// The elements land on `to` in inverted order.
pub fn transfer<T>(from: &mut Vec<T>, to: &mut Vec<T>) {
    while let Some(top) = from.pop() {
        to.push(top);
    }
}

/// Reverse `stack` in place using only pops and pushes.
///
/// After reversing, popping yields the elements in the order they were
/// originally pushed. Every transfer inverts once, so the elements make
/// three trips (stack, aux, scratch, back to stack) to end up inverted.
pub fn reverse<T>(stack: &mut Vec<T>) {
    if stack.is_empty() {
        return;
    }
    let mut aux = Vec::with_capacity(stack.len());
    let mut scratch = Vec::with_capacity(stack.len());
    transfer(stack, &mut aux);
    transfer(&mut aux, &mut scratch);
    transfer(&mut scratch, stack);
    debug!("reversed stack of {} elements", stack.len());
}

/// Pop the whole stack, returning elements in pop order (top first).
pub fn drain_top<T>(stack: &mut Vec<T>) -> Vec<T> {
    let mut popped = Vec::with_capacity(stack.len());
    transfer(stack, &mut popped);
    popped
}
