use crate::stack::{drain_top, reverse, transfer};
use rand::Rng;

#[test]
fn reverse_pops_in_push_order() {
    let mut stack = Vec::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    reverse(&mut stack);
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), None);
}

#[test]
fn reverse_empty_is_noop() {
    let mut stack: Vec<i64> = Vec::new();
    reverse(&mut stack);
    assert!(stack.is_empty());
}

#[test]
fn reverse_single() {
    let mut stack = vec![42];
    reverse(&mut stack);
    assert_eq!(stack, vec![42]);
}

#[test]
fn reverse_strings() {
    let mut stack = vec![format!("a"), format!("b")];
    reverse(&mut stack);
    assert_eq!(drain_top(&mut stack), vec![format!("a"), format!("b")]);
}

#[test]
fn reverse_twice_is_identity() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let n = rng.random_range(0..64);
        let original: Vec<i64> = (0..n).map(|_| rng.random_range(-1000..1000)).collect();
        let mut stack = original.clone();
        reverse(&mut stack);
        reverse(&mut stack);
        assert_eq!(stack, original);
    }
}

#[test]
fn reverse_inverts_pop_order() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let n = rng.random_range(0..64);
        let original: Vec<i64> = (0..n).map(|_| rng.random()).collect();
        let mut stack = original.clone();
        reverse(&mut stack);
        assert_eq!(stack.len(), original.len());
        assert_eq!(drain_top(&mut stack), original);
    }
}

#[test]
fn transfer_inverts_and_empties_source() {
    let mut from = vec![1, 2, 3];
    let mut to = vec![9];
    transfer(&mut from, &mut to);
    assert!(from.is_empty());
    assert_eq!(to, vec![9, 3, 2, 1]);
}

#[test]
fn drain_top_pops_top_first() {
    let mut stack = vec![1, 2, 3];
    assert_eq!(drain_top(&mut stack), vec![3, 2, 1]);
    assert!(stack.is_empty());
}
