use crate::queue::{drain, serve_all, serving_message};
use std::collections::VecDeque;
use std::io;

#[test]
fn drain_in_fifo_order() {
    let mut queue: VecDeque<String> = ["ana", "luis", "marta"].iter().map(|s| s.to_string()).collect();
    let mut served = Vec::new();
    drain(&mut queue, |c| served.push(c));
    assert!(queue.is_empty());
    assert_eq!(served, vec![format!("ana"), format!("luis"), format!("marta")]);
}

#[test]
fn drain_empty_serves_nobody() {
    let mut queue: VecDeque<String> = VecDeque::new();
    let mut count = 0;
    drain(&mut queue, |_| count += 1);
    assert_eq!(count, 0);
}

#[test]
fn serve_all_writes_lines() {
    let mut queue: VecDeque<&str> = VecDeque::from(vec!["ana", "luis"]);
    let mut out = Vec::new();
    serve_all(&mut queue, &mut out).unwrap();
    assert!(queue.is_empty());
    assert_eq!(String::from_utf8(out).unwrap(), "Now serving ana\nNow serving luis\n");
}

#[test]
fn serve_all_empty_writes_nothing() {
    let mut queue: VecDeque<&str> = VecDeque::new();
    let mut out = Vec::new();
    serve_all(&mut queue, &mut out).unwrap();
    assert!(out.is_empty());
}

struct Broken;

impl io::Write for Broken {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn serve_all_stops_on_write_error() {
    let mut queue = VecDeque::from(vec![1, 2, 3]);
    let err = serve_all(&mut queue, &mut Broken).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(queue, VecDeque::from(vec![2, 3]));
}

#[test]
fn message_text() {
    assert_eq!(serving_message(&"pedro"), "Now serving pedro");
    assert_eq!(serving_message(&7), "Now serving 7");
}
