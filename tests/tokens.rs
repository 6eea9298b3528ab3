//! A token scanner exposed through `from_enumerator`.

use ironstream::*;
use regex::Regex;
use std::cell::RefCell;
use std::rc::Rc;

struct Scanner {
    pattern: Regex,
    text: String,
    pos: usize,
}

impl Scanner {
    fn has_next(&self) -> bool {
        self.pattern.find_at(&self.text, self.pos).is_some()
    }

    fn next_token(&mut self) -> String {
        match self.pattern.find_at(&self.text, self.pos) {
            Some(m) => {
                self.pos = m.end();
                m.as_str().to_string()
            }
            None => String::new(),
        }
    }
}

fn tokens(text: &str) -> Stream<String> {
    let scanner = Rc::new(RefCell::new(Scanner {
        pattern: Regex::new(r"[A-Za-z]+|\d+").unwrap(),
        text: text.to_string(),
        pos: 0,
    }));
    let check = Rc::clone(&scanner);
    from_enumerator(
        move || check.borrow().has_next(),
        move || scanner.borrow_mut().next_token(),
    )
}

#[test]
fn scans_every_token() {
    let out = tokens("let x1 = 42 + y;").to_vec();
    assert_eq!(out, vec!["let", "x", "1", "42", "y"]);
}

#[test]
fn numbers_only() {
    let sum: u64 = tokens("a 1 b 20 c 300")
        .filter(|t| t.chars().all(|c| c.is_ascii_digit()))
        .map(|t| t.parse::<u64>().unwrap())
        .fold(0, |a, b| a + b);
    assert_eq!(sum, 321);
}

#[test]
fn scanner_is_left_where_the_evaluation_stopped() {
    let s = tokens("one two three four");
    assert_eq!(s.clone().limit(2).to_vec(), vec!["one", "two"]);
    assert_eq!(s.find_first().as_deref(), Some("three"));
}

#[test]
fn empty_text_yields_nothing() {
    assert_eq!(tokens("  ;; ").count(), 0);
}
