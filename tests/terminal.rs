use ironstream::testing::*;
use ironstream::*;
use std::collections::{BTreeMap, HashSet};

#[test]
fn empty_input_results() {
    let s = || empty::<i32>();
    assert!(s().all_match(|_| false));
    assert!(!s().any_match(|_| true));
    assert!(s().none_match(|_| true));
    assert_eq!(s().find_first(), None);
    assert_eq!(s().reduce(|a, b| a + b), None);
    assert_eq!(s().min(natural_order), None);
    assert_eq!(s().max(natural_order), None);
    assert_eq!(s().count(), 0);
    assert!(s().to_vec().is_empty());
    assert_eq!(s().fold(42, |a, b| a + b), 42);
}

#[test]
fn matchers_on_non_empty_input() {
    let s = || from_values([2, 4, 6, 7]);
    assert!(!s().all_match(|x| x % 2 == 0));
    assert!(s().all_match(|x| *x > 0));
    assert!(s().any_match(|x| *x == 7));
    assert!(!s().any_match(|x| *x > 100));
    assert!(s().none_match(|x| *x < 0));
    assert!(!s().none_match(|x| *x == 4));
}

#[test]
fn matchers_short_circuit_on_infinite_sources() {
    let naturals = || iterate(0u32, |x| x + 1);
    assert!(naturals().any_match(|x| *x == 1000));
    assert!(!naturals().all_match(|x| *x < 10));
    assert!(!naturals().none_match(|x| *x > 5));
}

#[test]
fn matchers_stop_pulling_once_decided() {
    let calls = CallCounter::new();
    let c = calls.clone();
    let s = from_values([1, 2, 3, 4, 5]).peek(move |_| c.tick());
    assert!(s.any_match(|x| *x == 2));
    assert_eq!(calls.get(), 2);
}

#[test]
fn find_first_pulls_one_element() {
    let calls = CallCounter::new();
    let c = calls.clone();
    let first = generate(move || {
        c.tick();
        "x"
    })
    .find_first();
    assert_eq!(first, Some("x"));
    assert_eq!(calls.get(), 1);

    let first_even = iterate(1, |x| x + 1).filter(|x| x % 2 == 0).find_first();
    assert_eq!(first_even, Some(2));
}

#[test]
fn reduce_and_fold() {
    assert_eq!(from_values([1, 2, 3, 4]).reduce(|a, b| a + b), Some(10));
    assert_eq!(from_values(["x"]).reduce(|a, _| a), Some("x"));

    let joined = from_values(["a", "b", "c"]).fold(String::new(), |mut acc, s| {
        acc.push_str(s);
        acc
    });
    assert_eq!(joined, "abc");
}

#[test]
fn min_and_max_keep_the_earliest_of_equals() {
    let words = || from_values(["bb", "a", "cc", "d", "ee"]);
    let by_len = comparing(|s: &&str| s.len());
    assert_eq!(words().min(&by_len), Some("a"));
    assert_eq!(words().max(&by_len), Some("bb"));
    assert_eq!(words().max(natural_order), Some("ee"));
    assert_eq!(words().min(reverse_order), Some("ee"));
}

#[test]
fn for_each_sees_every_element_in_order() {
    let mut seen = Vec::new();
    from_values([3, 1, 2]).for_each(|x| seen.push(x));
    assert_eq!(seen, vec![3, 1, 2]);
}

#[test]
fn collect_into_other_containers() {
    let set: HashSet<i32> = from_values([1, 2, 2, 3]).collect();
    assert_eq!(set.len(), 3);

    let lengths: BTreeMap<usize, &str> = from_values(["one", "three", "four"])
        .map(|w| (w.len(), w))
        .collect();
    assert_eq!(lengths.get(&5), Some(&"three"));

    let text: String = from_values(['o', 'k']).collect();
    assert_eq!(text, "ok");
}

#[test]
fn evaluate_into_a_custom_sink() {
    let mut sink = RecordingSink::new();
    from_values([1, 2]).map(|x| x * 10).evaluate(&mut sink);
    assert_eq!(sink.log(), ["begin", "accept(10)", "accept(20)", "end"]);
}

#[test]
fn sink_lifecycle_survives_a_short_circuit() {
    let mut sink = RecordingSink::with_limit(2);
    iterate(0, |x| x + 1).evaluate(&mut sink);
    assert_eq!(sink.log(), ["begin", "accept(0)", "accept(1)", "end"]);
}
