use ironstream::natural_order;
use ironstream::runner::Context;
use ironstream::sink::terminal::{Accumulator, Extremum, FindFirst, Match, Reduce};
use ironstream::sink::{Chained, Filter, Forward, Limit, Map, Sink, Skip, SortBarrier};
use ironstream::testing::RecordingSink;

/// Push `items` through one full lifecycle.
fn feed<T>(sink: &mut dyn Sink<T>, items: impl IntoIterator<Item = T>) {
    sink.begin();
    for item in items {
        sink.accept(item);
    }
    sink.end();
}

#[test]
fn chained_map_and_filter_compose_outside_in() {
    let mut out = RecordingSink::new();
    {
        let mut mapped = Chained::<String, _>::new(&mut out, Map::new(|i: i32| format!(">>{i}<<")));
        let mut filtered = Chained::<i32, _>::new(&mut mapped, Filter::new(|i: &i32| *i > 1));
        feed(&mut filtered, [1, 10]);
    }
    assert_eq!(out.log(), ["begin", "accept(\">>10<<\")", "end"]);
}

#[test]
fn limit_reports_its_own_done() {
    let mut out = RecordingSink::new();
    {
        let mut limit = Chained::<i32, _>::new(&mut out, Limit::new(2));
        limit.begin();
        assert!(!limit.done());
        limit.accept(1);
        limit.accept(2);
        assert!(limit.done());
        limit.accept(3);
        limit.end();
    }
    assert_eq!(out.log(), ["begin", "accept(1)", "accept(2)", "end"]);
}

#[test]
fn limit_reports_downstream_done() {
    let mut out = RecordingSink::with_limit(1);
    let mut limit = Chained::<i32, _>::new(&mut out, Limit::new(10));
    limit.begin();
    assert!(!limit.done());
    limit.accept(1);
    assert!(limit.done());
}

#[test]
fn limit_zero_is_done_before_any_input() {
    let mut out = RecordingSink::new();
    let mut limit = Chained::<i32, _>::new(&mut out, Limit::new(0));
    limit.begin();
    assert!(limit.done());
}

#[test]
fn skip_drops_leading_elements_and_never_stops() {
    let mut out = RecordingSink::new();
    {
        let mut skip = Chained::<i32, _>::new(&mut out, Skip::new(2));
        skip.begin();
        for i in 1..=4 {
            assert!(!skip.done());
            skip.accept(i);
        }
        skip.end();
    }
    assert_eq!(out.log(), ["begin", "accept(3)", "accept(4)", "end"]);
}

#[test]
fn sort_barrier_holds_everything_until_end() {
    let ctx = Context::detached();
    let mut out = RecordingSink::with_limit(2);
    {
        let downstream: &mut dyn Sink<i32> = &mut out;
        let mut sort = SortBarrier::new(downstream, natural_order::<i32>, &ctx);
        sort.begin();
        for x in [3, 1, 2] {
            assert!(!sort.done());
            sort.accept(x);
        }
    }
    assert!(out.log().is_empty());
}

#[test]
fn sort_barrier_replays_as_a_nested_evaluation() {
    let ctx = Context::detached();
    let mut out = RecordingSink::with_limit(2);
    {
        let downstream: &mut dyn Sink<i32> = &mut out;
        let mut sort = SortBarrier::new(downstream, natural_order::<i32>, &ctx);
        feed(&mut sort, [3, 1, 2]);
    }
    // The downstream limit stops the replay after two.
    assert_eq!(out.log(), ["begin", "accept(1)", "accept(2)", "end"]);
}

#[test]
fn forward_swallows_begin_and_end() {
    let mut out = RecordingSink::with_limit(1);
    {
        let mut fwd = Forward::<&str>::new(&mut out);
        fwd.begin();
        assert!(!fwd.done());
        fwd.accept("x");
        assert!(fwd.done());
        fwd.end();
    }
    assert_eq!(out.log(), ["accept(\"x\")"]);
}

#[test]
fn any_match_decides_once() {
    let mut any = Match::any(|x: &i32| *x > 2);
    Sink::<i32>::begin(&mut any);
    assert!(!any.value());
    any.accept(1);
    assert!(!Sink::<i32>::done(&any));
    any.accept(3);
    assert!(Sink::<i32>::done(&any));
    assert!(any.value());
    any.accept(0);
    assert!(any.value());
}

#[test]
fn all_and_none_match_on_counterexamples() {
    let mut all = Match::all(|x: &i32| *x > 0);
    feed(&mut all, [1, -1, 2]);
    assert!(!all.value());

    let mut none = Match::none(|x: &i32| *x == 7);
    feed(&mut none, [1, 2, 3]);
    assert!(none.value());

    let mut none = Match::none(|x: &i32| *x == 7);
    feed(&mut none, [1, 7]);
    assert!(!none.value());
}

#[test]
fn match_results_on_empty_input() {
    let mut all = Match::all(|_: &i32| false);
    feed(&mut all, []);
    assert!(all.value());

    let mut any = Match::any(|_: &i32| true);
    feed(&mut any, []);
    assert!(!any.value());

    let mut none = Match::none(|_: &i32| true);
    feed(&mut none, []);
    assert!(none.value());
}

#[test]
fn find_first_keeps_the_first_element() {
    let mut first = FindFirst::<&str>::new();
    assert!(!first.done());
    first.accept("a");
    assert!(first.done());
    first.accept("b");
    assert_eq!(first.into_value(), Some("a"));
}

#[test]
fn extremum_prefers_the_earliest_of_equals() {
    let key_less = |a: &(i32, char), b: &(i32, char)| a.0 < b.0;

    let mut min = Extremum::min(key_less);
    feed(&mut min, [(2, 'a'), (1, 'b'), (1, 'c'), (3, 'd')]);
    assert_eq!(min.into_value(), Some((1, 'b')));

    let mut max = Extremum::max(key_less);
    feed(&mut max, [(2, 'a'), (3, 'b'), (3, 'c'), (1, 'd')]);
    assert_eq!(max.into_value(), Some((3, 'b')));
}

#[test]
fn reduce_is_seeded_by_the_first_element() {
    let mut r = Reduce::new(|a: i32, b: i32| a * 10 + b);
    feed(&mut r, [1, 2, 3]);
    assert_eq!(r.into_value(), Some(123));

    let mut empty = Reduce::<i32, _>::new(|a: i32, b: i32| a + b);
    feed(&mut empty, []);
    assert_eq!(empty.into_value(), None);
}

#[test]
fn accumulator_folds_from_identity() {
    let mut acc = Accumulator::new(String::new(), |mut s: String, c: char| {
        s.push(c);
        s
    });
    feed(&mut acc, "abc".chars());
    assert_eq!(acc.into_value(), "abc");
}

#[test]
fn accumulator_survives_healthy_combines() {
    let mut acc = Accumulator::new(0, |a: i32, b: i32| a + b);
    feed(&mut acc, [1, 2]);
    assert!(!acc.is_poisoned());
    assert_eq!(acc.into_value(), 3);
}

#[test]
#[should_panic(expected = "accumulator poisoned")]
fn accumulator_is_poisoned_by_a_panicking_combine() {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    let mut acc = Accumulator::new(0, |_: i32, _: i32| -> i32 { panic!("combine failed") });
    let caught = catch_unwind(AssertUnwindSafe(|| acc.accept(1)));
    assert!(caught.is_err());
    assert!(acc.is_poisoned());
    let _ = acc.into_value();
}
