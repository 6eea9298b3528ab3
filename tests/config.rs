use anyhow::Result;
use ironstream::*;

#[test]
fn defaults() {
    let opts = EvalOptions::default();
    assert_eq!(opts.label, None);
    assert_eq!(opts.sort_capacity, EvalOptions::DEFAULT_SORT_CAPACITY);
    assert_eq!(opts, EvalOptions::new());
}

#[test]
fn json_fills_missing_fields_with_defaults() -> Result<()> {
    let opts = EvalOptions::from_json("{}")?;
    assert_eq!(opts, EvalOptions::default());

    let opts = EvalOptions::from_json(r#"{ "sort_capacity": 1024 }"#)?;
    assert_eq!(opts.sort_capacity, 1024);
    assert_eq!(opts.label, None);
    Ok(())
}

#[test]
fn json_round_trip() -> Result<()> {
    let opts = EvalOptions::new().with_label("nightly").with_sort_capacity(4);
    let back = EvalOptions::from_json(&opts.to_json()?)?;
    assert_eq!(back, opts);
    Ok(())
}

#[test]
fn malformed_json_is_an_error() {
    let err = EvalOptions::from_json(r#"{ "sort_capacity": "lots" }"#).unwrap_err();
    assert!(err.to_string().contains("invalid evaluation options"));
    assert!(EvalOptions::from_json("not json").is_err());
}

#[test]
fn options_propagate_through_stages() {
    let opts = EvalOptions::new().with_label("words");
    let s = from_values([3, 1, 2])
        .with_options(opts.clone())
        .map(|x| x + 1)
        .sorted(natural_order)
        .limit(2);
    assert_eq!(s.options(), &opts);
    assert_eq!(s.to_vec(), vec![2, 3]);
}

#[test]
fn tiny_sort_capacity_still_sorts_everything() {
    let s = from_collection((0..100).rev())
        .with_options(EvalOptions::new().with_sort_capacity(0))
        .sorted(natural_order);
    assert_eq!(s.to_vec(), (0..100).collect::<Vec<_>>());
}

#[test]
fn oversized_sort_capacity_is_rejected() {
    let err = EvalOptions::from_json(r#"{ "sort_capacity": 1000000000 }"#).unwrap_err();
    assert!(format!("{err:#}").contains("exceeds the maximum"));

    let at_max = format!(r#"{{ "sort_capacity": {} }}"#, EvalOptions::MAX_SORT_CAPACITY);
    assert!(EvalOptions::from_json(&at_max).is_ok());
}

#[test]
fn sort_capacity_is_only_a_hint() {
    let opts = EvalOptions::new().with_sort_capacity(usize::MAX);
    assert!(opts.validate().is_err());
    assert_eq!(opts.sort_buffer_capacity(), EvalOptions::MAX_SORT_CAPACITY);

    let out = from_values([3, 1, 2])
        .sorted(natural_order)
        .with_options(opts)
        .to_vec();
    assert_eq!(out, vec![1, 2, 3]);
}
