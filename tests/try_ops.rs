use anyhow::{Result, bail, ensure};
use ironstream::testing::*;
use ironstream::*;

#[test]
fn try_fold_sums() -> Result<()> {
    let total = from_values([1, 2, 3]).try_fold(0, |acc, x| Ok(acc + x))?;
    assert_eq!(total, 6);
    Ok(())
}

#[test]
fn try_fold_reports_the_first_error() {
    let err = from_values([5, 0, 2, 0])
        .try_fold(100, |acc, x| {
            ensure!(x != 0, "division by zero after {acc}");
            Ok(acc / x)
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "division by zero after 20");
}

#[test]
fn try_for_each_stops_pulling_after_an_error() {
    let pulled = CallCounter::new();
    let c = pulled.clone();
    let s = iterate(1, |x| x + 1).peek(move |_| c.tick());

    let r = s.try_for_each(|x| {
        if x == 3 {
            bail!("stop at {x}");
        }
        Ok(())
    });

    assert_eq!(r.unwrap_err().to_string(), "stop at 3");
    assert_eq!(pulled.get(), 3);
}

#[test]
fn try_to_vec_collects_parsed_values() -> Result<()> {
    let nums = from_values(["1", "22", "333"])
        .try_map(|s| s.parse::<u32>())
        .try_to_vec()?;
    assert_eq!(nums, vec![1, 22, 333]);
    Ok(())
}

#[test]
fn try_to_vec_fails_on_the_first_bad_element() {
    let err = from_values(["1", "x", "y"])
        .try_map(|s| s.parse::<u32>())
        .try_to_vec()
        .unwrap_err();
    assert!(err.to_string().starts_with("element failed:"));
}

#[test]
fn try_ops_on_empty_streams() -> Result<()> {
    empty::<i32>().try_for_each(|_| bail!("never called"))?;
    assert_eq!(empty::<i32>().try_fold(7, |a, b| Ok(a + b))?, 7);
    Ok(())
}
