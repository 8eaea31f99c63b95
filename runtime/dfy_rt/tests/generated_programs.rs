//! Programs written the way a code generator emits them against the
//! runtime: every routine body returns `Result<Flow, Halt>` and every
//! block, loop and routine is wrapped in the matching scope.

use dfy_rt::{
    for_each, integer_range, label, print, quantifier, run_program, while_loop, Array, BigInt,
    Flow, Halt, LabelScope, ProgramError, Seq, Set, Value,
};
use pretty_assertions::assert_eq;

/// method Gcd(a: int, b: int) returns (r: int) { if b == 0 { r := a; } else { r := Gcd(b, a % b); } }
fn gcd(a: i64, b: i64) -> Result<i64, Halt> {
    let (mut a, mut b) = (a, b);
    let mut r = 0;
    LabelScope::routine("Gcd").run(|| -> Result<Flow, Halt> {
        if b == 0 {
            r = a;
            return Ok(Flow::Completed);
        }
        (a, b) = (b, a.rem_euclid(b));
        Ok(Flow::TailCall)
    })?;
    Ok(r)
}

#[test]
fn tail_recursive_method_runs_in_constant_stack() {
    assert_eq!(gcd(1071, 462), Ok(21));

    // Deep enough to overflow if every call took a frame.
    let mut countdown = 1_000_000u32;
    let flow = LabelScope::routine("Down").run(|| {
        if countdown == 0 {
            return Ok::<_, Halt>(Flow::Completed);
        }
        countdown -= 1;
        Ok(Flow::TailCall)
    });
    assert_eq!(flow, Ok(Flow::Completed));
    assert_eq!(countdown, 0);
}

#[test]
fn labeled_break_out_of_nested_loops() {
    // outer: for i := 0 to 5 { for j := 0 to 5 { if i * j == 6 { found := (i, j); break outer; } } }
    let mut found = None;
    let flow = for_each(Some("outer"), 0..5, |i| {
        for_each(None, 0..5, |j| {
            if i * j == 6 {
                found = Some((i, j));
                return Ok::<_, Halt>(Flow::Break(Some("outer")));
            }
            Ok(Flow::Completed)
        })
    });
    assert_eq!(flow, Ok(Flow::Completed));
    assert_eq!(found, Some((2, 3)));
}

#[test]
fn labeled_block_break() {
    // block: { x := 1; if x > 0 { break block; } x := 2; }
    let mut x = 0;
    let flow: Result<Flow, Halt> = label(Some("block"), || {
        x = 1;
        let inner = label(None, || {
            if x > 0 {
                return Ok::<_, Halt>(Flow::Break(Some("block")));
            }
            Ok(Flow::Completed)
        })?;
        if !inner.is_completed() {
            return Ok(inner);
        }
        x = 2;
        Ok(Flow::Completed)
    });
    assert_eq!(flow, Ok(Flow::Completed));
    assert_eq!(x, 1);
}

#[test]
fn while_loop_with_halt() {
    let mut out = Vec::new();
    let result = run_program(|| {
        let mut i = 0;
        while_loop(
            None,
            || Ok(true),
            || {
                print(&mut out, &Value::int(i)).map_err(|e| Halt::from_text(&e.to_string()))?;
                i += 1;
                if i == 3 {
                    return Err(Halt::from_text("limit reached"));
                }
                Ok(Flow::Completed)
            },
        )
    });
    assert_eq!(String::from_utf8(out).unwrap(), "012");
    let Err(ProgramError::Halted(halt)) = result else {
        panic!("expected a halt, got {result:?}");
    };
    assert_eq!(halt.message(), &Seq::text("limit reached".chars().map(Value::Char)));
}

#[test]
fn missing_label_is_reported_at_the_boundary() {
    let result = run_program(|| for_each(None, 0..3, |_| Ok(Flow::Continue(Some("ghost")))));
    assert!(matches!(
        result,
        Err(ProgramError::UncaughtSignal(Flow::Continue(Some("ghost"))))
    ));
}

#[test]
fn array_cells_do_not_alias() {
    // var a := new seq<int>[2, 3]((_, _) => [0]) with a mutable cell payload
    let init = Value::Array(Array::from_values(vec![Value::int(0)]));
    let grid = Array::new(&init, &[2, 3]);

    let cell = grid.get(&[0, 0]).unwrap();
    cell.as_array().unwrap().set(&[0], Value::int(99));

    assert_eq!(
        grid.get(&[0, 1]).unwrap().as_array().unwrap().get(&[0]),
        Some(Value::int(0))
    );
    assert_eq!(
        cell.as_array().unwrap().get(&[0]),
        Some(Value::int(99))
    );
}

#[test]
fn quantifiers_over_generated_domains() {
    let evens = [2, 4, 6].map(Value::int);
    let is_even = |v: &Value| v.as_int().is_some_and(|n| n % 2 == BigInt::from(0));
    assert!(quantifier(evens.iter(), true, is_even));
    assert!(!quantifier([2, 3, 6].map(Value::int).iter(), true, is_even));

    // exists n :: 0 <= n < 100 && n * n == 49
    let range = integer_range(Some(BigInt::from(0)), Some(BigInt::from(100)));
    assert!(quantifier(range, false, |n| &n * &n == BigInt::from(49)));

    // forall s :: s <= {1, 2, 3} ==> |s| <= 3
    let base: Set<i32> = [1, 2, 3].into_iter().collect();
    assert!(quantifier(base.all_subsets(), true, |s| s.len() <= 3));
    assert_eq!(base.all_subsets().count(), 8);
}
