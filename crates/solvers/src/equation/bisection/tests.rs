use std::cell::Cell;

use approx::assert_abs_diff_eq;

use compphys_core::Polynomial;

use crate::equation::{Action, Bracket, Config, Reason, Status, find_root_bisection};

use super::{Error, Event, solve, solve_unobserved};

/// f(x) = sin(x)·(x² + 2x)
fn wave(x: f64) -> f64 {
    x.sin() * (x * x + 2.0 * x)
}

fn config(eps: f64) -> Config {
    Config::new(eps).expect("valid eps")
}

fn reason(result: Result<impl std::fmt::Debug, Error>) -> Reason {
    result
        .expect_err("should not find a root")
        .not_found()
        .expect("should be a NotFound")
        .reason
}

#[test]
fn finds_roots_of_wave_function() {
    let eps = 1e-5;
    let cases = [
        ([2.5, 4.0], std::f64::consts::PI),
        ([-3.0, -1.5], -2.0),
        ([6.0, 7.0], 2.0 * std::f64::consts::PI),
    ];

    for ([a, b], expected) in cases {
        let x = find_root_bisection(&wave, a, b, eps).expect("sign change in bracket");
        assert!(wave(x).abs() < eps, "|f({x})| should be below eps");
        assert!((a..=b).contains(&x));
        assert_abs_diff_eq!(x, expected, epsilon = 1e-5);
    }
}

#[test]
fn residual_is_below_eps_for_several_functions() {
    let eps = 1e-9;
    let cube_minus_two = |x: f64| x.powi(3) - 2.0;
    let cos_minus_x = |x: f64| x.cos() - x;
    let quintic = Polynomial::new([-1.0, 0.0, 0.0, 1.0, 2.0, 5.0]);

    let x = find_root_bisection(&cube_minus_two, 0.0, 2.0, eps).expect("root");
    assert!(cube_minus_two(x).abs() < eps);
    assert_abs_diff_eq!(x, 2.0_f64.cbrt(), epsilon = 1e-9);

    let x = find_root_bisection(&cos_minus_x, 0.0, 1.0, eps).expect("root");
    assert!(cos_minus_x(x).abs() < eps);

    let x = find_root_bisection(&quintic, 0.0, 1.0, eps).expect("root");
    assert!(quintic.eval(x).abs() < eps);
}

#[test]
fn double_root_without_sign_change_is_not_found() {
    // sin(x)·(x² + 2x) ≈ 2x² near zero: it touches zero without crossing.
    let result = find_root_bisection(&wave, -0.9, 0.8, 1e-5);
    assert!(matches!(reason(result), Reason::NoSignChange { .. }));
}

#[test]
fn rejects_bracket_without_iterating() {
    let evals = Cell::new(0usize);
    let f = |x: f64| {
        evals.set(evals.get() + 1);
        x * x + 1.0
    };

    let mut events = 0usize;
    let observer = |_: &Event| {
        events += 1;
        None
    };
    let result = solve(&f, [-1.0, 1.0], &config(1e-6), observer);

    assert!(matches!(reason(result), Reason::NoSignChange { .. }));
    assert_eq!(evals.get(), 2, "only the endpoints are evaluated");
    assert_eq!(events, 0);
}

#[test]
fn zero_product_at_endpoint_is_rejected() {
    // f(a) = 0 makes the product zero, which is not a strict sign change.
    let f = |x: f64| x;
    let result = find_root_bisection(&f, 0.0, 1.0, 1e-6);

    match reason(result) {
        Reason::NoSignChange { f_low, f_high } => {
            assert_abs_diff_eq!(f_low, 0.0);
            assert_abs_diff_eq!(f_high, 1.0);
        }
        other => panic!("unexpected reason: {other:?}"),
    }
}

#[test]
fn nan_endpoint_is_rejected() {
    let f = |x: f64| if x < 0.0 { f64::NAN } else { x - 0.5 };
    let result = find_root_bisection(&f, -1.0, 1.0, 1e-6);
    assert!(matches!(reason(result), Reason::NoSignChange { .. }));
}

#[test]
fn reversed_bracket_leaves_on_first_update() {
    let f = |x: f64| x - 0.25;
    let result = find_root_bisection(&f, 1.0, -1.0, 1e-6);

    match reason(result) {
        Reason::LeftBracket { x } => assert_abs_diff_eq!(x, 0.5),
        other => panic!("unexpected reason: {other:?}"),
    }
}

#[test]
fn iteration_cap_reports_max_iters() {
    let f = |x: f64| x.powi(3) - 2.0;
    let config = config(1e-12).with_max_iters(5);

    let result = solve_unobserved(&f, [0.0, 2.0], &config);
    assert_eq!(reason(result), Reason::MaxIters { iters: 5 });
}

#[test]
fn zero_iteration_cap_only_checks_first_midpoint() {
    let f = |x: f64| x - 1.0;

    let solution = solve_unobserved(&f, [0.0, 2.0], &config(1e-9).with_max_iters(0))
        .expect("midpoint is the root");
    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);

    let result = solve_unobserved(&f, [0.0, 3.0], &config(1e-9).with_max_iters(0));
    assert_eq!(reason(result), Reason::MaxIters { iters: 0 });
}

#[test]
#[allow(clippy::float_cmp)]
fn non_finite_midpoint_residual_is_an_error() {
    let f = |x: f64| if x == 0.5 { f64::NAN } else { x - 0.3 };

    let result = find_root_bisection(&f, 0.0, 1.0, 1e-6);
    assert!(matches!(result, Err(Error::NonFinite { x, .. }) if x == 0.5));
}

#[test]
fn invalid_eps_is_rejected() {
    let result = find_root_bisection(&wave, 2.5, 4.0, 0.0);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn events_track_the_shrinking_bracket() {
    let f = |x: f64| x * x - 2.0;
    let mut events = Vec::new();

    let solution = solve(&f, [0.0, 2.0], &config(1e-6), |event: &Event| {
        events.push(*event);
        None
    })
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(events.len(), solution.iters + 1);

    let first = events[0];
    assert_eq!(first.iter, 0);
    assert_eq!(first.bracket, [0.0, 2.0]);
    assert_abs_diff_eq!(first.x, 1.0);
    assert_abs_diff_eq!(first.residual, -1.0);

    let root = 2.0_f64.sqrt();
    for (i, pair) in events.windows(2).enumerate() {
        let [prev, next] = [pair[0], pair[1]];
        assert_eq!(next.iter, i + 1);

        let prev_width = prev.bracket[1] - prev.bracket[0];
        let next_width = next.bracket[1] - next.bracket[0];
        assert_abs_diff_eq!(next_width, 0.5 * prev_width, epsilon = 1e-15);

        assert!(Bracket::from(next.bracket).contains(root));
        assert_abs_diff_eq!(next.x, Bracket::from(next.bracket).midpoint());
    }

    let last = events.last().expect("at least one event");
    assert_abs_diff_eq!(last.x, solution.x);
    assert!(last.residual.abs() < 1e-6);
}

#[test]
fn observer_can_stop_iteration() {
    let f = |x: f64| x * x - 9.0;

    let mut calls = 0usize;
    let observer = |event: &Event| {
        calls += 1;
        (event.iter >= 3).then_some(Action::StopEarly)
    };

    let solution = solve(&f, [0.0, 10.0], &config(1e-12), observer).expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(calls, 4);
    assert_abs_diff_eq!(solution.residual, f(solution.x));
}
