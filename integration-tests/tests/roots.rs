use approx::assert_relative_eq;

use integration_tests::{scaled_slope, scaled_square, square_minus_two, twice};
use rootline_core::{Args, keyed};
use rootline_solvers::{inv_for, inverse_for, root_for};

const SQRT_2: f64 = std::f64::consts::SQRT_2;

#[test]
fn newton_finds_both_roots() {
    let f = square_minus_two();
    let df = twice();

    let newton = |x0: f64| {
        root_for(&f)
            .method("newton")
            .derivative(&df)
            .x0(x0)
            .solve()
            .expect("newton should converge")
    };

    assert_relative_eq!(newton(10.0), SQRT_2, epsilon = 1e-6);
    assert_relative_eq!(newton(-10.0), -SQRT_2, epsilon = 1e-6);
}

#[test]
fn newton_recovers_from_flat_start() {
    let f = square_minus_two();
    let df = twice();

    // df(0) = 0, so the first step uses the slope floor and lands far right.
    let x = root_for(&f)
        .method("n")
        .derivative(&df)
        .x0(0)
        .solve()
        .expect("newton should converge");

    assert_relative_eq!(x, SQRT_2, epsilon = 1e-6);
}

#[test]
fn secant_finds_both_roots() {
    let f = square_minus_two();

    let x = root_for(&f).method("secant").x0(10).x1(9).solve().unwrap();
    assert_relative_eq!(x, SQRT_2, epsilon = 1e-6);

    let x = root_for(&f).method("sec").x0(-10).x1(-9).solve().unwrap();
    assert_relative_eq!(x, -SQRT_2, epsilon = 1e-6);
}

#[test]
fn secant_handles_symmetric_window() {
    let f = square_minus_two();

    // f(9) == f(-9), so the first denominator is zero.
    let x = root_for(&f).method("s").x0(9).x1(-9).solve().unwrap();

    assert_relative_eq!(x.abs(), SQRT_2, epsilon = 1e-6);
    assert!((x * x - 2.0).abs() < 1e-6);
}

#[test]
fn inverse_solves_for_target() {
    let f = square_minus_two();
    let df = twice();

    let x = inverse_for(&f, 2)
        .method("newton")
        .derivative(&df)
        .x0(0)
        .solve()
        .unwrap();
    assert_relative_eq!(x, 2.0, epsilon = 1e-6);

    let x = inv_for(&f, 2.0).method("secant").x0(0).x1(1).solve().unwrap();
    assert_relative_eq!(x, 2.0, epsilon = 1e-6);
}

#[test]
fn positional_args_are_forwarded() {
    let f = scaled_square();
    let df = scaled_slope();

    let x = root_for(&f)
        .method("newton_raphson")
        .derivative(&df)
        .f_args([1.0, -2.0])
        .df_args(2.0)
        .x0(10)
        .solve()
        .unwrap();

    assert_relative_eq!(x, SQRT_2, epsilon = 1e-6);
}

#[test]
fn keyed_args_match_positional() {
    let f = keyed(["a", "b"], |x: f64, [a, b]: [f64; 2]| a * x * x + b);
    let df = keyed(["a"], |x: f64, [a]: [f64; 1]| a * x);

    let by_name = root_for(&f)
        .method("newton")
        .derivative(&df)
        .f_args(Args::keyed([("a", 1.0), ("b", -2.0)]))
        .df_args(Args::keyed([("a", 2.0)]))
        .x0(10)
        .solve()
        .unwrap();

    let by_position = root_for(scaled_square())
        .method("newton")
        .derivative(scaled_slope())
        .f_args([1.0, -2.0])
        .df_args(2.0)
        .x0(10)
        .solve()
        .unwrap();

    assert_eq!(by_name.to_bits(), by_position.to_bits());
}

#[test]
fn inverse_with_keyed_args() {
    let f = keyed(["a", "b"], |x: f64, [a, b]: [f64; 2]| a * x * x + b);

    let x = inverse_for(&f, 2)
        .method("secant")
        .f_args(Args::keyed([("a", 1.0), ("b", -2.0)]))
        .x0(0)
        .x1(1)
        .solve()
        .unwrap();

    assert_relative_eq!(x, 2.0, epsilon = 1e-6);
}

#[test]
fn repeated_solves_are_bit_identical() {
    let f = square_minus_two();
    let df = twice();

    let newton = || {
        root_for(&f)
            .method("newton")
            .derivative(&df)
            .x0(10)
            .solve()
            .unwrap()
    };
    let secant = || root_for(&f).method("secant").x0(10).x1(9).solve().unwrap();

    assert_eq!(newton().to_bits(), newton().to_bits());
    assert_eq!(secant().to_bits(), secant().to_bits());
}
