use integration_tests::{Counting, scaled_slope, scaled_square, square_minus_two, twice};
use rootline_core::Shape;
use rootline_solvers::{Error, InvalidArgument, inverse_for, root_for};

fn rejected(result: Result<f64, Error>) -> InvalidArgument {
    match result {
        Err(Error::InvalidArgument(reason)) => reason,
        other => panic!("expected invalid argument, got {other:?}"),
    }
}

#[test]
fn function_that_cannot_take_its_args() {
    let f = Counting::new(scaled_square());
    let df = twice();

    // No extra args for a function that needs two.
    let reason = rejected(root_for(&f).method("newton").derivative(&df).x0(10).solve());
    assert_eq!(reason, InvalidArgument::Function(Shape::None));

    let reason = rejected(root_for(&f).method("secant").f_args(1.0).solve());
    assert_eq!(reason, InvalidArgument::Function(Shape::Positional(1)));

    let reason = rejected(inverse_for(&f, 2).method("secant").solve());
    assert_eq!(reason, InvalidArgument::Function(Shape::None));

    assert_eq!(f.calls(), 0);
}

#[test]
fn derivative_missing_or_unusable() {
    let f = Counting::new(scaled_square());
    let df = Counting::new(scaled_slope());

    let reason = rejected(root_for(&f).method("newton").f_args([1.0, -2.0]).solve());
    assert_eq!(reason, InvalidArgument::MissingDerivative);

    let reason = rejected(
        root_for(&f)
            .method("newton")
            .derivative(&df)
            .f_args([1.0, -2.0])
            .solve(),
    );
    assert_eq!(reason, InvalidArgument::Derivative(Shape::None));

    let reason = rejected(
        inverse_for(&f, 2)
            .method("newton")
            .derivative(&df)
            .f_args([1.0, -2.0])
            .df_args([1.0, 2.0, 3.0])
            .solve(),
    );
    assert_eq!(reason, InvalidArgument::Derivative(Shape::Positional(3)));

    assert_eq!(f.calls(), 0);
    assert_eq!(df.calls(), 0);
}

#[test]
fn bad_settings_make_no_calls() {
    let f = Counting::new(square_minus_two());

    let reason = rejected(root_for(&f).method("brent").solve());
    assert_eq!(reason, InvalidArgument::UnknownMethod("brent".into()));

    let reason = rejected(root_for(&f).solve());
    assert_eq!(reason, InvalidArgument::MissingMethod);

    let reason = rejected(root_for(&f).method("secant").x0("ten").solve());
    assert!(matches!(reason, InvalidArgument::NotNumeric { name: "x0", .. }));

    let reason = rejected(root_for(&f).method("secant").err(f64::NAN).solve());
    assert!(matches!(reason, InvalidArgument::Config(_)));

    assert_eq!(f.calls(), 0);
}

#[test]
fn rejection_messages_name_the_problem() {
    let f = square_minus_two();

    let message = root_for(&f).method("Newton").solve().unwrap_err().to_string();
    assert!(message.contains("Newton"), "{message}");

    let message = root_for(&f)
        .method("secant")
        .x1("dummy")
        .solve()
        .unwrap_err()
        .to_string();
    assert!(message.contains("x1"), "{message}");
}
