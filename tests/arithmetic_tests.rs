use rankcalc::interpreter::engine::reduce;
use rankcalc::interpreter::errors::EvalError;
use rankcalc::parser::lexer::tokenize;

fn eval(input: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    reduce(tokens).map(|token| token.value)
}

#[test]
fn test_multiply_before_add() {
    assert_eq!(eval("2+3*4="), Ok(14.0));
    assert_eq!(eval("2*3+4="), Ok(10.0));
}

#[test]
fn test_equal_rank_folds_left_to_right() {
    assert_eq!(eval("8-3-2="), Ok(3.0));
    assert_eq!(eval("64/4/2="), Ok(8.0));
    assert_eq!(eval("10-2+5="), Ok(13.0));
}

#[test]
fn test_power_binds_tightest() {
    assert_eq!(eval("2^3="), Ok(8.0));
    assert_eq!(eval("1+2^3*2="), Ok(17.0));
    assert_eq!(eval("3*2^2="), Ok(12.0));
}

#[test]
fn test_zero_exponent_returns_base() {
    // Inherited behaviour, not x^0 = 1
    assert_eq!(eval("2^0="), Ok(2.0));
    assert_eq!(eval("5^0+1="), Ok(6.0));
}

#[test]
fn test_division_keeps_fraction_internally() {
    // 7/2 is 3.5, doubled back to 7
    assert_eq!(eval("7/2*2="), Ok(7.0));
}

#[test]
fn test_division_by_zero_is_an_error() {
    assert!(matches!(eval("9/0="), Err(EvalError::DivisionByZero { .. })));
    assert!(matches!(eval("1+2/0*3="), Err(EvalError::DivisionByZero { .. })));
}

#[test]
fn test_long_chain() {
    assert_eq!(eval("1+2+3+4+5+6+7+8+9+10="), Ok(55.0));
    assert_eq!(eval("2*2*2*2*2*2*2*2*2*2="), Ok(1024.0));
}

#[test]
fn test_huge_exponent_saturates() {
    assert_eq!(eval("10^999999999="), Ok(f64::INFINITY));
}

#[test]
fn test_integers_beyond_single_precision_stay_exact() {
    assert_eq!(eval("16777217+0="), Ok(16777217.0));
}
