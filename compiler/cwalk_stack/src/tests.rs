use super::*;

#[test]
fn test_factorial_through_guard() {
    fn factorial(n: i64) -> i64 {
        ensure_sufficient_stack(|| if n == 0 { 1 } else { n * factorial(n - 1) })
    }

    assert_eq!(factorial(5), 120);
}

#[test]
fn test_deep_recursion() {
    // Deeper than a default thread stack allows without growth
    fn count_down(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { count_down(n - 1) + 1 })
    }

    assert_eq!(count_down(200_000), 200_000);
}

#[test]
fn test_result_passthrough() {
    let result: Result<i64, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(result, Err("boom".to_string()));
}
