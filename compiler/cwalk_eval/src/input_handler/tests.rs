use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_yields_values_in_order() {
    let mut input = InputHandler::buffer([4, -2]);
    assert_eq!(input.read_int(), Some(4));
    assert_eq!(input.read_int(), Some(-2));
    assert_eq!(input.read_int(), None);
}

#[test]
fn text_splits_on_any_whitespace() {
    let mut input = InputHandler::text("10 20\n\t30\n");
    assert_eq!(input.read_int(), Some(10));
    assert_eq!(input.read_int(), Some(20));
    assert_eq!(input.read_int(), Some(30));
    assert_eq!(input.read_int(), None);
}

#[test]
fn unparsable_token_is_consumed_and_reported_as_none() {
    let mut input = InputHandler::text("abc 5");
    assert_eq!(input.read_int(), None);
    assert_eq!(input.read_int(), Some(5));
}

#[test]
fn out_of_range_token_is_none() {
    let mut input = InputHandler::text("99999999999999999999");
    assert_eq!(input.read_int(), None);
}
