//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, Position(10));

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_unexpected_character_constructor() {
    let error = Error::unexpected_character('#', 3);

    assert_eq!(error.kind(), &ErrorImpl::UnexpectedCharacter { character: '#' });
    assert_eq!(error.get_position(), &Position(3));
}

#[test]
fn test_unterminated_string_constructor() {
    let error = Error::unterminated_string(7);

    assert_eq!(error.kind(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_position().0, 7);
}

#[test]
fn test_error_display() {
    let error = Error::unexpected_character('@', 0);
    assert_eq!(error.to_string(), "unexpected character '@' at offset 0");

    let error = Error::unterminated_string(12);
    assert_eq!(error.to_string(), "unterminated string literal at offset 12");
}

#[test]
fn test_error_tip_none() {
    let error = Error::unexpected_character('$', 0);

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::unterminated_string(4);

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(Error::unterminated_string(1));
    assert_eq!(error.to_string(), "unterminated string literal at offset 1");
}
