use insta::assert_snapshot;
use rstest::rstest;

use crate::{
    ParseContext, ParseError, Parser, ParserOptions, SyntaxError, parse_array, parse_array_bytes,
    parse_object,
};

fn err_array(src: &str) -> ParseError {
    parse_array(src).expect_err("parse should fail")
}

fn err_object(src: &str) -> ParseError {
    parse_object(src).expect_err("parse should fail")
}

#[rstest]
#[case::trailing_comma(r"[1,]", SyntaxError::UnexpectedCharacter(']'), 1, 4)]
#[case::leading_zero(r"[01]", SyntaxError::UnexpectedCharacter('1'), 1, 3)]
#[case::missing_comma(r"[1 2]", SyntaxError::UnexpectedCharacter('2'), 1, 4)]
#[case::bare_minus(r"[-]", SyntaxError::UnexpectedCharacter(']'), 1, 3)]
#[case::bare_fraction(r"[1.]", SyntaxError::UnexpectedCharacter(']'), 1, 4)]
#[case::bare_exponent(r"[1e+]", SyntaxError::UnexpectedCharacter(']'), 1, 5)]
#[case::plus_sign(r"[+1]", SyntaxError::UnexpectedCharacter('+'), 1, 2)]
#[case::unclosed(r"[", SyntaxError::UnexpectedEndOfInput, 1, 2)]
#[case::unterminated_string(r#"["é"#, SyntaxError::UnexpectedEndOfInput, 1, 4)]
#[case::short_identifier(r"[nul]", SyntaxError::UnexpectedIdentifier("nul".into()), 1, 2)]
#[case::capitalised_identifier(r"[True]", SyntaxError::UnexpectedIdentifier("True".into()), 1, 2)]
#[case::nan(r"[NaN]", SyntaxError::UnexpectedIdentifier("NaN".into()), 1, 2)]
#[case::single_quotes(r"['a']", SyntaxError::UnexpectedCharacter('\''), 1, 2)]
#[case::unknown_escape(r#"["\q"]"#, SyntaxError::UnexpectedEscapeCharacter('q'), 1, 4)]
#[case::bad_hex(r#"["\u12G4"]"#, SyntaxError::InvalidHexEncoding('G'), 1, 7)]
#[case::raw_tab("[\"a\tb\"]", SyntaxError::InvalidCharacter('\t'), 1, 4)]
#[case::raw_newline("[\"a\nb\"]", SyntaxError::InvalidCharacter('\n'), 1, 4)]
#[case::lone_high_surrogate(r#"["\ud800"]"#, SyntaxError::ExpectedHexEncoding, 1, 9)]
#[case::high_then_char(r#"["\ud800x"]"#, SyntaxError::ExpectedHexEncoding, 1, 9)]
#[case::high_then_shorthand(r#"["\ud800\n"]"#, SyntaxError::ExpectedHexEncoding, 1, 9)]
#[case::high_then_non_low(r#"["\ud800\u0041"]"#, SyntaxError::InvalidCharacterEncoding, 1, 9)]
#[case::high_then_high(r#"["\ud800\ud800"]"#, SyntaxError::InvalidCharacterEncoding, 1, 9)]
#[case::lone_low_surrogate(r#"["\udc00"]"#, SyntaxError::InvalidCharacterEncoding, 1, 3)]
#[case::trailing_data(r"[] x", SyntaxError::UnexpectedTrailingCharacter('x'), 1, 4)]
#[case::two_documents(r"[][]", SyntaxError::UnexpectedTrailingCharacter('['), 1, 3)]
#[case::not_an_array(r#"{"a":1}"#, SyntaxError::UnexpectedCharacter('{'), 1, 1)]
#[case::empty(r"", SyntaxError::UnexpectedEndOfInput, 1, 1)]
#[case::whitespace_only(" \n\t", SyntaxError::UnexpectedEndOfInput, 2, 2)]
#[case::form_feed_is_not_whitespace("\u{c}[]", SyntaxError::UnexpectedCharacter('\u{c}'), 1, 1)]
fn rejects_array(
    #[case] src: &str,
    #[case] expected: SyntaxError,
    #[case] line: usize,
    #[case] column: usize,
) {
    let err = err_array(src);
    assert_eq!(err.kind(), &expected, "{err}");
    assert_eq!((err.line, err.column), (line, column), "{err}");
}

#[rstest]
#[case::duplicate(r#"{"a":1,"a":2}"#, SyntaxError::DuplicateMemberName("a".into()), 1, 8)]
#[case::duplicate_after_escapes(r#"{"a":1,"\u0061":2}"#, SyntaxError::DuplicateMemberName("a".into()), 1, 8)]
#[case::trailing_comma(r#"{"a":1,}"#, SyntaxError::UnexpectedCharacter('}'), 1, 8)]
#[case::unquoted_name(r"{a:1}", SyntaxError::UnexpectedCharacter('a'), 1, 2)]
#[case::missing_colon(r#"{"a" 1}"#, SyntaxError::UnexpectedCharacter('1'), 1, 6)]
#[case::missing_value(r#"{"a":}"#, SyntaxError::UnexpectedCharacter('}'), 1, 6)]
#[case::array_close(r#"{"a":1]"#, SyntaxError::UnexpectedCharacter(']'), 1, 7)]
#[case::not_an_object(r"[]", SyntaxError::UnexpectedCharacter('['), 1, 1)]
fn rejects_object(
    #[case] src: &str,
    #[case] expected: SyntaxError,
    #[case] line: usize,
    #[case] column: usize,
) {
    let err = err_object(src);
    assert_eq!(err.kind(), &expected, "{err}");
    assert_eq!((err.line, err.column), (line, column), "{err}");
}

#[test]
fn duplicates_are_detected_in_nested_objects() {
    let err = err_array(r#"[{"a":1,"b":2,"a":3}]"#);
    assert_eq!(err.kind(), &SyntaxError::DuplicateMemberName("a".into()));
    assert_eq!(err.context().collect::<Vec<_>>(), [&ParseContext::Element(0)]);
    assert_eq!(err.column, 15);
}

#[test]
fn error_messages_name_the_enclosing_members() {
    let src = "{\n  \"a\": [\n    tru\n  ]\n}";
    assert_snapshot!(
        err_object(src),
        @r#"failed to parse value of member "a": failed to parse element 0: unexpected identifier "tru" at 3:5"#
    );

    assert_snapshot!(
        err_object(r#"{"ok":1, 2:3}"#),
        @"failed to parse member name: unexpected character '2' at 1:10"
    );

    assert_snapshot!(
        err_array("[\"\u{1}\"]"),
        @"failed to parse element 0: invalid character U+0001 in string at 1:3"
    );

    assert_snapshot!(
        err_array(r#"[{"k":"\ud834"}]"#),
        @r#"failed to parse element 0: failed to parse value of member "k": expected hex encoding of a low surrogate at 1:14"#
    );
}

#[test]
fn context_is_reported_outermost_first() {
    let err = err_object(r#"{"x":[[0],{"y":[1,2,?]}]}"#);
    assert_eq!(
        err.context().cloned().collect::<Vec<_>>(),
        [
            ParseContext::Member("x".into()),
            ParseContext::Element(1),
            ParseContext::Member("y".into()),
            ParseContext::Element(2),
        ]
    );
    assert_eq!(err.kind(), &SyntaxError::UnexpectedCharacter('?'));
}

#[test]
fn source_is_the_syntax_error() {
    use core::error::Error;

    let err = err_array("[x]");
    let source = err.source().expect("has a source");
    assert_eq!(source.to_string(), r#"unexpected identifier "x""#);
}

#[test]
fn malformed_utf8() {
    let err = parse_array_bytes(b"[\"\xff\"]").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::InvalidEncoding);
    assert_eq!((err.line, err.column), (1, 3));

    let err = parse_array_bytes(b"[1]\xc0").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::InvalidEncoding);

    // Overlong encoding of '/'.
    let err = parse_array_bytes(b"[\"\xc0\xaf\"]").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::InvalidEncoding);
}

#[test]
fn nesting_limit() {
    let options = ParserOptions {
        max_nesting_depth: 2,
    };
    let mut parser = Parser::new(b"[[[]]]", options);
    let err = parser.parse_embedded_array().unwrap_err();
    assert_snapshot!(
        err,
        @"failed to parse element 0: failed to parse element 0: nesting deeper than 2 levels at 1:3"
    );

    let mut parser = Parser::new(b"[[]]", options);
    assert!(parser.parse_embedded_array().is_ok());
}

#[test]
fn default_nesting_limit_stops_deep_input() {
    let depth = crate::DEFAULT_MAX_NESTING_DEPTH;
    let ok = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse_array(&ok).is_ok());

    let deep = "[".repeat(100_000);
    let err = err_array(&deep);
    assert_eq!(err.kind(), &SyntaxError::NestingTooDeep(depth));
    assert_eq!(err.column, depth + 1);
}
