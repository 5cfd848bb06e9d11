use super::*;
use grass_ir::Span;
use grass_parse::ParseErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn codes_pass_through() {
    let parse = GrassError::from(ParseError::new(
        ParseErrorKind::UnexpectedClose,
        Span::new(0, 1),
    ));
    assert_eq!(parse.code(), ErrorCode::E1001);
    assert!(parse.has_source_location());

    let eval = GrassError::from(EvalError::DepthExceeded { limit: 3 });
    assert_eq!(eval.code(), ErrorCode::E6003);
    assert!(!eval.has_source_location());
}

#[test]
fn read_errors_name_the_file() {
    let err = GrassError::Read {
        path: PathBuf::from("hello.lawn"),
        source: io::Error::from(io::ErrorKind::NotFound),
    };
    assert_eq!(err.to_string(), "cannot find file 'hello.lawn'");
    assert_eq!(err.code(), ErrorCode::E9001);
    assert_eq!(
        err.to_diagnostic().message,
        "cannot find file 'hello.lawn'"
    );
}
