//! Integration tests for the public parsing API.
//!
//! These tests drive the front end the way a caller would: from program
//! text or a file on disk to a module, or to a rendered diagnostic.

use std::{path::PathBuf, rc::Rc};

use bish::{
    errors::errors::ErrorImpl,
    ir::{Segment, Stmt, MAIN_FUNCTION_NAME},
    lexer::{lexer::Tokenizer, tokens::TokenKind},
    parse_file, parse_source, parse_str, read_source, render_error,
};
use proptest::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_parse_fixture_file() {
    let module = parse_file(fixture("greet.bish")).unwrap();

    let main = module.main().unwrap();
    assert_eq!(main.name, MAIN_FUNCTION_NAME);
    assert_eq!(main.body.len(), 6);

    let greet = module.get_function("greet").unwrap();
    assert_eq!(greet.args.len(), 1);
    match &greet.body.statements[0] {
        Stmt::ExternCall(call) => {
            let segments = call.body.segments();
            assert_eq!(segments[0], Segment::Str(String::from("echo \"hello, ")));
            match &segments[1] {
                Segment::Var(variable) => assert!(Rc::ptr_eq(variable, &greet.args[0])),
                other => panic!("expected variable segment, found {:?}", other),
            }
            assert_eq!(segments[2], Segment::Str(String::from("\"")));
        }
        other => panic!("expected ExternCall, found {:?}", other),
    }
}

#[test]
fn test_fixture_variables_are_shared() {
    let module = parse_file(fixture("greet.bish")).unwrap();
    let statements = &module.main().unwrap().body.statements;

    let count = match &statements[0] {
        Stmt::Assignment(assignment) => Rc::clone(&assignment.variable),
        other => panic!("expected Assignment, found {:?}", other),
    };

    match &statements[4] {
        Stmt::Assignment(assignment) => assert!(Rc::ptr_eq(&assignment.variable, &count)),
        other => panic!("expected Assignment, found {:?}", other),
    }

    match &statements[5] {
        Stmt::If(stmt) => match &stmt.body.statements[0] {
            Stmt::ExternCall(call) => {
                let used = call
                    .body
                    .iter()
                    .find_map(|segment| match segment {
                        Segment::Var(variable) => Some(variable),
                        Segment::Str(_) => None,
                    })
                    .unwrap();
                assert!(Rc::ptr_eq(used, &count));
            }
            other => panic!("expected ExternCall, found {:?}", other),
        },
        other => panic!("expected If, found {:?}", other),
    }
}

#[test]
fn test_parse_file_reports_file_name() {
    let path = fixture("broken.bish");
    let error = parse_file(&path).unwrap_err();

    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().character, Some(';'));
    assert_eq!(*error.get_position().file, path.to_string_lossy());
}

#[test]
fn test_missing_file() {
    let error = parse_file(fixture("does_not_exist.bish")).unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::FileReadError { .. }));
    assert_eq!(error.get_error_name(), "FileReadError");
}

#[test]
fn test_read_source() {
    let path = fixture("greet.bish");

    assert_eq!(
        read_source(&path).unwrap(),
        std::fs::read_to_string(&path).unwrap()
    );
}

#[test]
fn test_render_missing_file_error() {
    let path = fixture("does_not_exist.bish");
    let error = read_source(&path).unwrap_err();
    let rendered = render_error(&error, "");

    assert!(matches!(error.get_kind(), ErrorImpl::FileReadError { .. }));
    assert!(rendered.starts_with("Error: FileReadError (Failed to open file at "));
    assert!(rendered.contains(&format!("-> {}", path.to_string_lossy())));
    assert!(!rendered.contains(" | "));
}

#[test]
fn test_render_error_points_at_offending_character() {
    let source = std::fs::read_to_string(fixture("broken.bish")).unwrap();
    let error = parse_source(&source, Some(String::from("broken.bish"))).unwrap_err();
    let rendered = render_error(&error, &source);

    assert!(rendered.starts_with("Error: UnexpectedTokenDetailed"));
    assert!(rendered.contains("-> broken.bish"));
    assert!(rendered.contains("2 | y = (x + 2;"));
    assert!(rendered.contains("  | ----------^"));
}

#[test]
fn test_string_label() {
    let error = parse_str("x = ;").unwrap_err();

    assert_eq!(*error.get_position().file, "<string>");
}

#[test]
fn test_independent_parses_share_nothing() {
    let first = parse_str("x = 1;").unwrap();
    let second = parse_str("x = 1;").unwrap();

    let variable = |module: &bish::ir::Module| match &module.main().unwrap().body.statements[0] {
        Stmt::Assignment(assignment) => Rc::clone(&assignment.variable),
        other => panic!("expected Assignment, found {:?}", other),
    };

    let (a, b) = (variable(&first), variable(&second));
    assert!(!Rc::ptr_eq(&a, &b));
    assert_eq!(a.id, b.id);
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_filter("keywords are not names", |name| name != "if" && name != "def")
}

fn operand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        name_strategy(),
        (0u32..100_000).prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..1000).prop_map(|(a, b)| format!("{}.{}", a, b)),
    ]
}

fn assignment_strategy() -> impl Strategy<Value = String> {
    (
        name_strategy(),
        operand_strategy(),
        prop::sample::select(vec!["+", "-", "*", "/", "=="]),
        operand_strategy(),
    )
        .prop_map(|(name, left, op, right)| format!("{} = {} {} {};", name, left, op, right))
}

proptest! {
    #[test]
    fn test_peek_agrees_with_next(input in "\\PC{0,64}") {
        let mut tokenizer = Tokenizer::new(&input, None);

        for _ in 0..=input.len() {
            let before = tokenizer.offset();
            let peeked = tokenizer.peek();
            let taken = tokenizer.next();

            prop_assert_eq!(&peeked, &taken);
            prop_assert!(tokenizer.offset() >= before);
            if taken.isa(TokenKind::EOS) {
                break;
            }
        }
    }

    #[test]
    fn test_scan_until_reaches_end(input in "\\PC{0,64}") {
        let mut tokenizer = Tokenizer::new(&input, None);

        let scanned = tokenizer.scan_until(|_| false);

        prop_assert_eq!(scanned, input.as_str());
        prop_assert!(tokenizer.at_eos());
    }

    #[test]
    fn test_parse_never_panics(input in "\\PC{0,64}") {
        let _ = parse_str(&input);
    }

    #[test]
    fn test_generated_programs_parse(stmts in prop::collection::vec(assignment_strategy(), 0..8)) {
        let source = stmts.join("\n");
        let module = parse_str(&source);

        prop_assert!(module.is_ok(), "failed to parse {:?}: {:?}", source, module.as_ref().err());
        let module = module.unwrap();
        prop_assert_eq!(module.main().unwrap().body.len(), stmts.len());
    }
}
