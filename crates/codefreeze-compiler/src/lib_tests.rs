use indoc::indoc;

use crate::{compile, dump};

#[test]
fn compile_error_display_has_location() {
    let err = compile("pass\nx = ", "t.py").unwrap_err();
    assert_eq!(err.to_string(), "t.py:2:5: expected expression, found end of input");
}

#[test]
fn compile_error_column_counts_characters() {
    let err = compile("s = 'é' $", "t.py").unwrap_err();
    assert_eq!((err.line, err.column), (1, 9));
    assert_eq!(err.span, 9..10);
}

#[test]
fn render_shows_label_and_message() {
    let source = "pass\n  pass\n";
    let err = compile(source, "t.py").unwrap_err();
    let rendered = err.render(source, false);

    assert!(rendered.contains("unexpected indent"), "{rendered}");
    assert!(rendered.contains("t.py"), "{rendered}");
    assert!(!rendered.contains('\x1b'), "plain render must not contain ANSI codes");
}

#[test]
fn render_handles_error_at_end_of_input() {
    let source = "x = (1";
    let err = compile(source, "t.py").unwrap_err();
    assert_eq!(err.span, 6..6);
    let rendered = err.render(source, false);
    assert!(rendered.contains("expected ')'"), "{rendered}");
}

#[test]
fn dump_assignment() {
    let unit = compile("x = 1", "t.py").unwrap();

    assert_eq!(
        dump(&unit, false),
        indoc! {"
            [unit]
            name            = <module>
            filename        = t.py
            flags           = 64 (NOFREE)
            argcount        = 0
            posonlyargcount = 0
            kwonlyargcount  = 0
            stacksize       = 1
            firstlineno     = 1

            [consts]
               0 1
               1 None

            [names]
               0 x

            [code] 8 bytes
                 0 LOAD_CONST           0 (1)
                 2 STORE_NAME           0 (x)
                 4 LOAD_CONST           1 (None)
                 6 RETURN_VALUE
        "}
    );
}

#[test]
fn dump_folds_extended_arg_into_operand() {
    let source: String = (0..257).map(|i| format!("v{i} = 0\n")).collect();
    let unit = compile(&source, "t.py").unwrap();
    let out = dump(&unit, false);

    assert!(out.contains("EXTENDED_ARG         1\n"), "{out}");
    assert!(out.contains("STORE_NAME           256 (v256)\n"), "{out}");
}

#[test]
fn dump_with_colors_uses_ansi() {
    let unit = compile("pass", "t.py").unwrap();
    let out = dump(&unit, true);
    assert!(out.contains("\x1b[1;34m[unit]\x1b[0m"));
    assert!(out.contains("\x1b[34mRETURN_VALUE\x1b[0m"));
}

#[test]
fn mixed_line_endings_compile() {
    let unit = compile("x = 1\r\ny = 2\rz = 3", "t.py").unwrap();
    assert_eq!(
        unit.names,
        vec!["x".to_string(), "y".to_string(), "z".to_string()]
    );
}

#[test]
fn lone_carriage_return_starts_a_new_line_in_errors() {
    let err = compile("x = 1\ry = ", "t.py").unwrap_err();
    assert_eq!((err.line, err.column), (2, 5));

    let err = compile("x = 1\r\ny = ", "t.py").unwrap_err();
    assert_eq!((err.line, err.column), (2, 5));
}
