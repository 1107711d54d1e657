use codefreeze_core::{CodeFlags, Constant, MODULE_UNIT_NAME};

use crate::compile;

#[test]
fn pass_compiles_to_return_none() {
    let unit = compile("pass", "t.py").unwrap();

    assert_eq!(unit.code, vec![100, 0, 83, 0]);
    assert_eq!(unit.consts, vec![Constant::None]);
    assert!(unit.names.is_empty());
    assert_eq!(unit.stacksize, 1);
}

#[test]
fn empty_source_matches_pass() {
    assert_eq!(compile("", "t.py").unwrap().code, vec![100, 0, 83, 0]);
}

#[test]
fn module_metadata() {
    let unit = compile("pass", "hello.py").unwrap();

    assert_eq!(unit.name, MODULE_UNIT_NAME);
    assert_eq!(unit.filename, "hello.py");
    assert_eq!(unit.flags, CodeFlags::NOFREE);
    assert_eq!(unit.argcount, 0);
    assert_eq!(unit.posonlyargcount, 0);
    assert_eq!(unit.kwonlyargcount, 0);
    assert_eq!(unit.firstlineno, 1);
}

#[test]
fn assignment_interns_value_before_none() {
    let unit = compile("x = 1", "t.py").unwrap();

    assert_eq!(unit.code, vec![100, 0, 90, 0, 100, 1, 83, 0]);
    assert_eq!(unit.consts, vec![Constant::Int(1), Constant::None]);
    assert_eq!(unit.names, vec!["x".to_string()]);
}

#[test]
fn expression_statement_pops_its_value() {
    let unit = compile("y", "t.py").unwrap();
    assert_eq!(unit.code, vec![101, 0, 1, 0, 100, 0, 83, 0]);
}

#[test]
fn del_uses_delete_name() {
    let unit = compile("del x", "t.py").unwrap();
    assert_eq!(unit.code, vec![91, 0, 100, 0, 83, 0]);
    assert_eq!(unit.names, vec!["x".to_string()]);
}

#[test]
fn arithmetic_tracks_max_stack_depth() {
    let unit = compile("y = (a + 2) * -b", "t.py").unwrap();

    assert_eq!(
        unit.code,
        vec![
            101, 0, // LOAD_NAME a
            100, 0, // LOAD_CONST 2
            23, 0, // BINARY_ADD
            101, 1, // LOAD_NAME b
            11, 0, // UNARY_NEGATIVE
            20, 0, // BINARY_MULTIPLY
            90, 2, // STORE_NAME y
            100, 1, // LOAD_CONST None
            83, 0, // RETURN_VALUE
        ]
    );
    assert_eq!(unit.stacksize, 2);
    assert_eq!(
        unit.names,
        vec!["a".to_string(), "b".to_string(), "y".to_string()]
    );
}

#[test]
fn right_nested_expression_needs_deeper_stack() {
    let unit = compile("a - (b - (c - d))", "t.py").unwrap();
    assert_eq!(unit.stacksize, 4);
}

#[test]
fn repeated_names_and_constants_are_shared() {
    let unit = compile("x = 1\ny = 1\nx = y", "t.py").unwrap();

    assert_eq!(unit.consts, vec![Constant::Int(1), Constant::None]);
    assert_eq!(unit.names, vec!["x".to_string(), "y".to_string()]);
}

#[test]
fn bool_and_int_constants_stay_distinct() {
    let unit = compile("a = 1\nb = True\nc = 'x'", "t.py").unwrap();
    assert_eq!(
        unit.consts,
        vec![
            Constant::Int(1),
            Constant::Bool(true),
            Constant::Str("x".into()),
            Constant::None,
        ]
    );
}

#[test]
fn wide_arguments_use_extended_arg() {
    let source: String = (0..300).map(|i| format!("v{i} = 0\n")).collect();
    let unit = compile(&source, "t.py").unwrap();

    assert_eq!(unit.names.len(), 300);
    // v256 is the first name index that needs a prefix.
    let needle = [144, 1, 90, 0];
    assert!(unit.code.windows(4).any(|w| w == needle));
    // 300 loads + 300 stores + 44 prefixes + LOAD_CONST/RETURN_VALUE.
    assert_eq!(unit.code.len(), (300 + 300 + 44 + 2) * 2);
    assert_eq!(unit.stacksize, 1);
}
