use std::fs;

use codefreeze_lib::Output;

use super::dump::{self, DumpArgs};
use super::freeze::{FreezeArgs, execute};

fn args(source_path: std::path::PathBuf, output: Output) -> FreezeArgs {
    FreezeArgs {
        source_path,
        output,
        color: false,
    }
}

#[test]
fn freeze_writes_artifact_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("hello.py");
    let target = dir.path().join("frozen.c");
    fs::write(&source, "pass\n").unwrap();

    execute(&args(source, Output::File(target.clone()))).unwrap();

    let artifact = fs::read_to_string(&target).unwrap();
    assert!(artifact.starts_with("#include <Python.h>\n"));
    assert!(artifact.contains(".ob_sval = \"\\x64\\x00\\x53\\x00\","));
    assert!(artifact.contains("struct PyCodeObject toplevel = {"));
}

#[test]
fn missing_source_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("frozen.c");

    let err = execute(&args(dir.path().join("nope.py"), Output::File(target.clone()))).unwrap_err();

    assert!(err.starts_with("error: cannot read "), "{err}");
    assert!(err.ends_with('\n'));
    assert!(!target.exists());
}

#[test]
fn compile_error_leaves_existing_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("bad.py");
    let target = dir.path().join("frozen.c");
    fs::write(&source, "x = (1\n").unwrap();
    fs::write(&target, "previous artifact\n").unwrap();

    let err = execute(&args(source, Output::File(target.clone()))).unwrap_err();

    assert!(err.contains("expected ')'"), "{err}");
    assert_eq!(fs::read_to_string(&target).unwrap(), "previous artifact\n");
}

#[test]
fn dump_shows_disassembly() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("hello.py");
    fs::write(&source, "pass\n").unwrap();

    let text = dump::execute(&DumpArgs {
        source_path: source,
        color: false,
    })
    .unwrap();

    assert!(text.contains("[code] 4 bytes"), "{text}");
    assert!(text.contains("RETURN_VALUE"), "{text}");
}
