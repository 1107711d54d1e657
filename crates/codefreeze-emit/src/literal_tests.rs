use crate::{EmitError, TextClass, classify_text, encode_bytes_literal};

/// Reads a literal back the way a C compiler would, including the implicit NUL.
fn parse_c_literal(literal: &str) -> Vec<u8> {
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .expect("literal must be quoted");
    let bytes = inner.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            assert_eq!(bytes[i + 1], b'x', "only \\x escapes are produced");
            let hex = std::str::from_utf8(&bytes[i + 2..i + 4]).unwrap();
            out.push(u8::from_str_radix(hex, 16).unwrap());
            i += 4;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    out.push(0);
    out
}

#[test]
fn printable_bytes_are_verbatim() {
    assert_eq!(encode_bytes_literal(b"abc"), "\"abc\"");
    assert_eq!(encode_bytes_literal(b"<module>"), "\"<module>\"");
    assert_eq!(encode_bytes_literal(b"a b~"), "\"a b~\"");
}

#[test]
fn empty_input_is_empty_literal() {
    assert_eq!(encode_bytes_literal(b""), "\"\"");
    assert_eq!(parse_c_literal("\"\""), vec![0]);
}

#[test]
fn one_unprintable_byte_escapes_everything() {
    assert_eq!(encode_bytes_literal(b"ab\n"), "\"\\x61\\x62\\x0a\"");
    assert_eq!(encode_bytes_literal(&[0x64, 0x00, 0x53, 0x00]), "\"\\x64\\x00\\x53\\x00\"");
}

#[test]
fn quote_and_backslash_force_escaping() {
    assert_eq!(encode_bytes_literal(b"a\"b"), "\"\\x61\\x22\\x62\"");
    assert_eq!(encode_bytes_literal(b"\\"), "\"\\x5c\"");
}

#[test]
fn trigraph_prefix_forces_escaping() {
    assert_eq!(encode_bytes_literal(b"??="), "\"\\x3f\\x3f\\x3d\"");
    assert_eq!(encode_bytes_literal(b"?a?"), "\"?a?\"");
}

#[test]
fn high_bytes_use_lowercase_hex() {
    assert_eq!(encode_bytes_literal(&[0xff, 0xab]), "\"\\xff\\xab\"");
}

#[test]
fn literals_parse_back_to_input_plus_nul() {
    let inputs: [&[u8]; 4] = [b"", b"hello", &[0, 1, 2, 0xfe], b"mix\"ed\\"];
    for input in inputs {
        let mut expected = input.to_vec();
        expected.push(0);
        assert_eq!(parse_c_literal(&encode_bytes_literal(input)), expected);
    }
}

#[test]
fn ascii_text_is_compact() {
    assert_eq!(
        classify_text("toplevel"),
        Ok(TextClass::AsciiCompact { length: 8 })
    );
    assert_eq!(classify_text(""), Ok(TextClass::AsciiCompact { length: 0 }));
}

#[test]
fn non_ascii_text_is_rejected() {
    assert_eq!(
        classify_text("café"),
        Err(EmitError::UnsupportedEncoding {
            text: "café".to_string(),
            chars: 4,
            bytes: 5,
        })
    );
}

#[test]
fn unsupported_encoding_message() {
    let err = classify_text("λ").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @r#"unsupported text encoding for "λ": 1 chars, 2 UTF-8 bytes (only ASCII is supported)"#
    );
}
