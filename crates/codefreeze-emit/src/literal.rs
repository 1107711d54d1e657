//! Literal encoding for raw bytes and text classification.

use crate::error::{EmitError, EmitResult};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Storage class a piece of text qualifies for.
///
/// Wide and multi-byte layouts have no variant: their field sets differ, so
/// such text is rejected by [`classify_text`] rather than squeezed into this one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextClass {
    /// One byte per character; `length` is both the character and byte count.
    AsciiCompact { length: usize },
}

/// Encodes bytes as a double-quoted C string literal.
///
/// Either every byte is written verbatim or every byte is written as `\xNN`;
/// runs are never mixed. The compiler appends the terminating NUL itself.
pub fn encode_bytes_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4 + 2);
    out.push('"');

    if is_verbatim(bytes) {
        out.extend(bytes.iter().map(|&b| b as char));
    } else {
        for &b in bytes {
            out.push('\\');
            out.push('x');
            out.push(HEX[usize::from(b >> 4)] as char);
            out.push(HEX[usize::from(b & 0x0f)] as char);
        }
    }

    out.push('"');
    out
}

/// Printable ASCII that needs no escaping inside a C string literal.
///
/// `??` is excluded as well since it may start a trigraph.
fn is_verbatim(bytes: &[u8]) -> bool {
    let printable = bytes
        .iter()
        .all(|&b| matches!(b, b' '..=b'~') && b != b'"' && b != b'\\');
    printable && !bytes.windows(2).any(|w| w == b"??")
}

/// Decides which text layout applies, failing for anything non-ASCII.
pub fn classify_text(text: &str) -> EmitResult<TextClass> {
    let chars = text.chars().count();
    let bytes = text.len();
    if chars != bytes {
        return Err(EmitError::UnsupportedEncoding {
            text: text.to_string(),
            chars,
            bytes,
        });
    }
    Ok(TextClass::AsciiCompact { length: chars })
}
