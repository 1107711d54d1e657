/// Errors raised while serializing a compiled unit.
///
/// All of them abort the whole artifact; there is no partial output.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// Text whose character count differs from its UTF-8 byte count. Only the
    /// single-byte compact layout is supported.
    #[error("unsupported text encoding for {text:?}: {chars} chars, {bytes} UTF-8 bytes (only ASCII is supported)")]
    UnsupportedEncoding {
        text: String,
        chars: usize,
        bytes: usize,
    },

    #[error("symbol `{0}` is declared twice")]
    DuplicateSymbol(String),

    #[error("symbol `{0}` is referenced before it is declared")]
    UndeclaredSymbol(String),

    #[error("`{0}` is not a valid C identifier")]
    InvalidSymbol(String),
}

pub type EmitResult<T> = Result<T, EmitError>;
