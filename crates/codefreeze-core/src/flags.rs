use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Bit set stored in a compiled unit's `co_flags` slot.
    ///
    /// The host reads the raw integer, so the bits mirror its numbering exactly.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CodeFlags: u32 {
        const OPTIMIZED = 0x0001;
        const NEWLOCALS = 0x0002;
        const VARARGS = 0x0004;
        const VARKEYWORDS = 0x0008;
        const NESTED = 0x0010;
        const GENERATOR = 0x0020;
        const NOFREE = 0x0040;
    }
}

/// Renders as `NAME | NAME`, with unknown bits as a trailing hex literal.
impl fmt::Display for CodeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }
        bitflags::parser::to_writer(self, f)
    }
}
