//! Wordcode instruction set.
//!
//! Every instruction is two bytes: opcode, then an 8-bit argument (zero when
//! unused). Wider arguments are built from `EXTENDED_ARG` prefixes, most
//! significant byte first.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    PopTop = 1,
    UnaryNegative = 11,
    BinaryMultiply = 20,
    BinaryModulo = 22,
    BinaryAdd = 23,
    BinarySubtract = 24,
    BinaryFloorDivide = 26,
    ReturnValue = 83,
    StoreName = 90,
    DeleteName = 91,
    LoadConst = 100,
    LoadName = 101,
    ExtendedArg = 144,
}

/// Opcodes at or above this value take an argument.
const HAVE_ARGUMENT: u8 = 90;

impl Opcode {
    const ALL: [Opcode; 13] = [
        Opcode::PopTop,
        Opcode::UnaryNegative,
        Opcode::BinaryMultiply,
        Opcode::BinaryModulo,
        Opcode::BinaryAdd,
        Opcode::BinarySubtract,
        Opcode::BinaryFloorDivide,
        Opcode::ReturnValue,
        Opcode::StoreName,
        Opcode::DeleteName,
        Opcode::LoadConst,
        Opcode::LoadName,
        Opcode::ExtendedArg,
    ];

    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|op| *op as u8 == byte)
    }

    pub fn byte(self) -> u8 {
        self as u8
    }

    pub fn has_arg(self) -> bool {
        self.byte() >= HAVE_ARGUMENT
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::PopTop => "POP_TOP",
            Opcode::UnaryNegative => "UNARY_NEGATIVE",
            Opcode::BinaryMultiply => "BINARY_MULTIPLY",
            Opcode::BinaryModulo => "BINARY_MODULO",
            Opcode::BinaryAdd => "BINARY_ADD",
            Opcode::BinarySubtract => "BINARY_SUBTRACT",
            Opcode::BinaryFloorDivide => "BINARY_FLOOR_DIVIDE",
            Opcode::ReturnValue => "RETURN_VALUE",
            Opcode::StoreName => "STORE_NAME",
            Opcode::DeleteName => "DELETE_NAME",
            Opcode::LoadConst => "LOAD_CONST",
            Opcode::LoadName => "LOAD_NAME",
            Opcode::ExtendedArg => "EXTENDED_ARG",
        }
    }

    /// Net change in value-stack depth.
    pub fn stack_effect(self) -> i32 {
        match self {
            Opcode::UnaryNegative | Opcode::DeleteName | Opcode::ExtendedArg => 0,
            Opcode::LoadConst | Opcode::LoadName => 1,
            Opcode::PopTop
            | Opcode::BinaryMultiply
            | Opcode::BinaryModulo
            | Opcode::BinaryAdd
            | Opcode::BinarySubtract
            | Opcode::BinaryFloorDivide
            | Opcode::ReturnValue
            | Opcode::StoreName => -1,
        }
    }
}
