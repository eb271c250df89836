/// Error kinds surfaced by the virtual machine.
///
/// `AddressOutOfRange` is a hard fault that aborts the run; the ROM variants
/// are load-time rejections. Stack faults and unknown opcodes also use these
/// variants but are only logged by the processor, which treats the offending
/// instruction as a no-op and keeps executing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Chip8Error {
    #[error("memory access out of bounds at address {address:#06x}")]
    AddressOutOfRange { address: u16 },

    #[error("rom of {size} bytes does not fit at {load_address:#06x} ({capacity} bytes available)")]
    RomTooLarge {
        size: usize,
        load_address: u16,
        capacity: usize,
    },

    #[error("rom is empty")]
    RomEmpty,

    #[error("call stack overflow at depth 16")]
    StackOverflow,

    #[error("return with empty call stack")]
    StackUnderflow,

    #[error("unknown opcode {opcode:#06x}")]
    UnknownOpcode { opcode: u16 },
}
