//! # Opcode Dispatch Table
//!
//! A total mapping from all 256 instruction bytes to an (operation,
//! addressing mode, page-cross policy) row, plus the entry point that routes
//! a fetched opcode to the external operation handlers. Undocumented
//! opcodes, duplicate encodings, and jam codes are first-class rows: on the
//! bus they behave exactly as deterministically as the documented set, and
//! software that relies on a specific byte value must see its documented
//! effect.
//!
//! Dispatch itself performs no bus activity; every bus cycle belongs to the
//! invoked handler and the addressing routine it calls.

use log::trace;

use crate::addressing::{AddressingMode, PageCross};
use crate::bus::Bus;
use crate::core::Core;

/// The operation half of a dispatch-table row.
///
/// One variant per distinct behavior, documented and undocumented alike.
/// Several opcode bytes can map to the same variant (seven implied NOP
/// encodings, two immediate SBC encodings); the table records each byte's
/// row explicitly rather than assuming a canonical encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Add memory to accumulator with carry.
    Adc,
    /// AND memory with accumulator.
    And,
    /// Arithmetic shift left, in memory or on the accumulator.
    Asl,
    /// Branch on carry clear.
    Bcc,
    /// Branch on carry set.
    Bcs,
    /// Branch on zero set.
    Beq,
    /// Test memory bits against the accumulator.
    Bit,
    /// Branch on negative set.
    Bmi,
    /// Branch on zero clear.
    Bne,
    /// Branch on negative clear.
    Bpl,
    /// Software interrupt entry; dispatched to the distinct interrupt
    /// handler rather than a regular operation body.
    Brk,
    /// Branch on overflow clear.
    Bvc,
    /// Branch on overflow set.
    Bvs,
    /// Clear carry.
    Clc,
    /// Clear decimal mode.
    Cld,
    /// Clear interrupt disable.
    Cli,
    /// Clear overflow.
    Clv,
    /// Compare memory with accumulator.
    Cmp,
    /// Compare memory with X.
    Cpx,
    /// Compare memory with Y.
    Cpy,
    /// Decrement memory.
    Dec,
    /// Decrement X.
    Dex,
    /// Decrement Y.
    Dey,
    /// Exclusive-OR memory with accumulator.
    Eor,
    /// Increment memory.
    Inc,
    /// Increment X.
    Inx,
    /// Increment Y.
    Iny,
    /// Jump, absolute or indirect.
    Jmp,
    /// Jump to subroutine.
    Jsr,
    /// Load accumulator.
    Lda,
    /// Load X.
    Ldx,
    /// Load Y.
    Ldy,
    /// Logical shift right, in memory or on the accumulator.
    Lsr,
    /// No operation; some encodings still fetch (and discard) a memory
    /// operand, with the bus cycles that implies.
    Nop,
    /// OR memory with accumulator.
    Ora,
    /// Push accumulator.
    Pha,
    /// Push processor status.
    Php,
    /// Pull accumulator.
    Pla,
    /// Pull processor status.
    Plp,
    /// Rotate left through carry, in memory or on the accumulator.
    Rol,
    /// Rotate right through carry, in memory or on the accumulator.
    Ror,
    /// Return from interrupt.
    Rti,
    /// Return from subroutine.
    Rts,
    /// Subtract memory from accumulator with borrow.
    Sbc,
    /// Set carry.
    Sec,
    /// Set decimal mode.
    Sed,
    /// Set interrupt disable.
    Sei,
    /// Store accumulator.
    Sta,
    /// Store X.
    Stx,
    /// Store Y.
    Sty,
    /// Transfer accumulator to X.
    Tax,
    /// Transfer accumulator to Y.
    Tay,
    /// Transfer stack pointer to X.
    Tsx,
    /// Transfer X to accumulator.
    Txa,
    /// Transfer X to stack pointer.
    Txs,
    /// Transfer Y to accumulator.
    Tya,

    // Undocumented operations. Effects are hardware-determined and well
    // known; the names follow the common NMOS references.
    /// AND immediate, then logical shift right of the accumulator.
    Alr,
    /// AND immediate; carry receives the result's sign bit.
    Anc,
    /// Unstable: accumulator gets (A | magic) & X & operand.
    Ane,
    /// AND immediate, then rotate right with flags set from the adder.
    Arr,
    /// Decrement memory, then compare with the accumulator.
    Dcp,
    /// Increment memory, then subtract it from the accumulator.
    Isc,
    /// Halts instruction fetch; the part stops driving the bus until
    /// reset. A terminal behavior, dispatched like any other operation.
    Jam,
    /// Load A, X, and the stack pointer from memory AND SP.
    Las,
    /// Load accumulator and X together.
    Lax,
    /// Rotate memory left, then AND it with the accumulator.
    Rla,
    /// Rotate memory right, then add it to the accumulator with carry.
    Rra,
    /// Store A AND X.
    Sax,
    /// X gets (A AND X) minus immediate, without borrow.
    Sbx,
    /// Unstable store of A AND X AND (high address byte + 1).
    Sha,
    /// Unstable store of X AND (high address byte + 1).
    Shx,
    /// Unstable store of Y AND (high address byte + 1).
    Shy,
    /// SHA variant that also copies A AND X to the stack pointer.
    Tas,
    /// Shift memory left, then OR it with the accumulator.
    Slo,
    /// Shift memory right, then exclusive-OR it with the accumulator.
    Sre,
}

impl Operation {
    /// Conventional assembler mnemonic for the operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
            Operation::Alr => "ALR",
            Operation::Anc => "ANC",
            Operation::Ane => "ANE",
            Operation::Arr => "ARR",
            Operation::Dcp => "DCP",
            Operation::Isc => "ISC",
            Operation::Jam => "JAM",
            Operation::Las => "LAS",
            Operation::Lax => "LAX",
            Operation::Rla => "RLA",
            Operation::Rra => "RRA",
            Operation::Sax => "SAX",
            Operation::Sbx => "SBX",
            Operation::Sha => "SHA",
            Operation::Shx => "SHX",
            Operation::Shy => "SHY",
            Operation::Tas => "TAS",
            Operation::Slo => "SLO",
            Operation::Sre => "SRE",
        }
    }
}

/// One dispatch-table row: the behavior an opcode byte selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation the external handler performs.
    pub operation: Operation,
    /// The addressing mode the handler drives the engine with.
    pub mode: AddressingMode,
    /// Page-cross policy for the indexed fetch routines.
    pub penalty: PageCross,
}

impl Instruction {
    const fn new(operation: Operation, mode: AddressingMode, penalty: PageCross) -> Self {
        Self {
            operation,
            mode,
            penalty,
        }
    }
}

/// External operation bodies the dispatch entry point calls into.
///
/// The implementor owns everything this core does not: the accumulator,
/// stack pointer, status flags, and the semantics of each operation. The
/// handler receives the dispatch-table row and drives the addressing engine
/// itself: typically `core.fetch(...)` for reads, `core.store(...)` for
/// writes, and `core.double_write_back(...)` after a fetch for
/// read-modify-write forms.
///
/// # Examples
///
/// ```
/// use bus6502::{Bus, Core, Handlers, Instruction, Operation};
///
/// /// The register file and flags live outside the core.
/// struct Cpu {
///     a: u8,
///     halted: bool,
/// }
///
/// impl<B: Bus> Handlers<B> for Cpu {
///     fn operation(&mut self, core: &mut Core<B>, instruction: &Instruction) {
///         match instruction.operation {
///             Operation::Lda => {
///                 self.a = core.fetch(instruction.mode, instruction.penalty);
///             }
///             Operation::Sta => core.store(instruction.mode, self.a),
///             Operation::Jam => self.halted = true,
///             _ => {}
///         }
///     }
///
///     fn interrupt(&mut self, _core: &mut Core<B>) {
///         // Push PC and status, load the interrupt vector.
///     }
/// }
/// ```
pub trait Handlers<B: Bus> {
    /// Executes one regular operation with its table row.
    fn operation(&mut self, core: &mut Core<B>, instruction: &Instruction);

    /// The break/interrupt entry point, reached through opcode 0x00.
    fn interrupt(&mut self, core: &mut Core<B>);
}

impl<B: Bus> Core<B> {
    /// Dispatches one fetched opcode byte to its behavior.
    ///
    /// Expects the PC to address the opcode byte (the interpreter loop
    /// fetches the opcode and steps the PC between instructions, not this
    /// core). The lookup itself performs no bus activity; all cycles come
    /// from the invoked handler. Opcode 0x00 routes to
    /// [`Handlers::interrupt`]; every other byte, jam codes included,
    /// routes to [`Handlers::operation`].
    pub fn dispatch<H: Handlers<B>>(&mut self, opcode: u8, handlers: &mut H) {
        let instruction = &OPCODE_TABLE[opcode as usize];
        trace!(
            "dispatch pc={:04X} opcode={:02X} {} {:?}",
            self.pc,
            opcode,
            instruction.operation.name(),
            instruction.mode,
        );
        match instruction.operation {
            Operation::Brk => handlers.interrupt(self),
            _ => handlers.operation(self, instruction),
        }
    }
}

/// Returns the dispatch-table row for an opcode byte.
pub fn instruction(opcode: u8) -> &'static Instruction {
    &OPCODE_TABLE[opcode as usize]
}

// Shorthand for the table below only.
use crate::addressing::AddressingMode as M;
use crate::addressing::PageCross as P;
use self::Operation as O;

const fn row(operation: Operation, mode: AddressingMode, penalty: PageCross) -> Instruction {
    Instruction::new(operation, mode, penalty)
}

/// The complete 256-entry dispatch table, indexed by opcode byte.
///
/// Read operations carry `IfCrossed` (the indexed fetch pays its fixup
/// cycle only on a page crossing); read-modify-write and store operations
/// carry `Always`. The policy is meaningful only where an indexed fetch
/// routine consults it, but it is recorded uniformly by operation class.
pub static OPCODE_TABLE: [Instruction; 256] = [
    row(O::Brk, M::Implied, P::IfCrossed),          // 0x00 BRK
    row(O::Ora, M::IndexedIndirect, P::IfCrossed),  // 0x01 ORA (zp,X)
    row(O::Jam, M::Implied, P::IfCrossed),          // 0x02 JAM
    row(O::Slo, M::IndexedIndirect, P::Always),     // 0x03 SLO (zp,X)
    row(O::Nop, M::ZeroPage, P::IfCrossed),         // 0x04 NOP zp
    row(O::Ora, M::ZeroPage, P::IfCrossed),         // 0x05 ORA zp
    row(O::Asl, M::ZeroPage, P::Always),            // 0x06 ASL zp
    row(O::Slo, M::ZeroPage, P::Always),            // 0x07 SLO zp
    row(O::Php, M::Implied, P::IfCrossed),          // 0x08 PHP
    row(O::Ora, M::Immediate, P::IfCrossed),        // 0x09 ORA #
    row(O::Asl, M::Accumulator, P::Always),         // 0x0A ASL A
    row(O::Anc, M::Immediate, P::IfCrossed),        // 0x0B ANC #
    row(O::Nop, M::Absolute, P::IfCrossed),         // 0x0C NOP abs
    row(O::Ora, M::Absolute, P::IfCrossed),         // 0x0D ORA abs
    row(O::Asl, M::Absolute, P::Always),            // 0x0E ASL abs
    row(O::Slo, M::Absolute, P::Always),            // 0x0F SLO abs
    row(O::Bpl, M::Relative, P::IfCrossed),         // 0x10 BPL
    row(O::Ora, M::IndirectIndexed, P::IfCrossed),  // 0x11 ORA (zp),Y
    row(O::Jam, M::Implied, P::IfCrossed),          // 0x12 JAM
    row(O::Slo, M::IndirectIndexed, P::Always),     // 0x13 SLO (zp),Y
    row(O::Nop, M::ZeroPageX, P::IfCrossed),        // 0x14 NOP zp,X
    row(O::Ora, M::ZeroPageX, P::IfCrossed),        // 0x15 ORA zp,X
    row(O::Asl, M::ZeroPageX, P::Always),           // 0x16 ASL zp,X
    row(O::Slo, M::ZeroPageX, P::Always),           // 0x17 SLO zp,X
    row(O::Clc, M::Implied, P::IfCrossed),          // 0x18 CLC
    row(O::Ora, M::AbsoluteY, P::IfCrossed),        // 0x19 ORA abs,Y
    row(O::Nop, M::Implied, P::IfCrossed),          // 0x1A NOP
    row(O::Slo, M::AbsoluteY, P::Always),           // 0x1B SLO abs,Y
    row(O::Nop, M::AbsoluteX, P::IfCrossed),        // 0x1C NOP abs,X
    row(O::Ora, M::AbsoluteX, P::IfCrossed),        // 0x1D ORA abs,X
    row(O::Asl, M::AbsoluteX, P::Always),           // 0x1E ASL abs,X
    row(O::Slo, M::AbsoluteX, P::Always),           // 0x1F SLO abs,X
    row(O::Jsr, M::Absolute, P::IfCrossed),         // 0x20 JSR abs
    row(O::And, M::IndexedIndirect, P::IfCrossed),  // 0x21 AND (zp,X)
    row(O::Jam, M::Implied, P::IfCrossed),          // 0x22 JAM
    row(O::Rla, M::IndexedIndirect, P::Always),     // 0x23 RLA (zp,X)
    row(O::Bit, M::ZeroPage, P::IfCrossed),         // 0x24 BIT zp
    row(O::And, M::ZeroPage, P::IfCrossed),         // 0x25 AND zp
    row(O::Rol, M::ZeroPage, P::Always),            // 0x26 ROL zp
    row(O::Rla, M::ZeroPage, P::Always),            // 0x27 RLA zp
    row(O::Plp, M::Implied, P::IfCrossed),          // 0x28 PLP
    row(O::And, M::Immediate, P::IfCrossed),        // 0x29 AND #
    row(O::Rol, M::Accumulator, P::Always),         // 0x2A ROL A
    row(O::Anc, M::Immediate, P::IfCrossed),        // 0x2B ANC #
    row(O::Bit, M::Absolute, P::IfCrossed),         // 0x2C BIT abs
    row(O::And, M::Absolute, P::IfCrossed),         // 0x2D AND abs
    row(O::Rol, M::Absolute, P::Always),            // 0x2E ROL abs
    row(O::Rla, M::Absolute, P::Always),            // 0x2F RLA abs
    row(O::Bmi, M::Relative, P::IfCrossed),         // 0x30 BMI
    row(O::And, M::IndirectIndexed, P::IfCrossed),  // 0x31 AND (zp),Y
    row(O::Jam, M::Implied, P::IfCrossed),          // 0x32 JAM
    row(O::Rla, M::IndirectIndexed, P::Always),     // 0x33 RLA (zp),Y
    row(O::Nop, M::ZeroPageX, P::IfCrossed),        // 0x34 NOP zp,X
    row(O::And, M::ZeroPageX, P::IfCrossed),        // 0x35 AND zp,X
    row(O::Rol, M::ZeroPageX, P::Always),           // 0x36 ROL zp,X
    row(O::Rla, M::ZeroPageX, P::Always),           // 0x37 RLA zp,X
    row(O::Sec, M::Implied, P::IfCrossed),          // 0x38 SEC
    row(O::And, M::AbsoluteY, P::IfCrossed),        // 0x39 AND abs,Y
    row(O::Nop, M::Implied, P::IfCrossed),          // 0x3A NOP
    row(O::Rla, M::AbsoluteY, P::Always),           // 0x3B RLA abs,Y
    row(O::Nop, M::AbsoluteX, P::IfCrossed),        // 0x3C NOP abs,X
    row(O::And, M::AbsoluteX, P::IfCrossed),        // 0x3D AND abs,X
    row(O::Rol, M::AbsoluteX, P::Always),           // 0x3E ROL abs,X
    row(O::Rla, M::AbsoluteX, P::Always),           // 0x3F RLA abs,X
    row(O::Rti, M::Implied, P::IfCrossed),          // 0x40 RTI
    row(O::Eor, M::IndexedIndirect, P::IfCrossed),  // 0x41 EOR (zp,X)
    row(O::Jam, M::Implied, P::IfCrossed),          // 0x42 JAM
    row(O::Sre, M::IndexedIndirect, P::Always),     // 0x43 SRE (zp,X)
    row(O::Nop, M::ZeroPage, P::IfCrossed),         // 0x44 NOP zp
    row(O::Eor, M::ZeroPage, P::IfCrossed),         // 0x45 EOR zp
    row(O::Lsr, M::ZeroPage, P::Always),            // 0x46 LSR zp
    row(O::Sre, M::ZeroPage, P::Always),            // 0x47 SRE zp
    row(O::Pha, M::Implied, P::IfCrossed),          // 0x48 PHA
    row(O::Eor, M::Immediate, P::IfCrossed),        // 0x49 EOR #
    row(O::Lsr, M::Accumulator, P::Always),         // 0x4A LSR A
    row(O::Alr, M::Immediate, P::IfCrossed),        // 0x4B ALR #
    row(O::Jmp, M::Absolute, P::IfCrossed),         // 0x4C JMP abs
    row(O::Eor, M::Absolute, P::IfCrossed),         // 0x4D EOR abs
    row(O::Lsr, M::Absolute, P::Always),            // 0x4E LSR abs
    row(O::Sre, M::Absolute, P::Always),            // 0x4F SRE abs
    row(O::Bvc, M::Relative, P::IfCrossed),         // 0x50 BVC
    row(O::Eor, M::IndirectIndexed, P::IfCrossed),  // 0x51 EOR (zp),Y
    row(O::Jam, M::Implied, P::IfCrossed),          // 0x52 JAM
    row(O::Sre, M::IndirectIndexed, P::Always),     // 0x53 SRE (zp),Y
    row(O::Nop, M::ZeroPageX, P::IfCrossed),        // 0x54 NOP zp,X
    row(O::Eor, M::ZeroPageX, P::IfCrossed),        // 0x55 EOR zp,X
    row(O::Lsr, M::ZeroPageX, P::Always),           // 0x56 LSR zp,X
    row(O::Sre, M::ZeroPageX, P::Always),           // 0x57 SRE zp,X
    row(O::Cli, M::Implied, P::IfCrossed),          // 0x58 CLI
    row(O::Eor, M::AbsoluteY, P::IfCrossed),        // 0x59 EOR abs,Y
    row(O::Nop, M::Implied, P::IfCrossed),          // 0x5A NOP
    row(O::Sre, M::AbsoluteY, P::Always),           // 0x5B SRE abs,Y
    row(O::Nop, M::AbsoluteX, P::IfCrossed),        // 0x5C NOP abs,X
    row(O::Eor, M::AbsoluteX, P::IfCrossed),        // 0x5D EOR abs,X
    row(O::Lsr, M::AbsoluteX, P::Always),           // 0x5E LSR abs,X
    row(O::Sre, M::AbsoluteX, P::Always),           // 0x5F SRE abs,X
    row(O::Rts, M::Implied, P::IfCrossed),          // 0x60 RTS
    row(O::Adc, M::IndexedIndirect, P::IfCrossed),  // 0x61 ADC (zp,X)
    row(O::Jam, M::Implied, P::IfCrossed),          // 0x62 JAM
    row(O::Rra, M::IndexedIndirect, P::Always),     // 0x63 RRA (zp,X)
    row(O::Nop, M::ZeroPage, P::IfCrossed),         // 0x64 NOP zp
    row(O::Adc, M::ZeroPage, P::IfCrossed),         // 0x65 ADC zp
    row(O::Ror, M::ZeroPage, P::Always),            // 0x66 ROR zp
    row(O::Rra, M::ZeroPage, P::Always),            // 0x67 RRA zp
    row(O::Pla, M::Implied, P::IfCrossed),          // 0x68 PLA
    row(O::Adc, M::Immediate, P::IfCrossed),        // 0x69 ADC #
    row(O::Ror, M::Accumulator, P::Always),         // 0x6A ROR A
    row(O::Arr, M::Immediate, P::IfCrossed),        // 0x6B ARR #
    row(O::Jmp, M::Indirect, P::IfCrossed),         // 0x6C JMP (abs)
    row(O::Adc, M::Absolute, P::IfCrossed),         // 0x6D ADC abs
    row(O::Ror, M::Absolute, P::Always),            // 0x6E ROR abs
    row(O::Rra, M::Absolute, P::Always),            // 0x6F RRA abs
    row(O::Bvs, M::Relative, P::IfCrossed),         // 0x70 BVS
    row(O::Adc, M::IndirectIndexed, P::IfCrossed),  // 0x71 ADC (zp),Y
    row(O::Jam, M::Implied, P::IfCrossed),          // 0x72 JAM
    row(O::Rra, M::IndirectIndexed, P::Always),     // 0x73 RRA (zp),Y
    row(O::Nop, M::ZeroPageX, P::IfCrossed),        // 0x74 NOP zp,X
    row(O::Adc, M::ZeroPageX, P::IfCrossed),        // 0x75 ADC zp,X
    row(O::Ror, M::ZeroPageX, P::Always),           // 0x76 ROR zp,X
    row(O::Rra, M::ZeroPageX, P::Always),           // 0x77 RRA zp,X
    row(O::Sei, M::Implied, P::IfCrossed),          // 0x78 SEI
    row(O::Adc, M::AbsoluteY, P::IfCrossed),        // 0x79 ADC abs,Y
    row(O::Nop, M::Implied, P::IfCrossed),          // 0x7A NOP
    row(O::Rra, M::AbsoluteY, P::Always),           // 0x7B RRA abs,Y
    row(O::Nop, M::AbsoluteX, P::IfCrossed),        // 0x7C NOP abs,X
    row(O::Adc, M::AbsoluteX, P::IfCrossed),        // 0x7D ADC abs,X
    row(O::Ror, M::AbsoluteX, P::Always),           // 0x7E ROR abs,X
    row(O::Rra, M::AbsoluteX, P::Always),           // 0x7F RRA abs,X
    row(O::Nop, M::Immediate, P::IfCrossed),        // 0x80 NOP #
    row(O::Sta, M::IndexedIndirect, P::Always),     // 0x81 STA (zp,X)
    row(O::Nop, M::Immediate, P::IfCrossed),        // 0x82 NOP #
    row(O::Sax, M::IndexedIndirect, P::Always),     // 0x83 SAX (zp,X)
    row(O::Sty, M::ZeroPage, P::Always),            // 0x84 STY zp
    row(O::Sta, M::ZeroPage, P::Always),            // 0x85 STA zp
    row(O::Stx, M::ZeroPage, P::Always),            // 0x86 STX zp
    row(O::Sax, M::ZeroPage, P::Always),            // 0x87 SAX zp
    row(O::Dey, M::Implied, P::IfCrossed),          // 0x88 DEY
    row(O::Nop, M::Immediate, P::IfCrossed),        // 0x89 NOP #
    row(O::Txa, M::Implied, P::IfCrossed),          // 0x8A TXA
    row(O::Ane, M::Immediate, P::IfCrossed),        // 0x8B ANE #
    row(O::Sty, M::Absolute, P::Always),            // 0x8C STY abs
    row(O::Sta, M::Absolute, P::Always),            // 0x8D STA abs
    row(O::Stx, M::Absolute, P::Always),            // 0x8E STX abs
    row(O::Sax, M::Absolute, P::Always),            // 0x8F SAX abs
    row(O::Bcc, M::Relative, P::IfCrossed),         // 0x90 BCC
    row(O::Sta, M::IndirectIndexed, P::Always),     // 0x91 STA (zp),Y
    row(O::Jam, M::Implied, P::IfCrossed),          // 0x92 JAM
    row(O::Sha, M::IndirectIndexed, P::Always),     // 0x93 SHA (zp),Y
    row(O::Sty, M::ZeroPageX, P::Always),           // 0x94 STY zp,X
    row(O::Sta, M::ZeroPageX, P::Always),           // 0x95 STA zp,X
    row(O::Stx, M::ZeroPageY, P::Always),           // 0x96 STX zp,Y
    row(O::Sax, M::ZeroPageY, P::Always),           // 0x97 SAX zp,Y
    row(O::Tya, M::Implied, P::IfCrossed),          // 0x98 TYA
    row(O::Sta, M::AbsoluteY, P::Always),           // 0x99 STA abs,Y
    row(O::Txs, M::Implied, P::IfCrossed),          // 0x9A TXS
    row(O::Tas, M::AbsoluteY, P::Always),           // 0x9B TAS abs,Y
    row(O::Shy, M::AbsoluteX, P::Always),           // 0x9C SHY abs,X
    row(O::Sta, M::AbsoluteX, P::Always),           // 0x9D STA abs,X
    row(O::Shx, M::AbsoluteY, P::Always),           // 0x9E SHX abs,Y
    row(O::Sha, M::AbsoluteY, P::Always),           // 0x9F SHA abs,Y
    row(O::Ldy, M::Immediate, P::IfCrossed),        // 0xA0 LDY #
    row(O::Lda, M::IndexedIndirect, P::IfCrossed),  // 0xA1 LDA (zp,X)
    row(O::Ldx, M::Immediate, P::IfCrossed),        // 0xA2 LDX #
    row(O::Lax, M::IndexedIndirect, P::IfCrossed),  // 0xA3 LAX (zp,X)
    row(O::Ldy, M::ZeroPage, P::IfCrossed),         // 0xA4 LDY zp
    row(O::Lda, M::ZeroPage, P::IfCrossed),         // 0xA5 LDA zp
    row(O::Ldx, M::ZeroPage, P::IfCrossed),         // 0xA6 LDX zp
    row(O::Lax, M::ZeroPage, P::IfCrossed),         // 0xA7 LAX zp
    row(O::Tay, M::Implied, P::IfCrossed),          // 0xA8 TAY
    row(O::Lda, M::Immediate, P::IfCrossed),        // 0xA9 LDA #
    row(O::Tax, M::Implied, P::IfCrossed),          // 0xAA TAX
    row(O::Lax, M::Immediate, P::IfCrossed),        // 0xAB LAX #
    row(O::Ldy, M::Absolute, P::IfCrossed),         // 0xAC LDY abs
    row(O::Lda, M::Absolute, P::IfCrossed),         // 0xAD LDA abs
    row(O::Ldx, M::Absolute, P::IfCrossed),         // 0xAE LDX abs
    row(O::Lax, M::Absolute, P::IfCrossed),         // 0xAF LAX abs
    row(O::Bcs, M::Relative, P::IfCrossed),         // 0xB0 BCS
    row(O::Lda, M::IndirectIndexed, P::IfCrossed),  // 0xB1 LDA (zp),Y
    row(O::Jam, M::Implied, P::IfCrossed),          // 0xB2 JAM
    row(O::Lax, M::IndirectIndexed, P::IfCrossed),  // 0xB3 LAX (zp),Y
    row(O::Ldy, M::ZeroPageX, P::IfCrossed),        // 0xB4 LDY zp,X
    row(O::Lda, M::ZeroPageX, P::IfCrossed),        // 0xB5 LDA zp,X
    row(O::Ldx, M::ZeroPageY, P::IfCrossed),        // 0xB6 LDX zp,Y
    row(O::Lax, M::ZeroPageY, P::IfCrossed),        // 0xB7 LAX zp,Y
    row(O::Clv, M::Implied, P::IfCrossed),          // 0xB8 CLV
    row(O::Lda, M::AbsoluteY, P::IfCrossed),        // 0xB9 LDA abs,Y
    row(O::Tsx, M::Implied, P::IfCrossed),          // 0xBA TSX
    row(O::Las, M::AbsoluteY, P::IfCrossed),        // 0xBB LAS abs,Y
    row(O::Ldy, M::AbsoluteX, P::IfCrossed),        // 0xBC LDY abs,X
    row(O::Lda, M::AbsoluteX, P::IfCrossed),        // 0xBD LDA abs,X
    row(O::Ldx, M::AbsoluteY, P::IfCrossed),        // 0xBE LDX abs,Y
    row(O::Lax, M::AbsoluteY, P::IfCrossed),        // 0xBF LAX abs,Y
    row(O::Cpy, M::Immediate, P::IfCrossed),        // 0xC0 CPY #
    row(O::Cmp, M::IndexedIndirect, P::IfCrossed),  // 0xC1 CMP (zp,X)
    row(O::Nop, M::Immediate, P::IfCrossed),        // 0xC2 NOP #
    row(O::Dcp, M::IndexedIndirect, P::Always),     // 0xC3 DCP (zp,X)
    row(O::Cpy, M::ZeroPage, P::IfCrossed),         // 0xC4 CPY zp
    row(O::Cmp, M::ZeroPage, P::IfCrossed),         // 0xC5 CMP zp
    row(O::Dec, M::ZeroPage, P::Always),            // 0xC6 DEC zp
    row(O::Dcp, M::ZeroPage, P::Always),            // 0xC7 DCP zp
    row(O::Iny, M::Implied, P::IfCrossed),          // 0xC8 INY
    row(O::Cmp, M::Immediate, P::IfCrossed),        // 0xC9 CMP #
    row(O::Dex, M::Implied, P::IfCrossed),          // 0xCA DEX
    row(O::Sbx, M::Immediate, P::IfCrossed),        // 0xCB SBX #
    row(O::Cpy, M::Absolute, P::IfCrossed),         // 0xCC CPY abs
    row(O::Cmp, M::Absolute, P::IfCrossed),         // 0xCD CMP abs
    row(O::Dec, M::Absolute, P::Always),            // 0xCE DEC abs
    row(O::Dcp, M::Absolute, P::Always),            // 0xCF DCP abs
    row(O::Bne, M::Relative, P::IfCrossed),         // 0xD0 BNE
    row(O::Cmp, M::IndirectIndexed, P::IfCrossed),  // 0xD1 CMP (zp),Y
    row(O::Jam, M::Implied, P::IfCrossed),          // 0xD2 JAM
    row(O::Dcp, M::IndirectIndexed, P::Always),     // 0xD3 DCP (zp),Y
    row(O::Nop, M::ZeroPageX, P::IfCrossed),        // 0xD4 NOP zp,X
    row(O::Cmp, M::ZeroPageX, P::IfCrossed),        // 0xD5 CMP zp,X
    row(O::Dec, M::ZeroPageX, P::Always),           // 0xD6 DEC zp,X
    row(O::Dcp, M::ZeroPageX, P::Always),           // 0xD7 DCP zp,X
    row(O::Cld, M::Implied, P::IfCrossed),          // 0xD8 CLD
    row(O::Cmp, M::AbsoluteY, P::IfCrossed),        // 0xD9 CMP abs,Y
    row(O::Nop, M::Implied, P::IfCrossed),          // 0xDA NOP
    row(O::Dcp, M::AbsoluteY, P::Always),           // 0xDB DCP abs,Y
    row(O::Nop, M::AbsoluteX, P::IfCrossed),        // 0xDC NOP abs,X
    row(O::Cmp, M::AbsoluteX, P::IfCrossed),        // 0xDD CMP abs,X
    row(O::Dec, M::AbsoluteX, P::Always),           // 0xDE DEC abs,X
    row(O::Dcp, M::AbsoluteX, P::Always),           // 0xDF DCP abs,X
    row(O::Cpx, M::Immediate, P::IfCrossed),        // 0xE0 CPX #
    row(O::Sbc, M::IndexedIndirect, P::IfCrossed),  // 0xE1 SBC (zp,X)
    row(O::Nop, M::Immediate, P::IfCrossed),        // 0xE2 NOP #
    row(O::Isc, M::IndexedIndirect, P::Always),     // 0xE3 ISC (zp,X)
    row(O::Cpx, M::ZeroPage, P::IfCrossed),         // 0xE4 CPX zp
    row(O::Sbc, M::ZeroPage, P::IfCrossed),         // 0xE5 SBC zp
    row(O::Inc, M::ZeroPage, P::Always),            // 0xE6 INC zp
    row(O::Isc, M::ZeroPage, P::Always),            // 0xE7 ISC zp
    row(O::Inx, M::Implied, P::IfCrossed),          // 0xE8 INX
    row(O::Sbc, M::Immediate, P::IfCrossed),        // 0xE9 SBC #
    row(O::Nop, M::Implied, P::IfCrossed),          // 0xEA NOP
    row(O::Sbc, M::Immediate, P::IfCrossed),        // 0xEB SBC # (duplicate encoding)
    row(O::Cpx, M::Absolute, P::IfCrossed),         // 0xEC CPX abs
    row(O::Sbc, M::Absolute, P::IfCrossed),         // 0xED SBC abs
    row(O::Inc, M::Absolute, P::Always),            // 0xEE INC abs
    row(O::Isc, M::Absolute, P::Always),            // 0xEF ISC abs
    row(O::Beq, M::Relative, P::IfCrossed),         // 0xF0 BEQ
    row(O::Sbc, M::IndirectIndexed, P::IfCrossed),  // 0xF1 SBC (zp),Y
    row(O::Jam, M::Implied, P::IfCrossed),          // 0xF2 JAM
    row(O::Isc, M::IndirectIndexed, P::Always),     // 0xF3 ISC (zp),Y
    row(O::Nop, M::ZeroPageX, P::IfCrossed),        // 0xF4 NOP zp,X
    row(O::Sbc, M::ZeroPageX, P::IfCrossed),        // 0xF5 SBC zp,X
    row(O::Inc, M::ZeroPageX, P::Always),           // 0xF6 INC zp,X
    row(O::Isc, M::ZeroPageX, P::Always),           // 0xF7 ISC zp,X
    row(O::Sed, M::Implied, P::IfCrossed),          // 0xF8 SED
    row(O::Sbc, M::AbsoluteY, P::IfCrossed),        // 0xF9 SBC abs,Y
    row(O::Nop, M::Implied, P::IfCrossed),          // 0xFA NOP
    row(O::Isc, M::AbsoluteY, P::Always),           // 0xFB ISC abs,Y
    row(O::Nop, M::AbsoluteX, P::IfCrossed),        // 0xFC NOP abs,X
    row(O::Sbc, M::AbsoluteX, P::IfCrossed),        // 0xFD SBC abs,X
    row(O::Inc, M::AbsoluteX, P::Always),           // 0xFE INC abs,X
    row(O::Isc, M::AbsoluteX, P::Always),           // 0xFF ISC abs,X
];
