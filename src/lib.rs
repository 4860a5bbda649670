//! # bus6502
//!
//! The instruction-execution core of a drop-in NMOS 6502 replacement:
//! a microcontroller (or emulator) drives the original address/data/control
//! bus and must reproduce, cycle for cycle, the exact sequence of bus
//! transactions the original silicon performed, including reads whose
//! values are discarded. Other chips on a vintage bus observe every cycle,
//! so reproducing register semantics alone is not enough; this crate exists
//! to get the *bus* right.
//!
//! The crate covers two things and deliberately nothing else:
//!
//! - The **addressing-mode engine**: one fetch/store routine per operand
//!   scheme, each issuing the correct number and order of bus reads and
//!   writes (dummy and fixup cycles included), plus the double write-back
//!   primitive read-modify-write instructions need.
//! - The **opcode dispatch table**: a total mapping of all 256 instruction
//!   bytes (undocumented operations, duplicate encodings, and jam codes as
//!   first-class rows) to the (operation, addressing mode, page-cross
//!   policy) triple that services them.
//!
//! The physical bus, the per-operation semantics (ALU, flags, stack,
//! branches), and the rest of the register file are external collaborators:
//! you provide them through the [`Bus`] and [`Handlers`] traits.
//!
//! ## Quick start
//!
//! ```
//! use bus6502::{Bus, Core, FlatBus, Handlers, Instruction, Operation};
//!
//! // Operation semantics live outside the core.
//! struct Cpu {
//!     a: u8,
//! }
//!
//! impl<B: Bus> Handlers<B> for Cpu {
//!     fn operation(&mut self, core: &mut Core<B>, instruction: &Instruction) {
//!         match instruction.operation {
//!             Operation::Lda => self.a = core.fetch(instruction.mode, instruction.penalty),
//!             Operation::Sta => core.store(instruction.mode, self.a),
//!             _ => {}
//!         }
//!     }
//!
//!     fn interrupt(&mut self, _core: &mut Core<B>) {}
//! }
//!
//! let mut bus = FlatBus::new();
//! bus.load(0x8000, &[0xA9, 0x42]); // LDA #$42
//!
//! let mut core = Core::new(bus);
//! core.set_pc(0x8000);
//! let mut cpu = Cpu { a: 0 };
//!
//! // The interpreter loop owns the opcode fetch and the PC step between
//! // instructions; the core owns everything in between.
//! let pc = core.pc();
//! let opcode = core.read(pc);
//! core.dispatch(opcode, &mut cpu);
//!
//! assert_eq!(cpu.a, 0x42);
//! assert_eq!(core.pc(), 0x8001); // resting on the operand byte
//! ```
//!
//! ## Fidelity
//!
//! One global flag selects between cycle-accurate bus timing (every dummy
//! and fixup cycle emitted) and a fast mode that elides cycles with no
//! logical effect. See [`Fidelity`]. The flag must stay fixed for the
//! duration of a run.
//!
//! ## Modules
//!
//! - [`bus`]: the `Bus` trait and a flat 64 KiB implementation
//! - [`core`]: the `Core` execution context and the fidelity flag
//! - [`addressing`]: the addressing-mode engine
//! - [`dispatch`]: the 256-entry table and the `Handlers` boundary

pub mod addressing;
pub mod bus;
pub mod core;
pub mod dispatch;

pub use crate::addressing::{AddressingMode, PageCross};
pub use crate::bus::{Bus, FlatBus};
pub use crate::core::{Core, Fidelity, FidelityError, FIDELITY_ENV};
pub use crate::dispatch::{instruction, Handlers, Instruction, Operation, OPCODE_TABLE};
