//! # Processor Context
//!
//! This module contains `Core`, the explicit per-instruction execution
//! context: the program counter, the two index registers the addressing
//! engine reads, the effective-address and operand scratch fields, and the
//! timing-fidelity flag. The original part kept these as globals shared
//! between the addressing routines and the opcode bodies; here they are one
//! struct owned by the interpreter loop and passed by reference to every
//! routine, which keeps the single-writer, run-to-completion lifecycle
//! without the hidden coupling.
//!
//! The rest of the register file (accumulator, stack pointer, status flags)
//! belongs to the external opcode handlers, not to this core.

use std::str::FromStr;

use log::warn;
use thiserror::Error;

use crate::bus::Bus;

/// Environment variable consulted by [`Fidelity::from_env`].
pub const FIDELITY_ENV: &str = "BUS6502_FIDELITY";

/// Bus-timing fidelity for a run.
///
/// In `CycleAccurate` mode the engine emits every dummy and fixup bus cycle
/// the original silicon performed, so hardware watching the bus sees the
/// exact transaction stream. `Fast` elides the cycles that have no logical
/// effect, trading bus fidelity for throughput.
///
/// The flag is read, never written, by the engine. Switching it mid-run
/// would break the timing contract for anything observing the bus, so pick
/// one per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fidelity {
    /// Emit all dummy/fixup bus cycles.
    #[default]
    CycleAccurate,
    /// Elide bus cycles that have no logical effect.
    Fast,
}

/// Error returned when parsing an unrecognized fidelity name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized fidelity `{0}` (expected `accurate` or `fast`)")]
pub struct FidelityError(String);

impl Fidelity {
    /// True when dummy/fixup cycles should be emitted.
    #[inline]
    pub fn cycle_accurate(self) -> bool {
        matches!(self, Fidelity::CycleAccurate)
    }

    /// Reads the fidelity from the `BUS6502_FIDELITY` environment variable.
    ///
    /// Unset or unrecognized values fall back to `CycleAccurate`; an
    /// unrecognized value is also logged at `warn` level.
    pub fn from_env() -> Self {
        match std::env::var(FIDELITY_ENV) {
            Ok(value) => value.parse().unwrap_or_else(|err| {
                warn!("{FIDELITY_ENV}: {err}, defaulting to cycle-accurate");
                Fidelity::CycleAccurate
            }),
            Err(_) => Fidelity::CycleAccurate,
        }
    }
}

impl FromStr for Fidelity {
    type Err = FidelityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accurate" | "cycle-accurate" | "on" => Ok(Fidelity::CycleAccurate),
            "fast" | "off" => Ok(Fidelity::Fast),
            other => Err(FidelityError(other.to_string())),
        }
    }
}

/// Execution context for the addressing engine and dispatch table.
///
/// `Core` owns the bus plus the handful of registers the addressing engine
/// itself touches. It is generic over the bus implementation via the
/// [`Bus`] trait.
///
/// # Program counter convention
///
/// Every operand-fetch primitive increments the PC *before* reading, so
/// within an instruction the PC rests on the most recently consumed byte.
/// [`Core::dispatch`](crate::dispatch) therefore expects the PC to address
/// the opcode byte on entry, and leaves it on the instruction's final byte;
/// stepping past that byte to the next opcode is the interpreter loop's
/// job, as is fetching the opcode itself.
///
/// # Examples
///
/// ```
/// use bus6502::{Core, FlatBus};
///
/// let mut bus = FlatBus::new();
/// bus.load(0x8000, &[0xA9, 0x42]); // LDA #$42
///
/// let mut core = Core::new(bus);
/// core.set_pc(0x8000);
///
/// // The engine consumes the operand byte and leaves PC on it.
/// assert_eq!(core.fetch_immediate(), 0x42);
/// assert_eq!(core.pc(), 0x8001);
/// assert_eq!(core.fetched(), 0x42);
/// ```
pub struct Core<B: Bus> {
    pub(crate) bus: B,

    /// Program counter. See the convention note on [`Core`].
    pub(crate) pc: u16,

    /// X index register; read-only to the engine, written by external
    /// handlers (LDX, INX, TAX live outside this core).
    pub(crate) x: u8,

    /// Y index register; same ownership as X.
    pub(crate) y: u8,

    /// Effective address computed by the most recent addressing routine.
    /// Not meaningful across instruction boundaries.
    pub(crate) effective_address: u16,

    /// Most recent byte an addressing routine read from the bus.
    pub(crate) fetched: u8,

    pub(crate) fidelity: Fidelity,
}

impl<B: Bus> Core<B> {
    /// Creates a core over `bus` in cycle-accurate fidelity, with all
    /// registers and scratch fields zeroed.
    pub fn new(bus: B) -> Self {
        Self::with_fidelity(bus, Fidelity::CycleAccurate)
    }

    /// Creates a core over `bus` with an explicit fidelity.
    pub fn with_fidelity(bus: B, fidelity: Fidelity) -> Self {
        Self {
            bus,
            pc: 0x0000,
            x: 0x00,
            y: 0x00,
            effective_address: 0x0000,
            fetched: 0x00,
            fidelity,
        }
    }

    /// Performs one read cycle on the underlying bus.
    #[inline]
    pub fn read(&mut self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    /// Performs one write cycle on the underlying bus.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Shared access to the bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Exclusive access to the bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consumes the core, returning the bus.
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Returns the program counter.
    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Sets the program counter. Branch, jump, and interrupt handlers are
    /// the expected callers.
    #[inline]
    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    /// Returns the X index register.
    #[inline]
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Sets the X index register.
    #[inline]
    pub fn set_x(&mut self, x: u8) {
        self.x = x;
    }

    /// Returns the Y index register.
    #[inline]
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Sets the Y index register.
    #[inline]
    pub fn set_y(&mut self, y: u8) {
        self.y = y;
    }

    /// Effective address computed by the most recent addressing routine.
    ///
    /// Valid only between a fetch routine and the end of the same
    /// instruction; read-modify-write handlers use it (through
    /// [`double_write_back`](Core::double_write_back)) to hit the address
    /// the fetch actually accessed.
    #[inline]
    pub fn effective_address(&self) -> u16 {
        self.effective_address
    }

    /// Most recent byte an addressing routine read from the bus.
    #[inline]
    pub fn fetched(&self) -> u8 {
        self.fetched
    }

    /// Returns the timing fidelity for this run.
    #[inline]
    pub fn fidelity(&self) -> Fidelity {
        self.fidelity
    }

    /// Sets the timing fidelity. Must not be changed while a session is
    /// observing bus timing; intended for configuration at startup.
    pub fn set_fidelity(&mut self, fidelity: Fidelity) {
        self.fidelity = fidelity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatBus;

    #[test]
    fn new_core_is_zeroed_and_cycle_accurate() {
        let core = Core::new(FlatBus::new());
        assert_eq!(core.pc(), 0x0000);
        assert_eq!(core.x(), 0x00);
        assert_eq!(core.y(), 0x00);
        assert_eq!(core.fidelity(), Fidelity::CycleAccurate);
    }

    #[test]
    fn fidelity_parses_spec_spellings() {
        assert_eq!("accurate".parse(), Ok(Fidelity::CycleAccurate));
        assert_eq!("on".parse(), Ok(Fidelity::CycleAccurate));
        assert_eq!("Fast".parse(), Ok(Fidelity::Fast));
        assert_eq!("off".parse(), Ok(Fidelity::Fast));
        assert!("warp".parse::<Fidelity>().is_err());
    }

    #[test]
    fn register_setters_round_trip() {
        let mut core = Core::new(FlatBus::new());
        core.set_pc(0xBEEF);
        core.set_x(0x12);
        core.set_y(0x34);
        assert_eq!((core.pc(), core.x(), core.y()), (0xBEEF, 0x12, 0x34));
    }
}
