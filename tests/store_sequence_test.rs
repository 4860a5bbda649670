//! Transaction-sequence tests for the store side of the addressing engine,
//! including the dummy reads stores pay unconditionally and the preserved
//! absolute,Y read-before-write pattern.

mod common;

use bus6502::Fidelity;
use common::core_with_operands;
use common::BusCycle::{Read, Write};

#[test]
fn zero_page_store_is_one_address_read_one_write() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0x42]);

    core.write_zero_page(0x33);

    assert_eq!(core.bus().log, vec![Read(0x8001), Write(0x0042, 0x33)]);
    assert_eq!(core.bus().peek(0x0042), 0x33);
    assert_eq!(core.effective_address(), 0x0042);
}

#[test]
fn zero_page_x_store_always_pays_the_index_cycle() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0xF0]);
    core.set_x(0x05);

    core.write_zero_page_x(0x44);

    assert_eq!(
        core.bus().log,
        vec![Read(0x8001), Read(0x00F0), Write(0x00F5, 0x44)]
    );
}

#[test]
fn zero_page_x_store_wraps_within_page_zero() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0xFF]);
    core.set_x(0x01);

    core.write_zero_page_x(0x45);

    assert_eq!(core.bus().peek(0x0000), 0x45);
    assert_eq!(core.effective_address(), 0x0000);
}

#[test]
fn zero_page_y_store_mirrors_the_x_form() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0x80]);
    core.set_y(0x0F);

    core.write_zero_page_y(0x46);

    assert_eq!(
        core.bus().log,
        vec![Read(0x8001), Read(0x0080), Write(0x008F, 0x46)]
    );
}

#[test]
fn zero_page_x_store_fast_mode_elides_the_dummy_read() {
    let mut core = core_with_operands(Fidelity::Fast, &[0xF0]);
    core.set_x(0x05);

    core.write_zero_page_x(0x44);

    assert_eq!(core.bus().log, vec![Read(0x8001), Write(0x00F5, 0x44)]);
}

#[test]
fn absolute_store_has_no_extra_cycles() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0x34, 0x12]);

    core.write_absolute(0x55);

    assert_eq!(
        core.bus().log,
        vec![Read(0x8001), Read(0x8002), Write(0x1234, 0x55)]
    );
}

#[test]
fn absolute_x_store_dummy_read_without_carry_hits_final_address() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0x00, 0x12]);
    core.set_x(0x34);

    core.write_absolute_x(0x66);

    assert_eq!(
        core.bus().log,
        vec![Read(0x8001), Read(0x8002), Read(0x1234), Write(0x1234, 0x66)]
    );
}

#[test]
fn absolute_x_store_dummy_read_on_carry_hits_pre_carry_address() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0xFF, 0x10]);
    core.set_x(0x01);

    core.write_absolute_x(0x67);

    assert_eq!(
        core.bus().log,
        vec![Read(0x8001), Read(0x8002), Read(0x1000), Write(0x1100, 0x67)]
    );
}

#[test]
fn absolute_y_store_reads_final_address_before_writing() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0x00, 0x12]);
    core.set_y(0x34);

    core.write_absolute_y(0x68);

    assert_eq!(
        core.bus().log,
        vec![Read(0x8001), Read(0x8002), Read(0x1234), Write(0x1234, 0x68)]
    );
}

#[test]
fn absolute_y_store_crossing_reads_final_address_twice() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0xFF, 0x10]);
    core.set_y(0x01);

    core.write_absolute_y(0x69);

    // The double-conditional pattern of the original part: one
    // unconditional read at the computed address, a second when the index
    // addition carried, then the write.
    assert_eq!(
        core.bus().log,
        vec![
            Read(0x8001),
            Read(0x8002),
            Read(0x1100),
            Read(0x1100),
            Write(0x1100, 0x69),
        ]
    );
}

#[test]
fn absolute_y_store_fast_mode_is_write_only() {
    let mut core = core_with_operands(Fidelity::Fast, &[0xFF, 0x10]);
    core.set_y(0x01);

    core.write_absolute_y(0x6A);

    assert_eq!(
        core.bus().log,
        vec![Read(0x8001), Read(0x8002), Write(0x1100, 0x6A)]
    );
}

#[test]
fn indexed_indirect_store_chases_the_pointer_then_writes() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0x20]);
    core.set_x(0x04);
    core.bus_mut().poke(0x0024, 0x74);
    core.bus_mut().poke(0x0025, 0x20);

    core.write_indexed_indirect(0x77);

    assert_eq!(
        core.bus().log,
        vec![
            Read(0x8001),
            Read(0x0020),
            Read(0x0024),
            Read(0x0025),
            Write(0x2074, 0x77),
        ]
    );
}

#[test]
fn indexed_indirect_store_pointer_wraps_in_page_zero() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0xFE]);
    core.set_x(0x01);
    core.bus_mut().poke(0x00FF, 0x34);
    core.bus_mut().poke(0x0000, 0x12);

    core.write_indexed_indirect(0x78);

    assert_eq!(core.bus().peek(0x1234), 0x78);
}

#[test]
fn indirect_indexed_store_always_pays_the_fixup_read() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0x20]);
    core.set_y(0x10);
    core.bus_mut().poke(0x0020, 0x74);
    core.bus_mut().poke(0x0021, 0x20);

    core.write_indirect_indexed(0x79);

    // No crossing: the fixup address coincides with the final one.
    assert_eq!(
        core.bus().log,
        vec![
            Read(0x8001),
            Read(0x0020),
            Read(0x0021),
            Read(0x2084),
            Write(0x2084, 0x79),
        ]
    );
}

#[test]
fn indirect_indexed_store_crossing_fixup_hits_pre_carry_address() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0x20]);
    core.set_y(0x10);
    core.bus_mut().poke(0x0020, 0xF4);
    core.bus_mut().poke(0x0021, 0x20);

    core.write_indirect_indexed(0x7A);

    assert_eq!(
        core.bus().log,
        vec![
            Read(0x8001),
            Read(0x0020),
            Read(0x0021),
            Read(0x2004),
            Write(0x2104, 0x7A),
        ]
    );
}

#[test]
fn indirect_indexed_store_pointer_wraps_like_the_fetch_form() {
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0xFF]);
    core.set_y(0x00);
    core.bus_mut().poke(0x00FF, 0x00);
    core.bus_mut().poke(0x0000, 0x40);

    core.write_indirect_indexed(0x7B);

    // High pointer byte comes from 0x0000, not 0x0100.
    assert_eq!(core.bus().peek(0x4000), 0x7B);
}

#[test]
fn store_then_fetch_round_trips_per_mode() {
    // Store with a routine, rewind the PC to a second copy of the same
    // operand bytes, fetch with the matching routine: the value read must
    // be the value stored.
    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0x7C]);
    core.bus_mut().load(0x9001, &[0x7C]);
    core.set_x(0x10);

    core.write_zero_page_x(0xC3);
    core.set_pc(0x9000);
    assert_eq!(core.fetch_zero_page_x(), 0xC3);

    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0xFF, 0x20]);
    core.bus_mut().load(0x9001, &[0xFF, 0x20]);
    core.set_y(0x02);

    core.write_absolute_y(0xC4);
    core.set_pc(0x9000);
    assert_eq!(core.fetch_absolute_y(bus6502::PageCross::IfCrossed), 0xC4);

    let mut core = core_with_operands(Fidelity::CycleAccurate, &[0x30]);
    core.bus_mut().load(0x9001, &[0x30]);
    core.set_x(0x08);
    core.bus_mut().poke(0x0038, 0x00);
    core.bus_mut().poke(0x0039, 0x44);

    core.write_indexed_indirect(0xC5);
    core.set_pc(0x9000);
    assert_eq!(core.fetch_indexed_indirect(), 0xC5);
}
