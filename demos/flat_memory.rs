//! Flat memory example
//!
//! Wires a bus with one 64KB memory, seeds the IRQ vector, and runs a short
//! program that ends in BRK.
//!
//! Run with `RUST_LOG=emu6502=trace cargo run --example flat_memory` to see
//! every dispatched instruction.

use emu6502::{Bus, ExecutionError, FlatMemory, InstructionTable, ProcessorState, IRQ_VECTOR};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut memory = FlatMemory::new();

    // IRQ vector -> 0x2F2F, which holds an opcode nothing implements
    memory.load(IRQ_VECTOR, &[0x2F, 0x2F]);
    memory.load(0x2F2F, &[0x02]);

    // LDX #$FE, INX, INX, STX $10, TXA, BRK
    memory.load(
        0x0200,
        &[0xA2, 0xFE, 0xE8, 0xE8, 0x86, 0x10, 0x8A, 0x00],
    );

    let bus = Bus::builder().register_subscriber(Box::new(memory)).build();
    let mut cpu = ProcessorState::new(bus);
    cpu.set_pc(0x0200);

    let table = InstructionTable::standard();

    loop {
        let pc = cpu.pc();
        match cpu.step(&table) {
            Ok(flags) => println!(
                "0x{:04X}  A={:02X} X={:02X} Y={:02X} SP={:02X}  {}",
                pc,
                cpu.a(),
                cpu.x(),
                cpu.y(),
                cpu.sp(),
                flags
            ),
            Err(ExecutionError::UnimplementedOpcode(op)) => {
                println!("0x{:04X}  stopped on unimplemented opcode 0x{:02X}", pc, op);
                break;
            }
            Err(e) => {
                eprintln!("Execution error: {}", e);
                break;
            }
        }
    }

    println!("Memory at 0x0010: 0x{:02X}", cpu.bus().read8(0x0010));
}
