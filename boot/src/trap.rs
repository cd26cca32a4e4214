//! Trap dispatch stub.
//!
//! `vector_base()` is the single address installed into `mtvec`; hardware
//! transfers here on every interrupt and exception after saving the
//! interrupted pc into `mepc`. The current stub returns immediately: no
//! register is saved or restored, the cause is not inspected, and `mepc`
//! is left untouched, so execution resumes exactly where it stopped.
//!
//! That is a structural placeholder, not a policy. A complete handler
//! saves full register context, reads `mcause`, dispatches interrupts by
//! source and exceptions by cause code, then restores and returns. Until
//! it exists, a synchronous exception re-executes the faulting
//! instruction and refaults forever. The dispatch table below is
//! deliberately one slot today so it can grow cause-keyed entries without
//! changing the installation contract: one address, written once into
//! `mtvec`.

use spin::Once;

use crate::machine::Machine;

/// Vector base reported when the asm stub is not linked — host-target
/// tests and any other non-riscv64 build.
pub const SIM_VECTOR_BASE: u64 = 0x4000_0000;

/// Single-slot dispatch table. Grows into a cause-keyed table (interrupt
/// source / exception code → handler) once real handlers exist.
struct TrapTable {
    vector: u64,
}

/// Installed once, before interrupts are enabled, by the boot hart.
static TRAP_TABLE: Once<TrapTable> = Once::new();

/// The address written into `mtvec`. First call registers the stub; every
/// call returns the same address.
pub fn vector_base() -> u64 {
    TRAP_TABLE.call_once(|| TrapTable { vector: stub_address() }).vector
}

/// Host-side model of `_trap_vector`: an immediate privilege return,
/// touching nothing. Mirrors the asm stub instruction for instruction.
pub fn stub_return<M: Machine>(machine: &mut M) {
    machine.privileged_return();
}

#[cfg(all(target_arch = "riscv64", not(test)))]
fn stub_address() -> u64 {
    extern "C" {
        fn _trap_vector();
    }
    _trap_vector as *const () as u64
}

#[cfg(not(all(target_arch = "riscv64", not(test))))]
fn stub_address() -> u64 {
    SIM_VECTOR_BASE
}

// The stub itself. mtvec requires 4-byte alignment; direct mode (low bits
// zero) routes every trap to this one address.
#[cfg(all(target_arch = "riscv64", not(test)))]
core::arch::global_asm!(
    r#"
.section .text
.global _trap_vector
.align 4
_trap_vector:
    mret
"#
);
