//! Reset vector — the first instructions after power-on.
//!
//! Hardware jumps to `_start` with nothing set up: no stack, no zeroed
//! bss, no trap vector. The asm below carries the sequence up to the
//! point where Rust can run (gp and sp configured), then `machine_init`
//! finishes privilege setup and hands off. Every step mirrors one stage
//! of [`sequence::BootSequence`]; the layout symbols it loads are the
//! linker-script mirror of [`layout::MEMORY_MAP`].

use core::arch::global_asm;

use crate::csr;
use crate::sequence;
use crate::trap;

global_asm!(
    r#"
.section .text.init
.global _start
_start:
    # ThreadCheck: only hart 0 boots. Everyone else parks below.
    csrr    t0, mhartid
    bnez    t0, 3f

    # No virtual-memory subsystem exists yet; run with translation off.
    csrw    satp, zero

    # GlobalsSetup: the two-instruction load of gp cannot tolerate being
    # relaxed into a gp-relative form before gp holds the value.
.option push
.option norelax
    la      gp, _global_pointer
.option pop

    # BssClear: zero [_bss_start, _bss_end) a doubleword at a time,
    # stopping strictly before the end boundary. Empty region: no stores.
    la      t0, _bss_start
    la      t1, _bss_end
    bgeu    t0, t1, 2f
1:
    sd      zero, (t0)
    addi    t0, t0, 8
    bltu    t0, t1, 1b
2:
    # StackSetup: sp starts at the top of the stack region, grows down.
    la      sp, _stack_end

    # PrivilegeSetup and Handoff continue in Rust.
    tail    machine_init

3:
    # Secondary harts suspend until an event, then suspend again. They are
    # deliberately never brought into the boot sequence yet.
    wfi
    j       3b
"#
);

/// PrivilegeSetup and Handoff for the boot hart.
///
/// Entered from `_start` with gp and sp configured and bss zeroed. Writes
/// each piece of machine control state exactly once, then returns out of
/// the boot path into `kmain` — after the mret, this code is never
/// executed again.
#[no_mangle]
extern "C" fn machine_init() -> ! {
    extern "C" {
        // Kernel entry point. Consumed only as a jump target; the
        // contract is "stack configured, bss zeroed, interrupts enabled
        // per the boot mask, machine mode, trap vector installed".
        fn kmain() -> !;
    }

    csr::write_mstatus(sequence::BOOT_STATUS.bits());
    csr::write_mepc(kmain as *const () as u64);
    csr::write_mtvec(trap::vector_base());
    csr::write_mie(sequence::BOOT_INTERRUPT_MASK.bits());

    csr::mret()
}
