//! EmberOS kernel — entry point.
//!
//! Entered from the emberos-boot reset path via mret: machine mode, stack
//! pointer at the top of the stack region, bss zeroed, trap vector
//! installed, interrupts enabled per the boot mask. Nothing is scheduled
//! yet, so kmain reports the handoff and parks.
#![no_std]
#![no_main]

use core::panic::PanicInfo;

// Linking the boot crate pulls in the reset vector and the trap stub.
use emberos_boot as boot;

use emberos_kernel::println;

/// Kernel entry point — the address the bootstrap loads into `mepc`.
#[no_mangle]
pub extern "C" fn kmain() -> ! {
    println!("EmberOS v0.1.0 — kernel entered");
    println!(
        "[mem] heap reservation: {:#x}..{:#x} ({} MiB)",
        boot::layout::MEMORY_MAP.heap.start,
        boot::layout::MEMORY_MAP.heap.end,
        boot::layout::MEMORY_MAP.heap_size() / (1024 * 1024),
    );

    // Nothing to run yet — sleep until interrupts arrive. Each one lands
    // in the trap stub and resumes right back here.
    loop {
        boot::csr::wfi();
    }
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    println!("!!! KERNEL PANIC !!!");
    println!("{}", info);
    loop {
        boot::csr::wfi();
    }
}
