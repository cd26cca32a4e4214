//! Machine-control capability seam.
//!
//! The boot sequence never touches control-status registers directly; it
//! goes through this trait, so the same logic runs against the real hart
//! and against the simulated register file in host-target tests. The
//! riscv64 backend lives in `csr`/`entry`, the simulated one in `sim`.

bitflags::bitflags! {
    /// `mstatus` bits the boot sequence owns.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct Mstatus: u64 {
        /// Machine-mode interrupt enable.
        const MIE = 1 << 3;
        /// Value MIE takes on the next privilege return.
        const MPIE = 1 << 7;
        /// Previous-privilege field set to machine mode (both bits).
        const MPP_MACHINE = 0b11 << 11;
    }

    /// Interrupt classes in `mie`.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct Mie: u64 {
        /// Machine software interrupt (MSIE).
        const SOFTWARE = 1 << 3;
        /// Machine timer interrupt (MTIE).
        const TIMER = 1 << 7;
        /// Machine external interrupt (MEIE).
        const EXTERNAL = 1 << 11;
    }
}

/// Named control fields the bootstrap reads or writes. Each is written
/// exactly once, by exactly one hart, before any interrupt is enabled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Csr {
    /// Address translation/protection. Zero = all addresses physical.
    Satp,
    /// Privilege/status configuration.
    Mstatus,
    /// Exception-return address — where the privilege return resumes.
    Mepc,
    /// Trap-vector base — invoked on any interrupt or exception.
    Mtvec,
    /// Interrupt-enable mask.
    Mie,
}

/// Minimal capability interface over one hardware thread.
pub trait Machine {
    /// Hardware thread identity. Read once at reset, used only to branch.
    fn hart_id(&self) -> usize;

    fn read_csr(&self, csr: Csr) -> u64;

    fn write_csr(&mut self, csr: Csr, value: u64);

    /// Point the global addressing register at the layout's fixed address.
    fn set_global_pointer(&mut self, addr: u64);

    /// Point the stack pointer at the stack region's top.
    fn set_stack_pointer(&mut self, addr: u64);

    /// One aligned 8-byte zero store — the bss-clear primitive.
    fn store_zero(&mut self, addr: u64);

    /// Suspend until any interrupt/event arrives (wfi).
    fn wait_for_event(&mut self);

    /// Privilege-mode return (mret): atomically apply the configured
    /// status and transfer control to the exception-return address.
    fn privileged_return(&mut self);
}
