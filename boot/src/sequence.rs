//! Boot sequence — the one-shot reset state machine.
//!
//! Runs exactly once per power-on, on exactly one hart. Each transition
//! below matches one step of the reset path in `entry.rs`; driving it
//! through the [`Machine`] trait is what lets the host-target tests
//! observe every step against a simulated register file. None of the
//! steps can report an error: a malformed layout manifests as undefined
//! behavior at boot, which is why the layout is validated at build time
//! instead.

use crate::layout::{MemoryMap, Region};
use crate::machine::{Csr, Machine, Mie, Mstatus};
use crate::trap;

/// Interrupt classes enabled at handoff: machine software, timer and
/// external. Everything else stays masked until the kernel decides
/// otherwise.
pub const BOOT_INTERRUPT_MASK: Mie = Mie::SOFTWARE.union(Mie::TIMER).union(Mie::EXTERNAL);

/// Status applied by the handoff return: previous privilege = machine, so
/// execution stays at the highest level, with interrupts enabled once the
/// return completes (MPIE restores into MIE).
pub const BOOT_STATUS: Mstatus =
    Mstatus::MPP_MACHINE.union(Mstatus::MPIE).union(Mstatus::MIE);

/// States of the reset state machine, in execution order for hart 0.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BootStage {
    ColdReset,
    ThreadCheck { hart: usize },
    GlobalsSetup,
    BssClear,
    StackSetup,
    PrivilegeSetup,
    Handoff,
    /// Terminal for the boot hart: control has transferred to the kernel
    /// entry point and the boot sequence no longer exists.
    KernelEntered,
    /// Terminal for every other hart: suspend, wake, suspend again. Never
    /// exits — secondary harts are deliberately not brought up yet.
    Parked,
}

/// Drives one [`Machine`] from reset to handoff (or permanent parking).
pub struct BootSequence<'m, M: Machine> {
    machine: &'m mut M,
    map: &'m MemoryMap,
    kernel_entry: u64,
    stage: BootStage,
}

impl<'m, M: Machine> BootSequence<'m, M> {
    pub fn new(machine: &'m mut M, map: &'m MemoryMap, kernel_entry: u64) -> Self {
        Self {
            machine,
            map,
            kernel_entry,
            stage: BootStage::ColdReset,
        }
    }

    pub fn stage(&self) -> BootStage {
        self.stage
    }

    /// Advance exactly one transition and return the stage entered.
    ///
    /// `Parked` re-enters itself after each wake; `KernelEntered` is
    /// inert.
    pub fn step(&mut self) -> BootStage {
        self.stage = match self.stage {
            BootStage::ColdReset => BootStage::ThreadCheck {
                hart: self.machine.hart_id(),
            },
            BootStage::ThreadCheck { hart: 0 } => {
                // No virtual-memory subsystem exists yet; every address
                // is physical.
                self.machine.write_csr(Csr::Satp, 0);
                BootStage::GlobalsSetup
            }
            BootStage::ThreadCheck { .. } => BootStage::Parked,
            BootStage::GlobalsSetup => {
                self.machine.set_global_pointer(self.map.global_pointer());
                BootStage::BssClear
            }
            BootStage::BssClear => {
                clear_region(self.machine, self.map.bss);
                BootStage::StackSetup
            }
            BootStage::StackSetup => {
                self.machine.set_stack_pointer(self.map.stack_top());
                BootStage::PrivilegeSetup
            }
            BootStage::PrivilegeSetup => {
                self.machine.write_csr(Csr::Mstatus, BOOT_STATUS.bits());
                self.machine.write_csr(Csr::Mepc, self.kernel_entry);
                self.machine.write_csr(Csr::Mtvec, trap::vector_base());
                self.machine.write_csr(Csr::Mie, BOOT_INTERRUPT_MASK.bits());
                BootStage::Handoff
            }
            BootStage::Handoff => {
                self.machine.privileged_return();
                BootStage::KernelEntered
            }
            BootStage::KernelEntered => BootStage::KernelEntered,
            BootStage::Parked => {
                self.machine.wait_for_event();
                BootStage::Parked
            }
        };
        self.stage
    }

    /// Step until a terminal stage is first entered. On hardware `Parked`
    /// never exits; callers observing `Parked` here may keep calling
    /// [`step`](Self::step) to model further wake-ups.
    pub fn run(&mut self) -> BootStage {
        loop {
            match self.step() {
                stage @ (BootStage::KernelEntered | BootStage::Parked) => return stage,
                _ => {}
            }
        }
    }
}

/// Zero `[region.start, region.end)` eight bytes at a time, stopping
/// strictly before the end boundary. An empty region touches no memory.
pub fn clear_region<M: Machine>(machine: &mut M, region: Region) {
    let mut addr = region.start;
    while addr < region.end {
        machine.store_zero(addr);
        addr += 8;
    }
}
