//! Physical memory layout — the resolved region table everything else
//! consumes.
//!
//! The address space is subdivided into fixed, ordered, non-overlapping
//! slots: text, rodata, data (page-aligned start), bss, stack, heap
//! reservation. Every boundary is a compile-time constant so that boot code
//! reads the table by reference and never recomputes it, and so the linker
//! script (`kernel/virt.lds`) can mirror the same addresses literally.
//! Sizing mistakes are compile or link errors, never runtime faults — by
//! the time this code runs there is nothing underneath to report one to.

pub const PAGE_SIZE: u64 = 4096;

/// Fixed stack region size. The stack pointer starts at the region's top
/// and grows downward.
pub const STACK_SIZE: u64 = 512 * 1024;

/// DRAM base on the QEMU virt machine — also where the image is loaded.
pub const LOAD_BASE: u64 = 0x8000_0000;

/// Total addressable DRAM.
pub const MEMORY_SIZE: u64 = 128 * 1024 * 1024;

/// gp is placed this far into the data region so its signed 12-bit offset
/// window covers bytes on both sides.
const GP_OFFSET: u64 = 0x800;

/// A named contiguous address range, half-open: `[start, end)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Region {
    pub start: u64,
    pub end: u64,
}

impl Region {
    pub const fn size(&self) -> u64 {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn contains(&self, addr: u64) -> bool {
        self.start <= addr && addr < self.end
    }
}

/// Fixed capacity slots for the linked sections. Actual section contents
/// must fit their slot; the linker script ASSERTs refuse the image
/// otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SectionBudget {
    pub text: u64,
    pub rodata: u64,
    pub data: u64,
    pub bss: u64,
}

/// The resolved layout: one region per section plus stack and heap
/// reservation, in placement order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MemoryMap {
    /// Bounds of addressable physical memory.
    pub memory: Region,
    pub text: Region,
    pub rodata: Region,
    /// Initialized data. Start is rounded up to a page boundary, inserting
    /// padding after rodata if needed.
    pub data: Region,
    /// Uninitialized data, cleared by the boot sequence before any code
    /// depends on it.
    pub bss: Region,
    pub stack: Region,
    /// Capacity reservation for a future allocator. Only the bounds are
    /// computed here; no allocator state exists at this layer.
    pub heap: Region,
}

const fn align_up(value: u64, align: u64) -> u64 {
    (value + align - 1) & !(align - 1)
}

impl MemoryMap {
    /// Resolve the region table for memory `[base, base + size)`.
    ///
    /// Text, rodata and data are placed consecutively from the base (data
    /// start page-aligned), bss immediately follows data, the stack
    /// occupies `STACK_SIZE` bytes above bss, and the heap reservation
    /// runs from the stack top to the end of memory. Pure arithmetic over
    /// its inputs: identical inputs resolve to identical tables.
    pub const fn resolve(base: u64, size: u64, sections: SectionBudget) -> Self {
        let memory = Region { start: base, end: base + size };

        let text = Region { start: base, end: base + sections.text };
        let rodata = Region { start: text.end, end: text.end + sections.rodata };

        let data_start = align_up(rodata.end, PAGE_SIZE);
        let data = Region { start: data_start, end: data_start + sections.data };
        let bss = Region { start: data.end, end: data.end + sections.bss };

        let stack = Region { start: bss.end, end: bss.end + STACK_SIZE };
        let heap = Region { start: stack.end, end: memory.end };

        Self { memory, text, rodata, data, bss, stack, heap }
    }

    /// Fixed address loaded into the global addressing register.
    pub const fn global_pointer(&self) -> u64 {
        self.data.start + GP_OFFSET
    }

    /// Highest stack address — where the descending stack pointer starts.
    pub const fn stack_top(&self) -> u64 {
        self.stack.end
    }

    pub const fn heap_size(&self) -> u64 {
        self.memory.end - self.heap.start
    }
}

/// Canonical section budget for the kernel image. Mirrored literally in
/// `kernel/virt.lds`; change both together.
pub const SECTIONS: SectionBudget = SectionBudget {
    text: 2 * 1024 * 1024,
    rodata: 512 * 1024,
    data: 512 * 1024,
    bss: 1024 * 1024,
};

/// The one memory map, resolved at compile time.
pub const MEMORY_MAP: MemoryMap = MemoryMap::resolve(LOAD_BASE, MEMORY_SIZE, SECTIONS);

// Layout invariants. A configuration that breaks these fails the build —
// there is no runtime check and no runtime that could report one.
static_assertions::const_assert!(MEMORY_MAP.text.start <= MEMORY_MAP.rodata.start);
static_assertions::const_assert!(MEMORY_MAP.rodata.start <= MEMORY_MAP.data.start);
static_assertions::const_assert!(MEMORY_MAP.data.start <= MEMORY_MAP.bss.start);
static_assertions::const_assert!(MEMORY_MAP.bss.start <= MEMORY_MAP.stack.start);
static_assertions::const_assert!(MEMORY_MAP.stack.start <= MEMORY_MAP.heap.start);
static_assertions::const_assert!(MEMORY_MAP.data.start % PAGE_SIZE == 0);
static_assertions::const_assert!(MEMORY_MAP.stack.end - MEMORY_MAP.stack.start == STACK_SIZE);
static_assertions::const_assert!(MEMORY_MAP.heap.start == MEMORY_MAP.stack.end);
static_assertions::const_assert!(
    MEMORY_MAP.heap.start + MEMORY_MAP.heap_size() == MEMORY_MAP.memory.end
);
// Memory must be large enough to leave a non-empty heap reservation.
static_assertions::const_assert!(MEMORY_MAP.heap.start < MEMORY_MAP.memory.end);
