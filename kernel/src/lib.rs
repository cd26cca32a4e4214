//! EmberOS kernel library — console plumbing shared by the kernel binary.
#![no_std]

pub mod console;
