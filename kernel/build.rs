/// EmberOS kernel build script.
///
/// Wires the fixed-address linker script into image builds. The script is
/// a literal mirror of the memory map in boot/src/layout.rs.
fn main() {
    // Skip for host-target builds (unit tests) — they don't produce an
    // image and must not inherit a bare-metal linker script.
    let target = std::env::var("TARGET").unwrap_or_default();
    if !target.contains("riscv64") {
        return;
    }

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    println!("cargo:rustc-link-arg=-T{}/virt.lds", manifest_dir);
    println!("cargo:rerun-if-changed=virt.lds");
}
