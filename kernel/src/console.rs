//! Kernel console — the sink behind `print!`/`println!`.
//!
//! There is no UART driver yet; everything written here is dropped. The
//! macro shape and locking match the serial console that will eventually
//! front this, so call sites stay unchanged when the device lands.
use core::fmt;

use spin::Mutex;

pub static CONSOLE: Mutex<Console> = Mutex::new(Console::new());

pub struct Console {
    /// Bytes accepted and dropped so far.
    dropped: u64,
}

impl Console {
    pub const fn new() -> Self {
        Self { dropped: 0 }
    }
}

impl fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.dropped += s.len() as u64;
        Ok(())
    }
}

/// Print to the kernel console.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        {
            use core::fmt::Write;
            let mut console = $crate::console::CONSOLE.lock();
            let _ = write!(console, $($arg)*);
        }
    };
}

/// Print to the kernel console with a newline.
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => {
        $crate::print!("{}\n", format_args!($($arg)*))
    };
}
