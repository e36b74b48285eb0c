#![no_std]

#[cfg(feature = "std")]
pub mod sched;
pub mod sender;

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use self::sender::SenderExt;
// Re-exported for the `exec!` macro and for one-stop imports.
#[cfg(feature = "alloc")]
pub use sendex_core::{and_then, just};
