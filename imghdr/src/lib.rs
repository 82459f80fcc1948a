//! Identify the format of an image from the first bytes of its data
//!
//! ```
//! let data = [
//!     0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, //
//!     0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
//! ];
//! assert_eq!(imghdr::detect(&data).unwrap(), imghdr::Format::Png);
//! ```

mod detect;
mod error;
pub mod file;
mod format;
pub mod registry;

pub use detect::*;
pub use error::*;
pub use format::*;
