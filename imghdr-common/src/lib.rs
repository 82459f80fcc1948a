pub mod error;
pub mod utils;

#[doc(hidden)]
pub use paste;
