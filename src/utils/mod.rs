// Shared utilities

pub mod constants;
pub mod dates;
pub mod navigation;

pub use constants::*;
pub use dates::*;
pub use navigation::redirect_to_entry;
