pub mod format;
pub mod kinds;
pub mod types;


pub use format::format_value;
pub use kinds::*;
pub use types::Quantity;
