// Metric prefixes: value types, the registry, and the conversion primitive

pub mod global;
pub mod table;
pub mod token;
pub mod types;

pub use table::{convert, PrefixTable};
pub use token::{looks_like_scale, PrefixToken};
pub use types::{Prefix, StandardPrefix};
