pub mod parser;
pub mod types;

// Re-export commonly used types
pub use parser::{parse, parse_float_prefix, parse_int_prefix};
pub use types::{Interface, InterfaceStatus, MODE_FAILOVER, Status};
