pub mod stop;

pub use stop::{ColorStop, parse_hex, to_hex};
