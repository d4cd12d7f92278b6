pub mod config;
pub mod subtype;
pub mod value;

pub use config::{Bounds, InputConfig, MAX_SAFE_INTEGER};
pub use subtype::Subtype;
pub use value::Value;
