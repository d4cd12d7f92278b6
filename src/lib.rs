pub mod core;
pub mod engine;
pub mod input;
pub mod terminal;

pub use self::core::config;
pub use self::core::subtype;
pub use self::core::value;

pub use engine::filter;
pub use engine::normalize;
pub use engine::percent;
pub use engine::validate;

pub use input::number_input;

pub use terminal::input_event;
