pub mod number_input;
pub mod text_edit;

pub use number_input::NumberInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}
