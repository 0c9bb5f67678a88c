//! Built-in widgets

pub mod button;
pub mod card;
pub mod progress;
pub mod text_input;

pub use button::{button, Button};
pub use card::{card, Card};
pub use progress::{progress, Progress};
pub use text_input::{
    text_input, DebouncedHandler, InputDriver, InputState, TextInput, DEFAULT_DEBOUNCE_INTERVAL,
};
