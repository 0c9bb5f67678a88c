//! Strata Core Primitives
//!
//! This crate provides the foundational primitives for the Strata widget
//! library:
//!
//! - **Colors**: RGBA colors with the small amount of math the style
//!   resolution layer needs (luminance, darkening, dimming)
//! - **Render elements**: the retained element tree widgets hand to a host
//!   runtime, plus the property-merge contract used by slot overrides
//! - **Events**: pointer/text events delivered by the host event loop
//! - **Timers**: a cooperative timer queue and trailing-edge debouncer
//!
//! # Example
//!
//! ```rust
//! use strata_core::timer::TimerQueue;
//! use std::sync::{Arc, Mutex};
//!
//! let queue = TimerQueue::new();
//! let fired = Arc::new(Mutex::new(false));
//! let flag = fired.clone();
//!
//! queue.handle().schedule(5, move || {
//!     *flag.lock().unwrap() = true;
//! });
//!
//! queue.advance(4);
//! assert!(!*fired.lock().unwrap());
//! queue.advance(1);
//! assert!(*fired.lock().unwrap());
//! ```

pub mod color;
pub mod element;
pub mod events;
pub mod timer;

pub use color::{Color, ColorParseError};
pub use element::{
    div, input, text, Border, ChangeHandler, Cursor, Element, ElementKind, InputPrimitive,
    PointerHandler, PropPatch, RenderProps, Shadow,
};
pub use events::{Event, EventData, EventType};
pub use timer::{Debouncer, TimerCallback, TimerHandle, TimerKey, TimerQueue};
