//! Events delivered by the host event loop
//!
//! The host runtime owns the real platform event plumbing; widgets only see
//! this reduced surface through the handlers they install on elements.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_ENTER: EventType = 3;
    pub const POINTER_LEAVE: EventType = 4;
    pub const CLICK: EventType = 5;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    /// Text input event (character input, IME composition)
    pub const TEXT_INPUT: EventType = 20;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    /// Host timestamp in the same tick units the timer queue runs on
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug, Default)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
    },
    /// Text input from keyboard or IME
    TextInput {
        text: String,
    },
    #[default]
    None,
}

impl Event {
    pub fn pointer(event_type: EventType, x: f32, y: f32) -> Self {
        Self {
            event_type,
            data: EventData::Pointer { x, y, button: 0 },
            timestamp: 0,
        }
    }

    pub fn text_input(text: impl Into<String>) -> Self {
        Self {
            event_type: event_types::TEXT_INPUT,
            data: EventData::TextInput { text: text.into() },
            timestamp: 0,
        }
    }

    /// The text payload, if this is a text-input event
    pub fn text(&self) -> Option<&str> {
        match self.data {
            EventData::TextInput { ref text } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_payload() {
        let event = Event::text_input("abc");
        assert_eq!(event.event_type, event_types::TEXT_INPUT);
        assert_eq!(event.text(), Some("abc"));

        let pointer = Event::pointer(event_types::CLICK, 1.0, 2.0);
        assert_eq!(pointer.text(), None);
    }
}
