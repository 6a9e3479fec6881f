use crate::core::data::point::PixelPoint;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Other,
}

/// Discrete input delivered by the windowing collaborator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Close,
    KeyReleased(Key),
    /// Positive deltas scroll up.
    WheelScrolled { delta: f64 },
    /// The primary pointer button went down at `position` (viewport pixels).
    PointerPressed { position: PixelPoint },
}
