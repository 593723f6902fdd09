use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into a `Rect`.
///
/// Screens and widgets take their data as struct fields. `&mut self` lets
/// the input box remember state between frames.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes keyboard input.
pub trait EventHandler {
    /// What the component reports upward, e.g. a submitted line.
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
