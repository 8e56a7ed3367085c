//! Display boundary: the surface the session renders into.
//!
//! The session itself never writes anywhere; a [`Controller`] applies
//! input events and forwards each refresh instruction to a
//! [`DisplaySink`]. [`TextPanel`] is the in-memory sink used by the
//! frontends and by tests, keeping the full overwrite history observable
//! without a real terminal.

use crate::core::{DisplayValue, InputEvent, Session};

/// A text surface that is overwritten, never appended, on every refresh.
pub trait DisplaySink {
    /// Replaces the surface contents with `text`.
    fn show(&mut self, text: &str);
}

/// In-memory display surface.
///
/// Records the current contents plus every overwrite performed, so tests
/// can assert not just the final display but the sequence of refreshes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPanel {
    content: String,
    writes: Vec<String>,
}

impl TextPanel {
    /// Creates an empty panel. The controller performs the initial
    /// refresh, so a freshly bound panel shows `"0"`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current surface contents.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Every overwrite performed, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// Number of overwrites performed.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl DisplaySink for TextPanel {
    fn show(&mut self, text: &str) {
        self.content = text.to_string();
        self.writes.push(self.content.clone());
    }
}

/// Binds a [`Session`] to a display sink.
///
/// The controller is the only place a transition's "what to display"
/// projection turns into an actual write.
#[derive(Debug)]
pub struct Controller<D: DisplaySink> {
    session: Session,
    sink: D,
}

impl<D: DisplaySink> Controller<D> {
    /// Creates a controller and performs the initial refresh, mirroring
    /// how the display is initialized before any input arrives.
    pub fn new(sink: D) -> Self {
        let mut controller = Self {
            session: Session::new(),
            sink,
        };
        let initial = controller.session.display_value();
        controller.sink.show(initial.as_str());
        controller
    }

    /// Applies one input event, refreshing the display when the
    /// transition asks for it. Returns the refresh instruction.
    pub fn apply(&mut self, event: InputEvent) -> Option<DisplayValue> {
        tracing::debug!(?event, phase = ?self.session.phase(), "input event");
        let refresh = self.session.press(event);
        if let Some(value) = &refresh {
            self.sink.show(value.as_str());
        }
        refresh
    }

    /// The underlying session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The bound display sink.
    #[must_use]
    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Consumes the controller, returning the sink.
    pub fn into_sink(self) -> D {
        self.sink
    }
}

impl Default for Controller<TextPanel> {
    fn default() -> Self {
        Self::new(TextPanel::new())
    }
}
