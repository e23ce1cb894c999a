//! Capabilities borrowed from the host mini-app runtime.

/// Colour overrides pushed into the host theme on startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub bg_color: &'static str,
    pub text_color: &'static str,
    pub button_color: &'static str,
    pub button_text_color: &'static str,
}

impl Theme {
    /// The widget always renders in light mode regardless of the chat theme.
    pub fn light() -> Self {
        Self {
            bg_color: "#FFFFFF",
            text_color: "#374151",
            button_color: "#E5E7EB",
            button_text_color: "#374151",
        }
    }
}

/// The host mini-app as seen from the widget.
///
/// `send_data` is one-way: the host forwards the string to its bot and the
/// widget never sees a reply.
pub trait HostBridge {
    fn show_alert(&mut self, message: &str);
    fn haptic_selection_changed(&mut self);
    fn expand(&mut self);
    fn apply_theme(&mut self, theme: &Theme);
    fn send_data(&mut self, data: &str);
}

/// Host startup: take the full viewport and force the light palette.
pub fn init_host<B: HostBridge + ?Sized>(bridge: &mut B) {
    bridge.expand();
    bridge.apply_theme(&Theme::light());
}

/// Bridge that records every call; used by tests across the crate.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingBridge {
    pub alerts: Vec<String>,
    pub haptics: usize,
    pub expanded: bool,
    pub theme: Option<Theme>,
    pub sent: Vec<String>,
}

#[cfg(test)]
impl HostBridge for RecordingBridge {
    fn show_alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn haptic_selection_changed(&mut self) {
        self.haptics += 1;
    }

    fn expand(&mut self) {
        self.expanded = true;
    }

    fn apply_theme(&mut self, theme: &Theme) {
        self.theme = Some(theme.clone());
    }

    fn send_data(&mut self, data: &str) {
        self.sent.push(data.to_string());
    }
}
