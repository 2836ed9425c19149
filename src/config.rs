use serde::Deserialize;

/// Rule switches chosen when a game is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// When set, a side that can capture anywhere may only capture.
    /// Off by default: plain steps stay available next to captures.
    pub forced_capture: bool,
}

impl RuleConfig {
    pub fn with_forced_capture(mut self, forced_capture: bool) -> Self {
        self.forced_capture = forced_capture;
        self
    }
}
