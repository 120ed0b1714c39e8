//! Page navigation for the simulator window.
//!
//! Press `Y` to toggle between pages.
//!
//! # Pages
//!
//! - [`Page::Visualizer`]: title, baseline, crosshairs, trail and ruler
//! - [`Page::Debug`]: frame timing, run counters and the debug log terminal

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// The swipe stage.
    #[default]
    Visualizer,

    /// Profiling page.
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Visualizer => Self::Debug,
            Self::Debug => Self::Visualizer,
        }
    }

    /// Short name for log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Visualizer => "Visualizer",
            Self::Debug => "Debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Visualizer);
    }

    #[test]
    fn test_page_toggle() {
        assert_eq!(Page::Visualizer.toggle(), Page::Debug);
        assert_eq!(Page::Debug.toggle(), Page::Visualizer);
        assert_eq!(Page::Visualizer.toggle().toggle(), Page::Visualizer);
    }

    #[test]
    fn test_page_name() {
        assert_eq!(Page::Visualizer.name(), "Visualizer");
        assert_eq!(Page::Debug.name(), "Debug");
    }
}
