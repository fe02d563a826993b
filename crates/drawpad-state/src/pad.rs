//! Drawing pad state: tool, colour, brush size and mode flags.

use crate::store::{FlagGuard, Store};
use drawpad_common::{Color, Tool};
use drawpad_config::PadConfig;
use tracing::debug;

/// Current state of the drawing pad.
#[derive(Debug)]
pub struct PadState {
    /// Selected tool.
    pub tool: Store<Tool>,
    /// Brush colour.
    pub color: Store<Color>,
    /// Colour in use before the latest change.
    pub last_color: Store<Color>,
    /// Brush size.
    pub size: Store<u32>,
    /// Stylus-only drawing.
    pub is_pen_mode: Store<bool>,
    /// Colour picker visibility.
    pub is_color_picker_open: Store<bool>,
    /// Brush preview visibility.
    pub show_brush_preview: Store<bool>,
    /// Idle screensaver.
    pub is_screensaver_on: Store<bool>,
    /// A save to the gallery is in flight.
    pub is_saving: Store<bool>,
    min_size: u32,
    max_size: u32,
}

impl PadState {
    /// Builds the starting pad state.
    pub fn from_config(config: &PadConfig) -> Self {
        Self {
            tool: Store::new(config.default_tool),
            color: Store::new(config.default_color.clone()),
            last_color: Store::new(config.default_color.clone()),
            size: Store::new(config.default_size.max(config.min_size).min(config.max_size)),
            is_pen_mode: Store::new(config.pen_mode),
            is_color_picker_open: Store::new(false),
            show_brush_preview: Store::new(false),
            is_screensaver_on: Store::new(false),
            is_saving: Store::new(false),
            min_size: config.min_size,
            max_size: config.max_size,
        }
    }

    /// Switches tool.
    pub fn select_tool(&self, tool: Tool) {
        self.tool.set(tool);
    }

    /// Changes the brush colour, remembering the previous one.
    pub fn set_color(&self, color: Color) {
        let previous = self.color.set(color);
        if previous != self.color.get() {
            self.last_color.set(previous);
        }
    }

    /// Swaps the current and previous colours.
    pub fn restore_last_color(&self) {
        let last = self.last_color.get();
        let current = self.color.set(last);
        self.last_color.set(current);
    }

    /// Sets the brush size, clamped to the configured bounds. Returns the
    /// size actually applied.
    pub fn set_size(&self, size: u32) -> u32 {
        let applied = size.max(self.min_size).min(self.max_size);
        if applied != size {
            debug!(requested = size, applied, "brush size clamped");
        }
        self.size.set(applied);
        applied
    }

    /// Flips pen mode, returning the new value.
    pub fn toggle_pen_mode(&self) -> bool {
        let mut now = false;
        self.is_pen_mode.update(|on| {
            *on = !*on;
            now = *on;
        });
        now
    }

    /// Marks a save as in flight until the guard drops. Returns `None` if a
    /// save is already running.
    pub fn begin_save(&self) -> Option<FlagGuard<'_>> {
        self.is_saving.try_raise()
    }
}

impl Default for PadState {
    fn default() -> Self {
        Self::from_config(&PadConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(hex: &str) -> Color {
        hex.parse().unwrap()
    }

    #[test]
    fn test_defaults_follow_config() {
        let pad = PadState::default();
        assert_eq!(pad.tool.get(), Tool::Pen);
        assert_eq!(pad.color.get(), Color::black());
        assert_eq!(pad.size.get(), 8);
        assert!(pad.is_pen_mode.get());
        assert!(!pad.is_saving.get());
    }

    #[test]
    fn test_set_color_remembers_previous() {
        let pad = PadState::default();
        pad.set_color(color("#ff0000"));
        assert_eq!(pad.last_color.get(), Color::black());

        pad.set_color(color("#ff0000"));
        assert_eq!(pad.last_color.get(), Color::black());

        pad.restore_last_color();
        assert_eq!(pad.color.get(), Color::black());
        assert_eq!(pad.last_color.get(), color("#ff0000"));
    }

    #[test]
    fn test_set_size_clamps() {
        let pad = PadState::default();
        assert_eq!(pad.set_size(0), 1);
        assert_eq!(pad.set_size(500), 64);
        assert_eq!(pad.set_size(20), 20);
        assert_eq!(pad.size.get(), 20);
    }

    #[test]
    fn test_toggle_pen_mode() {
        let pad = PadState::default();
        assert!(!pad.toggle_pen_mode());
        assert!(pad.toggle_pen_mode());
    }

    #[test]
    fn test_only_one_save_at_a_time() {
        let pad = PadState::default();
        let first = pad.begin_save().expect("first save starts");
        assert!(pad.begin_save().is_none());
        drop(first);
        assert!(pad.begin_save().is_some());
    }
}
