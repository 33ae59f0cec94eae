//! Selection state and its transitions
//!
//! The selection is a plain value; [`apply_transition`] is the only way it
//! changes. Every color and both flag values are always accepted.

use std::fmt;

use crate::product::color_name;
use crate::render::Color;

/// The user's current configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionState {
    /// Base color of the structural parts
    pub color: Color,
    /// Logical logo visibility
    pub logo_visible: bool,
    /// Logical cushion visibility
    pub cushion_visible: bool,
}

impl SelectionState {
    /// Startup selection: `color` with both accessories shown
    pub fn new(color: Color) -> Self {
        Self { color, logo_visible: true, cushion_visible: true }
    }

    /// Single-line status, e.g. `Color: Red | Logo: On | Cushion: Off`
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_off = |visible: bool| if visible { "On" } else { "Off" };
        write!(
            f,
            "Color: {} | Logo: {} | Cushion: {}",
            color_name(self.color),
            on_off(self.logo_visible),
            on_off(self.cushion_visible)
        )
    }
}

/// A user-initiated change to the selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionAction {
    /// Replace the base color
    SelectColor(Color),
    /// Show or hide the logo
    ToggleLogo(bool),
    /// Show or hide the cushion
    ToggleCushion(bool),
}

/// Compute the selection that results from `action`
pub fn apply_transition(state: SelectionState, action: SelectionAction) -> SelectionState {
    match action {
        SelectionAction::SelectColor(color) => SelectionState { color, ..state },
        SelectionAction::ToggleLogo(logo_visible) => SelectionState { logo_visible, ..state },
        SelectionAction::ToggleCushion(cushion_visible) => SelectionState { cushion_visible, ..state },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::PaletteColor;

    fn initial() -> SelectionState {
        SelectionState::new(PaletteColor::DarkBlue.color())
    }

    #[test]
    fn test_initial_summary() {
        assert_eq!(initial().summary(), "Color: Dark Blue | Logo: On | Cushion: On");
    }

    #[test]
    fn test_color_change_keeps_flags() {
        let state = apply_transition(initial(), SelectionAction::ToggleLogo(false));
        let state = apply_transition(state, SelectionAction::SelectColor(PaletteColor::Teal.color()));
        assert!(!state.logo_visible);
        assert!(state.cushion_visible);
        assert_eq!(state.summary(), "Color: Teal | Logo: Off | Cushion: On");
    }

    #[test]
    fn test_red_then_cushion_off() {
        let state = apply_transition(initial(), SelectionAction::SelectColor("#e74c3c".parse().unwrap()));
        let state = apply_transition(state, SelectionAction::ToggleCushion(false));
        assert_eq!(state.summary(), "Color: Red | Logo: On | Cushion: Off");
    }

    #[test]
    fn test_every_configuration_is_reachable() {
        let mut seen = Vec::new();
        for color in PaletteColor::ALL {
            for logo in [true, false] {
                for cushion in [true, false] {
                    let state = [
                        SelectionAction::SelectColor(color.color()),
                        SelectionAction::ToggleLogo(logo),
                        SelectionAction::ToggleCushion(cushion),
                    ]
                    .into_iter()
                    .fold(initial(), apply_transition);
                    if !seen.contains(&state) {
                        seen.push(state);
                    }
                }
            }
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn test_unknown_color_is_accepted_with_fallback_name() {
        let state = apply_transition(initial(), SelectionAction::SelectColor(Color::from_hex(0xab_cd_ef)));
        assert_eq!(state.color.to_hex(), 0xab_cd_ef);
        assert!(state.summary().starts_with("Color: Dark Blue |"));
    }
}
