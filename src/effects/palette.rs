//! Theme color palettes.

use crate::settings::Theme;

/// Hex colors used by decorative rendering for one theme.
pub type Palette = &'static [&'static str];

const NEON: Palette = &["#ff00ff", "#00ffff", "#ffffff"];
const RETRO: Palette = &["#ff69b4", "#00ff00", "#ffff00"];
const COSMIC: Palette = &["#800080", "#4b0082", "#ffffff"];

/// Returns the palette for `theme`.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Neon => NEON,
        Theme::Retro => RETRO,
        Theme::Cosmic => COSMIC,
    }
}
