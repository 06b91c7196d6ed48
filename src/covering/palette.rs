//! Display colors for circles.

/// General-purpose circle colors.
pub const DEFAULT_PALETTE: [&str; 15] = [
    "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF", "#FFA500", "#800080",
    "#FFC0CB", "#A52A2A", "#808080", "#000080", "#008000", "#800000", "#808000",
];

/// Colors assigned per owner when covering several owners at once.
pub const OWNER_PALETTE: [&str; 8] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FECA57", "#FF9FF3", "#54A0FF", "#5F27CD",
];

/// Color for the `index`-th owner, cycling through [`OWNER_PALETTE`].
pub fn palette_color(index: usize) -> &'static str {
    OWNER_PALETTE[index % OWNER_PALETTE.len()]
}
