pub mod month_view;

use crate::models::event::HexColor;
use egui::Color32;

/// Convert a stored event color for painting
pub fn to_color32(color: &HexColor) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32() {
        let color = HexColor::parse("#4a90e2").unwrap();
        assert_eq!(to_color32(&color), Color32::from_rgb(0x4a, 0x90, 0xe2));
    }
}
