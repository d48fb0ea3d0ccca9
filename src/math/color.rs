/// RGBA stroke color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// X11 "gray", not the CSS one
    pub const GRAY: Color = Color::rgb(190, 190, 190);

    /// Opaque color from components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_are_opaque() {
        for color in [Color::BLACK, Color::WHITE, Color::RED, Color::GRAY] {
            assert_eq!(color.a, 255);
        }
    }

    #[test]
    fn test_to_rgba() {
        assert_eq!(Color::RED.to_rgba(), [255, 0, 0, 255]);
        assert_eq!(Color::GRAY.to_rgba(), [190, 190, 190, 255]);
    }
}
