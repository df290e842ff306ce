use std::fmt::{self, Display};

/// One of the six sticker colors.
///
/// The discriminant is the color code. Each color belongs on the face given
/// by the standard scheme: white up, yellow down, green front, blue back, red
/// right and orange left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 1,
    Yellow = 2,
    Green = 3,
    Blue = 4,
    Red = 5,
    Orange = 6,
}

impl Color {
    /// All colors in code order, which is also the face order of a
    /// [`StickerCube`](crate::StickerCube).
    pub const ALL: [Self; 6] = {
        use Color::{Blue, Green, Orange, Red, White, Yellow};
        let v = [White, Yellow, Green, Blue, Red, Orange];

        let mut i = 0;
        while i < v.len() {
            assert!(i + 1 == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=6 => Some(Self::ALL[code as usize - 1]),
            _ => None,
        }
    }

    /// The one letter name of the color.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }

    /// Whether the color belongs on the up or down face.
    #[must_use]
    pub const fn is_top_bottom(self) -> bool {
        matches!(self, Color::White | Color::Yellow)
    }

    /// Whether the color belongs on the front or back face.
    #[must_use]
    pub const fn is_front_back(self) -> bool {
        matches!(self, Color::Green | Color::Blue)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for color in Color::ALL {
            assert_eq!(Color::from_code(color.code()), Some(color));
        }
        assert_eq!(Color::from_code(0), None);
        assert_eq!(Color::from_code(7), None);
    }

    #[test]
    fn test_axes_partition_colors() {
        let top_bottom = Color::ALL.iter().filter(|c| c.is_top_bottom()).count();
        let front_back = Color::ALL.iter().filter(|c| c.is_front_back()).count();
        assert_eq!(top_bottom, 2);
        assert_eq!(front_back, 2);
        assert!(
            Color::ALL
                .iter()
                .all(|c| !(c.is_top_bottom() && c.is_front_back()))
        );
    }
}
