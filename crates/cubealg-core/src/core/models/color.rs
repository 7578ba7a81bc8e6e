use std::fmt;
use thiserror::Error;

/// The fixed palette order used when a sticker is clicked.
pub const PALETTE: [Sticker; 7] = [
    Sticker::Yellow,
    Sticker::Orange,
    Sticker::Blue,
    Sticker::Red,
    Sticker::Green,
    Sticker::White,
    Sticker::Neutral,
];

/// A single facelet color on the cube.
///
/// `Neutral` (`X`) marks a sticker whose color is irrelevant to the case being
/// recorded. `Unknown` keeps a stored symbol outside the palette so that it is
/// written back unchanged; it renders like `Neutral` and cycles to `Yellow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sticker {
    Yellow,
    Orange,
    Blue,
    Red,
    Green,
    White,
    #[default]
    Neutral,
    Unknown(char),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid sticker symbol '{0}'")]
pub struct ParseStickerError(pub char);

impl Sticker {
    /// Advances to the next palette entry, wrapping from `Neutral` back to `Yellow`.
    pub fn next(self) -> Self {
        match PALETTE.iter().position(|&s| s == self) {
            Some(index) => PALETTE[(index + 1) % PALETTE.len()],
            None => PALETTE[0],
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Sticker::Unknown(_))
    }

    pub fn symbol(self) -> char {
        match self {
            Sticker::Yellow => 'Y',
            Sticker::Orange => 'O',
            Sticker::Blue => 'B',
            Sticker::Red => 'R',
            Sticker::Green => 'G',
            Sticker::White => 'W',
            Sticker::Neutral => 'X',
            Sticker::Unknown(raw) => raw,
        }
    }

    /// Strict parse; only the seven palette symbols are accepted.
    pub fn from_symbol(symbol: char) -> Result<Self, ParseStickerError> {
        match symbol {
            'Y' => Ok(Sticker::Yellow),
            'O' => Ok(Sticker::Orange),
            'B' => Ok(Sticker::Blue),
            'R' => Ok(Sticker::Red),
            'G' => Ok(Sticker::Green),
            'W' => Ok(Sticker::White),
            'X' => Ok(Sticker::Neutral),
            other => Err(ParseStickerError(other)),
        }
    }

    /// Lenient parse used for stored data: unknown symbols are kept as `Unknown`.
    pub fn from_symbol_lossy(symbol: char) -> Self {
        Self::from_symbol(symbol).unwrap_or(Sticker::Unknown(symbol))
    }

    /// Display color as a `#RRGGBB` hex string.
    pub fn hex(self) -> &'static str {
        match self {
            Sticker::Yellow => "#FBBF24",
            Sticker::Orange => "#F97316",
            Sticker::Blue => "#3B82F6",
            Sticker::Red => "#EF4444",
            Sticker::Green => "#10B981",
            Sticker::White => "#FFFFFF",
            Sticker::Neutral | Sticker::Unknown(_) => "#D1D5DB",
        }
    }

    /// Display color as an `(r, g, b)` triple; matches [`Sticker::hex`].
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Sticker::Yellow => (0xFB, 0xBF, 0x24),
            Sticker::Orange => (0xF9, 0x73, 0x16),
            Sticker::Blue => (0x3B, 0x82, 0xF6),
            Sticker::Red => (0xEF, 0x44, 0x44),
            Sticker::Green => (0x10, 0xB9, 0x81),
            Sticker::White => (0xFF, 0xFF, 0xFF),
            Sticker::Neutral | Sticker::Unknown(_) => (0xD1, 0xD5, 0xDB),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sticker::Yellow => "Yellow",
            Sticker::Orange => "Orange",
            Sticker::Blue => "Blue",
            Sticker::Red => "Red",
            Sticker::Green => "Green",
            Sticker::White => "White",
            Sticker::Neutral => "Neutral",
            Sticker::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Cycles a raw color symbol to the next palette symbol.
///
/// Symbols outside the palette map to `'Y'`, the first palette entry.
pub fn next_symbol(symbol: char) -> char {
    match Sticker::from_symbol(symbol) {
        Ok(sticker) => sticker.next().symbol(),
        Err(_) => PALETTE[0].symbol(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_follows_fixed_palette_order() {
        assert_eq!(Sticker::Yellow.next(), Sticker::Orange);
        assert_eq!(Sticker::Orange.next(), Sticker::Blue);
        assert_eq!(Sticker::Blue.next(), Sticker::Red);
        assert_eq!(Sticker::Red.next(), Sticker::Green);
        assert_eq!(Sticker::Green.next(), Sticker::White);
        assert_eq!(Sticker::White.next(), Sticker::Neutral);
        assert_eq!(Sticker::Neutral.next(), Sticker::Yellow);
    }

    #[test]
    fn seven_steps_return_to_the_start_for_every_entry() {
        for start in PALETTE {
            let mut current = start;
            for _ in 0..PALETTE.len() {
                current = current.next();
            }
            assert_eq!(current, start);
        }
    }

    #[test]
    fn next_symbol_of_unknown_symbol_is_first_palette_entry() {
        assert_eq!(next_symbol('Q'), 'Y');
        assert_eq!(next_symbol('y'), 'Y');
        assert_eq!(next_symbol(' '), 'Y');
    }

    #[test]
    fn next_symbol_wraps_neutral_to_yellow() {
        assert_eq!(next_symbol('X'), 'Y');
        assert_eq!(next_symbol('W'), 'X');
    }

    #[test]
    fn lossy_parse_keeps_unknown_symbols() {
        assert_eq!(Sticker::from_symbol_lossy('Z'), Sticker::Unknown('Z'));
        assert_eq!(Sticker::from_symbol_lossy('Z').symbol(), 'Z');
        assert_eq!(Sticker::from_symbol_lossy('G'), Sticker::Green);
        assert_eq!(Sticker::from_symbol('Z'), Err(ParseStickerError('Z')));
    }

    #[test]
    fn unknown_sticker_renders_neutral_and_cycles_to_yellow() {
        let odd = Sticker::Unknown('q');
        assert!(!odd.is_known());
        assert_eq!(odd.next(), Sticker::Yellow);
        assert_eq!(odd.rgb(), Sticker::Neutral.rgb());
        assert_eq!(odd.hex(), Sticker::Neutral.hex());
        assert_eq!(odd.to_string(), "q");
    }

    #[test]
    fn rgb_agrees_with_hex() {
        for sticker in PALETTE {
            let (r, g, b) = sticker.rgb();
            assert_eq!(format!("#{:02X}{:02X}{:02X}", r, g, b), sticker.hex());
        }
    }

    #[test]
    fn symbol_round_trips_through_strict_parse() {
        for sticker in PALETTE {
            assert_eq!(Sticker::from_symbol(sticker.symbol()), Ok(sticker));
        }
    }
}
