use super::color::{ParseStickerError, Sticker};
use super::ids::AlgorithmId;
use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MAX_NAME_CHARS: usize = 255;
pub const MAX_KIND_CHARS: usize = 63;
pub const MAX_FORMULA_CHARS: usize = 1023;

pub const TOP_LAYER_LEN: usize = 9;
pub const SIDE_ROW_LEN: usize = 3;

static KIND_PRESETS: Map<&'static str, AlgorithmKind> = phf_map! {
    "OLL" => AlgorithmKind::Oll,
    "PLL" => AlgorithmKind::Pll,
    "F2L" => AlgorithmKind::F2l,
    "ZBLL" => AlgorithmKind::Zbll,
    "COLL" => AlgorithmKind::Coll,
    "Other" => AlgorithmKind::Other,
};

/// Category tag of an algorithm.
///
/// The six presets are what a user can pick. `Custom` holds any other value
/// found in stored data, kept verbatim so that it survives a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AlgorithmKind {
    #[default]
    Oll,
    Pll,
    F2l,
    Zbll,
    Coll,
    Other,
    Custom(String),
}

impl AlgorithmKind {
    pub const PRESETS: [AlgorithmKind; 6] = [
        AlgorithmKind::Oll,
        AlgorithmKind::Pll,
        AlgorithmKind::F2l,
        AlgorithmKind::Zbll,
        AlgorithmKind::Coll,
        AlgorithmKind::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            AlgorithmKind::Oll => "OLL",
            AlgorithmKind::Pll => "PLL",
            AlgorithmKind::F2l => "F2L",
            AlgorithmKind::Zbll => "ZBLL",
            AlgorithmKind::Coll => "COLL",
            AlgorithmKind::Other => "Other",
            AlgorithmKind::Custom(raw) => raw,
        }
    }

    pub fn is_preset(&self) -> bool {
        !matches!(self, AlgorithmKind::Custom(_))
    }
}

impl FromStr for AlgorithmKind {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(KIND_PRESETS
            .get(s)
            .cloned()
            .unwrap_or_else(|| AlgorithmKind::Custom(truncate_chars(s, MAX_KIND_CHARS))))
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four side faces adjacent to the top layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Right,
    Back,
    Left,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid side '{0}'. Expected one of: front, right, back, left")]
pub struct ParseSideError(pub String);

impl Side {
    pub const ALL: [Side; 4] = [Side::Front, Side::Right, Side::Back, Side::Left];

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Front => 0,
            Side::Right => 1,
            Side::Back => 2,
            Side::Left => 3,
        }
    }

    /// Member name used in the persisted document.
    pub fn field_name(self) -> &'static str {
        match self {
            Side::Front => "side_front",
            Side::Right => "side_right",
            Side::Back => "side_back",
            Side::Left => "side_left",
        }
    }
}

impl FromStr for Side {
    type Err = ParseSideError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "front" | "f" => Ok(Side::Front),
            "right" | "r" => Ok(Side::Right),
            "back" | "b" => Ok(Side::Back),
            "left" | "l" => Ok(Side::Left),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Side::Front => "front",
                Side::Right => "right",
                Side::Back => "back",
                Side::Left => "left",
            }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CubeStateError {
    #[error("Expected exactly {expected} stickers, found {found}")]
    Length { expected: usize, found: usize },
    #[error(transparent)]
    Symbol(#[from] ParseStickerError),
}

/// Sticker encoding of the last layer: the 3x3 top face in row-major order
/// plus one visible row on each side face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeState {
    pub top: [Sticker; TOP_LAYER_LEN],
    sides: [[Sticker; SIDE_ROW_LEN]; 4],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::neutral()
    }
}

impl CubeState {
    /// Every sticker neutral; the state a stored record falls back to.
    pub fn neutral() -> Self {
        Self {
            top: [Sticker::Neutral; TOP_LAYER_LEN],
            sides: [[Sticker::Neutral; SIDE_ROW_LEN]; 4],
        }
    }

    /// Yellow top face with neutral side rows; the state a new form starts in.
    pub fn yellow_top() -> Self {
        Self {
            top: [Sticker::Yellow; TOP_LAYER_LEN],
            ..Self::neutral()
        }
    }

    pub fn side(&self, side: Side) -> &[Sticker; SIDE_ROW_LEN] {
        &self.sides[side.index()]
    }

    pub fn side_mut(&mut self, side: Side) -> &mut [Sticker; SIDE_ROW_LEN] {
        &mut self.sides[side.index()]
    }

    pub fn set_side(&mut self, side: Side, row: [Sticker; SIDE_ROW_LEN]) {
        self.sides[side.index()] = row;
    }

    pub fn top_string(&self) -> String {
        encode(&self.top)
    }

    pub fn side_string(&self, side: Side) -> String {
        encode(self.side(side))
    }

    /// Parses exactly nine palette symbols.
    pub fn parse_top(s: &str) -> Result<[Sticker; TOP_LAYER_LEN], CubeStateError> {
        parse_exact(s)
    }

    /// Parses exactly three palette symbols.
    pub fn parse_side(s: &str) -> Result<[Sticker; SIDE_ROW_LEN], CubeStateError> {
        parse_exact(s)
    }

    /// Decodes the leading stickers of a stored string.
    ///
    /// Returns `None` when the string is shorter than `N`; longer strings are
    /// cut and symbols outside the palette are kept as [`Sticker::Unknown`].
    pub fn decode_lossy<const N: usize>(s: &str) -> Option<[Sticker; N]> {
        let mut out = [Sticker::Neutral; N];
        let mut chars = s.chars();
        for slot in out.iter_mut() {
            *slot = Sticker::from_symbol_lossy(chars.next()?);
        }
        Some(out)
    }
}

fn encode(stickers: &[Sticker]) -> String {
    stickers.iter().map(|s| s.symbol()).collect()
}

fn parse_exact<const N: usize>(s: &str) -> Result<[Sticker; N], CubeStateError> {
    let symbols: Vec<char> = s.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
    if symbols.len() != N {
        return Err(CubeStateError::Length {
            expected: N,
            found: symbols.len(),
        });
    }
    let mut out = [Sticker::Neutral; N];
    for (slot, symbol) in out.iter_mut().zip(symbols) {
        *slot = Sticker::from_symbol(symbol)?;
    }
    Ok(out)
}

/// Cuts `s` to at most `max` characters without splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_index, _)) => s[..byte_index].to_string(),
        None => s.to_string(),
    }
}

/// The user-editable part of a record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlgorithmFields {
    pub name: String,
    pub kind: AlgorithmKind,
    pub formula: String,
    pub cube: CubeState,
}

impl AlgorithmFields {
    /// Applies the storage length caps to name, custom type and formula.
    pub fn capped(mut self) -> Self {
        self.name = truncate_chars(&self.name, MAX_NAME_CHARS);
        if let AlgorithmKind::Custom(raw) = &self.kind {
            self.kind = AlgorithmKind::Custom(truncate_chars(raw, MAX_KIND_CHARS));
        }
        self.formula = truncate_chars(&self.formula, MAX_FORMULA_CHARS);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmRecord {
    pub id: AlgorithmId,
    pub name: String,
    pub kind: AlgorithmKind,
    pub formula: String,
    pub cube: CubeState,
}

impl AlgorithmRecord {
    pub fn new(id: AlgorithmId, fields: AlgorithmFields) -> Self {
        let mut record = Self {
            id,
            name: String::new(),
            kind: AlgorithmKind::default(),
            formula: String::new(),
            cube: CubeState::default(),
        };
        record.apply(fields);
        record
    }

    /// Overwrites every editable field; the id is left untouched.
    pub fn apply(&mut self, fields: AlgorithmFields) {
        let fields = fields.capped();
        self.name = fields.name;
        self.kind = fields.kind;
        self.formula = fields.formula;
        self.cube = fields.cube;
    }

    pub fn fields(&self) -> AlgorithmFields {
        AlgorithmFields {
            name: self.name.clone(),
            kind: self.kind.clone(),
            formula: self.formula.clone(),
            cube: self.cube,
        }
    }
}
