use cubealg::core::models::color::Sticker;
use cubealg::core::models::record::{
    CubeState, CubeStateError, ParseSideError, SIDE_ROW_LEN, Side, TOP_LAYER_LEN,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid sticker pattern '{input}': {source}")]
    Stickers {
        input: String,
        #[source]
        source: CubeStateError,
    },

    #[error("Invalid side click '{0}'. Expected 'side:index' (e.g. 'back:1').")]
    InvalidSideClickFormat(String),

    #[error(transparent)]
    Side(#[from] ParseSideError),

    #[error("Sticker index '{0}' must be 0, 1 or 2.")]
    SideIndex(String),
}

pub fn parse_top_layer(input: &str) -> Result<[Sticker; TOP_LAYER_LEN], ParseError> {
    CubeState::parse_top(input).map_err(|source| ParseError::Stickers {
        input: input.to_string(),
        source,
    })
}

pub fn parse_side_row(input: &str) -> Result<[Sticker; SIDE_ROW_LEN], ParseError> {
    CubeState::parse_side(input).map_err(|source| ParseError::Stickers {
        input: input.to_string(),
        source,
    })
}

pub fn parse_side_click(input: &str) -> Result<(Side, usize), ParseError> {
    let (side, index) = input
        .split_once(':')
        .ok_or_else(|| ParseError::InvalidSideClickFormat(input.to_string()))?;
    let side: Side = side.trim().parse()?;
    let index = index
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&i| i < SIDE_ROW_LEN)
        .ok_or_else(|| ParseError::SideIndex(index.to_string()))?;
    Ok((side, index))
}
