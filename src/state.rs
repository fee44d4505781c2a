use std::collections::BTreeSet;
use std::fmt;

use enum_iterator::Sequence;
use thiserror::Error;

/// The face alphabet, in sticker-traversal order (Up, Right, Front, Down,
/// Left, Back). This is the canonical notation the solver consumes.
pub const FACE_LETTERS: &str = "URFDLB";

/// The color alphabet accepted as input and remapped onto faces.
pub const COLOR_LETTERS: &str = "WYROGB";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl Face {
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        enum_iterator::all().find(|face: &Face| face.letter() == letter)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl Color {
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Option<Color> {
        enum_iterator::all().find(|color: &Color| color.letter() == letter)
    }

    /// The sticker color on each face of a cube held white-up, green-front.
    pub fn face(self) -> Face {
        match self {
            Color::White => Face::Up,
            Color::Yellow => Face::Down,
            Color::Red => Face::Right,
            Color::Orange => Face::Left,
            Color::Green => Face::Front,
            Color::Blue => Face::Back,
        }
    }
}

lazy_static::lazy_static! {
    static ref FACE_ALPHABET: BTreeSet<char> =
        enum_iterator::all::<Face>().map(Face::letter).collect();
    static ref COLOR_ALPHABET: BTreeSet<char> =
        enum_iterator::all::<Color>().map(Color::letter).collect();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("cube state must have exactly {required} stickers, got {actual}")]
    WrongLength { required: usize, actual: usize },

    #[error(
        "unrecognized stickers `{symbols}`; expected color letters `{colors}` or face letters `{faces}`",
        colors = COLOR_LETTERS,
        faces = FACE_LETTERS
    )]
    InvalidSymbols { symbols: String },
}

const STICKERS: usize = 54;

/// A validated cube state: one sticker per position, canonically in face
/// notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState([Face; STICKERS]);

impl CubeState {
    pub const STICKERS: usize = STICKERS;

    /// Validates `raw` and normalizes it to face notation.
    ///
    /// Input may use either the color alphabet or the face alphabet, but not
    /// a mix of both. Surrounding whitespace and letter case are ignored.
    /// The whole string is classified against each alphabet as a set; a
    /// string drawn only from the shared letters {R, B} reads as face
    /// notation, which the color reading agrees with.
    pub fn parse(raw: &str) -> Result<CubeState, StateError> {
        let symbols: Vec<char> = raw
            .trim()
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if symbols.len() != Self::STICKERS {
            return Err(StateError::WrongLength {
                required: Self::STICKERS,
                actual: symbols.len(),
            });
        }

        let faces = Self::read(&symbols, Face::from_letter)
            .or_else(|| Self::read(&symbols, |c| Color::from_letter(c).map(Color::face)))
            .ok_or_else(|| invalid_symbols(&symbols))?;

        Ok(CubeState(faces))
    }

    fn read(
        symbols: &[char],
        lookup: impl Fn(char) -> Option<Face>,
    ) -> Option<[Face; STICKERS]> {
        let mut faces = [Face::Up; STICKERS];
        for (slot, &symbol) in faces.iter_mut().zip(symbols) {
            *slot = lookup(symbol)?;
        }
        Some(faces)
    }

    pub fn from_faces(faces: [Face; STICKERS]) -> CubeState {
        CubeState(faces)
    }
}

fn invalid_symbols(symbols: &[char]) -> StateError {
    let distinct: BTreeSet<char> = symbols.iter().copied().collect();
    let outside_face: Vec<char> = distinct.difference(&FACE_ALPHABET).copied().collect();
    let outside_color: Vec<char> = distinct.difference(&COLOR_ALPHABET).copied().collect();

    // Report against the nearest alphabet; ties read as face notation, the
    // same order parse tries them in.
    let offending = if outside_face.len() <= outside_color.len() {
        outside_face
    } else {
        outside_color
    };

    StateError::InvalidSymbols {
        symbols: offending.into_iter().collect(),
    }
}

impl core::str::FromStr for CubeState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<CubeState, StateError> {
        CubeState::parse(s)
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for face in &self.0 {
            write!(f, "{}", face)?;
        }
        Ok(())
    }
}
