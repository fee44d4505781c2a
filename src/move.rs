use crate::prelude::*;

/// One token of a solution in standard cube notation: a face turn, possibly
/// reversed or doubled ("R", "R'", "R2").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Single,
    Double,
    Reverse,
}

impl Move {
    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|token| token.parse()).collect()
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let face_char = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No face for move")),
        };

        let face = match Face::from_letter(face_char.to_ascii_uppercase()) {
            Some(face) => face,
            None => return Err(anyhow::anyhow!("Unrecognized face {}", face_char)),
        };

        let direction = match chars.next() {
            None => Direction::Single,
            Some('\'') => Direction::Reverse,
            Some('2') => Direction::Double,
            Some(c) => return Err(anyhow::anyhow!("Unrecognized direction {}", c)),
        };

        if let Some(c) = chars.next() {
            return Err(anyhow::anyhow!("Trailing {} after move", c));
        }

        Ok(Move { face, direction })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.face)?;
        match self.direction {
            Direction::Single => Ok(()),
            Direction::Reverse => write!(f, "'"),
            Direction::Double => write!(f, "2"),
        }
    }
}
