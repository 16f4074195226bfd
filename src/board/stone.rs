use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// The two colors a cell can hold. Black always moves first.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub fn opponent(&self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
    /// one-character symbol used by the canonical state key
    pub fn symbol(&self) -> char {
        match self {
            Self::Black => 'b',
            Self::White => 'w',
        }
    }
}

impl TryFrom<char> for Stone {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'b' => Ok(Self::Black),
            'w' => Ok(Self::White),
            _ => Err(format!("invalid stone symbol {:?}", c)),
        }
    }
}

impl TryFrom<&str> for Stone {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "black" | "b" => Ok(Self::Black),
            "white" | "w" => Ok(Self::White),
            _ => Err(format!("invalid stone {:?}", s)),
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Black => write!(f, "black"),
            Self::White => write!(f, "white"),
        }
    }
}

impl Arbitrary for Stone {
    fn random() -> Self {
        match rand::random::<bool>() {
            true => Self::Black,
            false => Self::White,
        }
    }
}
