use super::axis::Axis;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// A (row, column) coordinate, 0-indexed from the top-left corner.
///
/// Ordering is row-major, which is also the tie-break order when several
/// moves share the best learned value.
///
/// Serialized as the string `"row,col"` so that it can key a JSON object
/// in a persisted value table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Move(usize, usize);

impl Move {
    pub fn row(&self) -> usize {
        self.0
    }
    pub fn col(&self) -> usize {
        self.1
    }
    /// the cell `steps` away along `axis`, scaled by `sign`,
    /// or None if it falls off a board of side `size`
    pub fn step(&self, axis: Axis, sign: isize, steps: usize, size: usize) -> Option<Self> {
        let (dr, dc) = axis.delta();
        let r = self.0 as isize + sign * dr * steps as isize;
        let c = self.1 as isize + sign * dc * steps as isize;
        match (0..size as isize).contains(&r) && (0..size as isize).contains(&c) {
            true => Some(Self(r as usize, c as usize)),
            false => None,
        }
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self(row, col)
    }
}
impl From<Move> for (usize, usize) {
    fn from(m: Move) -> Self {
        (m.0, m.1)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

/// str isomorphism
/// "7,12" <-> Move(7, 12)
impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (r, c) = s
            .split_once(',')
            .ok_or_else(|| format!("move {:?} is not \"row,col\"", s))?;
        let r = r
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("move {:?} row: {}", s, e))?;
        let c = c
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("move {:?} col: {}", s, e))?;
        Ok(Self(r, c))
    }
}

impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Move::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_roundtrip() {
        for m in [Move(0, 0), Move(7, 7), Move(14, 3), Move(3, 14)] {
            assert_eq!(m, Move::try_from(m.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn rejects_malformed() {
        assert!(Move::try_from("7").is_err());
        assert!(Move::try_from("7,").is_err());
        assert!(Move::try_from("a,b").is_err());
        assert!(Move::try_from("-1,2").is_err());
    }

    #[test]
    fn row_major_order() {
        assert!(Move(0, 14) < Move(1, 0));
        assert!(Move(1, 0) < Move(1, 1));
    }

    #[test]
    fn steps_stay_on_board() {
        let m = Move(0, 14);
        assert_eq!(m.step(Axis::Horizontal, 1, 1, 15), None);
        assert_eq!(m.step(Axis::Horizontal, -1, 2, 15), Some(Move(0, 12)));
        assert_eq!(m.step(Axis::Vertical, -1, 1, 15), None);
        assert_eq!(m.step(Axis::AntiDiagonal, 1, 3, 15), Some(Move(3, 11)));
        assert_eq!(m.step(Axis::Diagonal, 1, 1, 15), None);
    }
}
