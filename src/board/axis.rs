/// The four lines through a cell along which five-in-a-row can form.
/// Each axis is scanned in its forward (+1) and backward (−1) sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// left to right
    Horizontal,
    /// top to bottom
    Vertical,
    /// top-left to bottom-right
    Diagonal,
    /// top-right to bottom-left
    AntiDiagonal,
}

impl Axis {
    /// scan order matters: the first qualifying axis wins ties
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];
    /// (row, col) displacement of one forward step
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::Diagonal => (1, 1),
            Self::AntiDiagonal => (1, -1),
        }
    }
}
