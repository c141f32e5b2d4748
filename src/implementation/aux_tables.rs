// Index of a corner within a cell (0 to 7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCornerIndex(pub usize);

// Offset of a corner from the cell origin, in lattice steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerDelta {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

// The case bit of corner i is 1 << i
pub const CELL_CORNERS: [CornerDelta; 8] = [
    CornerDelta { x: 0, y: 0, z: 0 }, // Corner 0 is the cell "origin" [with the lowest x, y, and z]
    CornerDelta { x: 0, y: 1, z: 0 }, // Corner 1 == 1 toward Y
    CornerDelta { x: 1, y: 1, z: 0 },
    CornerDelta { x: 1, y: 0, z: 0 }, // Corner 3 == 1 toward X
    CornerDelta { x: 0, y: 0, z: 1 }, // Corner 4 == 1 toward Z
    CornerDelta { x: 0, y: 1, z: 1 },
    CornerDelta { x: 1, y: 1, z: 1 },
    CornerDelta { x: 1, y: 0, z: 1 },
];

// Corners at both ends of each of the 12 cube edges: 4 around the low z face, 4 around the high z face, then 4 along z
#[rustfmt::skip]
pub const CUBE_EDGES: [[u8; 2]; 12] = [
    [0, 1], [1, 2], [2, 3], [3, 0],
    [4, 5], [5, 6], [6, 7], [7, 4],
    [0, 4], [1, 5], [2, 6], [3, 7],
];

pub fn get_corner_delta(index: CellCornerIndex) -> CornerDelta {
    CELL_CORNERS[index.0]
}
