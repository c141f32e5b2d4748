//! Classic Marching Cubes triangulation data, indexed by case (corner sign mask).

/// Number of triangles generated for each case
#[rustfmt::skip]
pub const TRIANGLE_COUNTS: [u8; 256] = [
    0, 1, 1, 2, 1, 2, 2, 3, 1, 2, 2, 3, 2, 3, 3, 2,
    1, 2, 2, 3, 2, 3, 3, 4, 2, 3, 3, 4, 3, 4, 4, 3,
    1, 2, 2, 3, 2, 3, 3, 4, 2, 3, 3, 4, 3, 4, 4, 3,
    2, 3, 3, 2, 3, 4, 4, 3, 3, 4, 4, 3, 4, 5, 5, 2,
    1, 2, 2, 3, 2, 3, 3, 4, 2, 3, 3, 4, 3, 4, 4, 3,
    2, 3, 3, 4, 3, 4, 4, 5, 3, 4, 4, 5, 4, 5, 5, 4,
    2, 3, 3, 4, 3, 4, 2, 3, 3, 4, 4, 5, 4, 5, 3, 2,
    3, 4, 4, 3, 4, 5, 3, 2, 4, 5, 5, 4, 5, 2, 4, 1,
    1, 2, 2, 3, 2, 3, 3, 4, 2, 3, 3, 4, 3, 4, 4, 3,
    2, 3, 3, 4, 3, 4, 4, 5, 3, 2, 4, 3, 4, 3, 5, 2,
    2, 3, 3, 4, 3, 4, 4, 5, 3, 4, 4, 5, 4, 5, 5, 4,
    3, 4, 4, 3, 4, 5, 5, 4, 4, 3, 5, 2, 5, 4, 2, 1,
    2, 3, 3, 4, 3, 4, 4, 5, 3, 4, 4, 5, 2, 3, 3, 2,
    3, 4, 4, 5, 4, 5, 5, 2, 4, 3, 5, 4, 3, 2, 4, 1,
    3, 4, 4, 5, 4, 5, 3, 4, 4, 5, 5, 2, 3, 4, 2, 1,
    2, 3, 3, 2, 3, 4, 2, 1, 3, 2, 4, 1, 2, 1, 1, 0,
];

/// Up to 5 triangles per case, each one a triple of cube edge indices. Unused slots hold -1
#[rustfmt::skip]
pub const CASE_TRIANGLES: [[[i8; 3]; 5]; 256] = [
    [[-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x00
    [[0, 8, 3], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x01
    [[0, 1, 9], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x02
    [[1, 8, 3], [9, 8, 1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x03
    [[1, 2, 10], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x04
    [[0, 8, 3], [1, 2, 10], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x05
    [[9, 2, 10], [0, 2, 9], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x06
    [[2, 8, 3], [2, 10, 8], [10, 9, 8], [-1, -1, -1], [-1, -1, -1]], // 0x07
    [[3, 11, 2], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x08
    [[0, 11, 2], [8, 11, 0], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x09
    [[1, 9, 0], [2, 3, 11], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x0A
    [[1, 11, 2], [1, 9, 11], [9, 8, 11], [-1, -1, -1], [-1, -1, -1]], // 0x0B
    [[3, 10, 1], [11, 10, 3], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x0C
    [[0, 10, 1], [0, 8, 10], [8, 11, 10], [-1, -1, -1], [-1, -1, -1]], // 0x0D
    [[3, 9, 0], [3, 11, 9], [11, 10, 9], [-1, -1, -1], [-1, -1, -1]], // 0x0E
    [[9, 8, 10], [10, 8, 11], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x0F
    [[4, 7, 8], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x10
    [[4, 3, 0], [7, 3, 4], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x11
    [[0, 1, 9], [8, 4, 7], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x12
    [[4, 1, 9], [4, 7, 1], [7, 3, 1], [-1, -1, -1], [-1, -1, -1]], // 0x13
    [[1, 2, 10], [8, 4, 7], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x14
    [[3, 4, 7], [3, 0, 4], [1, 2, 10], [-1, -1, -1], [-1, -1, -1]], // 0x15
    [[9, 2, 10], [9, 0, 2], [8, 4, 7], [-1, -1, -1], [-1, -1, -1]], // 0x16
    [[2, 10, 9], [2, 9, 7], [2, 7, 3], [7, 9, 4], [-1, -1, -1]], // 0x17
    [[8, 4, 7], [3, 11, 2], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x18
    [[11, 4, 7], [11, 2, 4], [2, 0, 4], [-1, -1, -1], [-1, -1, -1]], // 0x19
    [[9, 0, 1], [8, 4, 7], [2, 3, 11], [-1, -1, -1], [-1, -1, -1]], // 0x1A
    [[4, 7, 11], [9, 4, 11], [9, 11, 2], [9, 2, 1], [-1, -1, -1]], // 0x1B
    [[3, 10, 1], [3, 11, 10], [7, 8, 4], [-1, -1, -1], [-1, -1, -1]], // 0x1C
    [[1, 11, 10], [1, 4, 11], [1, 0, 4], [7, 11, 4], [-1, -1, -1]], // 0x1D
    [[4, 7, 8], [9, 0, 11], [9, 11, 10], [11, 0, 3], [-1, -1, -1]], // 0x1E
    [[4, 7, 11], [4, 11, 9], [9, 11, 10], [-1, -1, -1], [-1, -1, -1]], // 0x1F
    [[9, 5, 4], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x20
    [[9, 5, 4], [0, 8, 3], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x21
    [[0, 5, 4], [1, 5, 0], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x22
    [[8, 5, 4], [8, 3, 5], [3, 1, 5], [-1, -1, -1], [-1, -1, -1]], // 0x23
    [[1, 2, 10], [9, 5, 4], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x24
    [[3, 0, 8], [1, 2, 10], [4, 9, 5], [-1, -1, -1], [-1, -1, -1]], // 0x25
    [[5, 2, 10], [5, 4, 2], [4, 0, 2], [-1, -1, -1], [-1, -1, -1]], // 0x26
    [[2, 10, 5], [3, 2, 5], [3, 5, 4], [3, 4, 8], [-1, -1, -1]], // 0x27
    [[9, 5, 4], [2, 3, 11], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x28
    [[0, 11, 2], [0, 8, 11], [4, 9, 5], [-1, -1, -1], [-1, -1, -1]], // 0x29
    [[0, 5, 4], [0, 1, 5], [2, 3, 11], [-1, -1, -1], [-1, -1, -1]], // 0x2A
    [[2, 1, 5], [2, 5, 8], [2, 8, 11], [4, 8, 5], [-1, -1, -1]], // 0x2B
    [[10, 3, 11], [10, 1, 3], [9, 5, 4], [-1, -1, -1], [-1, -1, -1]], // 0x2C
    [[4, 9, 5], [0, 8, 1], [8, 10, 1], [8, 11, 10], [-1, -1, -1]], // 0x2D
    [[5, 4, 0], [5, 0, 11], [5, 11, 10], [11, 0, 3], [-1, -1, -1]], // 0x2E
    [[5, 4, 8], [5, 8, 10], [10, 8, 11], [-1, -1, -1], [-1, -1, -1]], // 0x2F
    [[9, 7, 8], [5, 7, 9], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x30
    [[9, 3, 0], [9, 5, 3], [5, 7, 3], [-1, -1, -1], [-1, -1, -1]], // 0x31
    [[0, 7, 8], [0, 1, 7], [1, 5, 7], [-1, -1, -1], [-1, -1, -1]], // 0x32
    [[1, 5, 3], [3, 5, 7], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x33
    [[9, 7, 8], [9, 5, 7], [10, 1, 2], [-1, -1, -1], [-1, -1, -1]], // 0x34
    [[10, 1, 2], [9, 5, 0], [5, 3, 0], [5, 7, 3], [-1, -1, -1]], // 0x35
    [[8, 0, 2], [8, 2, 5], [8, 5, 7], [10, 5, 2], [-1, -1, -1]], // 0x36
    [[2, 10, 5], [2, 5, 3], [3, 5, 7], [-1, -1, -1], [-1, -1, -1]], // 0x37
    [[7, 9, 5], [7, 8, 9], [3, 11, 2], [-1, -1, -1], [-1, -1, -1]], // 0x38
    [[9, 5, 7], [9, 7, 2], [9, 2, 0], [2, 7, 11], [-1, -1, -1]], // 0x39
    [[2, 3, 11], [0, 1, 8], [1, 7, 8], [1, 5, 7], [-1, -1, -1]], // 0x3A
    [[11, 2, 1], [11, 1, 7], [7, 1, 5], [-1, -1, -1], [-1, -1, -1]], // 0x3B
    [[9, 5, 8], [8, 5, 7], [10, 1, 3], [10, 3, 11], [-1, -1, -1]], // 0x3C
    [[5, 7, 0], [5, 0, 9], [7, 11, 0], [1, 0, 10], [11, 10, 0]], // 0x3D
    [[11, 10, 0], [11, 0, 3], [10, 5, 0], [8, 0, 7], [5, 7, 0]], // 0x3E
    [[11, 10, 5], [7, 11, 5], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x3F
    [[10, 6, 5], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x40
    [[0, 8, 3], [5, 10, 6], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x41
    [[9, 0, 1], [5, 10, 6], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x42
    [[1, 8, 3], [1, 9, 8], [5, 10, 6], [-1, -1, -1], [-1, -1, -1]], // 0x43
    [[1, 6, 5], [2, 6, 1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x44
    [[1, 6, 5], [1, 2, 6], [3, 0, 8], [-1, -1, -1], [-1, -1, -1]], // 0x45
    [[9, 6, 5], [9, 0, 6], [0, 2, 6], [-1, -1, -1], [-1, -1, -1]], // 0x46
    [[5, 9, 8], [5, 8, 2], [5, 2, 6], [3, 2, 8], [-1, -1, -1]], // 0x47
    [[2, 3, 11], [10, 6, 5], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x48
    [[11, 0, 8], [11, 2, 0], [10, 6, 5], [-1, -1, -1], [-1, -1, -1]], // 0x49
    [[0, 1, 9], [2, 3, 11], [5, 10, 6], [-1, -1, -1], [-1, -1, -1]], // 0x4A
    [[5, 10, 6], [1, 9, 2], [9, 11, 2], [9, 8, 11], [-1, -1, -1]], // 0x4B
    [[6, 3, 11], [6, 5, 3], [5, 1, 3], [-1, -1, -1], [-1, -1, -1]], // 0x4C
    [[0, 8, 11], [0, 11, 5], [0, 5, 1], [5, 11, 6], [-1, -1, -1]], // 0x4D
    [[3, 11, 6], [0, 3, 6], [0, 6, 5], [0, 5, 9], [-1, -1, -1]], // 0x4E
    [[6, 5, 9], [6, 9, 11], [11, 9, 8], [-1, -1, -1], [-1, -1, -1]], // 0x4F
    [[5, 10, 6], [4, 7, 8], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x50
    [[4, 3, 0], [4, 7, 3], [6, 5, 10], [-1, -1, -1], [-1, -1, -1]], // 0x51
    [[1, 9, 0], [5, 10, 6], [8, 4, 7], [-1, -1, -1], [-1, -1, -1]], // 0x52
    [[10, 6, 5], [1, 9, 7], [1, 7, 3], [7, 9, 4], [-1, -1, -1]], // 0x53
    [[6, 1, 2], [6, 5, 1], [4, 7, 8], [-1, -1, -1], [-1, -1, -1]], // 0x54
    [[1, 2, 5], [5, 2, 6], [3, 0, 4], [3, 4, 7], [-1, -1, -1]], // 0x55
    [[8, 4, 7], [9, 0, 5], [0, 6, 5], [0, 2, 6], [-1, -1, -1]], // 0x56
    [[7, 3, 9], [7, 9, 4], [3, 2, 9], [5, 9, 6], [2, 6, 9]], // 0x57
    [[3, 11, 2], [7, 8, 4], [10, 6, 5], [-1, -1, -1], [-1, -1, -1]], // 0x58
    [[5, 10, 6], [4, 7, 2], [4, 2, 0], [2, 7, 11], [-1, -1, -1]], // 0x59
    [[0, 1, 9], [4, 7, 8], [2, 3, 11], [5, 10, 6], [-1, -1, -1]], // 0x5A
    [[9, 2, 1], [9, 11, 2], [9, 4, 11], [7, 11, 4], [5, 10, 6]], // 0x5B
    [[8, 4, 7], [3, 11, 5], [3, 5, 1], [5, 11, 6], [-1, -1, -1]], // 0x5C
    [[5, 1, 11], [5, 11, 6], [1, 0, 11], [7, 11, 4], [0, 4, 11]], // 0x5D
    [[0, 5, 9], [0, 6, 5], [0, 3, 6], [11, 6, 3], [8, 4, 7]], // 0x5E
    [[6, 5, 9], [6, 9, 11], [4, 7, 9], [7, 11, 9], [-1, -1, -1]], // 0x5F
    [[10, 4, 9], [6, 4, 10], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x60
    [[4, 10, 6], [4, 9, 10], [0, 8, 3], [-1, -1, -1], [-1, -1, -1]], // 0x61
    [[10, 0, 1], [10, 6, 0], [6, 4, 0], [-1, -1, -1], [-1, -1, -1]], // 0x62
    [[8, 3, 1], [8, 1, 6], [8, 6, 4], [6, 1, 10], [-1, -1, -1]], // 0x63
    [[1, 4, 9], [1, 2, 4], [2, 6, 4], [-1, -1, -1], [-1, -1, -1]], // 0x64
    [[3, 0, 8], [1, 2, 9], [2, 4, 9], [2, 6, 4], [-1, -1, -1]], // 0x65
    [[0, 2, 4], [4, 2, 6], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x66
    [[8, 3, 2], [8, 2, 4], [4, 2, 6], [-1, -1, -1], [-1, -1, -1]], // 0x67
    [[10, 4, 9], [10, 6, 4], [11, 2, 3], [-1, -1, -1], [-1, -1, -1]], // 0x68
    [[0, 8, 2], [2, 8, 11], [4, 9, 10], [4, 10, 6], [-1, -1, -1]], // 0x69
    [[3, 11, 2], [0, 1, 6], [0, 6, 4], [6, 1, 10], [-1, -1, -1]], // 0x6A
    [[6, 4, 1], [6, 1, 10], [4, 8, 1], [2, 1, 11], [8, 11, 1]], // 0x6B
    [[9, 6, 4], [9, 3, 6], [9, 1, 3], [11, 6, 3], [-1, -1, -1]], // 0x6C
    [[8, 11, 1], [8, 1, 0], [11, 6, 1], [9, 1, 4], [6, 4, 1]], // 0x6D
    [[3, 11, 6], [3, 6, 0], [0, 6, 4], [-1, -1, -1], [-1, -1, -1]], // 0x6E
    [[6, 4, 8], [11, 6, 8], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x6F
    [[7, 10, 6], [7, 8, 10], [8, 9, 10], [-1, -1, -1], [-1, -1, -1]], // 0x70
    [[0, 7, 3], [0, 10, 7], [0, 9, 10], [6, 7, 10], [-1, -1, -1]], // 0x71
    [[10, 6, 7], [1, 10, 7], [1, 7, 8], [1, 8, 0], [-1, -1, -1]], // 0x72
    [[10, 6, 7], [10, 7, 1], [1, 7, 3], [-1, -1, -1], [-1, -1, -1]], // 0x73
    [[1, 2, 6], [1, 6, 8], [1, 8, 9], [8, 6, 7], [-1, -1, -1]], // 0x74
    [[2, 6, 9], [2, 9, 1], [6, 7, 9], [0, 9, 3], [7, 3, 9]], // 0x75
    [[7, 8, 0], [7, 0, 6], [6, 0, 2], [-1, -1, -1], [-1, -1, -1]], // 0x76
    [[7, 3, 2], [6, 7, 2], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x77
    [[2, 3, 11], [10, 6, 8], [10, 8, 9], [8, 6, 7], [-1, -1, -1]], // 0x78
    [[2, 0, 7], [2, 7, 11], [0, 9, 7], [6, 7, 10], [9, 10, 7]], // 0x79
    [[1, 8, 0], [1, 7, 8], [1, 10, 7], [6, 7, 10], [2, 3, 11]], // 0x7A
    [[11, 2, 1], [11, 1, 7], [10, 6, 1], [6, 7, 1], [-1, -1, -1]], // 0x7B
    [[8, 9, 6], [8, 6, 7], [9, 1, 6], [11, 6, 3], [1, 3, 6]], // 0x7C
    [[0, 9, 1], [11, 6, 7], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x7D
    [[7, 8, 0], [7, 0, 6], [3, 11, 0], [11, 6, 0], [-1, -1, -1]], // 0x7E
    [[7, 11, 6], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x7F
    [[7, 6, 11], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x80
    [[3, 0, 8], [11, 7, 6], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x81
    [[0, 1, 9], [11, 7, 6], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x82
    [[8, 1, 9], [8, 3, 1], [11, 7, 6], [-1, -1, -1], [-1, -1, -1]], // 0x83
    [[10, 1, 2], [6, 11, 7], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x84
    [[1, 2, 10], [3, 0, 8], [6, 11, 7], [-1, -1, -1], [-1, -1, -1]], // 0x85
    [[2, 9, 0], [2, 10, 9], [6, 11, 7], [-1, -1, -1], [-1, -1, -1]], // 0x86
    [[6, 11, 7], [2, 10, 3], [10, 8, 3], [10, 9, 8], [-1, -1, -1]], // 0x87
    [[7, 2, 3], [6, 2, 7], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x88
    [[7, 0, 8], [7, 6, 0], [6, 2, 0], [-1, -1, -1], [-1, -1, -1]], // 0x89
    [[2, 7, 6], [2, 3, 7], [0, 1, 9], [-1, -1, -1], [-1, -1, -1]], // 0x8A
    [[1, 6, 2], [1, 8, 6], [1, 9, 8], [8, 7, 6], [-1, -1, -1]], // 0x8B
    [[10, 7, 6], [10, 1, 7], [1, 3, 7], [-1, -1, -1], [-1, -1, -1]], // 0x8C
    [[10, 7, 6], [1, 7, 10], [1, 8, 7], [1, 0, 8], [-1, -1, -1]], // 0x8D
    [[0, 3, 7], [0, 7, 10], [0, 10, 9], [6, 10, 7], [-1, -1, -1]], // 0x8E
    [[7, 6, 10], [7, 10, 8], [8, 10, 9], [-1, -1, -1], [-1, -1, -1]], // 0x8F
    [[6, 8, 4], [11, 8, 6], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x90
    [[3, 6, 11], [3, 0, 6], [0, 4, 6], [-1, -1, -1], [-1, -1, -1]], // 0x91
    [[8, 6, 11], [8, 4, 6], [9, 0, 1], [-1, -1, -1], [-1, -1, -1]], // 0x92
    [[9, 4, 6], [9, 6, 3], [9, 3, 1], [11, 3, 6], [-1, -1, -1]], // 0x93
    [[6, 8, 4], [6, 11, 8], [2, 10, 1], [-1, -1, -1], [-1, -1, -1]], // 0x94
    [[1, 2, 10], [3, 0, 11], [0, 6, 11], [0, 4, 6], [-1, -1, -1]], // 0x95
    [[4, 11, 8], [4, 6, 11], [0, 2, 9], [2, 10, 9], [-1, -1, -1]], // 0x96
    [[10, 9, 3], [10, 3, 2], [9, 4, 3], [11, 3, 6], [4, 6, 3]], // 0x97
    [[8, 2, 3], [8, 4, 2], [4, 6, 2], [-1, -1, -1], [-1, -1, -1]], // 0x98
    [[0, 4, 2], [4, 6, 2], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x99
    [[1, 9, 0], [2, 3, 4], [2, 4, 6], [4, 3, 8], [-1, -1, -1]], // 0x9A
    [[1, 9, 4], [1, 4, 2], [2, 4, 6], [-1, -1, -1], [-1, -1, -1]], // 0x9B
    [[8, 1, 3], [8, 6, 1], [8, 4, 6], [6, 10, 1], [-1, -1, -1]], // 0x9C
    [[10, 1, 0], [10, 0, 6], [6, 0, 4], [-1, -1, -1], [-1, -1, -1]], // 0x9D
    [[4, 6, 3], [4, 3, 8], [6, 10, 3], [0, 3, 9], [10, 9, 3]], // 0x9E
    [[10, 9, 4], [6, 10, 4], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0x9F
    [[4, 9, 5], [7, 6, 11], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xA0
    [[0, 8, 3], [4, 9, 5], [11, 7, 6], [-1, -1, -1], [-1, -1, -1]], // 0xA1
    [[5, 0, 1], [5, 4, 0], [7, 6, 11], [-1, -1, -1], [-1, -1, -1]], // 0xA2
    [[11, 7, 6], [8, 3, 4], [3, 5, 4], [3, 1, 5], [-1, -1, -1]], // 0xA3
    [[9, 5, 4], [10, 1, 2], [7, 6, 11], [-1, -1, -1], [-1, -1, -1]], // 0xA4
    [[6, 11, 7], [1, 2, 10], [0, 8, 3], [4, 9, 5], [-1, -1, -1]], // 0xA5
    [[7, 6, 11], [5, 4, 10], [4, 2, 10], [4, 0, 2], [-1, -1, -1]], // 0xA6
    [[3, 4, 8], [3, 5, 4], [3, 2, 5], [10, 5, 2], [11, 7, 6]], // 0xA7
    [[7, 2, 3], [7, 6, 2], [5, 4, 9], [-1, -1, -1], [-1, -1, -1]], // 0xA8
    [[9, 5, 4], [0, 8, 6], [0, 6, 2], [6, 8, 7], [-1, -1, -1]], // 0xA9
    [[3, 6, 2], [3, 7, 6], [1, 5, 0], [5, 4, 0], [-1, -1, -1]], // 0xAA
    [[6, 2, 8], [6, 8, 7], [2, 1, 8], [4, 8, 5], [1, 5, 8]], // 0xAB
    [[9, 5, 4], [10, 1, 6], [1, 7, 6], [1, 3, 7], [-1, -1, -1]], // 0xAC
    [[1, 6, 10], [1, 7, 6], [1, 0, 7], [8, 7, 0], [9, 5, 4]], // 0xAD
    [[4, 0, 10], [4, 10, 5], [0, 3, 10], [6, 10, 7], [3, 7, 10]], // 0xAE
    [[7, 6, 10], [7, 10, 8], [5, 4, 10], [4, 8, 10], [-1, -1, -1]], // 0xAF
    [[6, 9, 5], [6, 11, 9], [11, 8, 9], [-1, -1, -1], [-1, -1, -1]], // 0xB0
    [[3, 6, 11], [0, 6, 3], [0, 5, 6], [0, 9, 5], [-1, -1, -1]], // 0xB1
    [[0, 11, 8], [0, 5, 11], [0, 1, 5], [5, 6, 11], [-1, -1, -1]], // 0xB2
    [[6, 11, 3], [6, 3, 5], [5, 3, 1], [-1, -1, -1], [-1, -1, -1]], // 0xB3
    [[1, 2, 10], [9, 5, 11], [9, 11, 8], [11, 5, 6], [-1, -1, -1]], // 0xB4
    [[0, 11, 3], [0, 6, 11], [0, 9, 6], [5, 6, 9], [1, 2, 10]], // 0xB5
    [[11, 8, 5], [11, 5, 6], [8, 0, 5], [10, 5, 2], [0, 2, 5]], // 0xB6
    [[6, 11, 3], [6, 3, 5], [2, 10, 3], [10, 5, 3], [-1, -1, -1]], // 0xB7
    [[5, 8, 9], [5, 2, 8], [5, 6, 2], [3, 8, 2], [-1, -1, -1]], // 0xB8
    [[9, 5, 6], [9, 6, 0], [0, 6, 2], [-1, -1, -1], [-1, -1, -1]], // 0xB9
    [[1, 5, 8], [1, 8, 0], [5, 6, 8], [3, 8, 2], [6, 2, 8]], // 0xBA
    [[1, 5, 6], [2, 1, 6], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xBB
    [[1, 3, 6], [1, 6, 10], [3, 8, 6], [5, 6, 9], [8, 9, 6]], // 0xBC
    [[10, 1, 0], [10, 0, 6], [9, 5, 0], [5, 6, 0], [-1, -1, -1]], // 0xBD
    [[0, 3, 8], [5, 6, 10], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xBE
    [[10, 5, 6], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xBF
    [[11, 5, 10], [7, 5, 11], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xC0
    [[11, 5, 10], [11, 7, 5], [8, 3, 0], [-1, -1, -1], [-1, -1, -1]], // 0xC1
    [[5, 11, 7], [5, 10, 11], [1, 9, 0], [-1, -1, -1], [-1, -1, -1]], // 0xC2
    [[10, 7, 5], [10, 11, 7], [9, 8, 1], [8, 3, 1], [-1, -1, -1]], // 0xC3
    [[11, 1, 2], [11, 7, 1], [7, 5, 1], [-1, -1, -1], [-1, -1, -1]], // 0xC4
    [[0, 8, 3], [1, 2, 7], [1, 7, 5], [7, 2, 11], [-1, -1, -1]], // 0xC5
    [[9, 7, 5], [9, 2, 7], [9, 0, 2], [2, 11, 7], [-1, -1, -1]], // 0xC6
    [[7, 5, 2], [7, 2, 11], [5, 9, 2], [3, 2, 8], [9, 8, 2]], // 0xC7
    [[2, 5, 10], [2, 3, 5], [3, 7, 5], [-1, -1, -1], [-1, -1, -1]], // 0xC8
    [[8, 2, 0], [8, 5, 2], [8, 7, 5], [10, 2, 5], [-1, -1, -1]], // 0xC9
    [[9, 0, 1], [5, 10, 3], [5, 3, 7], [3, 10, 2], [-1, -1, -1]], // 0xCA
    [[9, 8, 2], [9, 2, 1], [8, 7, 2], [10, 2, 5], [7, 5, 2]], // 0xCB
    [[1, 3, 5], [3, 7, 5], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xCC
    [[0, 8, 7], [0, 7, 1], [1, 7, 5], [-1, -1, -1], [-1, -1, -1]], // 0xCD
    [[9, 0, 3], [9, 3, 5], [5, 3, 7], [-1, -1, -1], [-1, -1, -1]], // 0xCE
    [[9, 8, 7], [5, 9, 7], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xCF
    [[5, 8, 4], [5, 10, 8], [10, 11, 8], [-1, -1, -1], [-1, -1, -1]], // 0xD0
    [[5, 0, 4], [5, 11, 0], [5, 10, 11], [11, 3, 0], [-1, -1, -1]], // 0xD1
    [[0, 1, 9], [8, 4, 10], [8, 10, 11], [10, 4, 5], [-1, -1, -1]], // 0xD2
    [[10, 11, 4], [10, 4, 5], [11, 3, 4], [9, 4, 1], [3, 1, 4]], // 0xD3
    [[2, 5, 1], [2, 8, 5], [2, 11, 8], [4, 5, 8], [-1, -1, -1]], // 0xD4
    [[0, 4, 11], [0, 11, 3], [4, 5, 11], [2, 11, 1], [5, 1, 11]], // 0xD5
    [[0, 2, 5], [0, 5, 9], [2, 11, 5], [4, 5, 8], [11, 8, 5]], // 0xD6
    [[9, 4, 5], [2, 11, 3], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xD7
    [[2, 5, 10], [3, 5, 2], [3, 4, 5], [3, 8, 4], [-1, -1, -1]], // 0xD8
    [[5, 10, 2], [5, 2, 4], [4, 2, 0], [-1, -1, -1], [-1, -1, -1]], // 0xD9
    [[3, 10, 2], [3, 5, 10], [3, 8, 5], [4, 5, 8], [0, 1, 9]], // 0xDA
    [[5, 10, 2], [5, 2, 4], [1, 9, 2], [9, 4, 2], [-1, -1, -1]], // 0xDB
    [[8, 4, 5], [8, 5, 3], [3, 5, 1], [-1, -1, -1], [-1, -1, -1]], // 0xDC
    [[0, 4, 5], [1, 0, 5], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xDD
    [[8, 4, 5], [8, 5, 3], [9, 0, 5], [0, 3, 5], [-1, -1, -1]], // 0xDE
    [[9, 4, 5], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xDF
    [[4, 11, 7], [4, 9, 11], [9, 10, 11], [-1, -1, -1], [-1, -1, -1]], // 0xE0
    [[0, 8, 3], [4, 9, 7], [9, 11, 7], [9, 10, 11], [-1, -1, -1]], // 0xE1
    [[1, 10, 11], [1, 11, 4], [1, 4, 0], [7, 4, 11], [-1, -1, -1]], // 0xE2
    [[3, 1, 4], [3, 4, 8], [1, 10, 4], [7, 4, 11], [10, 11, 4]], // 0xE3
    [[4, 11, 7], [9, 11, 4], [9, 2, 11], [9, 1, 2], [-1, -1, -1]], // 0xE4
    [[9, 7, 4], [9, 11, 7], [9, 1, 11], [2, 11, 1], [0, 8, 3]], // 0xE5
    [[11, 7, 4], [11, 4, 2], [2, 4, 0], [-1, -1, -1], [-1, -1, -1]], // 0xE6
    [[11, 7, 4], [11, 4, 2], [8, 3, 4], [3, 2, 4], [-1, -1, -1]], // 0xE7
    [[2, 9, 10], [2, 7, 9], [2, 3, 7], [7, 4, 9], [-1, -1, -1]], // 0xE8
    [[9, 10, 7], [9, 7, 4], [10, 2, 7], [8, 7, 0], [2, 0, 7]], // 0xE9
    [[3, 7, 10], [3, 10, 2], [7, 4, 10], [1, 10, 0], [4, 0, 10]], // 0xEA
    [[1, 10, 2], [8, 7, 4], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xEB
    [[4, 9, 1], [4, 1, 7], [7, 1, 3], [-1, -1, -1], [-1, -1, -1]], // 0xEC
    [[4, 9, 1], [4, 1, 7], [0, 8, 1], [8, 7, 1], [-1, -1, -1]], // 0xED
    [[4, 0, 3], [7, 4, 3], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xEE
    [[4, 8, 7], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xEF
    [[9, 10, 8], [10, 11, 8], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xF0
    [[3, 0, 9], [3, 9, 11], [11, 9, 10], [-1, -1, -1], [-1, -1, -1]], // 0xF1
    [[0, 1, 10], [0, 10, 8], [8, 10, 11], [-1, -1, -1], [-1, -1, -1]], // 0xF2
    [[3, 1, 10], [11, 3, 10], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xF3
    [[1, 2, 11], [1, 11, 9], [9, 11, 8], [-1, -1, -1], [-1, -1, -1]], // 0xF4
    [[3, 0, 9], [3, 9, 11], [1, 2, 9], [2, 11, 9], [-1, -1, -1]], // 0xF5
    [[0, 2, 11], [8, 0, 11], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xF6
    [[3, 2, 11], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xF7
    [[2, 3, 8], [2, 8, 10], [10, 8, 9], [-1, -1, -1], [-1, -1, -1]], // 0xF8
    [[9, 10, 2], [0, 9, 2], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xF9
    [[2, 3, 8], [2, 8, 10], [0, 1, 8], [1, 10, 8], [-1, -1, -1]], // 0xFA
    [[1, 10, 2], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xFB
    [[1, 3, 8], [9, 1, 8], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xFC
    [[0, 9, 1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xFD
    [[0, 3, 8], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xFE
    [[-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1], [-1, -1, -1]], // 0xFF
];
