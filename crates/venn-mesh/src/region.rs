//! The eight region combinations of circles A, B, C and their material ids.
//!
//! A sample's *signature* is a bitmask over the circles containing it
//! (`A = 1`, `B = 2`, `C = 4`). Material ids follow a fixed order that is not
//! the mask order: background, A, B, C, AB, AC, BC, ABC.

use serde::Serialize;

/// Number of regions (including background).
pub const REGION_COUNT: usize = 8;

/// Signature bit for circle A.
pub const MASK_A: u8 = 0b001;
/// Signature bit for circle B.
pub const MASK_B: u8 = 0b010;
/// Signature bit for circle C.
pub const MASK_C: u8 = 0b100;

/// One subset of `{A, B, C}`; the discriminant is the material id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Background = 0,
    A = 1,
    B = 2,
    C = 3,
    AB = 4,
    AC = 5,
    BC = 6,
    ABC = 7,
}

// Indexed by signature mask.
const REGION_BY_MASK: [Region; REGION_COUNT] = [
    Region::Background,
    Region::A,
    Region::B,
    Region::AB,
    Region::C,
    Region::AC,
    Region::BC,
    Region::ABC,
];

impl Region {
    /// All regions in material-id order.
    pub const ALL: [Region; REGION_COUNT] = [
        Region::Background,
        Region::A,
        Region::B,
        Region::C,
        Region::AB,
        Region::AC,
        Region::BC,
        Region::ABC,
    ];

    /// Stable material id (0..8).
    #[inline]
    pub fn id(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_id(id: usize) -> Option<Region> {
        Self::ALL.get(id).copied()
    }

    /// Region for a signature bitmask; bits above `MASK_C` are ignored.
    #[inline]
    pub fn from_mask(mask: u8) -> Region {
        REGION_BY_MASK[(mask & 0b111) as usize]
    }

    /// Signature bitmask of the circles making up this region.
    pub fn mask(self) -> u8 {
        match self {
            Region::Background => 0,
            Region::A => MASK_A,
            Region::B => MASK_B,
            Region::C => MASK_C,
            Region::AB => MASK_A | MASK_B,
            Region::AC => MASK_A | MASK_C,
            Region::BC => MASK_B | MASK_C,
            Region::ABC => MASK_A | MASK_B | MASK_C,
        }
    }

    /// Number of circles covering this region.
    #[inline]
    pub fn circle_count(self) -> u32 {
        self.mask().count_ones()
    }

    /// Material name used in the material map.
    pub fn name(self) -> &'static str {
        match self {
            Region::Background => "background",
            Region::A => "a",
            Region::B => "b",
            Region::C => "c",
            Region::AB => "ab",
            Region::AC => "ac",
            Region::BC => "bc",
            Region::ABC => "abc",
        }
    }

    /// Weight carried by the `importance` field's matset values.
    pub fn importance(self) -> f64 {
        match self {
            Region::Background => 0.0,
            Region::A => 0.1,
            Region::B => 0.2,
            Region::C => 0.3,
            Region::AB => 0.4,
            Region::AC => 0.5,
            Region::BC => 0.6,
            Region::ABC => 1.0,
        }
    }
}
