//! Shape Reference Table
//!
//! Static catalogue of standard carat weights and their measurements per
//! shape. The order of shapes and of entries within each shape is the scan
//! order used by the matching engine.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

// == Shape Identifier ==
/// Cut shape of a stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeId {
    Round,
    Princess,
    Cushion,
    Oval,
    Emerald,
    Pear,
    Marquise,
    Radiant,
    Asscher,
    Heart,
}

impl ShapeId {
    /// Lowercase slug used in URLs and serialized output.
    pub fn slug(&self) -> &'static str {
        match self {
            ShapeId::Round => "round",
            ShapeId::Princess => "princess",
            ShapeId::Cushion => "cushion",
            ShapeId::Oval => "oval",
            ShapeId::Emerald => "emerald",
            ShapeId::Pear => "pear",
            ShapeId::Marquise => "marquise",
            ShapeId::Radiant => "radiant",
            ShapeId::Asscher => "asscher",
            ShapeId::Heart => "heart",
        }
    }

    /// Human-readable shape name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeId::Round => "Round Brilliant",
            ShapeId::Princess => "Princess",
            ShapeId::Cushion => "Cushion",
            ShapeId::Oval => "Oval",
            ShapeId::Emerald => "Emerald",
            ShapeId::Pear => "Pear",
            ShapeId::Marquise => "Marquise",
            ShapeId::Radiant => "Radiant",
            ShapeId::Asscher => "Asscher",
            ShapeId::Heart => "Heart",
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ShapeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        shapes()
            .find(|shape| shape.slug() == wanted)
            .ok_or_else(|| format!("Unknown shape: {}", s.trim()))
    }
}

// == Size Entry ==
/// One standard size of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeEntry {
    /// Carat weight
    pub carat: f64,
    /// Face-up measurement, `"L"` or `"LxW"` in millimeters
    pub linear_mm: &'static str,
    /// Total depth in millimeters
    pub depth_mm: &'static str,
}

/// All standard sizes of one shape, in ascending carat order.
#[derive(Debug, Clone, Copy)]
pub struct ShapeSizes {
    pub shape: ShapeId,
    pub entries: &'static [SizeEntry],
}

const fn size(carat: f64, linear_mm: &'static str, depth_mm: &'static str) -> SizeEntry {
    SizeEntry {
        carat,
        linear_mm,
        depth_mm,
    }
}

// == Reference Table ==
/// The built-in shape reference table.
pub static REFERENCE_TABLE: &[ShapeSizes] = &[
    ShapeSizes {
        shape: ShapeId::Round,
        entries: &[
            size(0.25, "4.1", "2.5"),
            size(0.50, "5.2", "3.1"),
            size(0.75, "5.8", "3.5"),
            size(1.00, "6.5", "3.9"),
            size(1.25, "6.9", "4.2"),
            size(1.50, "7.4", "4.5"),
            size(2.00, "8.2", "4.9"),
            size(2.50, "8.8", "5.3"),
            size(3.00, "9.4", "5.6"),
            size(4.00, "10.2", "6.1"),
            size(5.00, "11.0", "6.6"),
        ],
    },
    ShapeSizes {
        shape: ShapeId::Princess,
        entries: &[
            size(0.25, "3.5", "2.6"),
            size(0.50, "4.4", "3.3"),
            size(0.75, "5.0", "3.7"),
            size(1.00, "5.5", "4.1"),
            size(1.50, "6.4", "4.7"),
            size(2.00, "7.0", "5.2"),
            size(3.00, "8.0", "5.9"),
        ],
    },
    ShapeSizes {
        shape: ShapeId::Cushion,
        entries: &[
            size(0.50, "4.9x4.5", "3.1"),
            size(0.75, "5.5x5.0", "3.5"),
            size(1.00, "6.0x5.5", "3.8"),
            size(1.50, "6.8x6.2", "4.3"),
            size(2.00, "7.5x6.8", "4.7"),
            size(3.00, "8.5x7.7", "5.3"),
        ],
    },
    ShapeSizes {
        shape: ShapeId::Oval,
        entries: &[
            size(0.50, "6.0x4.0", "2.5"),
            size(0.75, "7.0x5.0", "3.0"),
            size(1.00, "7.7x5.7", "3.4"),
            size(1.50, "8.5x6.5", "3.9"),
            size(2.00, "9.0x7.0", "4.2"),
            size(3.00, "10.5x8.0", "4.8"),
        ],
    },
    ShapeSizes {
        shape: ShapeId::Emerald,
        entries: &[
            size(0.50, "6.0x4.0", "2.6"),
            size(0.75, "6.5x4.5", "2.9"),
            size(1.00, "7.0x5.0", "3.3"),
            size(1.50, "8.0x6.0", "3.9"),
            size(2.00, "8.5x6.5", "4.2"),
            size(3.00, "9.5x7.5", "4.9"),
        ],
    },
    ShapeSizes {
        shape: ShapeId::Pear,
        entries: &[
            size(0.50, "7.0x4.5", "2.7"),
            size(0.75, "8.0x5.0", "3.0"),
            size(1.00, "8.5x5.5", "3.3"),
            size(1.50, "9.5x6.0", "3.6"),
            size(2.00, "10.5x6.5", "3.9"),
            size(3.00, "12.0x7.5", "4.5"),
        ],
    },
    ShapeSizes {
        shape: ShapeId::Marquise,
        entries: &[
            size(0.50, "8.0x4.0", "2.4"),
            size(0.75, "9.0x4.5", "2.7"),
            size(1.00, "10.0x5.0", "3.0"),
            size(1.50, "11.5x5.5", "3.3"),
            size(2.00, "12.0x6.0", "3.6"),
            size(3.00, "14.0x7.0", "4.2"),
        ],
    },
    ShapeSizes {
        shape: ShapeId::Radiant,
        entries: &[
            size(0.50, "5.0x4.5", "3.1"),
            size(0.75, "5.5x5.0", "3.4"),
            size(1.00, "6.5x5.0", "3.6"),
            size(1.50, "7.0x5.5", "4.0"),
            size(2.00, "7.5x6.0", "4.3"),
            size(3.00, "8.5x7.0", "5.0"),
        ],
    },
    ShapeSizes {
        shape: ShapeId::Asscher,
        entries: &[
            size(0.50, "4.5", "3.0"),
            size(0.75, "5.0", "3.4"),
            size(1.00, "5.5", "3.7"),
            size(1.50, "6.5", "4.3"),
            size(2.00, "7.0", "4.7"),
            size(3.00, "8.0", "5.4"),
        ],
    },
    ShapeSizes {
        shape: ShapeId::Heart,
        entries: &[
            size(0.50, "5.0", "3.0"),
            size(0.75, "5.8", "3.5"),
            size(1.00, "6.5", "3.9"),
            size(1.50, "7.2", "4.3"),
            size(2.00, "8.0", "4.8"),
            size(3.00, "9.2", "5.5"),
        ],
    },
];

// == Lookups ==
/// Iterates all shapes in table order.
pub fn shapes() -> impl Iterator<Item = ShapeId> {
    REFERENCE_TABLE.iter().map(|sizes| sizes.shape)
}

/// Returns the standard sizes for a shape.
pub fn sizes_for(shape: ShapeId) -> &'static [SizeEntry] {
    REFERENCE_TABLE
        .iter()
        .find(|sizes| sizes.shape == shape)
        .map(|sizes| sizes.entries)
        .unwrap_or(&[])
}

/// Finds the entry whose carat weight is closest to `carat`.
///
/// Ties go to the earlier (smaller) entry. Returns `None` when `carat` is
/// not a positive finite number or the shape has no entries.
pub fn closest_carat(shape: ShapeId, carat: f64) -> Option<&'static SizeEntry> {
    if !carat.is_finite() || carat <= 0.0 {
        return None;
    }

    let mut best: Option<&'static SizeEntry> = None;
    for entry in sizes_for(shape) {
        let closer = match best {
            Some(current) => (entry.carat - carat).abs() < (current.carat - carat).abs(),
            None => true,
        };
        if closer {
            best = Some(entry);
        }
    }
    best
}
