//! Schematic gel lane for a product set.
//!
//! Bands are placed by length only: the lane spans `max_bp` (the longest
//! product, or the ladder maximum if that is larger) and each band sits at
//! `migration = max_bp - length`, so long fragments stay near the well and
//! short ones run furthest.
//!
//! # Examples
//! ```
//! use vpcr::gel::{GelLane, DEFAULT_LADDER_MAX};
//! let lane = GelLane::from_lengths(&[250, 1200], DEFAULT_LADDER_MAX);
//! assert_eq!(lane.max_bp, 1200);
//! assert_eq!(lane.bands[0].migration, 950);
//! assert_eq!(lane.bands[1].migration, 0);
//! ```
use crate::amplicon::Amplicon;

/// Lane span used when every product is shorter than this.
pub const DEFAULT_LADDER_MAX: usize = 1000;

/// Product lengths in product-set order.
pub fn lengths(products: &[Amplicon]) -> Vec<usize> {
    products.iter().map(Amplicon::len).collect()
}

/// A single band.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Band {
    pub length: usize,
    /// Distance from the well, in bp units of the lane.
    pub migration: usize,
}

/// A lane holding one band per product (duplicates kept).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GelLane {
    pub max_bp: usize,
    pub bands: Vec<Band>,
}

impl GelLane {
    pub fn from_lengths(lengths: &[usize], ladder_max: usize) -> Self {
        let max_bp = lengths.iter().copied().chain([ladder_max]).max().unwrap_or(ladder_max).max(1);
        let bands = lengths.iter().map(|&length| Band { length, migration: max_bp - length }).collect();
        Self { max_bp, bands }
    }

    /// Row (0 = well) a band lands in when the lane is drawn with `rows` rows.
    fn row_of(&self, band: &Band, rows: usize) -> usize {
        (band.migration * rows / self.max_bp).min(rows - 1)
    }

    /// Draw the lane as text, top to bottom, labelling each occupied row.
    pub fn render(&self, rows: usize) -> String {
        let rows = rows.max(1);
        let mut slots: Vec<Vec<usize>> = vec![Vec::new(); rows];
        for band in &self.bands {
            slots[self.row_of(band, rows)].push(band.length);
        }
        let mut out = String::from(" ____\n");
        for slot in slots {
            if slot.is_empty() {
                out.push_str("|    |\n");
            } else {
                let labels: Vec<String> = slot.iter().map(|l| format!("{l} bp")).collect();
                out.push_str(&format!("|####| {}\n", labels.join(", ")));
            }
        }
        out.push_str("|____|\n");
        out
    }
}
