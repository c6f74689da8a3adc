//! Pairing primer binding sites into amplification products.
//!
//! Every forward site `f` is paired with every reverse binding site `r`
//! (positions of the reverse primer's reverse complement). A product is emitted
//! only when `f < r`, spanning `[f, r + revcomp_len)`. Pairs are visited with
//! forward sites outer and reverse sites inner, both ascending, and identical
//! spans from different pairs are all kept.
//!
//! # Examples
//! ```
//! use vpcr::amplicon::enumerate;
//! let products = enumerate("ATGCGTACGTTAGC", &[0], &[10], 4);
//! assert_eq!(products.len(), 1);
//! assert_eq!((products[0].start, products[0].end), (0, 14));
//! assert_eq!(products[0].gc_percent(), 50.0);
//! ```

/// One amplification product: a template slice between two binding sites.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Amplicon {
    /// Forward primer start (0-based, inclusive).
    pub start: usize,
    /// End of the reverse binding site (0-based, exclusive).
    pub end: usize,
    /// `template[start..end]`.
    pub sequence: String,
}

impl Amplicon {
    /// Product length in bases.
    pub fn len(&self) -> usize { self.sequence.len() }

    /// Always `false` for products built by [`enumerate`].
    pub fn is_empty(&self) -> bool { self.sequence.is_empty() }

    /// Number of `G` plus `C` bases.
    pub fn gc_count(&self) -> usize {
        self.sequence.bytes().filter(|b| matches!(b, b'G' | b'C')).count()
    }

    /// GC content in percent: `100 * (G + C) / len`, unrounded.
    pub fn gc_percent(&self) -> f64 {
        debug_assert!(!self.is_empty(), "products always span at least the reverse binding site");
        100.0 * self.gc_count() as f64 / self.len() as f64
    }
}

/// Build the product set from forward and reverse binding-site positions.
///
/// `template` must be the normalized template both position lists were
/// searched in, and `revcomp_len` the length of the reverse complement.
pub fn enumerate(template: &str, fwd_positions: &[usize], rev_positions: &[usize], revcomp_len: usize) -> Vec<Amplicon> {
    let mut products = Vec::new();
    for &f in fwd_positions {
        for &r in rev_positions {
            if f < r {
                let end = r + revcomp_len;
                products.push(Amplicon { start: f, end, sequence: template[f..end].to_string() });
            }
        }
    }
    products
}
