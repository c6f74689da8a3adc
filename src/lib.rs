#![forbid(unsafe_code)]
//! # vpcr
//!
//! In-silico **PCR**: given a DNA template and a forward/reverse primer pair,
//! locate every exact primer binding site, enumerate the amplification
//! products and report their positions, lengths and GC content.
//!
//! ## Highlights
//! - 🧬 **Exact matching**: overlapping binding sites are all found; no
//!   mismatches, no degenerate bases.
//! - 🔁 **Reverse primer by reverse complement**: the reverse primer is given
//!   5'→3' and searched on the template as its reverse complement.
//! - 📋 **Every pairing**: each forward site before each reverse site yields a
//!   product; nothing is deduplicated.
//!
//! ## Pipeline
//! 1. [`sequence`] cleans the template and primers.
//! 2. [`sequence::find_all`] lists binding sites.
//! 3. [`amplicon::enumerate`] pairs them into products.
//! 4. [`report`] and [`gel`] turn products into rows, tables and a gel lane.
//!
//! ## Examples
//! ```rust
//! let run = vpcr::run_pcr("ATGCG TACGT\ntagc", "atgcg", "GCTA").unwrap();
//! assert_eq!(run.products.len(), 1);
//! let p = &run.products[0];
//! assert_eq!((p.start, p.end, p.len()), (0, 14, 14));
//! assert_eq!(p.gc_percent(), 50.0);
//!
//! // Missing input is an error, not an empty result:
//! assert!(vpcr::run_pcr("", "ACGT", "ACGT").is_err());
//! ```

pub mod amplicon;
pub mod error;
pub mod fasta;
pub mod gel;
pub mod report;
pub mod sequence;

use log::{debug, warn};

pub use amplicon::Amplicon;
pub use error::{MissingInput, PcrError};
pub use sequence::Template;

/// Everything a single PCR run produced.
#[derive(Clone, Debug)]
pub struct PcrRun {
    /// Normalized template.
    pub template: String,
    /// Forward primer as searched (uppercased).
    pub forward: String,
    /// Reverse complement of the reverse primer, as searched.
    pub reverse_complement: String,
    /// Forward primer start positions, ascending.
    pub forward_sites: Vec<usize>,
    /// Reverse binding-site start positions, ascending.
    pub reverse_sites: Vec<usize>,
    /// Product set in pairing order.
    pub products: Vec<Amplicon>,
}

impl PcrRun {
    /// `false` is the soft "no products" outcome; the run itself succeeded.
    pub fn has_products(&self) -> bool { !self.products.is_empty() }

    /// Product lengths in product-set order, for [`gel::GelLane`].
    pub fn lengths(&self) -> Vec<usize> { gel::lengths(&self.products) }
}

/// Run PCR on raw template text with raw 5'→3' primers.
///
/// # Errors
/// [`PcrError::InputMissing`] when the cleaned template is empty
/// ([`MissingInput::NoTemplate`]) or either primer is empty
/// ([`MissingInput::MissingPrimer`]). No search is attempted in that case.
pub fn run_pcr(template_text: &str, forward_primer: &str, reverse_primer: &str) -> Result<PcrRun, PcrError> {
    let template = sequence::normalize_template(template_text);
    let forward = sequence::normalize_primer(forward_primer);
    let reverse_complement = sequence::reverse_complement(reverse_primer);

    if template.is_empty() {
        return Err(PcrError::InputMissing(MissingInput::NoTemplate));
    }
    if forward.is_empty() || reverse_complement.is_empty() {
        return Err(PcrError::InputMissing(MissingInput::MissingPrimer));
    }

    if !sequence::is_canonical(&template) {
        warn!("template contains characters outside ACGT; they will never match a primer");
    }
    if !sequence::is_canonical(&forward) {
        warn!("forward primer contains characters outside ACGT: {forward}");
    }
    if !sequence::is_canonical(reverse_primer) {
        warn!("reverse primer contains characters outside ACGT: {reverse_primer}");
    }

    let forward_sites = sequence::find_all(&template, &forward);
    let reverse_sites = sequence::find_all(&template, &reverse_complement);
    debug!("pcr: {} forward sites, {} reverse sites in {} bp", forward_sites.len(), reverse_sites.len(), template.len());

    let products = amplicon::enumerate(&template, &forward_sites, &reverse_sites, reverse_complement.len());
    debug!("pcr: {} products", products.len());

    Ok(PcrRun { template, forward, reverse_complement, forward_sites, reverse_sites, products })
}

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn worked_example_yields_one_product() {
        // reverse complement of GCTA is TAGC
        let run = run_pcr("ATGCGTACGTTAGC", "ATGCG", "GCTA").unwrap();
        assert_eq!(run.reverse_complement, "TAGC");
        assert_eq!(run.forward_sites, vec![0]);
        assert_eq!(run.reverse_sites, vec![10]);
        assert_eq!(run.products.len(), 1);
        let p = &run.products[0];
        assert_eq!((p.start, p.end), (0, 14));
        assert_eq!(p.len(), 14);
        let gc = p.sequence.bytes().filter(|b| *b == b'G' || *b == b'C').count();
        assert_eq!(p.gc_percent(), 100.0 * gc as f64 / 14.0);
    }

    #[test]
    fn messy_input_is_normalized_before_search() {
        let run = run_pcr("atgcg TACGT\nTAGC\n", "atgcg", "gcta").unwrap();
        assert_eq!(run.template, "ATGCGTACGTTAGC");
        assert_eq!(run.products.len(), 1);
    }

    #[test]
    fn empty_template_is_input_missing() {
        let err = run_pcr(" \n", "ACGT", "ACGT").unwrap_err();
        assert!(matches!(err, PcrError::InputMissing(MissingInput::NoTemplate)));
    }

    #[test]
    fn empty_primers_are_input_missing() {
        let err = run_pcr("ACGT", "", "ACGT").unwrap_err();
        assert!(matches!(err, PcrError::InputMissing(MissingInput::MissingPrimer)));
        let err = run_pcr("ACGT", "ACGT", "").unwrap_err();
        assert!(matches!(err, PcrError::InputMissing(MissingInput::MissingPrimer)));
    }

    #[test]
    fn template_is_checked_before_primers() {
        let err = run_pcr("", "", "").unwrap_err();
        assert!(matches!(err, PcrError::InputMissing(MissingInput::NoTemplate)));
    }

    #[test]
    fn no_binding_sites_is_an_empty_success() {
        let run = run_pcr("AAAAAAAA", "CCC", "CCC").unwrap();
        assert!(!run.has_products());
        assert!(run.forward_sites.is_empty());
    }

    #[test]
    fn reverse_site_before_forward_site_gives_nothing() {
        // forward TTTT only at 4, reverse complement AAAA only at 0
        let run = run_pcr("AAAATTTT", "TTTT", "TTTT").unwrap();
        assert_eq!(run.forward_sites, vec![4]);
        assert_eq!(run.reverse_sites, vec![0]);
        assert!(!run.has_products());
    }

    #[test]
    fn every_valid_pair_is_kept() {
        // forward AA at 0,1,2; reverse complement TT at 5,6
        let run = run_pcr("AAAACTTT", "AA", "AA").unwrap();
        assert_eq!(run.forward_sites, vec![0, 1, 2]);
        assert_eq!(run.reverse_sites, vec![5, 6]);
        let spans: Vec<_> = run.products.iter().map(|p| (p.start, p.end)).collect();
        assert_eq!(spans, vec![(0, 7), (0, 8), (1, 7), (1, 8), (2, 7), (2, 8)]);
        assert_eq!(run.lengths(), vec![7, 8, 6, 7, 5, 6]);
    }

    #[test]
    fn sites_may_overlap_inside_the_product() {
        // forward ACGT at 0, reverse complement CGTA at 1
        let run = run_pcr("ACGTA", "ACGT", "TACG").unwrap();
        assert_eq!(run.reverse_complement, "CGTA");
        assert_eq!(run.products.len(), 1);
        assert_eq!(run.products[0].sequence, "ACGTA");
    }
}
