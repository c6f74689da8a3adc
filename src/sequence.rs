//! Sequence normalization and exact occurrence search.
//!
//! Templates arrive as free text (pasted, multi-line, mixed case). They are
//! folded to uppercase with all ASCII whitespace removed. Primers are only
//! uppercased. The reverse primer is searched for via its reverse complement.
//!
//! Only the four canonical bases are complemented; any other byte is passed
//! through (uppercased). Such bytes never match a primer made of `ACGT`.
//!
//! # Examples
//! ```
//! use vpcr::sequence::{normalize_template, reverse_complement, find_all};
//! assert_eq!(normalize_template("atg cg\nta"), "ATGCGTA");
//! assert_eq!(reverse_complement("gcta"), "TAGC");
//! assert_eq!(find_all("AAAA", "AA"), vec![0, 1, 2]);
//! ```
use bio::alphabets::dna;

/// A template sequence with the record id it was loaded from (if any).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Template {
    /// FASTA record id, `None` for pasted text.
    pub id: Option<String>,
    /// Template text; normalized by [`crate::run_pcr`] before searching.
    pub sequence: String,
}

impl Template {
    /// Wrap pasted text as an anonymous template.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { id: None, sequence: text.into() }
    }

    /// The first `n` characters of the sequence, for log previews.
    pub fn head(&self, n: usize) -> &str {
        match self.sequence.char_indices().nth(n) {
            Some((i, _)) => &self.sequence[..i],
            None => &self.sequence,
        }
    }
}

/// Uppercase `raw` and strip every ASCII whitespace character.
///
/// Idempotent: normalizing an already normalized string returns it unchanged.
pub fn normalize_template(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Uppercase a primer verbatim (no whitespace stripping).
pub fn normalize_primer(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

#[inline]
fn complement(c: char) -> char {
    match c.to_ascii_uppercase() {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        other => other,
    }
}

/// Reverse complement of `raw`, case-normalized to uppercase.
///
/// `A<->T` and `C<->G`; every other character is kept as-is (uppercased).
pub fn reverse_complement(raw: &str) -> String {
    raw.chars().rev().map(complement).collect()
}

/// `true` when `seq` consists only of `A`, `C`, `G`, `T` (either case).
pub fn is_canonical(seq: &str) -> bool {
    dna::alphabet().is_word(seq.as_bytes())
}

/// All zero-based start positions of `needle` in `host`, ascending.
///
/// Overlapping occurrences are reported: after each hit the search resumes one
/// character further, not past the match. An empty needle has no occurrences.
pub fn find_all(host: &str, needle: &str) -> Vec<usize> {
    let (h, n) = (host.as_bytes(), needle.as_bytes());
    if n.is_empty() || h.len() < n.len() {
        return Vec::new();
    }
    h.windows(n.len())
        .enumerate()
        .filter(|(_, w)| *w == n)
        .map(|(i, _)| i)
        .collect()
}
