//! Display rows for products and the writers that emit them.
//!
//! Each [`ProductRow`] carries a 1-based index, the span, the length, GC% and a
//! truncated preview. Rows can be written as a pretty table or CSV (both via
//! a polars `DataFrame`), as JSON, or as FASTA records.
use std::io::Write;

use bio::io::fasta;
use polars::prelude::*;
use serde::Serialize;

use crate::amplicon::Amplicon;
use crate::error::PcrError;

/// Options for building product rows.
#[derive(Clone, Debug)]
pub struct ReportOptions {
    /// Number of leading bases kept in [`ProductRow::sequence_preview`].
    pub preview_len: usize,
}

impl Default for ReportOptions {
    fn default() -> Self { Self { preview_len: 50 } }
}

/// One product as presented to the user.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductRow {
    /// 1-based position in the product set.
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub length: usize,
    /// Unrounded GC percentage; see [`ProductRow::gc_display`].
    pub gc_percent: f64,
    pub sequence_preview: String,
    pub full_sequence: String,
}

impl ProductRow {
    /// GC% formatted with two decimals.
    pub fn gc_display(&self) -> String { format!("{:.2}", self.gc_percent) }
}

/// First `n` characters of `seq`, with `...` appended when it was cut.
pub fn preview(seq: &str, n: usize) -> String {
    match seq.char_indices().nth(n) {
        Some((i, _)) => format!("{}...", &seq[..i]),
        None => seq.to_string(),
    }
}

/// Turn a product set into display rows, preserving order.
pub fn product_rows(products: &[Amplicon], opts: &ReportOptions) -> Vec<ProductRow> {
    products
        .iter()
        .enumerate()
        .map(|(i, p)| ProductRow {
            index: i + 1,
            start: p.start,
            end: p.end,
            length: p.len(),
            gc_percent: p.gc_percent(),
            sequence_preview: preview(&p.sequence, opts.preview_len),
            full_sequence: p.sequence.clone(),
        })
        .collect()
}

/// Build the product table.
///
/// Columns: `Product #`, `Start`, `End`, `Length (bp)`, `GC Content (%)` and
/// `Seq (first N bp)`.
pub fn to_dataframe(rows: &[ProductRow], opts: &ReportOptions) -> PolarsResult<DataFrame> {
    let preview_header = format!("Seq (first {} bp)", opts.preview_len);
    df!(
        "Product #"              => rows.iter().map(|r| r.index as u64).collect::<Vec<_>>(),
        "Start"                  => rows.iter().map(|r| r.start as u64).collect::<Vec<_>>(),
        "End"                    => rows.iter().map(|r| r.end as u64).collect::<Vec<_>>(),
        "Length (bp)"            => rows.iter().map(|r| r.length as u64).collect::<Vec<_>>(),
        "GC Content (%)"         => rows.iter().map(|r| r.gc_display()).collect::<Vec<_>>(),
        preview_header.as_str()  => rows.iter().map(|r| r.sequence_preview.clone()).collect::<Vec<_>>(),
    )
}

/// Write the product table as CSV with a header line.
pub fn write_csv<W: Write>(rows: &[ProductRow], opts: &ReportOptions, w: W) -> Result<(), PcrError> {
    let mut df = to_dataframe(rows, opts)?;
    CsvWriter::new(w).include_header(true).finish(&mut df)?;
    Ok(())
}

/// Write the rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(rows: &[ProductRow], w: W) -> Result<(), PcrError> {
    serde_json::to_writer_pretty(w, rows)?;
    Ok(())
}

/// Write one FASTA record per product (`product_<index>`, description `start..end len=N`).
pub fn write_fasta<W: Write>(rows: &[ProductRow], w: W) -> Result<(), PcrError> {
    let mut writer = fasta::Writer::new(w);
    for r in rows {
        let id = format!("product_{}", r.index);
        let desc = format!("{}..{} len={}", r.start, r.end, r.length);
        writer.write(&id, Some(desc.as_str()), r.full_sequence.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}
