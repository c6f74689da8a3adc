//! Template loading from **single-record FASTA** (plain or gzipped).
//!
//! ### Design
//! - Parsed with `needletail`, which sniffs gzip/bzip2/xz compression.
//! - Exactly one FASTA record is accepted. Empty input, FASTQ input, a second
//!   record or a malformed record are reported as [`PcrError::FastaParse`].
//! - The record id is the header up to the first whitespace.
//!
//! ### Example
//! ```
//! let t = vpcr::fasta::read_template(&b">amp1 test\nACGT\nACGT\n"[..]).unwrap();
//! assert_eq!(t.id.as_deref(), Some("amp1"));
//! assert_eq!(t.sequence, "ACGTACGT");
//! ```
use std::io::Read;
use std::path::Path;

use log::{debug, info};
use needletail::{parse_fastx_file, parse_fastx_reader, FastxReader};

use crate::error::PcrError;
use crate::sequence::Template;

fn parse_err(e: impl std::fmt::Display) -> PcrError {
    PcrError::FastaParse(e.to_string())
}

fn single_record(mut reader: Box<dyn FastxReader + '_>) -> Result<Template, PcrError> {
    let template = match reader.next() {
        Some(record) => {
            let rec = record.map_err(parse_err)?;
            if rec.qual().is_some() {
                return Err(PcrError::FastaParse("expected FASTA, found FASTQ".to_string()));
            }
            let header = String::from_utf8_lossy(rec.id()).to_string();
            let id = header.split_whitespace().next().unwrap_or_default().to_string();
            let sequence = String::from_utf8_lossy(&rec.seq()).to_string();
            Template { id: Some(id), sequence }
        }
        None => return Err(PcrError::FastaParse("no records found".to_string())),
    };
    if reader.next().is_some() {
        return Err(PcrError::FastaParse("more than one record found".to_string()));
    }
    info!("Loaded sequence: {}", template.id.as_deref().unwrap_or("?"));
    debug!("fasta: record {:?} with {} bases", template.id, template.sequence.len());
    Ok(template)
}

/// Read a single-record FASTA from any reader (e.g. uploaded bytes).
pub fn read_template<R: Read + Send>(reader: R) -> Result<Template, PcrError> {
    single_record(parse_fastx_reader(reader).map_err(parse_err)?)
}

/// Read a single-record FASTA file from disk.
pub fn read_template_file<P: AsRef<Path>>(path: P) -> Result<Template, PcrError> {
    single_record(parse_fastx_file(path.as_ref()).map_err(parse_err)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_multi_line_record() {
        let t = read_template(&b">seq1 some description\nATCG\nGCTA\n"[..]).unwrap();
        assert_eq!(t.id.as_deref(), Some("seq1"));
        assert_eq!(t.sequence, "ATCGGCTA");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(read_template(&b""[..]), Err(PcrError::FastaParse(_))));
    }

    #[test]
    fn rejects_multiple_records() {
        let r = read_template(&b">a\nACGT\n>b\nTTTT\n"[..]);
        assert!(matches!(r, Err(PcrError::FastaParse(_))));
    }

    #[test]
    fn rejects_fastq() {
        let r = read_template(&b"@r1\nACGT\n+\nIIII\n"[..]);
        assert!(matches!(r, Err(PcrError::FastaParse(_))));
    }

    #[test]
    fn rejects_plain_text() {
        let r = read_template(&b"ACGTACGT\n"[..]);
        assert!(matches!(r, Err(PcrError::FastaParse(_))));
    }

    #[test]
    fn reads_file_from_disk() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b">chr_test\nacgtacgt\n").unwrap();
        let t = read_template_file(file.path()).unwrap();
        assert_eq!(t.id.as_deref(), Some("chr_test"));
        assert_eq!(t.sequence, "acgtacgt");
    }

    #[test]
    fn file_and_reader_loads_agree() {
        use std::io::Write;
        let content = b">frag1 upload\nGGCC\nAATT\n";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        assert_eq!(read_template_file(file.path()).unwrap(), read_template(&content[..]).unwrap());
    }
}
