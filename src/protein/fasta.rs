use super::models::{ProteinSequence, ProteinSequenceBuilder};
use crate::errors::PmfSeekError;
use log::debug;
use std::path::Path;

#[derive(Debug)]
pub struct ProteinSequenceCollection {
    pub sequences: Vec<ProteinSequence>,
}

impl ProteinSequenceCollection {
    pub fn from_fasta(fasta: &str) -> ProteinSequenceCollection {
        let mut sequences = Vec::new();
        let mut current: Option<ProteinSequenceBuilder> = None;
        let mut next_id = 0;
        for line in fasta.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(header) = line.strip_prefix('>') {
                if let Some(done) = current.take() {
                    if !done.is_empty() {
                        sequences.push(done.build());
                    }
                }
                current = Some(ProteinSequenceBuilder::new(next_id).with_description(header.trim()));
                next_id += 1;
            } else {
                // Sequence data before any header goes into an anonymous
                // record.
                if current.is_none() {
                    current = Some(ProteinSequenceBuilder::new(next_id));
                    next_id += 1;
                }
                if let Some(builder) = current.as_mut() {
                    builder.append_sequence(line);
                }
            }
        }
        if let Some(done) = current {
            if !done.is_empty() {
                sequences.push(done.build());
            }
        }
        debug!("Parsed {} protein sequences", sequences.len());
        ProteinSequenceCollection { sequences }
    }

    pub fn from_fasta_file<P: AsRef<Path>>(
        file: P,
    ) -> Result<ProteinSequenceCollection, PmfSeekError> {
        let fasta = std::fs::read_to_string(file)?;
        Ok(Self::from_fasta(&fasta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fasta_parsing() {
        let fasta = r#">sp|P00001|FIRST first test protein
PEPTIDEPINK
AKAKA
PEPTIDEPINK

> second one
AAKAA
AAKAA

"#;
        let collection = ProteinSequenceCollection::from_fasta(fasta);
        assert_eq!(collection.sequences.len(), 2);
        assert_eq!(
            collection.sequences[0].sequence.as_ref(),
            "PEPTIDEPINKAKAKAPEPTIDEPINK"
        );
        assert_eq!(
            collection.sequences[0].description,
            "sp|P00001|FIRST first test protein"
        );
        assert_eq!(collection.sequences[1].sequence.as_ref(), "AAKAAAAKAA");
        assert_eq!(collection.sequences[1].description, "second one");
        assert_eq!(collection.sequences[0].id, 0);
        assert_eq!(collection.sequences[1].id, 1);
    }

    #[test]
    fn test_empty_records_are_skipped() {
        let fasta = ">only a header\n>real\nAKA\n";
        let collection = ProteinSequenceCollection::from_fasta(fasta);
        assert_eq!(collection.sequences.len(), 1);
        assert_eq!(collection.sequences[0].description, "real");
        assert_eq!(collection.sequences[0].sequence.as_ref(), "AKA");
    }

    #[test]
    fn test_headerless_input() {
        let collection = ProteinSequenceCollection::from_fasta("AKAKA\n");
        assert_eq!(collection.sequences.len(), 1);
        assert_eq!(collection.sequences[0].description, "");
        assert_eq!(collection.sequences[0].sequence.as_ref(), "AKAKA");
    }

    #[test]
    fn test_empty_input() {
        let collection = ProteinSequenceCollection::from_fasta("");
        assert!(collection.sequences.is_empty());
    }
}
