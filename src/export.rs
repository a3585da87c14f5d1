use crate::errors::PmfSeekError;
use crate::models::PeakList;
use crate::protein::models::ProteinSequence;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

#[derive(Debug, Clone, Serialize)]
pub struct PeakRecord<'a, M> {
    pub protein_id: u32,
    pub description: &'a str,
    pub mass: M,
    pub start: usize,
    pub length: usize,
    pub miscleavages: usize,
}

const CSV_LABELS: [&str; 6] = [
    "protein_id",
    "description",
    "mass",
    "start",
    "length",
    "miscleavages",
];

/// Writes one csv row per peak, proteins in input order.
pub fn write_peaks_csv<W: Write, M: Display + Copy>(
    writer: W,
    proteins: &[ProteinSequence],
    peaklists: &[PeakList<M>],
) -> Result<(), PmfSeekError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_LABELS)?;
    for (protein, peaks) in proteins.iter().zip(peaklists) {
        for peak in peaks {
            wtr.write_record(&[
                protein.id.to_string(),
                protein.description.clone(),
                peak.mass.to_string(),
                peak.start.to_string(),
                peak.length.to_string(),
                peak.miscleavages.to_string(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Writes one json record per line, proteins in input order.
pub fn write_peaks_ndjson<W: Write, M: Serialize + Copy>(
    mut writer: W,
    proteins: &[ProteinSequence],
    peaklists: &[PeakList<M>],
) -> Result<(), PmfSeekError> {
    for (protein, peaks) in proteins.iter().zip(peaklists) {
        for peak in peaks {
            let record = PeakRecord {
                protein_id: protein.id,
                description: &protein.description,
                mass: peak.mass,
                start: peak.start,
                length: peak.length,
                miscleavages: peak.miscleavages,
            };
            serde_json::to_writer(&mut writer, &record)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FragmentPeak;
    use std::sync::Arc;

    fn test_protein() -> ProteinSequence {
        ProteinSequence {
            id: 0,
            description: "sp|P1|TEST".to_string(),
            sequence: Arc::from("AKA"),
        }
    }

    fn test_peaks() -> PeakList<f64> {
        vec![
            FragmentPeak {
                mass: 3.0,
                start: 0,
                length: 2,
                miscleavages: 0,
            },
            FragmentPeak {
                mass: 1.0,
                start: 2,
                length: 1,
                miscleavages: 0,
            },
        ]
    }

    #[test]
    fn test_csv_export() {
        let mut out = Vec::new();
        write_peaks_csv(&mut out, &[test_protein()], &[test_peaks()]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "protein_id,description,mass,start,length,miscleavages"
        );
        assert_eq!(lines[1], "0,sp|P1|TEST,3,0,2,0");
        assert_eq!(lines[2], "0,sp|P1|TEST,1,2,1,0");
    }

    #[test]
    fn test_ndjson_export() {
        let mut out = Vec::new();
        write_peaks_ndjson(&mut out, &[test_protein()], &[test_peaks()]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"protein_id":0,"description":"sp|P1|TEST","mass":3.0,"start":0,"length":2,"miscleavages":0}"#
        );
    }

    #[test]
    fn test_empty_peaklists_write_header_only() {
        let mut out = Vec::new();
        write_peaks_csv::<_, f64>(&mut out, &[], &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
