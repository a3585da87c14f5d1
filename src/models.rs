use serde::Serialize;

/// A single predicted peak of the mass fingerprint.
///
/// `start` and `length` are expressed in residues of the parent sequence,
/// `miscleavages` is the number of internal cleavage points the fragment
/// spans without being cut there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FragmentPeak<M> {
    pub mass: M,
    pub start: usize,
    pub length: usize,
    pub miscleavages: usize,
}

pub type PeakList<M> = Vec<FragmentPeak<M>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_serialization() {
        let peak = FragmentPeak {
            mass: 3.5,
            start: 0,
            length: 2,
            miscleavages: 0,
        };
        let json = serde_json::to_string(&peak).unwrap();
        assert_eq!(
            json,
            r#"{"mass":3.5,"start":0,"length":2,"miscleavages":0}"#
        );
    }
}
