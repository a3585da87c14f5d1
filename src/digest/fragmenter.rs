use crate::digest::cleavage::CleavageRule;
use crate::digest::modifiers::PeakListModifier;
use crate::errors::PmfSeekError;
use crate::mass::alphabet::MassLookup;
use crate::models::{FragmentPeak, PeakList};
use num_traits::Zero;
use rayon::prelude::*;
use std::fmt;
use std::ops::AddAssign;
use std::sync::Arc;

// One boundary-delimited segment between consecutive cleavage points.
// `cleavage_mass`/`cleavage_length` are zero for the trailing segment,
// which has no terminating cleavage residue.
#[derive(Debug, Clone, Copy)]
struct Subfragment<M> {
    mass: M,
    cleavage_mass: M,
    length: usize,
    cleavage_length: usize,
    start: usize,
}

/// Predicts the peptide mass fingerprint of a sequence.
///
/// The sequence is cut after every cleavage residue (unless followed by a
/// prohibition residue), and every run of up to `max_miscleavages + 1`
/// consecutive pieces is emitted as one [`FragmentPeak`]. Peaks are emitted
/// in order of occurrence in the sequence, duplicates included; attach a
/// modifier for sorted or unique output.
pub struct PmfFragmenter<L: MassLookup> {
    masses: L,
    rule: CleavageRule,
    max_miscleavages: usize,
    modifier: Option<Arc<dyn PeakListModifier<L::Mass> + Send + Sync>>,
}

impl<L: MassLookup> PmfFragmenter<L> {
    pub fn new(masses: L, rule: CleavageRule) -> Self {
        Self {
            masses,
            rule,
            max_miscleavages: 0,
            modifier: None,
        }
    }

    pub fn with_modifier(
        mut self,
        modifier: Arc<dyn PeakListModifier<L::Mass> + Send + Sync>,
    ) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn set_max_miscleavages(&mut self, max_miscleavages: usize) {
        self.max_miscleavages = max_miscleavages;
    }

    pub fn max_miscleavages(&self) -> usize {
        self.max_miscleavages
    }
}

impl<L: MassLookup + Clone> Clone for PmfFragmenter<L> {
    // A cloned fragmenter keeps the alphabet, rule and modifier, but starts
    // over at zero miscleavages, same as a freshly constructed one.
    fn clone(&self) -> Self {
        Self {
            masses: self.masses.clone(),
            rule: self.rule.clone(),
            max_miscleavages: 0,
            modifier: self.modifier.clone(),
        }
    }
}

impl<L: MassLookup + fmt::Debug> fmt::Debug for PmfFragmenter<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PmfFragmenter")
            .field("masses", &self.masses)
            .field("rule", &self.rule)
            .field("max_miscleavages", &self.max_miscleavages)
            .field("has_modifier", &self.modifier.is_some())
            .finish()
    }
}

impl<L: MassLookup> PmfFragmenter<L>
where
    L::Mass: Copy + AddAssign + Zero,
{
    /// Fills `peaks` with the fingerprint of `sequence`.
    ///
    /// `peaks` is cleared first; prior contents are discarded. An empty
    /// sequence yields an empty list.
    pub fn predict_spectrum(
        &self,
        peaks: &mut PeakList<L::Mass>,
        sequence: &str,
    ) -> Result<(), PmfSeekError> {
        peaks.clear();
        let subfragments = self.scan(sequence)?;
        self.expand(&subfragments, peaks);
        if let Some(modifier) = &self.modifier {
            modifier.modify(peaks);
        }
        Ok(())
    }

    /// Convenience wrapper returning a fresh peak list.
    ///
    /// Example:
    /// ```
    /// use pmfseek::digest::cleavage::CleavageRule;
    /// use pmfseek::digest::fragmenter::PmfFragmenter;
    /// use pmfseek::mass::alphabet::ResidueMasses;
    ///
    /// let fragmenter = PmfFragmenter::new(ResidueMasses::monoisotopic(), CleavageRule::trypsin());
    /// let peaks = fragmenter.predict("PEPTIDEKAY").unwrap();
    /// assert_eq!(peaks.len(), 2);
    /// assert_eq!(peaks[0].length, 8);
    /// ```
    pub fn predict(&self, sequence: &str) -> Result<PeakList<L::Mass>, PmfSeekError> {
        let mut peaks = PeakList::new();
        self.predict_spectrum(&mut peaks, sequence)?;
        Ok(peaks)
    }

    fn scan(&self, sequence: &str) -> Result<Vec<Subfragment<L::Mass>>, PmfSeekError> {
        let seq = sequence.as_bytes();
        let mut subfragments = Vec::new();
        let mut current = Subfragment {
            mass: <L::Mass>::zero(),
            cleavage_mass: <L::Mass>::zero(),
            length: 0,
            cleavage_length: 0,
            start: 0,
        };
        for (i, &residue) in seq.iter().enumerate() {
            let mut cleave_here = self.rule.cleaves_after(residue);
            // The cut is suppressed when a prohibition residue follows; a
            // cleavage residue at the very end always cuts.
            if cleave_here {
                if let Some(&next) = seq.get(i + 1) {
                    cleave_here = !self.rule.prohibits(next);
                }
            }
            if cleave_here {
                current.cleavage_length = 1;
                current.cleavage_mass = self.masses.mass(residue)?;
                subfragments.push(current);
                current = Subfragment {
                    mass: <L::Mass>::zero(),
                    cleavage_mass: <L::Mass>::zero(),
                    length: 0,
                    cleavage_length: 0,
                    start: i + 1,
                };
            } else {
                current.mass += self.masses.mass(residue)?;
                current.length += 1;
            }
        }
        if current.length > 0 {
            subfragments.push(current);
        }
        Ok(subfragments)
    }

    fn expand(&self, subfragments: &[Subfragment<L::Mass>], peaks: &mut PeakList<L::Mass>) {
        for (j, lead) in subfragments.iter().enumerate() {
            let mut length = 0;
            let mut mass = <L::Mass>::zero();
            for (k, sub) in subfragments[j..]
                .iter()
                .take(self.max_miscleavages.saturating_add(1))
                .enumerate()
            {
                length += sub.length;
                mass += sub.mass;
                let (peak_mass, peak_length) = if self.rule.keep_cleavage_residue {
                    (mass + sub.cleavage_mass, length + sub.cleavage_length)
                } else {
                    (mass, length)
                };
                if peak_length > 0 {
                    peaks.push(FragmentPeak {
                        mass: peak_mass,
                        start: lead.start,
                        length: peak_length,
                        miscleavages: k,
                    });
                }
                // The cleavage residue is interior to every longer fragment
                // that continues past this boundary.
                mass += sub.cleavage_mass;
                length += sub.cleavage_length;
            }
        }
    }
}

impl<L> PmfFragmenter<L>
where
    L: MassLookup + Sync,
    L::Mass: Copy + AddAssign + Zero + Send,
{
    pub fn predict_multiple(
        &self,
        sequences: &[Arc<str>],
    ) -> Result<Vec<PeakList<L::Mass>>, PmfSeekError> {
        sequences
            .par_iter()
            .map(|seq| self.predict(seq.as_ref()))
            .collect()
    }
}
