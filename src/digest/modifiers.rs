use crate::models::PeakList;
use std::cmp::Ordering;
use std::sync::Arc;

/// In-place post-processing of a finished peak list.
///
/// A fragmenter invokes its modifier at most once per prediction, after all
/// peaks have been generated.
pub trait PeakListModifier<M> {
    fn modify(&self, peaks: &mut PeakList<M>);
}

/// Sorts peaks by ascending mass.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortModifier;

impl<M: PartialOrd> PeakListModifier<M> for SortModifier {
    fn modify(&self, peaks: &mut PeakList<M>) {
        peaks.sort_by(|a, b| a.mass.partial_cmp(&b.mass).unwrap_or(Ordering::Equal));
    }
}

/// Sorts peaks by mass and collapses equal-mass duplicates.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnificationModifier;

impl<M: PartialOrd> PeakListModifier<M> for UnificationModifier {
    fn modify(&self, peaks: &mut PeakList<M>) {
        peaks.sort_by(|a, b| a.mass.partial_cmp(&b.mass).unwrap_or(Ordering::Equal));
        peaks.dedup_by(|a, b| a.mass == b.mass);
    }
}

/// Keeps only peaks whose residue length falls inside the window.
#[derive(Debug, Clone, Copy)]
pub struct LengthRangeModifier {
    pub min: usize,
    pub max: usize,
}

impl<M> PeakListModifier<M> for LengthRangeModifier {
    fn modify(&self, peaks: &mut PeakList<M>) {
        peaks.retain(|p| p.length >= self.min && p.length <= self.max);
    }
}

/// Applies a list of modifiers in order.
pub struct ModifierChain<M> {
    modifiers: Vec<Arc<dyn PeakListModifier<M> + Send + Sync>>,
}

impl<M> ModifierChain<M> {
    pub fn new(modifiers: Vec<Arc<dyn PeakListModifier<M> + Send + Sync>>) -> Self {
        Self { modifiers }
    }
}

impl<M> PeakListModifier<M> for ModifierChain<M> {
    fn modify(&self, peaks: &mut PeakList<M>) {
        for modifier in &self.modifiers {
            modifier.modify(peaks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FragmentPeak;

    fn peak(mass: f64, length: usize) -> FragmentPeak<f64> {
        FragmentPeak {
            mass,
            start: 0,
            length,
            miscleavages: 0,
        }
    }

    #[test]
    fn test_sort_modifier() {
        let mut peaks = vec![peak(3.0, 1), peak(1.0, 1), peak(2.0, 1)];
        SortModifier.modify(&mut peaks);
        let masses: Vec<f64> = peaks.iter().map(|p| p.mass).collect();
        assert_eq!(masses, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_unification_modifier() {
        let mut peaks = vec![peak(2.0, 1), peak(1.0, 1), peak(2.0, 3), peak(1.0, 2)];
        UnificationModifier.modify(&mut peaks);
        let masses: Vec<f64> = peaks.iter().map(|p| p.mass).collect();
        assert_eq!(masses, vec![1.0, 2.0]);
    }

    #[test]
    fn test_length_range_modifier() {
        let mut peaks = vec![peak(1.0, 1), peak(2.0, 5), peak(3.0, 10)];
        let window = LengthRangeModifier { min: 2, max: 9 };
        window.modify(&mut peaks);
        assert_eq!(peaks.len(), 1);
        assert_eq!(peaks[0].length, 5);
    }

    #[test]
    fn test_modifier_chain_applies_in_order() {
        let mut peaks = vec![peak(3.0, 1), peak(1.0, 4), peak(1.0, 5), peak(2.0, 2)];
        let chain: ModifierChain<f64> = ModifierChain::new(vec![
            Arc::new(LengthRangeModifier { min: 2, max: 5 }),
            Arc::new(UnificationModifier),
        ]);
        chain.modify(&mut peaks);
        let masses: Vec<f64> = peaks.iter().map(|p| p.mass).collect();
        assert_eq!(masses, vec![1.0, 2.0]);
    }
}
