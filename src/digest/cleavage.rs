use std::fmt;
use std::str::FromStr;

/// Constant-time membership test over single-byte residue codes.
#[derive(Clone)]
pub struct ResidueSet {
    members: [bool; 256],
}

impl ResidueSet {
    pub fn new(residues: &str) -> Self {
        let mut members = [false; 256];
        for b in residues.bytes() {
            members[b as usize] = true;
        }
        Self { members }
    }

    pub fn contains(&self, residue: u8) -> bool {
        self.members[residue as usize]
    }
}

impl fmt::Debug for ResidueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let residues: String = (0..=255u8)
            .filter(|&b| self.members[b as usize])
            .map(|b| b as char)
            .collect();
        f.debug_tuple("ResidueSet").field(&residues).finish()
    }
}

/// Where a sequence may be cut.
///
/// The sequence is cut after every residue in `cleave`, unless the next
/// residue is in `prohibit`. `keep_cleavage_residue` decides whether the
/// cleavage residue stays part of the fragment (tryptic digestion) or is
/// discarded (RNase-style digestion).
#[derive(Debug, Clone)]
pub struct CleavageRule {
    pub cleave: ResidueSet,
    pub prohibit: ResidueSet,
    pub keep_cleavage_residue: bool,
}

impl CleavageRule {
    pub fn new(cleave: &str, prohibit: &str, keep_cleavage_residue: bool) -> Self {
        Self {
            cleave: ResidueSet::new(cleave),
            prohibit: ResidueSet::new(prohibit),
            keep_cleavage_residue,
        }
    }

    pub fn trypsin() -> Self {
        Self::new("KR", "P", true)
    }

    pub fn trypsin_norestriction() -> Self {
        Self::new("KR", "", true)
    }

    pub fn lys_c() -> Self {
        Self::new("K", "", true)
    }

    pub fn chymotrypsin() -> Self {
        Self::new("FWY", "P", true)
    }

    pub fn cleaves_after(&self, residue: u8) -> bool {
        self.cleave.contains(residue)
    }

    pub fn prohibits(&self, residue: u8) -> bool {
        self.prohibit.contains(residue)
    }
}

/// Named cleavage schemes for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enzyme {
    Trypsin,
    TrypsinNorestriction,
    LysC,
    Chymotrypsin,
}

impl Enzyme {
    pub fn rule(&self) -> CleavageRule {
        match self {
            Enzyme::Trypsin => CleavageRule::trypsin(),
            Enzyme::TrypsinNorestriction => CleavageRule::trypsin_norestriction(),
            Enzyme::LysC => CleavageRule::lys_c(),
            Enzyme::Chymotrypsin => CleavageRule::chymotrypsin(),
        }
    }
}

impl FromStr for Enzyme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trypsin" => Ok(Enzyme::Trypsin),
            "trypsin-norestriction" | "trypsin_norestriction" => Ok(Enzyme::TrypsinNorestriction),
            "lys-c" | "lys_c" | "lysc" => Ok(Enzyme::LysC),
            "chymotrypsin" => Ok(Enzyme::Chymotrypsin),
            _ => Err(format!(
                "Unknown enzyme: {}. Use 'trypsin', 'trypsin-norestriction', 'lys-c' or 'chymotrypsin'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residue_set_membership() {
        let set = ResidueSet::new("KR");
        assert!(set.contains(b'K'));
        assert!(set.contains(b'R'));
        assert!(!set.contains(b'P'));
        assert!(!set.contains(0));
    }

    #[test]
    fn test_empty_set_contains_nothing() {
        let set = ResidueSet::new("");
        assert!((0..=255u8).all(|b| !set.contains(b)));
    }

    #[test]
    fn test_trypsin_rule() {
        let rule = CleavageRule::trypsin();
        assert!(rule.cleaves_after(b'K'));
        assert!(rule.cleaves_after(b'R'));
        assert!(!rule.cleaves_after(b'A'));
        assert!(rule.prohibits(b'P'));
        assert!(rule.keep_cleavage_residue);
    }

    #[test]
    fn test_enzyme_from_str() {
        assert_eq!("trypsin".parse::<Enzyme>().unwrap(), Enzyme::Trypsin);
        assert_eq!("Lys-C".parse::<Enzyme>().unwrap(), Enzyme::LysC);
        assert_eq!(
            "trypsin_norestriction".parse::<Enzyme>().unwrap(),
            Enzyme::TrypsinNorestriction
        );
        assert!("pepsin".parse::<Enzyme>().is_err());
    }
}
