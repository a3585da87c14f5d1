#[derive(Debug)]
pub enum PmfSeekError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnknownResidue { residue: char },
}

impl std::fmt::Display for PmfSeekError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type Result<T> = std::result::Result<T, PmfSeekError>;

impl From<std::io::Error> for PmfSeekError {
    fn from(x: std::io::Error) -> Self {
        Self::Io(x)
    }
}

impl From<csv::Error> for PmfSeekError {
    fn from(x: csv::Error) -> Self {
        Self::Csv(x)
    }
}

impl From<serde_json::Error> for PmfSeekError {
    fn from(x: serde_json::Error) -> Self {
        Self::Json(x)
    }
}
