use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ProteinSequence {
    pub id: u32, // self-incremental identifier within the input file
    pub description: String,
    pub sequence: Arc<str>,
}

#[derive(Debug, Default)]
pub struct ProteinSequenceBuilder {
    id: u32,
    description: Option<String>,
    sequence: String,
}

impl ProteinSequenceBuilder {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            description: None,
            sequence: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn append_sequence(&mut self, chunk: &str) {
        self.sequence.push_str(chunk);
    }

    pub fn build(self) -> ProteinSequence {
        ProteinSequence {
            id: self.id,
            description: self.description.unwrap_or_default(),
            sequence: self.sequence.into(),
        }
    }
}
