use std::io;

use crate::source::SequenceSource;

#[derive(Debug, Clone)]
struct MemoryRecord {
    name: String,
    length: u64,
    sequence: Vec<u8>,
}

/// Sequences held in memory, in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    name: String,
    records: Vec<MemoryRecord>,
}

impl InMemorySource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Add a sequence whose reported length is its actual length
    #[must_use]
    pub fn with_sequence(self, name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        let sequence = sequence.into();
        let length = sequence.len() as u64;
        self.with_record(name, length, sequence)
    }

    /// Add a sequence with an explicit reported length, which may disagree with
    /// the sequence itself
    #[must_use]
    pub fn with_record(
        mut self,
        name: impl Into<String>,
        length: u64,
        sequence: impl Into<Vec<u8>>,
    ) -> Self {
        self.records.push(MemoryRecord {
            name: name.into(),
            length,
            sequence: sequence.into(),
        });
        self
    }
}

impl SequenceSource for InMemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn contigs(&self) -> Vec<(String, u64)> {
        self.records
            .iter()
            .map(|r| (r.name.clone(), r.length))
            .collect()
    }

    fn fetch(&self, name: &str) -> io::Result<Vec<u8>> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.sequence.clone())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no sequence named '{name}'"),
                )
            })
    }
}
