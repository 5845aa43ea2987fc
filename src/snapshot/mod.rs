// Reduction trace and session transcript

use crate::parser::token::Token;
use std::fmt;

/// Kind of a transcript line, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Echo,
    Error,
}

/// A line of session output
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLine {
    pub text: String,
    pub kind: LineKind,
}

/// Everything a session has printed, in order
#[derive(Debug, Clone)]
pub struct Transcript {
    pub lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    pub fn push(&mut self, text: String, kind: LineKind) {
        self.lines.push(TranscriptLine { text, kind });
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// Token sequence at one step of a reduction
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tokens: Vec<Token>,
    /// Rank of the pass that produced this state, `None` before the first pass
    pub rank: Option<u8>,
    /// Index of the combined token after the fold, `None` for the initial state
    pub folded_at: Option<usize>,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Self>() + self.tokens.len() * std::mem::size_of::<Token>()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            Some(rank) => write!(f, "[rank {}]", rank)?,
            None => write!(f, "[start]")?,
        }
        for token in &self.tokens {
            write!(f, " {}", token)?;
        }
        Ok(())
    }
}

/// Records the snapshots of one reduction
#[derive(Debug, Clone)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), String> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(format!(
                "Snapshot memory limit exceeded: {} + {} > {}",
                self.current_memory, snapshot_size, self.max_memory
            ));
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::Operator;

    fn snapshot(count: usize) -> Snapshot {
        Snapshot {
            tokens: vec![Token::new(1.0, Operator::Add, 2); count],
            rank: Some(3),
            folded_at: Some(0),
        }
    }

    #[test]
    fn test_manager_enforces_limit() {
        let one = snapshot(4).estimated_size();
        let mut manager = SnapshotManager::new(one * 2);

        assert!(manager.push(snapshot(4)).is_ok());
        assert!(manager.push(snapshot(4)).is_ok());
        assert!(manager.push(snapshot(4)).is_err());
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_snapshot_display() {
        let snap = Snapshot {
            tokens: vec![
                Token::new(2.0, Operator::Add, 2),
                Token::new(12.0, Operator::End, 6),
            ],
            rank: Some(2),
            folded_at: Some(1),
        };
        assert_eq!(snap.to_string(), "[rank 2] 2 + 12 =");
    }

    #[test]
    fn test_transcript_output() {
        let mut transcript = Transcript::new();
        transcript.push("1+1=".to_string(), LineKind::Input);
        transcript.push("1 + 1 = 2".to_string(), LineKind::Echo);

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.get_output(), vec!["1+1=", "1 + 1 = 2"]);
    }
}
