//! Row identifier generation.
//!
//! Every output row gets a fresh identifier with no relation to anything in
//! the source file, so two runs over the same input produce different rows.
//! The generator is injectable so tests can substitute a deterministic
//! sequence.

use uuid::Uuid;

/// Source of per-row identifiers.
pub trait IdGenerator {
    /// Produce the next identifier, formatted as `{8-4-4-4-12}` uppercase
    /// hexadecimal groups.
    fn next_id(&mut self) -> String;
}

/// Random UUIDv4 identifiers, the normal production source.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        format!("{{{}}}", Uuid::new_v4().to_string().to_uppercase())
    }
}

/// Deterministic counter-based identifiers for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Start counting from 1.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("{{00000000-0000-0000-0000-{:012X}}}", self.next)
    }
}
