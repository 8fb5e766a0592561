//! Content-id generation for attached images.
//!
//! Generated values are safe to use as MIME content ids: no whitespace, no
//! angle brackets. The `<...>` header wrapping is applied by the attachment
//! layer, never here.

use std::sync::atomic::{AtomicU64, Ordering};

/// Produces unique identifiers for attachment content ids.
pub trait IdGenerator: Send + Sync {
    /// Generate an identifier for the given seed, usually the resource name.
    fn generate(&self, name: &str) -> String;
}

/// Sanitised seed plus a monotonic counter.
///
/// The counter is atomic so messages composed concurrently from multiple
/// threads still get distinct ids.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    sequence: AtomicU64,
}

impl SequentialIdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self, name: &str) -> String {
        let next = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{next}", sanitize(name))
    }
}

/// Random v4 uuid; the seed is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self, _name: &str) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Stable hash of the seed: the same name always maps to the same id.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashIdGenerator;

impl IdGenerator for HashIdGenerator {
    fn generate(&self, name: &str) -> String {
        hex::encode(xxhash_rust::xxh3::xxh3_64(name.as_bytes()).to_be_bytes())
    }
}

/// Strip characters a MIME content id must not contain.
fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '<' && *c != '>')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_are_unique_and_ordered() {
        let generator = SequentialIdGenerator::new();
        assert_eq!(generator.generate("logo.gif"), "logo.gif1");
        assert_eq!(generator.generate("logo.gif"), "logo.gif2");
    }

    #[test]
    fn sequential_seed_is_sanitized() {
        let generator = SequentialIdGenerator::new();
        assert_eq!(generator.generate("my logo <v2>.gif"), "mylogov2.gif1");
    }

    #[test]
    fn hash_ids_are_stable_per_seed() {
        let generator = HashIdGenerator;
        assert_eq!(generator.generate("logo.gif"), generator.generate("logo.gif"));
        assert_ne!(generator.generate("logo.gif"), generator.generate("other.gif"));
    }

    #[test]
    fn uuid_ids_are_mime_safe() {
        let id = UuidIdGenerator.generate("ignored");
        assert!(!id.contains(|c: char| c.is_whitespace() || c == '<' || c == '>'));
    }
}
