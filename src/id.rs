use uuid::Uuid;

/// Identifier source for all newly created entities. Injected into the store
/// transitions so tests can assert deterministic ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Production generator: random UUID v4 per id.
#[derive(Debug, Clone, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic generator producing `prefix-1`, `prefix-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    prefix: String,
    counter: u64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), counter: 0 }
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_valid_and_unique() {
        let mut ids = UuidGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(Uuid::parse_str(&a).is_ok());
        assert_ne!(a, b);
    }

    #[test]
    fn test_sequential_ids_are_deterministic() {
        let mut ids = SequentialGenerator::new("req");
        assert_eq!(ids.next_id(), "req-1");
        assert_eq!(ids.next_id(), "req-2");
        assert_eq!(ids.next_id(), "req-3");
    }
}
