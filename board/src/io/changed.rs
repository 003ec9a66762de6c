/// Latches the last seen value and reports when a newly stored one
/// differs.
pub struct Changed<T> {
    value: Option<T>,
}

impl<T> Default for Changed<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T: PartialEq> Changed<T> {
    pub fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Stores `value`, returning true if it differs from the previous one.
    ///
    /// Storing into an empty latch counts as a change.
    pub fn store(&mut self, value: T) -> bool {
        let value = Some(value);
        let changed = value != self.value;
        self.value = value;
        changed
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_latch_reports_first_store_as_change() {
        let mut latch = Changed::default();
        assert!(latch.store(5u32));
        assert!(!latch.store(5));
        assert!(latch.store(6));
        assert_eq!(latch.get(), Some(&6));
    }

    #[test]
    fn seeded_latch_suppresses_the_startup_value() {
        let mut latch = Changed::new(0b1010u32);
        assert!(!latch.store(0b1010));
        assert!(latch.store(0b1011));
    }
}
