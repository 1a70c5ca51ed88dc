//! Collapse bursts of input into one trailing value.

/// Delay applied to keystroke-driven searches.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

pub use payloads::requests::MIN_SEARCH_LEN;

/// Generation-based debouncer. Each pushed value gets a ticket; when its
/// timer elapses, only the newest ticket yields the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` as the latest input and return its ticket.
    pub fn push(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    /// Called when the timer for `ticket` elapses.
    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::requests::search_filter;

    #[test]
    fn only_the_last_keystroke_fires() {
        let mut debouncer = Debouncer::new();
        let tickets: Vec<u64> = ["a", "ab", "abc"]
            .into_iter()
            .map(|text| debouncer.push(text.to_string()))
            .collect();

        let fired: Vec<String> = tickets
            .into_iter()
            .filter_map(|ticket| debouncer.fire(ticket))
            .collect();

        assert_eq!(fired, vec!["abc".to_string()]);
        assert_eq!(search_filter(&fired[0]).as_deref(), Some("abc"));
    }

    #[test]
    fn a_ticket_fires_at_most_once() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.push(1);
        assert_eq!(debouncer.fire(ticket), Some(1));
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn later_input_after_firing_gets_a_fresh_ticket() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.push("jo");
        assert_eq!(debouncer.fire(first), Some("jo"));
        let second = debouncer.push("joa");
        assert_ne!(first, second);
        assert_eq!(debouncer.fire(second), Some("joa"));
    }
}
