//! Navigation capability consumed by the explore codec.

use crate::route::Location;

/// Read and write access to the current location of a history stack.
///
/// The history stack owns the location; the codec reads it fresh for every
/// operation and never caches it.
pub trait Navigator {
    fn current(&self) -> Location;

    /// Navigates to `location`, adding a new history entry.
    fn push(&mut self, location: Location);
}

/// In-memory history with back/forward support.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// Moves one entry back. Returns false at the start of the history.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Moves one entry forward. Returns false at the end of the history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Navigator for MemoryHistory {
    fn current(&self) -> Location {
        self.entries[self.index].clone()
    }

    /// Drops any forward entries, as browsers do.
    fn push(&mut self, location: Location) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(path: &str) -> Location {
        Location::parse(path).unwrap()
    }

    #[test]
    fn push_and_back() {
        let mut history = MemoryHistory::new(loc("/explore/A/AllSamples/Past6M"));
        history.push(loc("/explore/B/AllSamples/Past6M"));
        assert_eq!(history.current().pathname, "/explore/B/AllSamples/Past6M");
        assert!(history.back());
        assert_eq!(history.current().pathname, "/explore/A/AllSamples/Past6M");
        assert!(!history.back());
        assert!(history.forward());
        assert!(!history.forward());
    }

    #[test]
    fn push_drops_forward_entries() {
        let mut history = MemoryHistory::new(loc("/a"));
        history.push(loc("/b"));
        history.back();
        history.push(loc("/c"));
        let paths: Vec<_> = history.entries().iter().map(|l| l.pathname.as_str()).collect();
        assert_eq!(paths, ["/a", "/c"]);
        assert!(!history.forward());
    }
}
