//! History abstraction.
//!
//! # Responsibilities
//! - Report the current location (initial load, back/forward)
//! - Record new entries (push) or overwrite the current one (replace)
//!
//! # Design Decisions
//! - The host's history mechanism is injected, so the controller runs without a browser
//! - Back/forward are host actions; the host calls the controller afterwards
//! - `MemoryHistory` keeps a linear stack with a cursor; pushing truncates forward entries

use crate::navigation::location::Location;

/// Platform history mechanism the controller synchronizes with.
pub trait History {
    /// Location of the current entry.
    fn current_location(&self) -> Location;

    /// Add a new entry after the current one and make it current.
    fn push(&mut self, location: &Location);

    /// Overwrite the current entry.
    fn replace(&mut self, location: &Location);
}

/// In-memory history stack.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    cursor: usize,
}

impl MemoryHistory {
    /// Create a history whose single entry is `initial`.
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Create a history starting at a raw `path?search` string.
    pub fn starting_at(raw: &str) -> Self {
        Self::new(Location::from_raw(raw))
    }

    /// Move one entry back. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move one entry forward. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(Location::root())
    }
}

impl History for MemoryHistory {
    fn current_location(&self) -> Location {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, location: &Location) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location.clone());
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, location: &Location) {
        self.entries[self.cursor] = location.clone();
    }
}
