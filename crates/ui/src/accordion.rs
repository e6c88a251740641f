use serde::{Deserialize, Serialize};

/// Single-select accordion: at most one item open.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Clicking the open item closes it; clicking any other item opens that one
    /// and closes the previous.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        self.open = if self.is_open(index) { None } else { Some(index) };
        self.open
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }
}
