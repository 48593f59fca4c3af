use std::fmt::{self, Display};

pub const DEFAULT_CAPACITY: usize = 30;

/// Smallest number of elements a stack must hold for `pop` to succeed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PopFloor {
    /// Only an empty stack rejects `pop`.
    #[default]
    Empty,
    /// The last remaining element can never be popped, so a stack holding a
    /// single element rejects `pop` just like an empty one.
    RetainLast,
}

impl PopFloor {
    pub fn allows_pop(self, count: usize) -> bool {
        match self {
            PopFloor::Empty => count > 0,
            PopFloor::RetainLast => count > 1,
        }
    }
}

impl Display for PopFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopFloor::Empty => write!(f, "empty"),
            PopFloor::RetainLast => write!(f, "retain-last"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackConfig {
    pub capacity: usize,
    pub pop_floor: PopFloor,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            pop_floor: PopFloor::default(),
        }
    }
}

impl StackConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn pop_floor(mut self, pop_floor: PopFloor) -> Self {
        self.pop_floor = pop_floor;
        self
    }
}
