mod config;
pub use config::{PopFloor, StackConfig, DEFAULT_CAPACITY};

mod cursor;
pub use cursor::Cursor;

mod iter;
pub use iter::{IntoIter, Iter};

use crate::error::{EmptyCollection, InvalidArgument, StackError};

/// Growable last-in-first-out container backed by a boxed slice of slots.
///
/// Slots at and above `len` are always `None`, the slot at `len - 1` is the
/// top of the stack. Every structural mutation (push, pop, clear) bumps
/// `version`, which is what [`Cursor`] uses to notice that the stack changed
/// underneath it.
///
/// There is no internal locking. Sharing a stack between threads is the
/// caller's business.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    version: u64,
    pop_floor: PopFloor,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_sequence(array)
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_sequence(vec)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::with_config(StackConfig::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(StackConfig::new().capacity(capacity))
    }

    /// Like [`Stack::with_capacity`], but for capacities coming from signed
    /// sources. Negative values are rejected with `InvalidArgument`.
    /// Capacities the allocator cannot hold are rejected the same way.
    pub fn try_with_capacity(capacity: i64) -> Result<Self, StackError> {
        let invalid = InvalidArgument { capacity };
        let len = usize::try_from(capacity).map_err(|_| invalid.clone())?;

        let mut slots = Vec::new();
        slots.try_reserve_exact(len).map_err(|_| invalid)?;
        slots.resize_with(len, || None);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            len: 0,
            version: 0,
            pop_floor: PopFloor::default(),
        })
    }

    pub fn with_config(config: StackConfig) -> Self {
        Self {
            slots: empty_slots(config.capacity),
            len: 0,
            version: 0,
            pop_floor: config.pop_floor,
        }
    }

    /// Builds a stack holding `items` in order, the last item ends up on top.
    /// The backing storage is sized to exactly the number of items.
    pub fn from_sequence<I: IntoIterator<Item = T>>(items: I) -> Self {
        let slots: Box<[Option<T>]> = items.into_iter().map(Some).collect();
        Self {
            len: slots.len(),
            slots,
            version: 0,
            pop_floor: PopFloor::default(),
        }
    }

    pub fn with_pop_floor(mut self, pop_floor: PopFloor) -> Self {
        self.pop_floor = pop_floor;
        self
    }

    pub fn count(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical extent of the backing storage.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Index of the top slot, `None` when empty.
    pub fn top_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    pub fn push(&mut self, item: T) {
        if self.len == self.slots.len() {
            self.grow();
        }

        self.slots[self.len] = Some(item);
        self.len += 1;
        self.version += 1;
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        if !self.pop_floor.allows_pop(self.len) {
            return Err(self.empty("pop"));
        }

        let top = self.len - 1;
        let item = match self.slots[top].take() {
            Some(item) => item,
            None => unreachable!("slot {top} is below len {} but empty", self.len),
        };
        self.len -= 1;
        self.version += 1;
        Ok(item)
    }

    pub fn peek(&self) -> Result<&T, StackError> {
        self.top_index()
            .and_then(|top| self.slots[top].as_ref())
            .ok_or_else(|| self.empty("peek"))
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, StackError> {
        let error = self.empty("peek");
        match self.top_index() {
            Some(top) => self.slots[top].as_mut().ok_or(error),
            None => Err(error),
        }
    }

    /// Element at `index`, counted from the bottom of the stack.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.live().get(index).and_then(Option::as_ref)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.live().iter().any(|slot| slot.as_ref() == Some(item))
    }

    /// Drops every element and releases the backing storage.
    pub fn clear(&mut self) {
        self.slots = Box::default();
        self.len = 0;
        self.version += 1;
    }

    /// Elements from bottom to top.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }

    /// Elements from top to bottom.
    pub fn reverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The whole backing storage, unused capacity included.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.live())
    }

    pub fn cursor(&self) -> Cursor {
        Cursor::new(self)
    }

    fn live(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }

    fn empty(&self, operation: &'static str) -> StackError {
        EmptyCollection {
            operation,
            count: self.len,
            floor: self.pop_floor,
        }
        .into()
    }

    // The grown buffer is fully built before it replaces the old one, so a
    // failed allocation leaves the stack as it was.
    fn grow(&mut self) {
        let capacity = self.slots.len().saturating_mul(2).max(1);

        let mut grown = Vec::with_capacity(capacity);
        grown.extend(self.slots.iter_mut().map(Option::take));
        grown.resize_with(capacity, || None);
        self.slots = grown.into_boxed_slice();
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}
