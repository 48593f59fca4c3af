use crate::error::{ConcurrentModification, OutOfRange, StackError};

use super::Stack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Before,
    At(usize),
    Exhausted,
    Invalidated,
}

/// Version-checked traversal of a [`Stack`] from top to bottom.
///
/// A cursor does not borrow the stack it was created from. It remembers the
/// stack's version instead and every call takes the stack again, so the
/// stack stays free to be mutated in between. Once the stack has changed, the
/// cursor refuses to move or read and fails with `ConcurrentModification`
/// for the rest of its life.
///
/// ```
/// use lifo::{Stack, StackError};
///
/// let mut stack = Stack::from([1, 2, 3]);
/// let mut cursor = stack.cursor();
///
/// assert_eq!(cursor.advance(&stack), Ok(true));
/// assert_eq!(cursor.current(&stack), Ok(&3));
///
/// stack.push(4);
/// assert!(matches!(
///     cursor.advance(&stack),
///     Err(StackError::ConcurrentModification(_))
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    position: Position,
    version: u64,
}

impl Cursor {
    pub(super) fn new<T>(stack: &Stack<T>) -> Self {
        Self {
            position: Position::Before,
            version: stack.version(),
        }
    }

    /// Version of the stack this cursor was created for.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_invalidated(&self) -> bool {
        self.position == Position::Invalidated
    }

    /// Moves one element further down the stack. Returns `false` once the
    /// bottom has been passed.
    pub fn advance<T>(&mut self, stack: &Stack<T>) -> Result<bool, StackError> {
        self.check(stack)?;

        let (position, moved) = match self.position {
            Position::Before => match stack.top_index() {
                Some(top) => (Position::At(top), true),
                None => (Position::Exhausted, false),
            },
            Position::At(0) | Position::Exhausted => (Position::Exhausted, false),
            Position::At(index) => (Position::At(index - 1), true),
            Position::Invalidated => (Position::Invalidated, false),
        };
        self.position = position;
        Ok(moved)
    }

    /// Puts the cursor back above the top element.
    pub fn reset<T>(&mut self, stack: &Stack<T>) -> Result<(), StackError> {
        self.check(stack)?;
        self.position = Position::Before;
        Ok(())
    }

    pub fn current<'s, T>(&self, stack: &'s Stack<T>) -> Result<&'s T, StackError> {
        self.verify(stack)?;

        let position = match self.position {
            Position::At(index) => match stack.get(index) {
                Some(item) => return Ok(item),
                None => "past the top",
            },
            Position::Before => "before the first element",
            Position::Exhausted | Position::Invalidated => "past the last element",
        };
        Err(OutOfRange { position }.into())
    }

    fn check<T>(&mut self, stack: &Stack<T>) -> Result<(), StackError> {
        let result = self.verify(stack);
        if result.is_err() {
            self.position = Position::Invalidated;
        }
        result
    }

    fn verify<T>(&self, stack: &Stack<T>) -> Result<(), StackError> {
        if self.position != Position::Invalidated && self.version == stack.version() {
            return Ok(());
        }

        Err(ConcurrentModification {
            expected: self.version,
            found: stack.version(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn walk<T: Clone>(cursor: &mut Cursor, stack: &Stack<T>) -> Result<Vec<T>, StackError> {
        let mut items = Vec::new();
        while cursor.advance(stack)? {
            items.push(cursor.current(stack)?.clone());
        }
        Ok(items)
    }

    #[test]
    fn walks_top_to_bottom() {
        let stack = Stack::from([1, 2, 3]);
        let mut cursor = stack.cursor();

        assert_eq!(walk(&mut cursor, &stack), Ok(vec![3, 2, 1]));
        assert_eq!(cursor.advance(&stack), Ok(false));
    }

    #[test]
    fn current_out_of_bounds() {
        let stack = Stack::from(["only"]);
        let mut cursor = stack.cursor();

        assert_eq!(
            cursor.current(&stack),
            Err(StackError::OutOfRange(OutOfRange {
                position: "before the first element"
            }))
        );
        assert_eq!(cursor.advance(&stack), Ok(true));
        assert_eq!(cursor.current(&stack), Ok(&"only"));
        assert_eq!(cursor.advance(&stack), Ok(false));
        assert_eq!(
            cursor.current(&stack),
            Err(StackError::OutOfRange(OutOfRange {
                position: "past the last element"
            }))
        );
    }

    #[test]
    fn empty_stack_is_exhausted_at_once() {
        let stack = Stack::<i32>::new();
        let mut cursor = stack.cursor();
        assert_eq!(cursor.advance(&stack), Ok(false));
        assert!(cursor.current(&stack).is_err());
    }

    #[test]
    fn reset_restarts_traversal() {
        let stack = Stack::from([1, 2]);
        let mut cursor = stack.cursor();
        assert_eq!(walk(&mut cursor, &stack), Ok(vec![2, 1]));

        cursor.reset(&stack).unwrap();
        assert_eq!(walk(&mut cursor, &stack), Ok(vec![2, 1]));
    }

    #[test]
    fn push_invalidates() {
        let mut stack = Stack::from([1, 2, 3]);
        let mut cursor = stack.cursor();
        cursor.advance(&stack).unwrap();

        stack.push(4);
        assert_eq!(
            cursor.advance(&stack),
            Err(StackError::ConcurrentModification(ConcurrentModification {
                expected: 0,
                found: 1,
            }))
        );
        assert!(cursor.is_invalidated());
        assert!(matches!(
            cursor.current(&stack),
            Err(StackError::ConcurrentModification(_))
        ));
    }

    #[test]
    fn pop_and_clear_invalidate() {
        let mut stack = Stack::from([1, 2, 3]);

        let mut cursor = stack.cursor();
        stack.pop().unwrap();
        assert!(cursor.advance(&stack).is_err());

        let mut cursor = stack.cursor();
        stack.clear();
        assert!(matches!(
            cursor.reset(&stack),
            Err(StackError::ConcurrentModification(_))
        ));
    }

    #[test]
    fn invalidation_is_permanent() {
        let mut stack = Stack::new();
        stack.push(1);
        let mut cursor = stack.cursor();
        stack.push(2);
        assert!(cursor.advance(&stack).is_err());

        assert!(cursor.reset(&stack).is_err());
        assert!(cursor.advance(&stack).is_err());
        assert_eq!(cursor.version(), 1);
    }

    #[test]
    fn reads_do_not_invalidate() {
        let mut stack = Stack::from([1, 2]);
        let mut cursor = stack.cursor();
        let _ = stack.peek();
        let _ = stack.contains(&2);
        let _ = stack.reverse();
        *stack.peek_mut().unwrap() = 20;

        assert_eq!(walk(&mut cursor, &stack), Ok(vec![20, 1]));
    }
}
