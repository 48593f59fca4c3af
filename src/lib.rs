pub mod error;
pub use error::{ConcurrentModification, EmptyCollection, InvalidArgument, OutOfRange, StackError};

pub mod stack;
pub use stack::{Cursor, IntoIter, Iter, PopFloor, Stack, StackConfig, DEFAULT_CAPACITY};
