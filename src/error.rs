use miette::{Diagnostic, ErrReport};
use thiserror::Error;

use crate::stack::PopFloor;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error(transparent)]
    EmptyCollection(#[from] EmptyCollection),
    #[error(transparent)]
    ConcurrentModification(#[from] ConcurrentModification),
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
}

impl StackError {
    /// Diagnostic code of the wrapped error, e.g. `stack::empty_collection`.
    pub fn code(&self) -> String {
        self.as_diagnostic()
            .code()
            .map(|code| code.to_string())
            .unwrap_or_default()
    }

    pub fn help(&self) -> Option<String> {
        self.as_diagnostic().help().map(|help| help.to_string())
    }

    fn as_diagnostic(&self) -> &dyn Diagnostic {
        match self {
            StackError::InvalidArgument(e) => e,
            StackError::EmptyCollection(e) => e,
            StackError::ConcurrentModification(e) => e,
            StackError::OutOfRange(e) => e,
        }
    }
}

impl From<StackError> for ErrReport {
    fn from(error: StackError) -> Self {
        match error {
            StackError::InvalidArgument(e) => ErrReport::from(e),
            StackError::EmptyCollection(e) => ErrReport::from(e),
            StackError::ConcurrentModification(e) => ErrReport::from(e),
            StackError::OutOfRange(e) => ErrReport::from(e),
        }
    }
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("invalid-argument")]
#[diagnostic(
    code(stack::invalid_argument),
    help("Capacity must be non-negative, got {}", self.capacity)
)]
pub struct InvalidArgument {
    pub capacity: i64,
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("empty-collection")]
#[diagnostic(
    code(stack::empty_collection),
    help(
        "Cannot {} a stack holding {} element(s) (pop floor: {})",
        self.operation, self.count, self.floor
    )
)]
pub struct EmptyCollection {
    pub operation: &'static str,
    pub count: usize,
    pub floor: PopFloor,
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("concurrent-modification")]
#[diagnostic(
    code(stack::concurrent_modification),
    help(
        "Stack was modified after the cursor was created (cursor saw version {}, stack is at version {})",
        self.expected, self.found
    )
)]
pub struct ConcurrentModification {
    pub expected: u64,
    pub found: u64,
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("out-of-range")]
#[diagnostic(
    code(stack::out_of_range),
    help("Cursor is {} and has no current element", self.position)
)]
pub struct OutOfRange {
    pub position: &'static str,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Stack;

    #[test]
    fn converts_into_report() {
        let error = Stack::<i32>::new().pop().unwrap_err();
        assert_eq!(
            error.help().as_deref(),
            Some("Cannot pop a stack holding 0 element(s) (pop floor: empty)")
        );

        let report = ErrReport::from(error);
        assert_eq!(report.to_string(), "empty-collection");
        assert_eq!(
            report.code().map(|code| code.to_string()).as_deref(),
            Some("stack::empty_collection")
        );
    }
}
