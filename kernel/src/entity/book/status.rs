use crate::entity::DueDate;

/// Circulation state of a single copy.
///
/// The due date only exists while the book is checked out, so a book can never be
/// available and carry a due date at the same time.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum LoanStatus {
    #[default]
    Available,
    CheckedOut(DueDate),
}

impl LoanStatus {
    pub fn due_date(&self) -> Option<&DueDate> {
        match self {
            LoanStatus::Available => None,
            LoanStatus::CheckedOut(due) => Some(due),
        }
    }
}
