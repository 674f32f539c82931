mod author;
mod isbn;
mod status;
mod title;

pub use self::{author::*, isbn::*, status::*, title::*};
use crate::entity::DueDate;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    isbn: Isbn,
    title: BookTitle,
    author: BookAuthor,
    status: LoanStatus,
}

impl Book {
    /// A newly catalogued book is always available.
    pub fn new(isbn: Isbn, title: BookTitle, author: BookAuthor) -> Self {
        Self {
            isbn,
            title,
            author,
            status: LoanStatus::default(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == LoanStatus::Available
    }

    pub fn due_date(&self) -> Option<&DueDate> {
        self.status.due_date()
    }
}
