mod borrowed;
mod id;
mod name;

pub use self::{borrowed::*, id::*, name::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Member {
    id: MemberId,
    name: MemberName,
    borrowed: BorrowedBooks,
}

impl Member {
    pub fn new(id: MemberId, name: MemberName, borrowed: BorrowedBooks) -> Self {
        Self { id, name, borrowed }
    }
}
