use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    BookNotFound,
    MemberNotFound,
    DuplicateKey,
    AlreadyCheckedOut,
    NotBorrowedByMember,
    Concurrency,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::BookNotFound => write!(f, "Book not found"),
            KernelError::MemberNotFound => write!(f, "Member not found"),
            KernelError::DuplicateKey => write!(f, "Key is already registered"),
            KernelError::AlreadyCheckedOut => write!(f, "Book is already checked out"),
            KernelError::NotBorrowedByMember => write!(f, "Book is not borrowed by this member"),
            KernelError::Concurrency => write!(f, "Registry is locked by another transaction"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
