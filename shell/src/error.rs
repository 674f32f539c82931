use std::fmt::{Display, Formatter};
use std::process::{ExitCode, Termination};

use error_stack::{Context, Report};
use kernel::KernelError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ShellError {
    InvalidInput,
    InvalidChoice,
    Io,
    Setup,
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::InvalidInput => write!(f, "Invalid input. Please enter a number."),
            ShellError::InvalidChoice => write!(f, "Invalid choice. Please try again."),
            ShellError::Io => write!(f, "Console I/O failed"),
            ShellError::Setup => write!(f, "Failed to set up the library"),
        }
    }
}

impl Context for ShellError {}

#[derive(Debug)]
pub struct StackTrace(Report<ShellError>);

impl From<Report<ShellError>> for StackTrace {
    fn from(e: Report<ShellError>) -> Self {
        StackTrace(e)
    }
}

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e.change_context(ShellError::Setup))
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Console rendering of a failed library operation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ErrorMessage {
    context: KernelError,
    duplicate: &'static str,
}

impl ErrorMessage {
    /// Names what a [`KernelError::DuplicateKey`] collided with, e.g. "Book with this ISBN".
    pub fn on_duplicate(mut self, subject: &'static str) -> Self {
        self.duplicate = subject;
        self
    }
}

impl From<Report<KernelError>> for ErrorMessage {
    fn from(e: Report<KernelError>) -> Self {
        tracing::debug!("{e:?}");
        ErrorMessage {
            context: *e.current_context(),
            duplicate: "Entry with this key",
        }
    }
}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.context {
            KernelError::BookNotFound => write!(f, "Error: Book not found."),
            KernelError::MemberNotFound => write!(f, "Error: Member not found."),
            KernelError::DuplicateKey => write!(f, "Error: {} already exists.", self.duplicate),
            KernelError::AlreadyCheckedOut => write!(f, "Error: Book is already checked out."),
            KernelError::NotBorrowedByMember => {
                write!(f, "Error: This member did not borrow this book.")
            }
            KernelError::Concurrency | KernelError::Internal => {
                write!(f, "Error: {}.", self.context)
            }
        }
    }
}
