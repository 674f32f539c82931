use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Book;
use crate::KernelError;

pub trait BookModifier: 'static {
    type Transaction: Transaction;
    /// Fails with [`KernelError::DuplicateKey`] if the ISBN is already registered.
    fn create(&self, con: &mut Self::Transaction, book: &Book)
        -> error_stack::Result<(), KernelError>;
    /// Fails with [`KernelError::BookNotFound`] if the ISBN is unknown.
    fn update(&self, con: &mut Self::Transaction, book: &Book)
        -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier: 'static + DependOnDatabaseConnection {
    type BookModifier: BookModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn book_modifier(&self) -> &Self::BookModifier;
}
