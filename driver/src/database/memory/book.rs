use error_stack::Report;
use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, Isbn};
use kernel::KernelError;

use crate::database::InMemoryTransaction;

/// Book registry keyed by ISBN.
pub struct InMemoryBookRepository;

impl BookQuery for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    fn find_by_isbn(
        &self,
        con: &mut InMemoryTransaction,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.working.books.get(isbn).cloned())
    }

    fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let mut books = con.working.books.values().cloned().collect::<Vec<_>>();
        books.sort_by(|a, b| a.isbn().cmp(b.isbn()));
        Ok(books)
    }
}

impl BookModifier for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    fn create(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        if con.working.books.contains_key(book.isbn()) {
            return Err(Report::new(KernelError::DuplicateKey)
                .attach_printable(format!("isbn: {}", book.isbn())));
        }
        con.working.books.insert(book.isbn().clone(), book.clone());
        Ok(())
    }

    fn update(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        match con.working.books.get_mut(book.isbn()) {
            Some(stored) => {
                *stored = book.clone();
                Ok(())
            }
            None => Err(Report::new(KernelError::BookNotFound)
                .attach_printable(format!("isbn: {}", book.isbn()))),
        }
    }
}
