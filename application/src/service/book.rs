use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookAuthor, BookTitle, Isbn};
use kernel::KernelError;
use tracing::{debug, info};

use crate::transfer::{BookDto, CreateBookDto, GetBookDto};

pub trait GetBookService: 'static + DependOnDatabaseConnection + DependOnBookQuery {
    fn get_book(&self, dto: GetBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let isbn = Isbn::new(dto.isbn);
        let book = self
            .book_query()
            .find_by_isbn(&mut connection, &isbn)?
            .ok_or_else(|| {
                Report::new(KernelError::BookNotFound).attach_printable(format!("isbn: {isbn}"))
            })?;
        Ok(BookDto::from(book))
    }

    fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;
        let books = self.book_query().find_all(&mut connection)?;
        debug!(count = books.len(), "listed books");
        Ok(books.into_iter().map(BookDto::from).collect())
    }

    fn get_available_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;
        let books = self
            .book_query()
            .find_all(&mut connection)?
            .into_iter()
            .filter(Book::is_available)
            .map(BookDto::from)
            .collect::<Vec<_>>();
        debug!(count = books.len(), "listed available books");
        Ok(books)
    }
}

impl<T> GetBookService for T where T: DependOnDatabaseConnection + DependOnBookQuery {}

pub trait CreateBookService: 'static + DependOnDatabaseConnection + DependOnBookModifier {
    fn add_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let book = Book::new(
            Isbn::new(dto.isbn),
            BookTitle::new(dto.title),
            BookAuthor::new(dto.author),
        );
        self.book_modifier().create(&mut connection, &book)?;
        connection.commit()?;

        info!(isbn = %book.isbn(), "book added");
        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}
