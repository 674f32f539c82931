use kernel::prelude::entity::{Book, DestructBook};
use time::Date;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub due_date: Option<Date>,
}

impl BookDto {
    pub fn is_available(&self) -> bool {
        self.due_date.is_none()
    }
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let due_date: Option<Date> = value.due_date().map(|due| Date::from(due.clone()));
        let DestructBook {
            isbn,
            title,
            author,
            ..
        } = value.into_destruct();
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            due_date,
        }
    }
}

pub struct GetBookDto {
    pub isbn: String,
}

pub struct CreateBookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
}
