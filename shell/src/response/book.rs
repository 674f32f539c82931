use crate::controller::Exhaust;
use application::transfer::BookDto;

/// Single-line description used by every listing.
pub fn describe(book: &BookDto) -> String {
    let status = match book.due_date {
        None => "Available".to_string(),
        Some(due) => format!("Checked Out (Due: {due})"),
    };
    format!(
        "Book [ISBN: {}, Title: '{}', Author: '{}', Status: {}]",
        book.isbn, book.title, book.author, status
    )
}

pub struct BookPresenter;

impl Exhaust<BookDto> for BookPresenter {
    type To = Vec<String>;
    fn emit(&self, input: BookDto) -> Self::To {
        vec![format!("Book added: {}", input.title)]
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = Vec<String>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let mut lines = vec!["--- Available Books ---".to_string()];
        if input.is_empty() {
            lines.push("No books are currently available.".to_string());
        } else {
            lines.extend(input.iter().map(describe));
        }
        lines
    }
}

#[cfg(test)]
mod test {
    use application::transfer::BookDto;
    use time::macros::date;

    use crate::controller::Exhaust;
    use crate::response::{describe, BookPresenter};

    fn book(due_date: Option<time::Date>) -> BookDto {
        BookDto {
            isbn: "978-0451524935".to_string(),
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            due_date,
        }
    }

    #[test]
    fn describe_status() {
        assert_eq!(
            describe(&book(None)),
            "Book [ISBN: 978-0451524935, Title: '1984', Author: 'George Orwell', Status: Available]"
        );
        assert_eq!(
            describe(&book(Some(date!(2026 - 10 - 30)))),
            "Book [ISBN: 978-0451524935, Title: '1984', Author: 'George Orwell', Status: Checked Out (Due: 2026-10-30)]"
        );
    }

    #[test]
    fn empty_listing() {
        let lines = BookPresenter.emit(Vec::<BookDto>::new());
        assert_eq!(
            lines,
            vec!["--- Available Books ---", "No books are currently available."]
        );
    }
}
