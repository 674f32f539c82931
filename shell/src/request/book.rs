use crate::controller::Intake;
use application::transfer::CreateBookDto;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AddBookRequest {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

pub struct BookTransformer;

impl Intake<AddBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(
        &self,
        AddBookRequest {
            isbn,
            title,
            author,
        }: AddBookRequest,
    ) -> Self::To {
        CreateBookDto {
            isbn: isbn.trim().to_string(),
            title: title.trim().to_string(),
            author: author.trim().to_string(),
        }
    }
}
