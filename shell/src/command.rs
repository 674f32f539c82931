use application::service::{
    CheckOutService, CreateBookService, GetBookService, GetLoanService, RegisterMemberService,
    ReturnService,
};
use error_stack::Report;

use crate::controller::Controller;
use crate::error::{ErrorMessage, ShellError};
use crate::request::{
    AddBookRequest, BookTransformer, CheckOutRequest, LoanTransformer, MemberLoansRequest,
    MemberTransformer, RegisterMemberRequest, ReturnRequest,
};
use crate::response::{BookPresenter, LoanPresenter, MemberPresenter};

/// Everything the menu can ask of the library.
pub trait LibraryServices:
    GetBookService
    + CreateBookService
    + RegisterMemberService
    + CheckOutService
    + ReturnService
    + GetLoanService
{
}

impl<T> LibraryServices for T where
    T: GetBookService
        + CreateBookService
        + RegisterMemberService
        + CheckOutService
        + ReturnService
        + GetLoanService
{
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuChoice {
    Exit,
    ListAvailable,
    CheckOut,
    Return,
    ListLoans,
    AddBook,
    RegisterMember,
}

impl TryFrom<&str> for MenuChoice {
    type Error = Report<ShellError>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        let number = value.parse::<i64>().map_err(|error| {
            Report::new(error)
                .change_context(ShellError::InvalidInput)
                .attach_printable(format!("input: {value:?}"))
        })?;
        match number {
            0 => Ok(MenuChoice::Exit),
            1 => Ok(MenuChoice::ListAvailable),
            2 => Ok(MenuChoice::CheckOut),
            3 => Ok(MenuChoice::Return),
            4 => Ok(MenuChoice::ListLoans),
            5 => Ok(MenuChoice::AddBook),
            6 => Ok(MenuChoice::RegisterMember),
            other => Err(Report::new(ShellError::InvalidChoice)
                .attach_printable(format!("choice: {other}"))),
        }
    }
}

/// A fully prompted menu action, ready to run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    ListAvailable,
    CheckOut(CheckOutRequest),
    Return(ReturnRequest),
    ListLoans(MemberLoansRequest),
    AddBook(AddBookRequest),
    RegisterMember(RegisterMemberRequest),
}

pub fn dispatch<M>(module: &M, command: Command) -> Result<Vec<String>, ErrorMessage>
where
    M: LibraryServices,
{
    match command {
        Command::ListAvailable => Controller::new((), BookPresenter)
            .bypass(|| module.get_available_books())
            .map_err(ErrorMessage::from),
        Command::CheckOut(req) => Controller::new(LoanTransformer, LoanPresenter)
            .intake(req)
            .handle(|dto| module.check_out(dto))
            .map_err(ErrorMessage::from),
        Command::Return(req) => Controller::new(LoanTransformer, LoanPresenter)
            .intake(req)
            .handle(|dto| module.return_book(dto))
            .map_err(ErrorMessage::from),
        Command::ListLoans(req) => Controller::new(LoanTransformer, LoanPresenter)
            .intake(req)
            .handle(|dto| module.get_member_loans(dto))
            .map_err(ErrorMessage::from),
        Command::AddBook(req) => Controller::new(BookTransformer, BookPresenter)
            .intake(req)
            .handle(|dto| module.add_book(dto))
            .map_err(|e| ErrorMessage::from(e).on_duplicate("Book with this ISBN")),
        Command::RegisterMember(req) => Controller::new(MemberTransformer, MemberPresenter)
            .intake(req)
            .handle(|dto| module.register_member(dto))
            .map_err(|e| ErrorMessage::from(e).on_duplicate("Member with this ID")),
    }
}

#[cfg(test)]
mod test {
    use crate::command::MenuChoice;
    use crate::error::ShellError;

    #[test]
    fn parse_menu_choice() {
        assert_eq!(MenuChoice::try_from("0").ok(), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::try_from(" 4 ").ok(), Some(MenuChoice::ListLoans));
        assert_eq!(
            MenuChoice::try_from("6").ok(),
            Some(MenuChoice::RegisterMember)
        );
    }

    #[test]
    fn reject_non_numeric_and_unknown() {
        let report = MenuChoice::try_from("two").unwrap_err();
        assert_eq!(report.current_context(), &ShellError::InvalidInput);

        let report = MenuChoice::try_from("").unwrap_err();
        assert_eq!(report.current_context(), &ShellError::InvalidInput);

        for input in ["7", "-1", "42"] {
            let report = MenuChoice::try_from(input).unwrap_err();
            assert_eq!(report.current_context(), &ShellError::InvalidChoice);
        }
    }
}
