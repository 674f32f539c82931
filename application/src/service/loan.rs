use error_stack::Report;
use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::policy::DependOnLoanPolicy;
use kernel::interface::query::{BookQuery, DependOnBookQuery, DependOnMemberQuery, MemberQuery};
use kernel::interface::update::{
    BookModifier, DependOnBookModifier, DependOnMemberModifier, MemberModifier,
};
use kernel::prelude::entity::{Isbn, LoanStatus, MemberId};
use kernel::KernelError;
use tracing::{debug, info, warn};

use crate::transfer::{
    BookDto, CheckOutDto, CheckedOutDto, GetMemberDto, LoanDto, MemberLoansDto, ReturnBookDto,
    ReturnedDto,
};

fn book_not_found(isbn: &Isbn) -> Report<KernelError> {
    Report::new(KernelError::BookNotFound).attach_printable(format!("isbn: {isbn}"))
}

fn member_not_found(id: &MemberId) -> Report<KernelError> {
    Report::new(KernelError::MemberNotFound).attach_printable(format!("member id: {id}"))
}

pub trait CheckOutService:
    'static
    + DependOnDatabaseConnection
    + DependOnBookQuery
    + DependOnBookModifier
    + DependOnMemberQuery
    + DependOnMemberModifier
    + DependOnClock
    + DependOnLoanPolicy
{
    fn check_out(&self, dto: CheckOutDto) -> error_stack::Result<CheckedOutDto, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let isbn = Isbn::new(dto.isbn);
        let member_id = MemberId::new(dto.member_id);
        let book = self
            .book_query()
            .find_by_isbn(&mut connection, &isbn)?
            .ok_or_else(|| book_not_found(&isbn))?;
        let member = self
            .member_query()
            .find_by_id(&mut connection, &member_id)?
            .ok_or_else(|| member_not_found(&member_id))?;

        if let LoanStatus::CheckedOut(due) = book.status() {
            warn!(%isbn, %member_id, %due, "book is already checked out");
            return Err(Report::new(KernelError::AlreadyCheckedOut)
                .attach_printable(format!("isbn: {isbn}, due: {due}")));
        }

        let due = self.loan_policy().due_date(self.clock().today())?;
        let book = book.reconstruct(|b| b.status = LoanStatus::CheckedOut(due.clone()));
        let member = member.reconstruct(|m| {
            m.borrowed.insert(isbn.clone());
        });
        self.book_modifier().update(&mut connection, &book)?;
        self.member_modifier().update(&mut connection, &member)?;
        connection.commit()?;

        info!(%isbn, %member_id, %due, "book checked out");
        Ok(CheckedOutDto {
            member_name: member.name().clone().into(),
            title: book.title().clone().into(),
            due_date: due.into(),
        })
    }
}

impl<T> CheckOutService for T where
    T: DependOnDatabaseConnection
        + DependOnBookQuery
        + DependOnBookModifier
        + DependOnMemberQuery
        + DependOnMemberModifier
        + DependOnClock
        + DependOnLoanPolicy
{
}

pub trait ReturnService:
    'static
    + DependOnDatabaseConnection
    + DependOnBookQuery
    + DependOnBookModifier
    + DependOnMemberQuery
    + DependOnMemberModifier
    + DependOnClock
    + DependOnLoanPolicy
{
    fn return_book(&self, dto: ReturnBookDto) -> error_stack::Result<ReturnedDto, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let isbn = Isbn::new(dto.isbn);
        let member_id = MemberId::new(dto.member_id);
        let book = self
            .book_query()
            .find_by_isbn(&mut connection, &isbn)?
            .ok_or_else(|| book_not_found(&isbn))?;
        let member = self
            .member_query()
            .find_by_id(&mut connection, &member_id)?
            .ok_or_else(|| member_not_found(&member_id))?;

        if !member.borrowed().contains(&isbn) {
            warn!(%isbn, %member_id, "book is not borrowed by member");
            return Err(Report::new(KernelError::NotBorrowedByMember)
                .attach_printable(format!("isbn: {isbn}, member id: {member_id}")));
        }

        // fine has to be taken before the due date is cleared
        let today = self.clock().today();
        let fine = book
            .due_date()
            .map(|due| self.loan_policy().fine(due, today))
            .unwrap_or_default();

        let book = book.reconstruct(|b| b.status = LoanStatus::Available);
        let member = member.reconstruct(|m| {
            m.borrowed.remove(&isbn);
        });
        self.book_modifier().update(&mut connection, &book)?;
        self.member_modifier().update(&mut connection, &member)?;
        connection.commit()?;

        info!(%isbn, %member_id, %fine, "book returned");
        Ok(ReturnedDto {
            member_name: member.name().clone().into(),
            title: book.title().clone().into(),
            fine,
        })
    }
}

impl<T> ReturnService for T where
    T: DependOnDatabaseConnection
        + DependOnBookQuery
        + DependOnBookModifier
        + DependOnMemberQuery
        + DependOnMemberModifier
        + DependOnClock
        + DependOnLoanPolicy
{
}

pub trait GetLoanService:
    'static
    + DependOnDatabaseConnection
    + DependOnBookQuery
    + DependOnMemberQuery
    + DependOnClock
    + DependOnLoanPolicy
{
    /// Books currently held by the member, each with the fine accrued so far.
    fn get_member_loans(
        &self,
        dto: GetMemberDto,
    ) -> error_stack::Result<MemberLoansDto, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let member_id = MemberId::new(dto.id);
        let member = self
            .member_query()
            .find_by_id(&mut connection, &member_id)?
            .ok_or_else(|| member_not_found(&member_id))?;

        let today = self.clock().today();
        let loans = member
            .borrowed()
            .iter()
            .map(|isbn| {
                let book = self
                    .book_query()
                    .find_by_isbn(&mut connection, isbn)?
                    .ok_or_else(|| book_not_found(isbn))?;
                let fine = book
                    .due_date()
                    .map(|due| self.loan_policy().fine(due, today))
                    .unwrap_or_default();
                Ok(LoanDto {
                    book: BookDto::from(book),
                    fine,
                })
            })
            .collect::<error_stack::Result<Vec<_>, KernelError>>()?;

        debug!(%member_id, count = loans.len(), "listed member loans");
        Ok(MemberLoansDto {
            member_name: member.name().clone().into(),
            loans,
        })
    }
}

impl<T> GetLoanService for T where
    T: DependOnDatabaseConnection
        + DependOnBookQuery
        + DependOnMemberQuery
        + DependOnClock
        + DependOnLoanPolicy
{
}
