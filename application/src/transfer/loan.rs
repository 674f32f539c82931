use kernel::prelude::entity::Fine;
use time::Date;

use crate::transfer::BookDto;

pub struct CheckOutDto {
    pub isbn: String,
    pub member_id: String,
}

pub struct ReturnBookDto {
    pub isbn: String,
    pub member_id: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CheckedOutDto {
    pub member_name: String,
    pub title: String,
    pub due_date: Date,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReturnedDto {
    pub member_name: String,
    pub title: String,
    pub fine: Fine,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LoanDto {
    pub book: BookDto,
    pub fine: Fine,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MemberLoansDto {
    pub member_name: String,
    pub loans: Vec<LoanDto>,
}
