use crate::controller::Intake;
use application::transfer::{CheckOutDto, GetMemberDto, ReturnBookDto};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CheckOutRequest {
    pub member_id: String,
    pub isbn: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReturnRequest {
    pub member_id: String,
    pub isbn: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MemberLoansRequest {
    pub member_id: String,
}

pub struct LoanTransformer;

impl Intake<CheckOutRequest> for LoanTransformer {
    type To = CheckOutDto;
    fn emit(&self, CheckOutRequest { member_id, isbn }: CheckOutRequest) -> Self::To {
        CheckOutDto {
            isbn: isbn.trim().to_string(),
            member_id: member_id.trim().to_string(),
        }
    }
}

impl Intake<ReturnRequest> for LoanTransformer {
    type To = ReturnBookDto;
    fn emit(&self, ReturnRequest { member_id, isbn }: ReturnRequest) -> Self::To {
        ReturnBookDto {
            isbn: isbn.trim().to_string(),
            member_id: member_id.trim().to_string(),
        }
    }
}

impl Intake<MemberLoansRequest> for LoanTransformer {
    type To = GetMemberDto;
    fn emit(&self, MemberLoansRequest { member_id }: MemberLoansRequest) -> Self::To {
        GetMemberDto {
            id: member_id.trim().to_string(),
        }
    }
}
