use crate::entity::LoanPolicy;

pub trait DependOnLoanPolicy: 'static {
    fn loan_policy(&self) -> &LoanPolicy;
}
