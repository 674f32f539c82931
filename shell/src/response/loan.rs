use crate::controller::Exhaust;
use crate::response::describe;
use application::transfer::{CheckedOutDto, MemberLoansDto, ReturnedDto};

pub struct LoanPresenter;

impl Exhaust<CheckedOutDto> for LoanPresenter {
    type To = Vec<String>;
    fn emit(&self, input: CheckedOutDto) -> Self::To {
        vec![
            format!(
                "Success: {} checked out '{}'.",
                input.member_name, input.title
            ),
            format!("Due Date: {}", input.due_date),
        ]
    }
}

impl Exhaust<ReturnedDto> for LoanPresenter {
    type To = Vec<String>;
    fn emit(&self, input: ReturnedDto) -> Self::To {
        let verdict = if input.fine.is_zero() {
            "Book returned on time.".to_string()
        } else {
            format!("Book is overdue! Fine: {}", input.fine)
        };
        vec![
            verdict,
            format!("Success: {} returned '{}'.", input.member_name, input.title),
        ]
    }
}

impl Exhaust<MemberLoansDto> for LoanPresenter {
    type To = Vec<String>;
    fn emit(&self, input: MemberLoansDto) -> Self::To {
        let mut lines = vec![format!("--- Loans for {} ---", input.member_name)];
        if input.loans.is_empty() {
            lines.push("This member has no books checked out.".to_string());
        }
        for loan in input.loans {
            lines.push(describe(&loan.book));
            if !loan.fine.is_zero() {
                lines.push(format!("  -> Current Fine: {}", loan.fine));
            }
        }
        lines
    }
}

#[cfg(test)]
mod test {
    use application::transfer::{BookDto, LoanDto, MemberLoansDto, ReturnedDto};
    use kernel::prelude::entity::Fine;
    use time::macros::date;

    use crate::controller::Exhaust;
    use crate::response::LoanPresenter;

    #[test]
    fn overdue_return() {
        let lines = LoanPresenter.emit(ReturnedDto {
            member_name: "Alice Smith".to_string(),
            title: "1984".to_string(),
            fine: Fine::new(150u64),
        });
        assert_eq!(
            lines,
            vec![
                "Book is overdue! Fine: $1.50",
                "Success: Alice Smith returned '1984'."
            ]
        );
    }

    #[test]
    fn loans_show_current_fine_only_when_overdue() {
        let book = |isbn: &str| BookDto {
            isbn: isbn.to_string(),
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            due_date: Some(date!(2026 - 10 - 30)),
        };
        let lines = LoanPresenter.emit(MemberLoansDto {
            member_name: "Alice Smith".to_string(),
            loans: vec![
                LoanDto {
                    book: book("X1"),
                    fine: Fine::default(),
                },
                LoanDto {
                    book: book("X2"),
                    fine: Fine::new(50u64),
                },
            ],
        });
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "--- Loans for Alice Smith ---");
        assert!(lines[1].starts_with("Book [ISBN: X1"));
        assert!(lines[2].starts_with("Book [ISBN: X2"));
        assert_eq!(lines[3], "  -> Current Fine: $0.50");
    }
}
