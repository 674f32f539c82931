use crate::controller::Exhaust;
use application::transfer::MemberDto;

pub fn describe_member(member: &MemberDto) -> String {
    format!(
        "Member [ID: {}, Name: '{}', Books Borrowed: {}]",
        member.id,
        member.name,
        member.borrowed.len()
    )
}

pub struct MemberPresenter;

impl Exhaust<MemberDto> for MemberPresenter {
    type To = Vec<String>;
    fn emit(&self, input: MemberDto) -> Self::To {
        vec![format!("Member registered: {}", input.name)]
    }
}

#[cfg(test)]
mod test {
    use application::transfer::MemberDto;

    use crate::controller::Exhaust;
    use crate::response::{describe_member, MemberPresenter};

    fn member(borrowed: &[&str]) -> MemberDto {
        MemberDto {
            id: "M001".to_string(),
            name: "Alice Smith".to_string(),
            borrowed: borrowed.iter().map(|isbn| isbn.to_string()).collect(),
        }
    }

    #[test]
    fn describe_counts_borrowed_books() {
        assert_eq!(
            describe_member(&member(&[])),
            "Member [ID: M001, Name: 'Alice Smith', Books Borrowed: 0]"
        );
        assert_eq!(
            describe_member(&member(&["978-0451524935", "978-0743273565"])),
            "Member [ID: M001, Name: 'Alice Smith', Books Borrowed: 2]"
        );
    }

    #[test]
    fn registration_names_member() {
        assert_eq!(
            MemberPresenter.emit(member(&[])),
            vec!["Member registered: Alice Smith"]
        );
    }
}
