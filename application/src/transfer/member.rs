use kernel::prelude::entity::{DestructMember, Member};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MemberDto {
    pub id: String,
    pub name: String,
    pub borrowed: Vec<String>,
}

impl From<Member> for MemberDto {
    fn from(value: Member) -> Self {
        let DestructMember { id, name, borrowed } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            borrowed: borrowed.iter().cloned().map(String::from).collect(),
        }
    }
}

pub struct GetMemberDto {
    pub id: String,
}

pub struct CreateMemberDto {
    pub id: String,
    pub name: String,
}
