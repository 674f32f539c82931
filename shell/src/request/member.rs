use crate::controller::Intake;
use application::transfer::CreateMemberDto;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RegisterMemberRequest {
    pub member_id: String,
    pub name: String,
}

pub struct MemberTransformer;

impl Intake<RegisterMemberRequest> for MemberTransformer {
    type To = CreateMemberDto;
    fn emit(&self, RegisterMemberRequest { member_id, name }: RegisterMemberRequest) -> Self::To {
        CreateMemberDto {
            id: member_id.trim().to_string(),
            name: name.trim().to_string(),
        }
    }
}
