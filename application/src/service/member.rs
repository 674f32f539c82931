use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnMemberQuery, MemberQuery};
use kernel::interface::update::{DependOnMemberModifier, MemberModifier};
use kernel::prelude::entity::{BorrowedBooks, Member, MemberId, MemberName};
use kernel::KernelError;
use tracing::info;

use crate::transfer::{CreateMemberDto, GetMemberDto, MemberDto};

pub trait GetMemberService: 'static + DependOnDatabaseConnection + DependOnMemberQuery {
    fn get_member(&self, dto: GetMemberDto) -> error_stack::Result<MemberDto, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let id = MemberId::new(dto.id);
        let member = self
            .member_query()
            .find_by_id(&mut connection, &id)?
            .ok_or_else(|| {
                Report::new(KernelError::MemberNotFound)
                    .attach_printable(format!("member id: {id}"))
            })?;
        Ok(MemberDto::from(member))
    }
}

impl<T> GetMemberService for T where T: DependOnDatabaseConnection + DependOnMemberQuery {}

pub trait RegisterMemberService:
    'static + DependOnDatabaseConnection + DependOnMemberModifier
{
    fn register_member(&self, dto: CreateMemberDto) -> error_stack::Result<MemberDto, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let member = Member::new(
            MemberId::new(dto.id),
            MemberName::new(dto.name),
            BorrowedBooks::default(),
        );
        self.member_modifier().create(&mut connection, &member)?;
        connection.commit()?;

        info!(member_id = %member.id(), "member registered");
        Ok(MemberDto::from(member))
    }
}

impl<T> RegisterMemberService for T where T: DependOnDatabaseConnection + DependOnMemberModifier {}

#[cfg(test)]
mod test {
    use driver::clock::ManualClock;
    use driver::database::InMemoryDatabase;
    use driver::module::LibraryModule;
    use kernel::prelude::entity::LoanPolicy;
    use kernel::KernelError;
    use time::macros::date;

    use crate::service::{GetMemberService, RegisterMemberService};
    use crate::transfer::{CreateMemberDto, GetMemberDto, MemberDto};

    fn module() -> LibraryModule<ManualClock> {
        LibraryModule::new(
            InMemoryDatabase::new(),
            ManualClock::new(date!(2026 - 10 - 16)),
            LoanPolicy::default(),
        )
    }

    fn create(id: &str, name: &str) -> CreateMemberDto {
        CreateMemberDto {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn register_and_get() -> error_stack::Result<(), KernelError> {
        let module = module();
        let registered = module.register_member(create("M1", "Alice Smith"))?;
        assert_eq!(
            registered,
            MemberDto {
                id: "M1".to_string(),
                name: "Alice Smith".to_string(),
                borrowed: vec![],
            }
        );

        let found = module.get_member(GetMemberDto {
            id: "M1".to_string(),
        })?;
        assert_eq!(found, registered);
        Ok(())
    }

    #[test]
    fn duplicate_id_keeps_first_member() -> error_stack::Result<(), KernelError> {
        let module = module();
        module.register_member(create("M1", "Alice Smith"))?;
        let report = module
            .register_member(create("M1", "Bob Johnson"))
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::DuplicateKey);

        let found = module.get_member(GetMemberDto {
            id: "M1".to_string(),
        })?;
        assert_eq!(found.name, "Alice Smith");
        Ok(())
    }

    #[test]
    fn unknown_member() {
        let report = module()
            .get_member(GetMemberDto {
                id: "nobody".to_string(),
            })
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::MemberNotFound);
    }
}
