use error_stack::Report;
use kernel::interface::query::MemberQuery;
use kernel::interface::update::MemberModifier;
use kernel::prelude::entity::{Member, MemberId};
use kernel::KernelError;

use crate::database::InMemoryTransaction;

/// Member registry keyed by member ID.
pub struct InMemoryMemberRepository;

impl MemberQuery for InMemoryMemberRepository {
    type Transaction = InMemoryTransaction;

    fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &MemberId,
    ) -> error_stack::Result<Option<Member>, KernelError> {
        Ok(con.working.members.get(id).cloned())
    }
}

impl MemberModifier for InMemoryMemberRepository {
    type Transaction = InMemoryTransaction;

    fn create(
        &self,
        con: &mut InMemoryTransaction,
        member: &Member,
    ) -> error_stack::Result<(), KernelError> {
        if con.working.members.contains_key(member.id()) {
            return Err(Report::new(KernelError::DuplicateKey)
                .attach_printable(format!("member id: {}", member.id())));
        }
        con.working
            .members
            .insert(member.id().clone(), member.clone());
        Ok(())
    }

    fn update(
        &self,
        con: &mut InMemoryTransaction,
        member: &Member,
    ) -> error_stack::Result<(), KernelError> {
        match con.working.members.get_mut(member.id()) {
            Some(stored) => {
                *stored = member.clone();
                Ok(())
            }
            None => Err(Report::new(KernelError::MemberNotFound)
                .attach_printable(format!("member id: {}", member.id()))),
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::MemberQuery;
    use kernel::interface::update::MemberModifier;
    use kernel::prelude::entity::{BorrowedBooks, Isbn, Member, MemberId, MemberName};
    use kernel::KernelError;

    use crate::database::{InMemoryDatabase, InMemoryMemberRepository};

    #[test]
    fn test() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact()?;
        let id = MemberId::new("M001");

        let member = Member::new(
            id.clone(),
            MemberName::new("Alice Smith"),
            BorrowedBooks::default(),
        );
        InMemoryMemberRepository.create(&mut con, &member)?;

        let found = InMemoryMemberRepository.find_by_id(&mut con, &id)?;
        assert_eq!(found, Some(member.clone()));

        let member = member.reconstruct(|m| {
            m.borrowed.insert(Isbn::new("X1"));
        });
        InMemoryMemberRepository.update(&mut con, &member)?;

        let found = InMemoryMemberRepository.find_by_id(&mut con, &id)?;
        assert_eq!(found, Some(member));
        Ok(())
    }

    #[test]
    fn duplicate_id_keeps_first_member() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact()?;
        let first = Member::new(
            MemberId::new("M1"),
            MemberName::new("Alice Smith"),
            BorrowedBooks::default(),
        );
        let second = Member::new(
            MemberId::new("M1"),
            MemberName::new("Bob Johnson"),
            BorrowedBooks::default(),
        );
        InMemoryMemberRepository.create(&mut con, &first)?;
        let report = InMemoryMemberRepository
            .create(&mut con, &second)
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::DuplicateKey);

        let found = InMemoryMemberRepository.find_by_id(&mut con, &MemberId::new("M1"))?;
        assert_eq!(found, Some(first));
        Ok(())
    }
}
