use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::DatabaseConnection;
use kernel::interface::policy::DependOnLoanPolicy;
use kernel::interface::query::{DependOnBookQuery, DependOnMemberQuery};
use kernel::interface::update::{DependOnBookModifier, DependOnMemberModifier};
use kernel::prelude::entity::LoanPolicy;
use kernel::KernelError;

use crate::clock::SystemClock;
use crate::database::{
    InMemoryBookRepository, InMemoryDatabase, InMemoryMemberRepository, InMemoryTransaction,
};

/// Wires the in-memory registries, a clock and the loan policy into every port.
#[derive(Debug)]
pub struct LibraryModule<C: Clock = SystemClock> {
    database: InMemoryDatabase,
    clock: C,
    policy: LoanPolicy,
}

impl<C: Clock> LibraryModule<C> {
    pub fn new(database: InMemoryDatabase, clock: C, policy: LoanPolicy) -> Self {
        Self {
            database,
            clock,
            policy,
        }
    }
}

impl<C: Clock> DatabaseConnection for LibraryModule<C> {
    type Transaction = InMemoryTransaction;
    fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        self.database.transact()
    }
}

impl<C: Clock> DependOnBookQuery for LibraryModule<C> {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl<C: Clock> DependOnBookModifier for LibraryModule<C> {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &InMemoryBookRepository
    }
}

impl<C: Clock> DependOnMemberQuery for LibraryModule<C> {
    type MemberQuery = InMemoryMemberRepository;
    fn member_query(&self) -> &Self::MemberQuery {
        &InMemoryMemberRepository
    }
}

impl<C: Clock> DependOnMemberModifier for LibraryModule<C> {
    type MemberModifier = InMemoryMemberRepository;
    fn member_modifier(&self) -> &Self::MemberModifier {
        &InMemoryMemberRepository
    }
}

impl<C: Clock> DependOnClock for LibraryModule<C> {
    type Clock = C;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl<C: Clock> DependOnLoanPolicy for LibraryModule<C> {
    fn loan_policy(&self) -> &LoanPolicy {
        &self.policy
    }
}
