use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{Book, Isbn, Member, MemberId};
use kernel::KernelError;
use tracing::debug;

use crate::error::ConvertError;

pub use self::{book::*, member::*};

mod book;
mod member;

/// Books keyed by ISBN and members keyed by ID.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    books: HashMap<Isbn, Book>,
    members: HashMap<MemberId, Member>,
}

/// Process-local store. Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    registry: Rc<RefCell<Registry>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let working = self.registry.try_borrow().convert_error()?.clone();
        Ok(InMemoryTransaction {
            origin: Rc::clone(&self.registry),
            working,
        })
    }
}

/// Snapshot of the registry that is written back on commit.
#[derive(Debug)]
pub struct InMemoryTransaction {
    origin: Rc<RefCell<Registry>>,
    working: Registry,
}

impl Transaction for InMemoryTransaction {
    fn commit(self) -> error_stack::Result<(), KernelError> {
        let mut origin = self.origin.try_borrow_mut().convert_error()?;
        *origin = self.working;
        debug!(
            books = origin.books.len(),
            members = origin.members.len(),
            "registry committed"
        );
        Ok(())
    }

    fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}
