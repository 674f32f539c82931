use std::ops::Deref;

use application::service::{CreateBookService, RegisterMemberService};
use application::transfer::{CreateBookDto, CreateMemberDto};
use driver::clock::SystemClock;
use driver::config::LibraryConfig;
use driver::database::InMemoryDatabase;
use driver::module::LibraryModule;
use kernel::interface::clock::Clock;
use kernel::KernelError;
use tracing::{debug, info};

use crate::response::describe_member;

const DEMO_BOOKS: &[(&str, &str, &str)] = &[
    ("978-0321765723", "The Lord of the Rings", "J.R.R. Tolkien"),
    ("978-0743273565", "The Great Gatsby", "F. Scott Fitzgerald"),
    ("978-0451524935", "1984", "George Orwell"),
];

const DEMO_MEMBERS: &[(&str, &str)] = &[("M001", "Alice Smith"), ("M002", "Bob Johnson")];

pub struct AppModule<C: Clock = SystemClock>(LibraryModule<C>);

impl AppModule {
    pub fn new(config: &LibraryConfig) -> Self {
        Self::with_clock(SystemClock, config)
    }
}

impl<C: Clock> AppModule<C> {
    pub fn with_clock(clock: C, config: &LibraryConfig) -> Self {
        Self(LibraryModule::new(
            InMemoryDatabase::new(),
            clock,
            config.policy().clone(),
        ))
    }

    pub fn seed_demo(&self) -> error_stack::Result<(), KernelError> {
        for (isbn, title, author) in DEMO_BOOKS {
            self.add_book(CreateBookDto {
                isbn: isbn.to_string(),
                title: title.to_string(),
                author: author.to_string(),
            })?;
        }
        for (id, name) in DEMO_MEMBERS {
            let member = self.register_member(CreateMemberDto {
                id: id.to_string(),
                name: name.to_string(),
            })?;
            debug!("{}", describe_member(&member));
        }
        info!(
            books = DEMO_BOOKS.len(),
            members = DEMO_MEMBERS.len(),
            "seeded demo catalogue"
        );
        Ok(())
    }
}

impl<C: Clock> Deref for AppModule<C> {
    type Target = LibraryModule<C>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
