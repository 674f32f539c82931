mod book;
mod loan;
mod member;

pub use self::{book::*, loan::*, member::*};
