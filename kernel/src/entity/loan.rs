mod due_date;
mod fine;
mod policy;

pub use self::{due_date::*, fine::*, policy::*};
