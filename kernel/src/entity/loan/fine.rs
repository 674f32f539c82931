use std::fmt::{Display, Formatter};
use vodca::{AsRefln, Fromln};

/// Overdue penalty in cents.
#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln)]
pub struct Fine(u64);

impl Fine {
    pub fn new(cents: impl Into<u64>) -> Self {
        Self(cents.into())
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Display for Fine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod test {
    use crate::entity::Fine;

    #[test]
    fn dollars_and_cents() {
        assert_eq!(Fine::default().to_string(), "$0.00");
        assert_eq!(Fine::new(50u64).to_string(), "$0.50");
        assert_eq!(Fine::new(1250u64).to_string(), "$12.50");
    }
}
