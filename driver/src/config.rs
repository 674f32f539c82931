use std::str::FromStr;

use error_stack::{Context, ResultExt};
use kernel::prelude::entity::{FineRate, LoanPeriod, LoanPolicy};
use kernel::KernelError;
use vodca::References;

use crate::env;

static LOAN_PERIOD_DAYS: &str = "LIBRARY_LOAN_PERIOD_DAYS";
static FINE_PER_DAY_CENTS: &str = "LIBRARY_FINE_PER_DAY_CENTS";
static SEED_DEMO: &str = "LIBRARY_SEED_DEMO";
static LOG_FILTER: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "shell=warn,application=warn,driver=warn";

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct LibraryConfig {
    policy: LoanPolicy,
    seed_demo: bool,
    log_filter: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            policy: LoanPolicy::default(),
            seed_demo: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LibraryConfig {
    /// Reads the process environment and `.env`. Missing keys keep their defaults.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_lookup(env)
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let defaults = Self::default();
        let loan_period = parse::<u32>(&lookup, LOAN_PERIOD_DAYS)?
            .map(LoanPeriod::new)
            .unwrap_or(*defaults.policy.loan_period());
        let fine_rate = parse::<u64>(&lookup, FINE_PER_DAY_CENTS)?
            .map(FineRate::new)
            .unwrap_or(*defaults.policy.fine_rate());
        let seed_demo = parse::<bool>(&lookup, SEED_DEMO)?.unwrap_or(defaults.seed_demo);
        let log_filter = lookup(LOG_FILTER).unwrap_or(defaults.log_filter);
        Ok(Self {
            policy: LoanPolicy::new(loan_period, fine_rate),
            seed_demo,
            log_filter,
        })
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> error_stack::Result<Option<T>, KernelError>
where
    T: FromStr,
    T::Err: Context,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .change_context_lazy(|| KernelError::Internal)
                .attach_printable_lazy(|| format!("invalid value for {key}: {value}"))
        })
        .transpose()
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use kernel::prelude::entity::{FineRate, LoanPeriod, LoanPolicy};
    use kernel::KernelError;

    use crate::config::LibraryConfig;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() -> error_stack::Result<(), KernelError> {
        let config = LibraryConfig::from_lookup(lookup(&[]))?;
        assert_eq!(config, LibraryConfig::default());
        assert_eq!(config.policy(), &LoanPolicy::default());
        assert!(*config.seed_demo());
        assert_eq!(config.log_filter(), "shell=warn,application=warn,driver=warn");
        Ok(())
    }

    #[test]
    fn overrides() -> error_stack::Result<(), KernelError> {
        let config = LibraryConfig::from_lookup(lookup(&[
            ("LIBRARY_LOAN_PERIOD_DAYS", "7"),
            ("LIBRARY_FINE_PER_DAY_CENTS", " 25 "),
            ("LIBRARY_SEED_DEMO", "false"),
            ("RUST_LOG", "shell=debug"),
        ]))?;
        assert_eq!(
            config.policy(),
            &LoanPolicy::new(LoanPeriod::new(7u32), FineRate::new(25u64))
        );
        assert!(!*config.seed_demo());
        assert_eq!(config.log_filter(), "shell=debug");
        Ok(())
    }

    #[test]
    fn invalid_value_is_reported() {
        let report =
            LibraryConfig::from_lookup(lookup(&[("LIBRARY_LOAN_PERIOD_DAYS", "two weeks")]))
                .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Internal);
    }
}
