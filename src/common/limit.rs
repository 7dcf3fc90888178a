use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Upper bound on how many entries a ranked view returns.
///
/// Missing, zero, negative and non-numeric limits all mean "no limit". Parsing
/// therefore never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Limit {
    #[default]
    Unlimited,
    AtMost(usize),
}

impl Limit {
    pub fn new(count: i64) -> Self {
        match usize::try_from(count) {
            Ok(n) if n > 0 => Limit::AtMost(n),
            _ => Limit::Unlimited,
        }
    }

    /// Interpret an optional raw parameter, e.g. a query or CLI value
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    pub fn apply<T>(self, items: &mut Vec<T>) {
        if let Limit::AtMost(n) = self {
            items.truncate(n);
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Unlimited => write!(f, "unlimited"),
            Limit::AtMost(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for Limit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.trim().parse::<i64>().map(Limit::new).unwrap_or_default())
    }
}
