//! Statistic kinds and name parsing

use resample_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The supported summary statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatisticKind {
    /// Arithmetic average of numeric observations
    Mean,
    /// Middle order statistic of numeric observations
    Median,
    /// Share of categorical observations equal to a success category
    Proportion,
}

impl StatisticKind {
    /// All supported kinds
    pub const ALL: [StatisticKind; 3] = [
        StatisticKind::Mean,
        StatisticKind::Median,
        StatisticKind::Proportion,
    ];

    /// The statistic name accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            StatisticKind::Mean => "mean",
            StatisticKind::Median => "median",
            StatisticKind::Proportion => "proportion",
        }
    }

    /// Parse a statistic name
    ///
    /// Anything other than the supported names fails with
    /// [`Error::InvalidStatistic`]; no default is substituted.
    pub fn parse(name: &str) -> Result<Self> {
        for kind in Self::ALL {
            if name.eq_ignore_ascii_case(kind.name()) {
                return Ok(kind);
            }
        }
        Err(Error::InvalidStatistic(name.to_string()))
    }
}

impl FromStr for StatisticKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_kinds() {
        assert_eq!(StatisticKind::parse("mean").unwrap(), StatisticKind::Mean);
        assert_eq!(StatisticKind::parse("median").unwrap(), StatisticKind::Median);
        assert_eq!(
            StatisticKind::parse("proportion").unwrap(),
            StatisticKind::Proportion
        );
        assert_eq!(StatisticKind::parse("Mean").unwrap(), StatisticKind::Mean);
        assert_eq!("median".parse::<StatisticKind>().unwrap(), StatisticKind::Median);
    }

    #[test]
    fn test_parse_unsupported_kind_fails() {
        let err = StatisticKind::parse("mode").unwrap_err();
        match err {
            Error::InvalidStatistic(name) => assert_eq!(name, "mode"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(StatisticKind::parse("").is_err());
        assert!(StatisticKind::parse("variance").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in StatisticKind::ALL {
            assert_eq!(StatisticKind::parse(&kind.to_string()).unwrap(), kind);
        }
    }
}
