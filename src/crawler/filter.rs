use std::str::FromStr;

use thiserror::Error;

/// Which listings get persisted.
///
/// `NewOnly` and `UsedOnly` both keep a listing when its condition text
/// equals the configured target label verbatim; they differ in which
/// label the operator is expected to configure, not in mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    All,
    NewOnly,
    UsedOnly,
}

#[derive(Debug, Error)]
#[error("unknown filter mode {0:?}, expected all, new or used")]
pub struct ParseFilterModeError(String);

impl FromStr for FilterMode {
    type Err = ParseFilterModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "0" => Ok(Self::All),
            "new" | "1" => Ok(Self::NewOnly),
            "used" | "2" => Ok(Self::UsedOnly),
            _ => Err(ParseFilterModeError(s.to_string())),
        }
    }
}

/// Single decision point for the condition filter.
///
/// Pure in `(mode, target, condition)`: exact string equality, case
/// sensitive, no trimming. Unknown modes are unrepresentable because the
/// mode is parsed fallibly at configuration time.
pub fn should_keep(mode: FilterMode, target: &str, condition: &str) -> bool {
    match mode {
        FilterMode::All => true,
        FilterMode::NewOnly | FilterMode::UsedOnly => condition == target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keeps_every_condition() {
        assert!(should_keep(FilterMode::All, "Totalmente nuevo", "Totalmente nuevo"));
        assert!(should_keep(FilterMode::All, "Totalmente nuevo", "De segunda mano"));
        assert!(should_keep(FilterMode::All, "Totalmente nuevo", ""));
    }

    #[test]
    fn match_modes_require_exact_equality() {
        assert!(should_keep(FilterMode::NewOnly, "Totalmente nuevo", "Totalmente nuevo"));
        assert!(!should_keep(FilterMode::NewOnly, "Totalmente nuevo", "De segunda mano"));
        assert!(should_keep(FilterMode::UsedOnly, "De segunda mano", "De segunda mano"));
        assert!(!should_keep(FilterMode::UsedOnly, "De segunda mano", "Totalmente nuevo"));
    }

    #[test]
    fn no_normalization_of_condition_text() {
        assert!(!should_keep(FilterMode::NewOnly, "Totalmente nuevo", " Totalmente nuevo"));
        assert!(!should_keep(FilterMode::NewOnly, "Totalmente nuevo", "totalmente nuevo"));
    }

    #[test]
    fn parses_names_and_numeric_aliases() {
        assert_eq!("all".parse::<FilterMode>().unwrap(), FilterMode::All);
        assert_eq!("0".parse::<FilterMode>().unwrap(), FilterMode::All);
        assert_eq!("NEW".parse::<FilterMode>().unwrap(), FilterMode::NewOnly);
        assert_eq!("1".parse::<FilterMode>().unwrap(), FilterMode::NewOnly);
        assert_eq!("used".parse::<FilterMode>().unwrap(), FilterMode::UsedOnly);
        assert_eq!("2".parse::<FilterMode>().unwrap(), FilterMode::UsedOnly);
    }

    #[test]
    fn unknown_modes_fail_to_parse() {
        assert!("newest".parse::<FilterMode>().is_err());
        assert!("3".parse::<FilterMode>().is_err());
        assert!("".parse::<FilterMode>().is_err());
    }
}
