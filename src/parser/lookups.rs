use std::{collections::HashMap, str::FromStr};

use crate::{errors::errors::{Error, ErrorImpl}, Position};

/// Precedence reported for tokens that are not binary operators. It is below
/// every valid threshold, so it always ends a binary-expression chain.
pub const NOT_AN_OPERATOR: i32 = -1;

/// Operator lexeme to binding power. Higher binds tighter.
///
/// Precedences are `u16` so that every stored value, and the `+ 1` used when
/// climbing, fits the signed threshold arithmetic of the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecedenceTable {
    binding_power_lookup: HashMap<String, u16>,
}

impl PrecedenceTable {
    /// An empty table: every token ends an expression.
    pub fn new() -> Self {
        PrecedenceTable {
            binding_power_lookup: HashMap::new(),
        }
    }

    pub fn insert(&mut self, operator: impl Into<String>, precedence: u16) -> Option<u16> {
        self.binding_power_lookup.insert(operator.into(), precedence)
    }

    pub fn with(mut self, operator: impl Into<String>, precedence: u16) -> Self {
        self.insert(operator, precedence);
        self
    }

    pub fn get(&self, operator: &str) -> Option<u16> {
        self.binding_power_lookup.get(operator).copied()
    }

    /// Binding power of `operator`, or [`NOT_AN_OPERATOR`] when absent.
    pub fn binding_power(&self, operator: &str) -> i32 {
        self.get(operator).map(i32::from).unwrap_or(NOT_AN_OPERATOR)
    }

    pub fn len(&self) -> usize {
        self.binding_power_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binding_power_lookup.is_empty()
    }
}

impl Default for PrecedenceTable {
    /// `<` 10, `+` 20, `-` 20, `*` 40.
    fn default() -> Self {
        PrecedenceTable::new()
            .with("<", 10)
            .with("+", 20)
            .with("-", 20)
            .with("*", 40)
    }
}

/// Parses comma separated `operator:precedence` pairs, e.g. `"<:10,+:20,*:40"`.
impl FromStr for PrecedenceTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut table = PrecedenceTable::new();

        for entry in s.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            let invalid = || {
                Error::new(
                    ErrorImpl::InvalidPrecedence {
                        entry: entry.to_string(),
                    },
                    Position::null(),
                )
            };

            // rsplit so that `:` itself can be configured as an operator
            let (operator, precedence) = entry.rsplit_once(':').ok_or_else(invalid)?;
            let operator = operator.trim();
            if operator.is_empty() {
                return Err(invalid());
            }

            let precedence = precedence.trim().parse::<u16>().map_err(|_| invalid())?;

            table.insert(operator, precedence);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = PrecedenceTable::default();

        assert_eq!(table.get("<"), Some(10));
        assert_eq!(table.get("+"), Some(20));
        assert_eq!(table.get("-"), Some(20));
        assert_eq!(table.get("*"), Some(40));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_absent_operator_is_not_binary() {
        let table = PrecedenceTable::default();

        assert_eq!(table.binding_power("/"), NOT_AN_OPERATOR);
        assert_eq!(table.binding_power("*"), 40);
        assert!(PrecedenceTable::new().is_empty());
    }

    #[test]
    fn test_parse_table() {
        let table: PrecedenceTable = " <:10, +:20 ,*:40,::5,".parse().unwrap();

        assert_eq!(table.get("<"), Some(10));
        assert_eq!(table.get("+"), Some(20));
        assert_eq!(table.get("*"), Some(40));
        assert_eq!(table.get(":"), Some(5));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_largest_precedence_stays_an_operator() {
        let table = PrecedenceTable::new().with("+", u16::MAX).with("*", 7);

        assert_eq!(table.binding_power("+"), 65535);
        assert_eq!(table.binding_power("*"), 7);
        assert_eq!("+:65535".parse::<PrecedenceTable>().unwrap(), PrecedenceTable::new().with("+", u16::MAX));
    }

    #[test]
    fn test_parse_table_errors() {
        for input in ["+", "+:", ":20", "+:-1", "+:x", "+:65536"] {
            let error = input.parse::<PrecedenceTable>().unwrap_err();
            assert_eq!(error.get_error_name(), "InvalidPrecedence", "input {:?}", input);
        }
    }
}
