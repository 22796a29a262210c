use serde::Deserialize;
use std::collections::HashMap;

/// One currency from the daily feed: a display name plus the multiplier
/// converting 1 CAD into this currency.
///
/// The feed carries more fields per entry (alphaCode, date, ...); only the
/// two we read are deserialized, the rest are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateEntry {
    pub name: String,
    pub rate: f64,
}

/// The daily rate table, rebuilt from scratch on every fetch.
///
/// Keeps the currency codes in the order the server returned them, since the
/// menu numbering is defined by that order, alongside a map for lookup by
/// code. Codes are stored with the casing the server used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    codes: Vec<String>,
    entries: HashMap<String, RateEntry>,
}

impl RateTable {
    /// Build a table from `(code, entry)` pairs, preserving their order.
    /// A repeated code keeps its original menu position but takes the
    /// latest entry, matching how JSON object parsing treats duplicate keys.
    pub fn from_entries<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, RateEntry)>,
    {
        let mut codes = Vec::new();
        let mut entries = HashMap::new();

        for (code, entry) in pairs {
            if entries.insert(code.clone(), entry).is_none() {
                codes.push(code);
            }
        }

        Self { codes, entries }
    }

    /// Currency codes in server order; menu index `i` maps to `codes()[i - 1]`.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn get(&self, code: &str) -> Option<&RateEntry> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, rate: f64) -> RateEntry {
        RateEntry { name: name.to_string(), rate }
    }

    #[test]
    fn from_entries_preserves_order() {
        let table = RateTable::from_entries([
            ("usd".to_string(), entry("U.S. Dollar", 0.74)),
            ("eur".to_string(), entry("Euro", 0.68)),
            ("gbp".to_string(), entry("U.K. Pound Sterling", 0.58)),
        ]);

        assert_eq!(table.codes(), ["usd", "eur", "gbp"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("eur"), Some(&entry("Euro", 0.68)));
    }

    #[test]
    fn duplicate_code_keeps_position_and_takes_latest_entry() {
        let table = RateTable::from_entries([
            ("usd".to_string(), entry("U.S. Dollar", 0.74)),
            ("eur".to_string(), entry("Euro", 0.68)),
            ("usd".to_string(), entry("U.S. Dollar", 0.75)),
        ]);

        assert_eq!(table.codes(), ["usd", "eur"]);
        assert_eq!(table.get("usd"), Some(&entry("U.S. Dollar", 0.75)));
    }

    #[test]
    fn unknown_code_is_absent() {
        let table = RateTable::default();

        assert!(table.is_empty());
        assert_eq!(table.get("usd"), None);
    }
}
