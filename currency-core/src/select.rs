use crate::model::RateTable;

/// Render the numbered currency menu, one line per currency in server order.
pub fn menu_lines(table: &RateTable) -> Vec<String> {
    table
        .codes()
        .iter()
        .enumerate()
        .map(|(i, code)| {
            let name = table.get(code).map(|e| e.name.as_str()).unwrap_or_default();
            format!("{}. {} - {}", i + 1, code, name)
        })
        .collect()
}

/// Resolve a user-entered menu number to a currency code.
///
/// The input is trimmed and must parse as a whole non-negative integer;
/// the number is 1-based. Zero, out-of-range numbers, negatives and anything
/// non-integer resolve to `None`.
pub fn resolve_choice<'a>(line: &str, codes: &'a [String]) -> Option<&'a str> {
    let number: usize = line.trim().parse().ok()?;
    let index = number.checked_sub(1)?;

    codes.get(index).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RateEntry, RateTable};

    fn sample_table() -> RateTable {
        RateTable::from_entries([
            (
                "usd".to_string(),
                RateEntry { name: "U.S. Dollar".to_string(), rate: 0.74 },
            ),
            (
                "eur".to_string(),
                RateEntry { name: "Euro".to_string(), rate: 0.68 },
            ),
            (
                "gbp".to_string(),
                RateEntry { name: "U.K. Pound Sterling".to_string(), rate: 0.58 },
            ),
        ])
    }

    #[test]
    fn menu_numbers_currencies_in_server_order() {
        let lines = menu_lines(&sample_table());

        assert_eq!(
            lines,
            [
                "1. usd - U.S. Dollar",
                "2. eur - Euro",
                "3. gbp - U.K. Pound Sterling",
            ]
        );
    }

    #[test]
    fn menu_of_empty_table_is_empty() {
        assert!(menu_lines(&RateTable::default()).is_empty());
    }

    #[test]
    fn every_valid_number_resolves_to_its_code() {
        let table = sample_table();

        for (i, code) in table.codes().iter().enumerate() {
            let entered = (i + 1).to_string();
            assert_eq!(resolve_choice(&entered, table.codes()), Some(code.as_str()));
        }
    }

    #[test]
    fn choice_tolerates_surrounding_whitespace() {
        let table = sample_table();

        assert_eq!(resolve_choice("  2 \n", table.codes()), Some("eur"));
    }

    #[test]
    fn zero_and_negative_numbers_are_rejected() {
        let table = sample_table();

        assert_eq!(resolve_choice("0", table.codes()), None);
        assert_eq!(resolve_choice("-1", table.codes()), None);
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        let table = sample_table();

        assert_eq!(resolve_choice("4", table.codes()), None);
        assert_eq!(resolve_choice("100", table.codes()), None);
    }

    #[test]
    fn non_integers_are_rejected() {
        let table = sample_table();

        assert_eq!(resolve_choice("abc", table.codes()), None);
        assert_eq!(resolve_choice("1.5", table.codes()), None);
        assert_eq!(resolve_choice("2x", table.codes()), None);
        assert_eq!(resolve_choice("", table.codes()), None);
    }
}
