//!  Booking Travel Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

// Lenient field readers over raw upstream records.
// Upstream sends numbers as either JSON numbers or numeric strings.

use serde_json::Value;

pub(crate) fn text(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

/// First entry among `keys` holding a non-empty string
pub(crate) fn first_non_empty_text(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

pub(crate) fn float(record: &Value, key: &str) -> Option<f64> {
    match record.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn integer(record: &Value, key: &str) -> Option<i64> {
    match record.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Renders a scalar for display: strings as-is, numbers in JSON form.
/// `null` and absent yield `None`.
pub(crate) fn display(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_strings_are_accepted() {
        let record = json!({"dest_id": "-1456928", "review_score": "8.7", "class": 4});
        assert_eq!(integer(&record, "dest_id"), Some(-1456928));
        assert_eq!(float(&record, "review_score"), Some(8.7));
        assert_eq!(float(&record, "class"), Some(4.0));
        assert_eq!(integer(&record, "missing"), None);
    }

    #[test]
    fn test_display_keeps_number_form() {
        let record = json!({"a": 120, "b": 99.5, "c": "80", "d": null});
        assert_eq!(display(&record, "a").as_deref(), Some("120"));
        assert_eq!(display(&record, "b").as_deref(), Some("99.5"));
        assert_eq!(display(&record, "c").as_deref(), Some("80"));
        assert_eq!(display(&record, "d"), None);
    }

    #[test]
    fn test_first_non_empty_text_skips_blanks_and_nulls() {
        let record = json!({"a": "", "b": null, "c": "EUR"});
        assert_eq!(
            first_non_empty_text(&record, &["a", "b", "c"]).as_deref(),
            Some("EUR")
        );
        assert_eq!(first_non_empty_text(&record, &["a", "b"]), None);
    }
}
