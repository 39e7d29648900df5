use std::collections::HashMap;

/// Cells as returned by the values API: row 0 is the header row.
pub type RawGrid = Vec<Vec<String>>;

/// One spreadsheet row keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentRecord {
    fields: HashMap<String, String>,
}

impl StudentRecord {
    /// Pair `cells` positionally with `headers`. Missing trailing cells become
    /// empty strings; cells past the last header are dropped. A repeated
    /// header keeps the right-most column.
    pub fn from_row(headers: &[String], cells: &[String]) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                let value = cells.get(index).cloned().unwrap_or_default();
                (header.clone(), value)
            })
            .collect();

        Self { fields }
    }

    /// Non-empty value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for StudentRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn short_row_pads_with_empty_strings() {
        let record = StudentRecord::from_row(
            &strings(&["rollNumber", "name", "class"]),
            &strings(&["101"]),
        );

        assert_eq!(record.len(), 3);
        assert!(record.contains_key("class"));
        assert_eq!(record.get("rollNumber"), Some("101"));
        assert_eq!(record.get("name"), None);
    }

    #[test]
    fn extra_cells_are_dropped() {
        let record =
            StudentRecord::from_row(&strings(&["rollNumber"]), &strings(&["101", "stray"]));

        assert_eq!(record.len(), 1);
    }

    #[test]
    fn duplicate_header_keeps_last_column() {
        let record = StudentRecord::from_row(
            &strings(&["name", "name"]),
            &strings(&["First", "Second"]),
        );

        assert_eq!(record.get("name"), Some("Second"));
    }

    #[test]
    fn get_or_falls_back_on_empty_value() {
        let record: StudentRecord = [("school", "")].into_iter().collect();

        assert_eq!(record.get_or("school", "Default"), "Default");
        assert_eq!(record.get_or("missing", "Default"), "Default");
    }
}
