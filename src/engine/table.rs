//! Columnar indicator table: one row per year, one named column per indicator.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::engine::indicators::YEAR_COLUMN;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: &'static str,
    pub values: Vec<f64>,
}

/// Invariants: the first column is [`YEAR_COLUMN`], years increase by exactly one,
/// and every column holds one value per year.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorTable {
    years: Vec<i32>,
    columns: Vec<Column>,
}

impl IndicatorTable {
    /// Table with only the year column. `years` must already be validated.
    pub(crate) fn with_years(years: Vec<i32>) -> Self {
        let year_column = Column {
            name: YEAR_COLUMN,
            values: years.iter().map(|&year| f64::from(year)).collect(),
        };
        Self {
            years,
            columns: vec![year_column],
        }
    }

    /// Append a column computed per year. Names already present are left untouched.
    pub(crate) fn push_column<F>(&mut self, name: &'static str, mut value_for: F)
    where
        F: FnMut(i32) -> f64,
    {
        if self.contains(name) {
            return;
        }
        let values = self.years.iter().map(|&year| value_for(year)).collect();
        self.columns.push(Column { name, values });
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    pub fn last_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|column| column.name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .map(|column| column.values.as_slice())
    }

    fn index_of(&self, year: i32) -> Option<usize> {
        let first = self.first_year()?;
        let index = usize::try_from(i64::from(year) - i64::from(first)).ok()?;
        (index < self.years.len()).then_some(index)
    }

    pub fn value_at(&self, name: &str, year: i32) -> Option<f64> {
        let index = self.index_of(year)?;
        self.get(name).and_then(|values| values.get(index).copied())
    }

    /// All `(column, value)` pairs for one year, in column order.
    pub fn row(&self, year: i32) -> Option<Vec<(&'static str, f64)>> {
        let index = self.index_of(year)?;
        Some(
            self.columns
                .iter()
                .map(|column| (column.name, column.values[index]))
                .collect(),
        )
    }
}

impl Serialize for IndicatorTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        map.serialize_entry(YEAR_COLUMN, &self.years)?;
        for column in self.columns.iter().filter(|c| c.name != YEAR_COLUMN) {
            map.serialize_entry(column.name, &column.values)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IndicatorTable {
        let mut table = IndicatorTable::with_years(vec![2000, 2001, 2002]);
        table.push_column("Double", |year| f64::from(year) * 2.0);
        table
    }

    #[test]
    fn year_column_comes_first() {
        let table = sample();
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec![YEAR_COLUMN, "Double"]);
        assert_eq!(table.get(YEAR_COLUMN), Some(&[2000.0, 2001.0, 2002.0][..]));
    }

    #[test]
    fn value_lookup_by_year() {
        let table = sample();
        assert_eq!(table.value_at("Double", 2001), Some(4002.0));
        assert_eq!(table.value_at("Double", 1999), None);
        assert_eq!(table.value_at("Double", 2003), None);
        assert_eq!(table.value_at("Missing", 2001), None);
        assert_eq!(table.row(2002).map(|r| r.len()), Some(2));
    }

    #[test]
    fn duplicate_column_is_ignored() {
        let mut table = sample();
        table.push_column("Double", |_| 0.0);
        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.value_at("Double", 2000), Some(4000.0));
    }

    #[test]
    fn serializes_years_as_integers_in_column_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"Annee":[2000,2001,2002],"Double":[4000.0,4002.0,4004.0]}"#);
    }
}
