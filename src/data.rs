use crate::errors::PdepError;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Data trait used throughout the package
/// to control for the values a table cell may hold.
///
/// Only equality and hashing are needed, values are never
/// ordered or interpreted numerically.
pub trait CellData: Clone + Eq + Hash + Debug + std::marker::Send + std::marker::Sync {}

impl<T> CellData for T where T: Clone + Eq + Hash + Debug + std::marker::Send + std::marker::Sync {}

/// A dynamically typed cell, for tables whose columns mix
/// integers, text and missing values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Missing value. All missing values compare equal to each other.
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Row major table of cell values.
///
/// All rows have the same number of columns, and columns are
/// addressed by their zero based position.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    /// The raw data in row-major order.
    pub data: Vec<T>,
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl<T> Table<T> {
    /// Create a new Table.
    ///
    /// * `data` - Cell values, row after row.
    /// * `rows` - Number of rows.
    /// * `cols` - Number of columns.
    pub fn new(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, PdepError> {
        if data.len() != rows * cols {
            return Err(PdepError::InvalidArgument(format!(
                "table of {} rows and {} columns needs {} values, {} provided",
                rows,
                cols,
                rows * cols,
                data.len()
            )));
        }
        Ok(Table { data, rows, cols })
    }

    /// Create a Table from a sequence of rows.
    ///
    /// Fails if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, PdepError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(PdepError::InvalidArgument(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            data.extend(row);
        }
        Ok(Table {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Get a single reference to an item in the table.
    ///
    /// * `i` - The ith row of the data to get.
    /// * `j` - the jth column of the data to get.
    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.data[i * self.cols + j]
    }

    /// Get a row of the table as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate over the rows of the table.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl<T> Table<T>
where
    T: Clone,
{
    /// Get a column of the data as a vector.
    pub fn get_col(&self, col: usize) -> Vec<T> {
        (0..self.rows).map(|i| self.get(i, col).clone()).collect()
    }
}

impl<T> fmt::Display for Table<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut val = String::new();
        for row in self.row_iter() {
            for (j, v) in row.iter().enumerate() {
                val.push_str(v.to_string().as_str());
                if j == (self.cols - 1) {
                    val.push('\n');
                } else {
                    val.push(' ');
                }
            }
        }
        write!(f, "{}", val)
    }
}
