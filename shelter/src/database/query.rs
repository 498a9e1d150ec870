//! Typed row selection and ordering.
//!
//! A [`Filter`] is a conjunction of [`Condition`]s rendered to a
//! parameterized `WHERE` clause. Column names always come from
//! [`Column`], so caller input never reaches the SQL text.

use clap::ValueEnum;
use rusqlite::types::Value;

use crate::pet::Gender;

use super::schema::Column;

/// Comparison operator of a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `=`
    Eq,
    /// `<>`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `LIKE`
    Like,
    /// `IS NULL` (the value is ignored)
    IsNull,
    /// `IS NOT NULL` (the value is ignored)
    IsNotNull,
}

impl Comparison {
    const fn sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Like => "LIKE",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
        }
    }

    const fn takes_value(self) -> bool {
        !matches!(self, Self::IsNull | Self::IsNotNull)
    }
}

/// A single `column op value` test.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// The column tested.
    pub column: Column,
    /// The comparison applied.
    pub op: Comparison,
    /// The bound value.
    pub value: Value,
}

impl Condition {
    /// Creates a condition.
    #[must_use]
    pub fn new(column: Column, op: Comparison, value: impl Into<Value>) -> Self {
        Self {
            column,
            op,
            value: value.into(),
        }
    }
}

/// A conjunction of conditions. The empty filter matches every row.
///
/// # Examples
///
/// ```
/// use shelter::database::{Column, Comparison, Filter};
/// use shelter::Gender;
///
/// let filter = Filter::all()
///     .gender(Gender::Male)
///     .and(Column::Weight, Comparison::Ge, 5);
/// let (clause, params) = filter.to_where_clause();
/// assert_eq!(clause, " WHERE gender = ? AND weight >= ?");
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    /// Creates a filter matching every row.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Creates a filter matching the row with `id`.
    #[must_use]
    pub fn by_id(id: i64) -> Self {
        Self::all().and(Column::Id, Comparison::Eq, id)
    }

    /// Adds a condition.
    #[must_use]
    pub fn and(mut self, column: Column, op: Comparison, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition::new(column, op, value));
        self
    }

    /// Adds an equality condition.
    #[must_use]
    pub fn eq(self, column: Column, value: impl Into<Value>) -> Self {
        self.and(column, Comparison::Eq, value)
    }

    /// Adds a gender equality condition.
    #[must_use]
    pub fn gender(self, gender: Gender) -> Self {
        self.eq(Column::Gender, gender.code())
    }

    /// Appends every condition of `other`.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        self.conditions.extend(other.conditions.iter().cloned());
        self
    }

    /// Returns the conditions of the filter.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Returns true if the filter matches every row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Renders the filter as a `WHERE` clause (with a leading space) and its
    /// bound parameters. The empty filter renders as an empty string.
    #[must_use]
    pub fn to_where_clause(&self) -> (String, Vec<Value>) {
        if self.conditions.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut params = Vec::new();
        let terms: Vec<String> = self
            .conditions
            .iter()
            .map(|c| {
                if c.op.takes_value() {
                    params.push(c.value.clone());
                    format!("{} {} ?", c.column.name(), c.op.sql())
                } else {
                    format!("{} {}", c.column.name(), c.op.sql())
                }
            })
            .collect();

        (format!(" WHERE {}", terms.join(" AND ")), params)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// Ordering of query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    /// Column sorted on.
    pub column: Column,
    /// Direction of the sort.
    pub direction: SortDirection,
}

impl SortOrder {
    /// Ascending order on `column`.
    #[must_use]
    pub const fn asc(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    /// Descending order on `column`.
    #[must_use]
    pub const fn desc(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }

    /// Renders the `ORDER BY` clause with a leading space.
    #[must_use]
    pub fn to_order_clause(&self) -> String {
        let direction = match self.direction {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        };
        format!(" ORDER BY {} {direction}", self.column.name())
    }
}
