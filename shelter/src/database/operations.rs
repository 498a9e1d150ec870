//! Database CRUD operations for pets.
//!
//! This module implements the table-level query, insert, update and delete
//! operations. Field sets must be validated before they reach these
//! functions; the store only enforces what the table constraints enforce.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, TransactionBehavior};

use crate::error::Result;
use crate::pet::{Gender, Pet, PetValues};

use super::connection::Database;
use super::query::{Filter, SortOrder};
use super::schema::{Column, INSERT_PET, SELECT_PET_COLUMNS};

/// Helper function to deserialize a pet from a database row.
///
/// Expects row fields in [`Column::ALL`] order: `_id`, name, breed, gender, weight.
fn row_to_pet(row: &rusqlite::Row<'_>) -> rusqlite::Result<Pet> {
    let gender_code: i64 = row.get(3)?;
    let gender = Gender::try_from(gender_code).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Integer, Box::new(e))
    })?;

    Ok(Pet {
        id: row.get(0)?,
        name: row.get(1)?,
        breed: row.get(2)?,
        gender,
        weight: row.get(4)?,
    })
}

impl Database {
    /// Lists pets matching `filter`, ordered by `sort`.
    ///
    /// With no sort order the rows come back in store-defined order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row holds an invalid gender.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelter::database::{Database, Filter};
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// let pets = Database::query_pets(db.connection(), &Filter::all(), None).unwrap();
    /// assert!(pets.is_empty());
    /// ```
    pub fn query_pets(
        conn: &Connection,
        filter: &Filter,
        sort: Option<&SortOrder>,
    ) -> Result<Vec<Pet>> {
        let (where_clause, params) = filter.to_where_clause();
        let order_clause = sort.map(SortOrder::to_order_clause).unwrap_or_default();
        let sql = format!("{SELECT_PET_COLUMNS}{where_clause}{order_clause}");

        let mut stmt = conn.prepare(&sql)?;
        let pets = stmt
            .query_map(params_from_iter(params), row_to_pet)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(pets)
    }

    /// Retrieves the pet with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(pet))` if the pet exists
    /// - `Ok(None)` if no row has this id
    pub fn get_pet(conn: &Connection, id: i64) -> Result<Option<Pet>> {
        let sql = format!("{SELECT_PET_COLUMNS} WHERE _id = ?");
        conn.prepare_cached(&sql)?
            .query_row([id], row_to_pet)
            .optional()
            .map_err(Into::into)
    }

    /// Counts pets matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_pets(conn: &Connection, filter: &Filter) -> Result<usize> {
        let (where_clause, params) = filter.to_where_clause();
        let sql = format!("SELECT COUNT(*) FROM pets{where_clause}");
        let count: i64 = conn.query_row(&sql, params_from_iter(params), |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Inserts a pet and returns its new id.
    ///
    /// Unset fields take their defaults: no breed, [`Gender::Unknown`],
    /// weight 0. The write runs in an IMMEDIATE transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, a table
    /// constraint rejects the row (for instance a missing name), or the
    /// commit fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelter::database::Database;
    /// use shelter::PetValues;
    ///
    /// let mut db = Database::open_in_memory().unwrap();
    /// let id = db.insert_pet(&PetValues::new().name("Toto")).unwrap();
    /// assert_eq!(id, 1);
    /// ```
    pub fn insert_pet(&mut self, values: &PetValues) -> Result<i64> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_PET,
            params![
                values.name,
                values.breed.clone().flatten(),
                values.gender.unwrap_or(Gender::Unknown.code()),
                values.weight.unwrap_or(0),
            ],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        log::debug!("inserted pet {id}");
        Ok(id)
    }

    /// Overwrites the supplied fields on every pet matching `filter`.
    ///
    /// An empty field set touches nothing and returns 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, the update
    /// fails, or the commit fails.
    pub fn update_pets(&mut self, filter: &Filter, values: &PetValues) -> Result<usize> {
        let (set_clause, mut params) = set_clause(values);
        if set_clause.is_empty() {
            return Ok(0);
        }

        let (where_clause, where_params) = filter.to_where_clause();
        params.extend(where_params);
        let sql = format!("UPDATE pets SET {set_clause}{where_clause}");

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let rows_affected = tx.execute(&sql, params_from_iter(params))?;
        tx.commit()?;

        log::debug!("updated {rows_affected} pet(s)");
        Ok(rows_affected)
    }

    /// Permanently deletes every pet matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, the delete
    /// fails, or the commit fails.
    pub fn delete_pets(&mut self, filter: &Filter) -> Result<usize> {
        let (where_clause, params) = filter.to_where_clause();
        let sql = format!("DELETE FROM pets{where_clause}");

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let rows_deleted = tx.execute(&sql, params_from_iter(params))?;
        tx.commit()?;

        log::debug!("deleted {rows_deleted} pet(s)");
        Ok(rows_deleted)
    }
}

/// Builds the `SET` list for the supplied fields, in column order.
fn set_clause(values: &PetValues) -> (String, Vec<Value>) {
    let mut assignments = Vec::new();
    let mut params = Vec::new();

    if let Some(name) = &values.name {
        assignments.push(format!("{} = ?", Column::Name.name()));
        params.push(Value::Text(name.clone()));
    }
    if let Some(breed) = &values.breed {
        assignments.push(format!("{} = ?", Column::Breed.name()));
        params.push(breed.clone().map_or(Value::Null, Value::Text));
    }
    if let Some(gender) = values.gender {
        assignments.push(format!("{} = ?", Column::Gender.name()));
        params.push(Value::Integer(gender));
    }
    if let Some(weight) = values.weight {
        assignments.push(format!("{} = ?", Column::Weight.name()));
        params.push(Value::Integer(weight));
    }

    (assignments.join(", "), params)
}
