//! Database schema management and the version upgrade policy.
//!
//! There is no data migration: a database whose schema version is older
//! than [`CURRENT_SCHEMA_VERSION`] has its `pets` table dropped and
//! recreated, discarding every stored pet. [`UpgradePolicy::Refuse`] turns
//! that into an error instead.

use rusqlite::{Connection, OptionalExtension, Transaction, TransactionBehavior};

use crate::error::{Error, Result};

use super::config::UpgradePolicy;
use super::schema::{
    CREATE_METADATA_TABLE, CREATE_PETS_TABLE, CURRENT_SCHEMA_VERSION, DROP_PETS_TABLE,
    INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION, TABLE_NAME,
};

const TABLE_EXISTS: &str = "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?";

/// Initializes the database schema.
///
/// Creates the metadata and pets tables and records the current schema
/// version in one IMMEDIATE transaction. Existing tables are left in place.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use shelter::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    create_tables(&tx)?;
    tx.commit()?;
    Ok(())
}

/// Drops and recreates the pets table, then records the current version.
///
/// Runs in a single IMMEDIATE transaction. Returns the number of rows
/// discarded.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
pub fn recreate_schema(conn: &Connection) -> Result<usize> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    let discarded = drop_and_create_tables(&tx)?;
    tx.commit()?;
    Ok(discarded)
}

fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_PETS_TABLE, [])?;
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION.to_string()])?;
    Ok(())
}

fn drop_and_create_tables(conn: &Connection) -> Result<usize> {
    let discarded = if table_exists(conn, TABLE_NAME)? {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM pets", [], |row| row.get(0))?;
        usize::try_from(count).unwrap_or(0)
    } else {
        0
    };

    conn.execute(DROP_PETS_TABLE, [])?;
    create_tables(conn)?;
    Ok(discarded)
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if a query fails or the stored version is not an
/// integer.
///
/// # Returns
///
/// - `Ok(0)` if the metadata table doesn't exist or has no version
/// - `Ok(version)` if a version is found
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    if !table_exists(conn, "metadata")? {
        return Ok(0);
    }

    let value: Option<String> = conn
        .query_row(SELECT_SCHEMA_VERSION, [], |row| row.get(0))
        .optional()?;

    match value {
        None => Ok(0),
        Some(value) => value.parse::<i32>().map_err(|_| Error::Validation {
            field: "schema_version".into(),
            message: format!("stored schema version '{value}' is not an integer"),
        }),
    }
}

/// Checks schema compatibility and initializes or upgrades if needed.
///
/// 1. Fresh database: the schema is created.
/// 2. Version matches: nothing happens.
/// 3. Version is newer: fails, this build is too old.
/// 4. Version is older (or the pets table exists without a version): the
///    table is dropped and recreated under [`UpgradePolicy::Recreate`], or
///    the open fails under [`UpgradePolicy::Refuse`].
///
/// Cases 1 and 4 re-read the version inside an IMMEDIATE transaction and
/// create or recreate within it, so concurrent openers of one file apply at
/// most one change. Read-only handles never change the schema; anything but
/// a matching version fails.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] when the schema cannot be
/// used, or a store error when a statement fails.
pub fn check_schema_compatibility(
    conn: &Connection,
    policy: UpgradePolicy,
    read_only: bool,
) -> Result<()> {
    let version = get_schema_version(conn)?;
    if version == CURRENT_SCHEMA_VERSION {
        return Ok(());
    }
    if version > CURRENT_SCHEMA_VERSION || read_only {
        return Err(unsupported_version(version));
    }

    // Another handle may have set up the file since the first read
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    let version = get_schema_version(&tx)?;
    if version == CURRENT_SCHEMA_VERSION {
        return Ok(());
    }
    if version > CURRENT_SCHEMA_VERSION {
        return Err(unsupported_version(version));
    }

    if version == 0 && !table_exists(&tx, TABLE_NAME)? {
        create_tables(&tx)?;
        tx.commit()?;
        log::debug!("initialized fresh schema at version {CURRENT_SCHEMA_VERSION}");
        return Ok(());
    }

    match policy {
        UpgradePolicy::Refuse => {
            log::error!(
                "schema version {version} is older than {CURRENT_SCHEMA_VERSION} and upgrades are refused"
            );
            Err(unsupported_version(version))
        }
        UpgradePolicy::Recreate => {
            let discarded = drop_and_create_tables(&tx)?;
            tx.commit()?;
            log::warn!(
                "upgraded schema from version {version} to {CURRENT_SCHEMA_VERSION} by recreating the pets table; {discarded} pet(s) discarded"
            );
            Ok(())
        }
    }
}

fn unsupported_version(found: i32) -> Error {
    Error::UnsupportedSchemaVersion {
        expected: CURRENT_SCHEMA_VERSION,
        found,
    }
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let count: i64 = conn.query_row(TABLE_EXISTS, [name], |row| row.get(0))?;
    Ok(count > 0)
}
