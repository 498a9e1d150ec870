//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `list`: List pets, with filters and sorting
//! - `get`: Show one pet
//! - `add`: Add a pet
//! - `update`: Update fields of one pet or of every pet
//! - `delete`: Delete one pet, or every pet with `--all`
//! - `insert_dummy`: Insert the sample pet Toto
//! - `delete_all`: Delete every pet
//! - `completions`: Generate shell completion scripts

pub mod add;
pub mod completions;
pub mod delete;
pub mod delete_all;
pub mod get;
pub mod insert_dummy;
pub mod list;
pub mod update;

pub use add::AddCommand;
pub use completions::CompletionsCommand;
pub use delete::DeleteCommand;
pub use delete_all::DeleteAllCommand;
pub use get::GetCommand;
pub use insert_dummy::InsertDummyCommand;
pub use list::ListCommand;
pub use update::UpdateCommand;
