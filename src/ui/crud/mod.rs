//! Generic entity editor components
//!
//! Rendering half of [`crate::core::editor`]: a record table, a draft form
//! and a manager that wires both to an in-memory list.

pub mod form;
pub mod manager;
pub mod table;

pub use form::CrudForm;
pub use manager::CrudManager;
pub use table::CrudTable;
