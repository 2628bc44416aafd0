//! Typed argument structs, one per engine action.
//!
//! - `staging`: whole-config and transaction actions (batch, export, import,
//!   changes, commit, revert)
//! - `sections`: section-level structure (add, delete, rename, reorder)
//! - `options`: reading and writing values (show, get, set, add_list, del_list)

pub mod options;
pub mod sections;
pub mod staging;
