//! Persistence module split across logical submodules.

mod acronyms;
mod connection;
mod sources;

pub use acronyms::{count, delete, fetch_by_id, insert, last_acronym, search};
pub use connection::{
    locate_db, open_db, open_in_memory, resolve_db_path, LocateError, StoreFile, DB_ENV_VAR,
    DB_FILE_NAME,
};
pub use sources::list_sources;
