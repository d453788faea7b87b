use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use log::debug;
use rusqlite::Connection;
use thiserror::Error;

/// Environment variable that can point at the acronym database.
pub const DB_ENV_VAR: &str = "ACRODB";
/// Default database file name looked for beside the running executable.
pub const DB_FILE_NAME: &str = "acronyms.db";

/// Reasons the locator could not produce a usable database path. These are
/// configuration errors: the front end reports them and exits, there is no
/// retry.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The user named a file explicitly, so falling back silently to another
    /// location would be surprising.
    #[error("database file `{0}` is missing or is not a readable regular file")]
    OverrideInvalid(PathBuf),
    #[error(
        "no acronym database found; set $ACRODB or place `acronyms.db` next to the executable"
    )]
    NotFound,
}

/// Resolve the database path from the real process environment: an explicit
/// command-line override first, then `$ACRODB`, then `acronyms.db` in the
/// executable's directory.
pub fn locate_db(override_path: Option<&Path>) -> Result<PathBuf, LocateError> {
    let env_path = env::var_os(DB_ENV_VAR).map(PathBuf::from);
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    resolve_db_path(override_path, env_path.as_deref(), exe_dir.as_deref())
}

/// Pure resolution over the three candidate sources, separated from the
/// environment lookups so the fallback order can be tested directly. An
/// unusable environment candidate falls through to the executable-relative
/// default; an unusable explicit override is an error outright.
pub fn resolve_db_path(
    override_path: Option<&Path>,
    env_path: Option<&Path>,
    exe_dir: Option<&Path>,
) -> Result<PathBuf, LocateError> {
    if let Some(path) = override_path {
        if is_readable_file(path) {
            return Ok(path.to_path_buf());
        }
        return Err(LocateError::OverrideInvalid(path.to_path_buf()));
    }

    if let Some(path) = env_path {
        if is_readable_file(path) {
            return Ok(path.to_path_buf());
        }
        debug!(
            "candidate `{}` from ${DB_ENV_VAR} is not usable, trying the executable directory",
            path.display()
        );
    }

    if let Some(dir) = exe_dir {
        let fallback = dir.join(DB_FILE_NAME);
        if is_readable_file(&fallback) {
            return Ok(fallback);
        }
        debug!("fallback candidate `{}` is not usable", fallback.display());
    }

    Err(LocateError::NotFound)
}

fn is_readable_file(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => fs::File::open(path).is_ok(),
        _ => false,
    }
}

/// Metadata about the resolved store file, reported in the startup summary.
#[derive(Debug, Clone)]
pub struct StoreFile {
    pub path: PathBuf,
    pub size: u64,
    /// Absent on filesystems that do not track modification times.
    pub modified: Option<SystemTime>,
}

impl StoreFile {
    pub fn inspect(path: &Path) -> Result<Self> {
        let meta = fs::metadata(path)
            .with_context(|| format!("failed to stat database file `{}`", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            size: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

/// Open the database file and lazily create the `ACRONYMS` table so a fresh
/// file behaves as an empty store.
pub fn open_db(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("failed to open SQLite database `{}`", path.display()))?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// In-memory variant used by tests that do not care about the file system.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    ensure_schema(&conn)?;
    Ok(conn)
}

fn ensure_schema(conn: &Connection) -> Result<()> {
    // Records are addressed through the implicit rowid, so no explicit
    // primary key column is declared.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS ACRONYMS (
            Acronym TEXT,
            Definition TEXT,
            Description TEXT,
            Source TEXT
        )",
        [],
    )
    .context("failed to create ACRONYMS table")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{resolve_db_path, LocateError, DB_FILE_NAME};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn override_outranks_env_and_exe_candidates() {
        let dir = tempdir().unwrap();
        let override_db = dir.path().join("mine.db");
        let env_db = dir.path().join("env.db");
        fs::write(&override_db, b"").unwrap();
        fs::write(&env_db, b"").unwrap();

        let resolved =
            resolve_db_path(Some(&override_db), Some(&env_db), Some(dir.path())).unwrap();
        assert_eq!(resolved, override_db);
    }

    #[test]
    fn unusable_env_candidate_falls_back_to_exe_dir() {
        let dir = tempdir().unwrap();
        let fallback = dir.path().join(DB_FILE_NAME);
        fs::write(&fallback, b"").unwrap();
        let missing = dir.path().join("missing.db");

        let resolved = resolve_db_path(None, Some(&missing), Some(dir.path())).unwrap();
        assert_eq!(resolved, fallback);
    }

    #[test]
    fn unusable_override_is_an_error_not_a_fallback() {
        let dir = tempdir().unwrap();
        let fallback = dir.path().join(DB_FILE_NAME);
        fs::write(&fallback, b"").unwrap();
        let missing = dir.path().join("missing.db");

        let err = resolve_db_path(Some(&missing), None, Some(dir.path())).unwrap_err();
        assert!(matches!(err, LocateError::OverrideInvalid(path) if path == missing));
    }

    #[test]
    fn fails_when_no_candidate_is_usable() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.db");

        let err = resolve_db_path(None, Some(&missing), Some(dir.path())).unwrap_err();
        assert!(matches!(err, LocateError::NotFound));
    }

    #[test]
    fn a_directory_is_not_a_usable_candidate() {
        let dir = tempdir().unwrap();

        let err = resolve_db_path(None, Some(dir.path()), None).unwrap_err();
        assert!(matches!(err, LocateError::NotFound));
    }
}
