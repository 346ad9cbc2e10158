//! Record storage module.
//!
//! Owns the persisted collection of catalogued commands behind a single
//! SQLite file. The store performs no validation of its own and will
//! persist whatever it is handed; field rules live in [`crate::validate`]
//! and are enforced by the navigation layer before anything reaches here.

mod error;

pub use error::StoreError;

use rusqlite::{params, Connection, Row};

/// Name of the storage file, created in the working directory if absent.
pub const DB_FILE: &str = "database.sqlite";

/// Applied idempotently on every startup.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS commands (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    description TEXT,
    path TEXT
);
";

/// One catalogued command: a name, a description, and the filesystem
/// path (or command line) to copy out for execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub path: String,
}

impl Record {
    /// List shortcut key, derived from the first character of the name.
    /// A record with an empty name gets no shortcut; validation normally
    /// makes that unreachable.
    pub fn shortcut(&self) -> Option<char> {
        self.name.chars().next()
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        path: row.get(3)?,
    })
}

/// Handle over the storage file. Acquired once at process start and
/// released on drop, on every exit path.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open or create the storage file at the given path.
    pub fn open(path: &str) -> Result<Store, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_string(),
            source,
        })?;
        Store::initialize(conn)
    }

    /// Open a throwaway in-memory store. Used by tests in place of a
    /// file-backed one; the two behave identically.
    pub fn open_in_memory() -> Result<Store, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: ":memory:".to_string(),
            source,
        })?;
        Store::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Store, StoreError> {
        // LIKE is ASCII-case-insensitive out of the box; searches here
        // match substrings case-sensitively.
        conn.execute_batch("PRAGMA case_sensitive_like = ON;")
            .map_err(StoreError::Schema)?;
        conn.execute_batch(SCHEMA).map_err(StoreError::Schema)?;
        Ok(Store { conn })
    }

    /// Return true iff the collection is non-empty.
    pub fn has_records(&self) -> Result<bool, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM commands", [], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Return records whose name or description contains the filter as a
    /// substring, ordered by name ascending. An empty filter returns the
    /// whole collection.
    pub fn list(&self, filter: &str) -> Result<Vec<Record>, StoreError> {
        let mut entries = Vec::new();
        if filter.is_empty() {
            let mut stmt = self.conn.prepare(
                "SELECT id, name, description, path FROM commands ORDER BY name ASC",
            )?;
            let rows = stmt.query_map([], record_from_row)?;
            for row in rows {
                entries.push(row?);
            }
        } else {
            let pattern = format!("%{filter}%");
            let mut stmt = self.conn.prepare(
                "SELECT id, name, description, path FROM commands \
                 WHERE name LIKE ?1 OR description LIKE ?1 ORDER BY name ASC",
            )?;
            let rows = stmt.query_map(params![pattern], record_from_row)?;
            for row in rows {
                entries.push(row?);
            }
        }
        Ok(entries)
    }

    /// Append a record to the collection. The incoming id is ignored;
    /// SQLite assigns the next unique one.
    pub fn create(&self, record: &Record) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO commands (name, description, path) VALUES (?1, ?2, ?3)",
            params![record.name, record.description, record.path],
        )?;
        Ok(())
    }

    /// Rewrite the fields of the record with the matching id. An unknown
    /// id updates zero rows; that is success, not an error.
    pub fn update(&self, record: &Record) -> Result<(), StoreError> {
        self.conn.execute(
            "UPDATE commands SET name = ?1, description = ?2, path = ?3 WHERE id = ?4",
            params![record.name, record.description, record.path, record.id],
        )?;
        Ok(())
    }

    /// Remove the record with the given id, silently doing nothing when
    /// it is absent.
    pub fn delete_one(&self, id: i64) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM commands WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Empty the collection unconditionally.
    pub fn delete_all(&self) -> Result<(), StoreError> {
        self.conn.execute("DELETE FROM commands", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, description: &str, path: &str) -> Record {
        Record {
            id: 0,
            name: name.to_string(),
            description: description.to_string(),
            path: path.to_string(),
        }
    }

    fn seeded() -> Store {
        let store = Store::open_in_memory().unwrap();
        store.create(&record("beta", "second entry", "/bin/beta")).unwrap();
        store.create(&record("alpha", "first entry", "/bin/alpha")).unwrap();
        store
    }

    #[test]
    fn test_create_then_list_round_trip() {
        let store = Store::open_in_memory().unwrap();
        assert!(!store.has_records().unwrap());

        let entry = record("lss", "list files", "/bin/ls");
        store.create(&entry).unwrap();

        let all = store.list("").unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, entry.name);
        assert_eq!(all[0].description, entry.description);
        assert_eq!(all[0].path, entry.path);
        assert!(all[0].id > 0);
        assert!(store.has_records().unwrap());
    }

    #[test]
    fn test_create_assigns_fresh_ids_and_ignores_input_id() {
        let store = Store::open_in_memory().unwrap();
        let mut entry = record("one", "first", "/bin/one");
        entry.id = 42;
        store.create(&entry).unwrap();
        store.create(&record("two", "second", "/bin/two")).unwrap();

        let all = store.list("").unwrap();
        assert_eq!(all.len(), 2);
        assert_ne!(all[0].id, all[1].id);
        assert_ne!(all[0].id, 42);
    }

    #[test]
    fn test_list_orders_by_name_ascending() {
        let store = seeded();
        let all = store.list("").unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "alpha");
        assert_eq!(all[1].name, "beta");
    }

    #[test]
    fn test_list_filter_matches_name_or_description() {
        let store = seeded();

        let by_name = store.list("al").unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "alpha");

        let by_description = store.list("second").unwrap();
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "beta");

        assert!(store.list("zzz").unwrap().is_empty());
    }

    #[test]
    fn test_list_filter_returns_subset_of_full_listing() {
        let store = seeded();
        let all = store.list("").unwrap();
        let filtered = store.list("entry").unwrap();
        assert_eq!(filtered.len(), 2);
        for entry in &filtered {
            assert!(all.contains(entry));
            assert!(entry.name.contains("entry") || entry.description.contains("entry"));
        }
    }

    #[test]
    fn test_list_filter_is_case_sensitive() {
        let store = seeded();
        assert_eq!(store.list("al").unwrap().len(), 1);
        assert!(store.list("AL").unwrap().is_empty());
    }

    #[test]
    fn test_update_rewrites_fields_and_is_idempotent() {
        let store = seeded();
        let mut entry = store.list("alpha").unwrap().remove(0);
        entry.description = "renamed entry".to_string();
        entry.path = "/usr/bin/alpha".to_string();

        store.update(&entry).unwrap();
        let once = store.list("alpha").unwrap();
        store.update(&entry).unwrap();
        let twice = store.list("alpha").unwrap();

        assert_eq!(once, twice);
        assert_eq!(once[0].description, "renamed entry");
        assert_eq!(once[0].path, "/usr/bin/alpha");
        assert_eq!(once[0].id, entry.id);
    }

    #[test]
    fn test_update_unknown_id_is_a_no_op() {
        let store = seeded();
        let before = store.list("").unwrap();
        let mut ghost = record("ghost", "not stored", "/bin/ghost");
        ghost.id = 9999;
        store.update(&ghost).unwrap();
        assert_eq!(store.list("").unwrap(), before);
    }

    #[test]
    fn test_delete_one_and_unknown_id_no_op() {
        let store = seeded();
        let alpha = store.list("alpha").unwrap().remove(0);

        store.delete_one(9999).unwrap();
        assert_eq!(store.list("").unwrap().len(), 2);

        store.delete_one(alpha.id).unwrap();
        let remaining = store.list("").unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "beta");
    }

    #[test]
    fn test_delete_all_empties_collection() {
        let store = seeded();
        assert!(store.has_records().unwrap());
        store.delete_all().unwrap();
        assert!(!store.has_records().unwrap());
        assert!(store.list("").unwrap().is_empty());
    }

    #[test]
    fn test_open_is_idempotent_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.sqlite");
        let path = path.to_str().unwrap();

        {
            let store = Store::open(path).unwrap();
            store.create(&record("lss", "list files", "/bin/ls")).unwrap();
        }

        // Reopening applies the schema again and finds the same rows.
        let store = Store::open(path).unwrap();
        let all = store.list("").unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "lss");
    }

    #[test]
    fn test_record_shortcut() {
        assert_eq!(record("alpha", "abc", "/a").shortcut(), Some('a'));
        assert_eq!(record("", "abc", "/a").shortcut(), None);
    }
}
