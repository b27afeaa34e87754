use super::DataStore;
use crate::error::{FlashcardsError, Result};
use crate::model::{Card, NewCard, Numbering, Stack, StackId};
use chrono::Utc;
use rusqlite::{params, Connection};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS stacks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS cards (
    cardnumber INTEGER PRIMARY KEY AUTOINCREMENT,
    front TEXT NOT NULL,
    back TEXT NOT NULL,
    FK_stack_id INTEGER NOT NULL REFERENCES stacks(id) ON DELETE CASCADE
);
CREATE INDEX IF NOT EXISTS cards_stack_idx ON cards (FK_stack_id);
";

pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Open (and if needed create) the database at `path`.
    ///
    /// No connection is kept; this only makes sure the file and schema exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self { path: path.into() };
        store.init()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }
}

impl DataStore for SqliteStore {
    fn init(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(FlashcardsError::Io)?;
            }
        }
        let conn = self.connect()?;
        conn.execute_batch(SCHEMA)?;
        debug!(path = %self.path.display(), "schema ready");
        Ok(())
    }

    fn read_all_cards(&self, stack: StackId, numbering: Numbering) -> Result<Vec<Card>> {
        let conn = self.connect()?;
        let sql = match numbering {
            Numbering::RowId => {
                "SELECT cardnumber, front, back, FK_stack_id FROM cards
                 WHERE FK_stack_id = ?1 ORDER BY cardnumber"
            }
            Numbering::Sequence => {
                "SELECT ROW_NUMBER() OVER (ORDER BY cardnumber), front, back, FK_stack_id
                 FROM cards WHERE FK_stack_id = ?1 ORDER BY cardnumber"
            }
        };
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map([stack.0], |row| {
            Ok(Card {
                number: row.get(0)?,
                front: row.get(1)?,
                back: row.get(2)?,
                stack_id: StackId(row.get(3)?),
            })
        })?;

        let cards = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(stack = %stack, count = cards.len(), ?numbering, "read cards");
        Ok(cards)
    }

    fn count_cards(&self, stack: StackId) -> Result<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM cards WHERE FK_stack_id = ?1",
            [stack.0],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn insert_card(&mut self, card: &NewCard) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO cards (front, back, FK_stack_id) VALUES (?1, ?2, ?3)",
            params![card.front, card.back, card.stack_id.0],
        )?;
        let id = conn.last_insert_rowid();
        debug!(stack = %card.stack_id, id, "inserted card");
        Ok(id)
    }

    fn delete_card(&mut self, number: i64) -> Result<bool> {
        let conn = self.connect()?;
        let affected = conn.execute("DELETE FROM cards WHERE cardnumber = ?1", [number])?;
        debug!(number, affected, "deleted card");
        Ok(affected > 0)
    }

    fn read_all_stacks(&self) -> Result<Vec<Stack>> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT id, name, created_at FROM stacks ORDER BY name COLLATE NOCASE")?;
        let rows = stmt.query_map([], |row| {
            Ok(Stack {
                id: StackId(row.get(0)?),
                name: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    fn insert_stack(&mut self, name: &str) -> Result<StackId> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO stacks (name, created_at) VALUES (?1, ?2)",
            params![name, Utc::now()],
        )?;
        let id = StackId(conn.last_insert_rowid());
        debug!(%id, name, "inserted stack");
        Ok(id)
    }

    fn delete_stack(&mut self, id: StackId) -> Result<bool> {
        let conn = self.connect()?;
        let affected = conn.execute("DELETE FROM stacks WHERE id = ?1", [id.0])?;
        debug!(%id, affected, "deleted stack");
        Ok(affected > 0)
    }

    fn rename_stack(&mut self, id: StackId, name: &str) -> Result<bool> {
        let conn = self.connect()?;
        let affected = conn.execute(
            "UPDATE stacks SET name = ?1 WHERE id = ?2",
            params![name, id.0],
        )?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, SqliteStore) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("nested").join("cards.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn creates_database_file_and_parent_dirs() {
        let (dir, store) = open_temp();
        assert!(store.path().exists());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn insert_and_read_cards() {
        let (_dir, mut store) = open_temp();
        let stack = store.insert_stack("Spanish").unwrap();
        store
            .insert_card(&NewCard::new(stack, "hola", "hello"))
            .unwrap();
        store
            .insert_card(&NewCard::new(stack, "adios", "bye"))
            .unwrap();

        let cards = store.read_all_cards(stack, Numbering::RowId).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].front, "hola");
        assert_eq!(cards[1].back, "bye");
        assert_eq!(store.count_cards(stack).unwrap(), 2);
    }

    #[test]
    fn sequence_numbering_closes_gaps() {
        let (_dir, mut store) = open_temp();
        let stack = store.insert_stack("Math").unwrap();
        let first = store.insert_card(&NewCard::new(stack, "1+1", "2")).unwrap();
        store.insert_card(&NewCard::new(stack, "2+2", "4")).unwrap();
        let third = store.insert_card(&NewCard::new(stack, "3+3", "6")).unwrap();
        store.delete_card(first).unwrap();

        let by_id = store.read_all_cards(stack, Numbering::RowId).unwrap();
        assert_eq!(by_id.last().unwrap().number, third);

        let numbered = store.read_all_cards(stack, Numbering::Sequence).unwrap();
        let numbers: Vec<i64> = numbered.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn cards_are_scoped_to_their_stack() {
        let (_dir, mut store) = open_temp();
        let a = store.insert_stack("A").unwrap();
        let b = store.insert_stack("B").unwrap();
        store.insert_card(&NewCard::new(a, "front", "back")).unwrap();

        assert_eq!(store.count_cards(a).unwrap(), 1);
        assert_eq!(store.count_cards(b).unwrap(), 0);
        assert!(store.read_all_cards(b, Numbering::Sequence).unwrap().is_empty());
    }

    #[test]
    fn delete_missing_card_reports_false() {
        let (_dir, mut store) = open_temp();
        assert!(!store.delete_card(42).unwrap());
    }

    #[test]
    fn rejects_card_for_missing_stack() {
        let (_dir, mut store) = open_temp();
        let err = store
            .insert_card(&NewCard::new(StackId(99), "x", "y"))
            .unwrap_err();
        assert!(matches!(err, FlashcardsError::Database(_)));
    }

    #[test]
    fn deleting_stack_cascades_to_cards() {
        let (_dir, mut store) = open_temp();
        let stack = store.insert_stack("Gone").unwrap();
        let card = store.insert_card(&NewCard::new(stack, "f", "b")).unwrap();

        assert!(store.delete_stack(stack).unwrap());
        assert!(store.read_all_stacks().unwrap().is_empty());
        assert!(!store.delete_card(card).unwrap());
    }

    #[test]
    fn stack_names_are_unique() {
        let (_dir, mut store) = open_temp();
        store.insert_stack("Dup").unwrap();
        assert!(store.insert_stack("Dup").is_err());
    }

    #[test]
    fn rename_stack_updates_name() {
        let (_dir, mut store) = open_temp();
        let stack = store.insert_stack("Old").unwrap();
        assert!(store.rename_stack(stack, "New").unwrap());
        let stacks = store.read_all_stacks().unwrap();
        assert_eq!(stacks[0].name, "New");
        assert!(!store.rename_stack(StackId(1234), "Nope").unwrap());
    }

    #[test]
    fn data_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cards.db");
        {
            let mut store = SqliteStore::open(&path).unwrap();
            let stack = store.insert_stack("Kept").unwrap();
            store.insert_card(&NewCard::new(stack, "q", "a")).unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        let stacks = store.read_all_stacks().unwrap();
        assert_eq!(stacks.len(), 1);
        assert_eq!(store.count_cards(stacks[0].id).unwrap(), 1);
    }
}
