use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;

pub struct Db {
    conn: Mutex<Connection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub email: String,
    pub user_id: String,
    pub nationality: Option<String>,
}

impl Db {
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS users (
                email TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                nationality TEXT
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn insert_user(&self, user: &UserRecord) -> rusqlite::Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO users (email, user_id, nationality) VALUES (?1, ?2, ?3)",
            params![user.email, user.user_id, user.nationality],
        )?;
        Ok(())
    }

    pub fn get_user_by_email(&self, email: &str) -> rusqlite::Result<Option<UserRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare("SELECT email, user_id, nationality FROM users WHERE email = ?1")?;
        stmt.query_row(params![email], |row| {
            Ok(UserRecord {
                email: row.get(0)?,
                user_id: row.get(1)?,
                nationality: row.get(2)?,
            })
        })
        .optional()
    }

    pub fn user_count(&self) -> rusqlite::Result<i64> {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
    }
}
