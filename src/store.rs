use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::types::note::Note;

// insert fails with DuplicateTitle when the trimmed title is already taken
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Note>, handle_errors::Error>;

    async fn find_by_title(&self, title: &str) -> Result<Option<Note>, handle_errors::Error>;

    async fn insert(&self, note: Note) -> Result<Note, handle_errors::Error>;
}

#[derive(Clone)]
pub struct Store {
    pub connection: PgPool,
}

impl Store {
    pub async fn new(db_url: &str, max_connections: u32) -> Result<Self, handle_errors::Error> {
        let db_pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_url)
            .await
            .map_err(handle_errors::Error::DatabaseQueryError)?;
        Ok(Store {
            connection: db_pool,
        })
    }

    pub async fn migrate(&self) -> Result<(), handle_errors::Error> {
        sqlx::migrate!("./migrations")
            .run(&self.connection)
            .await
            .map_err(handle_errors::Error::MigrationError)?;
        info!("database schema is up to date");
        Ok(())
    }
}

fn note_from_row(row: PgRow) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl NoteStore for Store {
    async fn find_all(&self) -> Result<Vec<Note>, handle_errors::Error> {
        match sqlx::query("SELECT id, title, content, created_at FROM notes ORDER BY seq")
            .map(note_from_row)
            .fetch_all(&self.connection)
            .await
        {
            Ok(notes) => Ok(notes),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Note>, handle_errors::Error> {
        match sqlx::query(
            "SELECT id, title, content, created_at FROM notes
            WHERE title_key = $1",
        )
        .bind(title.trim())
        .map(note_from_row)
        .fetch_optional(&self.connection)
        .await
        {
            Ok(note) => Ok(note),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    async fn insert(&self, note: Note) -> Result<Note, handle_errors::Error> {
        match sqlx::query(
            "INSERT INTO notes (id, title, title_key, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (title_key) DO NOTHING
            RETURNING id, title, content, created_at",
        )
        .bind(&note.id)
        .bind(&note.title)
        .bind(note.title_key())
        .bind(&note.content)
        .bind(note.created_at)
        .map(note_from_row)
        .fetch_optional(&self.connection)
        .await
        {
            Ok(Some(note)) => Ok(note),
            Ok(None) => Err(handle_errors::Error::DuplicateTitle),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    notes: Arc<RwLock<Vec<Note>>>,
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Note>, handle_errors::Error> {
        Ok(self.notes.read().await.clone())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Note>, handle_errors::Error> {
        let title = title.trim();
        Ok(self
            .notes
            .read()
            .await
            .iter()
            .find(|n| n.title_key() == title)
            .cloned())
    }

    async fn insert(&self, note: Note) -> Result<Note, handle_errors::Error> {
        let mut notes = self.notes.write().await;
        if notes.iter().any(|n| n.title_key() == note.title_key()) {
            return Err(handle_errors::Error::DuplicateTitle);
        }
        notes.push(note.clone());
        Ok(note)
    }
}
