use anyhow::{Context, Result};
use rusqlite::{params, Row};

use super::{parse_datetime, Database};
use crate::models::{level_from_str, HistoryRecord};

fn row_to_record(row: &Row) -> Result<HistoryRecord> {
    let level: String = row.get("level")?;
    let created_at: String = row.get("created_at")?;
    let points: i64 = row.get("points")?;
    let questions: i64 = row.get("questions")?;

    Ok(HistoryRecord {
        id: row.get("id")?,
        title: row.get("title")?,
        level: level_from_str(&level)?,
        points: points as u32,
        questions: questions as u32,
        created_at: parse_datetime(&created_at)?,
    })
}

impl Database {
    /// The append-only sink the session core writes to at completion.
    pub async fn insert_history(&self, record: &HistoryRecord) -> Result<()> {
        let record = record.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO history (id, title, level, points, questions, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.id,
                    record.title,
                    record.level.as_str(),
                    record.points as i64,
                    record.questions as i64,
                    record.created_at.to_rfc3339(),
                ],
            )
            .with_context(|| "failed to insert history record")?;
            Ok(())
        })
        .await
    }

    /// Past results for the history screen, newest first.
    pub async fn list_history(&self) -> Result<Vec<HistoryRecord>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, level, points, questions, created_at
                 FROM history
                 ORDER BY created_at DESC",
            )?;

            let mut rows = stmt.query([])?;
            let mut records = Vec::new();
            while let Some(row) = rows.next()? {
                records.push(row_to_record(row)?);
            }
            Ok(records)
        })
        .await
    }

    /// Swipe-to-remove on the history screen. Returns whether a row was
    /// actually deleted.
    pub async fn delete_history(&self, id: &str) -> Result<bool> {
        let id = id.to_string();
        self.execute(move |conn| {
            let deleted = conn
                .execute("DELETE FROM history WHERE id = ?1", params![id])
                .with_context(|| "failed to delete history record")?;
            Ok(deleted > 0)
        })
        .await
    }
}
