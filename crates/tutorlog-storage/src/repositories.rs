// Repository layer for database operations
//
// Single write path (insert_event), several read paths. All display
// orderings pair wall-clock timestamps with `id` as an explicit secondary
// sort key: created_at is not monotonic across concurrent writers.

use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::models::*;

/// Upper bound on concurrent connections held against the database.
const POOL_MAX_CONNECTIONS: u32 = 5;

/// Idle connections are dropped after this window so the pool does not hold
/// resources against a remote database during low traffic.
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(30);

/// How long an acquire may wait on an exhausted pool before erroring.
const POOL_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a bounded pool. The pool serializes acquisition fairly and
    /// returns connections on every exit path, including errors and
    /// request cancellation.
    pub async fn connect(options: PgConnectOptions) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(POOL_MAX_CONNECTIONS)
            .idle_timeout(POOL_IDLE_TIMEOUT)
            .acquire_timeout(POOL_ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Release all connections and reject further acquires. Called once at
    /// process shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("connection pool closed");
    }

    /// Trivial round-trip query for the health check.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    // ============================================
    // Events (append-only)
    // ============================================

    /// Insert one event. A single atomic statement: no partial writes are
    /// ever visible.
    pub async fn insert_event(&self, input: NewEvent) -> Result<InsertedEvent> {
        let row = sqlx::query_as::<_, InsertedEvent>(
            r#"
            INSERT INTO events (event_type, user_email, payload)
            VALUES ($1, $2, $3)
            RETURNING id, created_at
            "#,
        )
        .bind(&input.event_type)
        .bind(&input.user_email)
        .bind(&input.payload)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Most recent events, newest first. The caller clamps `limit`.
    pub async fn list_recent_events(&self, limit: i64) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, event_type, user_email, payload, created_at
            FROM events
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// All events whose payload's notebook field exactly equals `notebook`,
    /// ordered for per-user grouping: user, then time, then insertion order
    /// as the tiebreak for colliding timestamps.
    pub async fn list_notebook_events(&self, notebook: &str) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, event_type, user_email, payload, created_at
            FROM events
            WHERE payload->>'notebook' = $1
            ORDER BY user_email ASC, created_at ASC, id ASC
            "#,
        )
        .bind(notebook)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Distinct notebook names with event counts, busiest first. Events
    /// whose payload lacks a notebook key never appear here.
    pub async fn notebook_counts(&self) -> Result<Vec<NotebookCount>> {
        let rows = sqlx::query_as::<_, NotebookCount>(
            r#"
            SELECT payload->>'notebook' AS notebook, COUNT(*) AS events
            FROM events
            WHERE payload->>'notebook' IS NOT NULL
            GROUP BY payload->>'notebook'
            ORDER BY COUNT(*) DESC, payload->>'notebook' ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
