use std::{future::Future, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::time;

use crate::{Error, Result, schema};

pub struct Db {
	pub pool: PgPool,
	op_timeout: Duration,
}
impl Db {
	pub async fn connect(cfg: &postit_config::Postgres) -> Result<Self> {
		let pool = PgPoolOptions::new()
			.max_connections(cfg.pool_max_conns)
			.max_lifetime(cfg.pool_max_lifetime())
			.acquire_timeout(cfg.op_timeout())
			.connect(&cfg.dsn)
			.await?;

		Ok(Self { pool, op_timeout: cfg.op_timeout() })
	}

	pub fn from_pool(pool: PgPool, op_timeout: Duration) -> Self {
		Self { pool, op_timeout }
	}

	pub async fn ensure_schema(&self) -> Result<()> {
		let sql = schema::render_schema();
		let lock_id: i64 = 5_550_117;
		// Advisory locks are held per connection. Use a single transaction so the lock is scoped to
		// one connection and automatically released when the transaction ends.
		let mut tx = self.pool.begin().await?;

		sqlx::query("SELECT pg_advisory_xact_lock($1)").bind(lock_id).execute(&mut *tx).await?;

		for statement in sql.split(';') {
			let trimmed = statement.trim();

			if trimmed.is_empty() {
				continue;
			}

			sqlx::query(trimmed).execute(&mut *tx).await?;
		}

		tx.commit().await?;

		Ok(())
	}

	pub async fn close(&self) {
		self.pool.close().await;
	}

	/// Runs one store operation under the configured timeout.
	pub(crate) async fn bounded<T, F>(&self, op: &'static str, fut: F) -> Result<T>
	where
		F: Future<Output = Result<T>>,
	{
		match time::timeout(self.op_timeout, fut).await {
			Ok(result) => result,
			Err(_) => {
				tracing::warn!(op, timeout = ?self.op_timeout, "Store operation timed out.");

				Err(Error::Timeout(self.op_timeout))
			},
		}
	}
}
