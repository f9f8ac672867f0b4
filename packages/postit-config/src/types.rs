use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_HTTP_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub service: Service,
	pub storage: Storage,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	#[serde(default = "default_http_bind")]
	pub http_bind: String,
	/// A `tracing_subscriber::EnvFilter` directive, e.g. "info" or "postit_service=debug".
	#[serde(default = "default_log_level")]
	pub log_level: String,
}
impl Default for Service {
	fn default() -> Self {
		Self { http_bind: default_http_bind(), log_level: default_log_level() }
	}
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	#[serde(default = "default_pool_max_conns")]
	pub pool_max_conns: u32,
	#[serde(default = "default_pool_max_lifetime_secs")]
	pub pool_max_lifetime_secs: u64,
	/// Upper bound for a single store operation, including the wait for a pooled connection.
	#[serde(default = "default_op_timeout_secs")]
	pub op_timeout_secs: u64,
}
impl Postgres {
	pub fn op_timeout(&self) -> Duration {
		Duration::from_secs(self.op_timeout_secs)
	}

	pub fn pool_max_lifetime(&self) -> Duration {
		Duration::from_secs(self.pool_max_lifetime_secs)
	}
}

fn default_http_bind() -> String {
	DEFAULT_HTTP_BIND.to_string()
}

fn default_log_level() -> String {
	DEFAULT_LOG_LEVEL.to_string()
}

fn default_pool_max_conns() -> u32 {
	4
}

fn default_pool_max_lifetime_secs() -> u64 {
	60
}

fn default_op_timeout_secs() -> u64 {
	15
}
