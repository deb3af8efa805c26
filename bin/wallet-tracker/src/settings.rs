use config::{Config, ConfigError, File};
use serde::Deserialize;
use sol_rpc::types::Commitment;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.devnet.solana.com";
const DEFAULT_CONFIG_PATH: &str = "config/Default.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Rpc {
	pub http_endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct History {
	pub limit: usize,
	pub commitment: Commitment,
	pub detail_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
	pub rpc: Rpc,
	pub history: History,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct CommandLineOptions {
	#[arg(short = 'c', long = "config-path")]
	pub config_path: Option<String>,

	#[arg(long = "rpc.http_endpoint", env = "WALLET_TRACKER_RPC_HTTP_ENDPOINT")]
	pub rpc_http_endpoint: Option<String>,

	/// How many of the most recent transactions to list.
	#[arg(long = "history.limit")]
	pub history_limit: Option<usize>,

	#[arg(long = "history.commitment")]
	pub history_commitment: Option<Commitment>,

	#[arg(long = "history.detail_timeout_ms")]
	pub history_detail_timeout_ms: Option<u64>,
}

impl Settings {
	/// Built-in defaults, overlaid with the (optional) config file,
	/// overlaid with the command-line options.
	pub fn new(opts: &CommandLineOptions) -> Result<Self, ConfigError> {
		let mut settings = match &opts.config_path {
			Some(path) => Self::from_file(File::with_name(path))?,
			None => Self::from_file(File::with_name(DEFAULT_CONFIG_PATH).required(false))?,
		};

		if let Some(opt) = &opts.rpc_http_endpoint {
			settings.rpc.http_endpoint = opt.clone();
		}
		if let Some(opt) = opts.history_limit {
			settings.history.limit = opt;
		}
		if let Some(opt) = opts.history_commitment {
			settings.history.commitment = opt;
		}
		if let Some(opt) = opts.history_detail_timeout_ms {
			settings.history.detail_timeout_ms = opt;
		}

		settings.validate_settings()?;

		Ok(settings)
	}

	fn from_file(file: File<config::FileSourceFile, config::FileFormat>) -> Result<Self, ConfigError> {
		Config::builder()
			.set_default("rpc.http_endpoint", DEFAULT_ENDPOINT)?
			.set_default("history.limit", sol_history::fetch::DEFAULT_LIMIT as i64)?
			.set_default("history.commitment", "confirmed")?
			.set_default("history.detail_timeout_ms", 5000_i64)?
			.add_source(file)
			.build()?
			.try_deserialize()
	}

	pub fn validate_settings(&self) -> Result<(), ConfigError> {
		parse_http_url(&self.rpc.http_endpoint)
			.map_err(|e| ConfigError::Message(e.to_string()))?;
		if self.history.limit == 0 {
			return Err(ConfigError::Message("history.limit must be at least 1".to_string()))
		}
		Ok(())
	}
}

/// Parse the URL and check that it is a valid http(s) url
pub fn parse_http_url(url: &str) -> anyhow::Result<Url> {
	let parsed = Url::parse(url)?;
	if parsed.scheme() != "http" && parsed.scheme() != "https" {
		return Err(anyhow::Error::msg("wrong scheme"))
	}
	if parsed.host().is_none() || parsed.cannot_be_a_base() {
		return Err(anyhow::Error::msg("invalid URL data"))
	}
	Ok(parsed)
}
