use std::{
	sync::{
		atomic::{AtomicBool, Ordering},
		Arc,
	},
	time::Duration,
};

use anyhow::Context;
use clap::Parser;
use sol_history::{HistoryError, HistoryFetch, HistoryOutcome};
use sol_rpc::{
	retrying::{Delays, Retrying},
	HttpClient,
};
use tracing_subscriber::filter::LevelFilter;

mod settings;

use settings::{CommandLineOptions, Settings};

#[derive(Parser, Debug)]
#[command(name = "wallet-tracker", version, about = "Lists the recent transactions of a wallet")]
struct Args {
	/// The wallet address to look up.
	address: String,

	/// Fail fast instead of retrying flaky rpc requests.
	#[arg(long)]
	no_retry: bool,

	#[command(flatten)]
	options: CommandLineOptions,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::FmtSubscriber::builder()
		.with_env_filter(
			tracing_subscriber::EnvFilter::builder()
				.with_default_directive(LevelFilter::INFO.into())
				.from_env()?,
		)
		.try_init()
		.expect("setting default subscriber failed");

	let args = Args::parse();
	let settings = Settings::new(&args.options).context("failed to load settings")?;

	let delays =
		if args.no_retry { Delays { attempts: 1, ..Delays::default() } } else { Delays::default() };
	let api = Retrying::new(HttpClient::new(settings.rpc.http_endpoint.clone())?, delays);

	// Ctrl-c abandons the query at the next phase boundary instead of
	// leaving the process hanging on in-flight lookups.
	let kill_switch = Arc::new(AtomicBool::new(false));
	{
		let kill_switch = kill_switch.clone();
		tokio::spawn(async move {
			if tokio::signal::ctrl_c().await.is_ok() {
				kill_switch.store(true, Ordering::Relaxed);
			}
		});
	}

	let outcome = HistoryFetch::new(&api, &args.address)
		.limit(settings.history.limit)
		.commitment(settings.history.commitment)
		.detail_timeout(Duration::from_millis(settings.history.detail_timeout_ms))
		.abort_on(&kill_switch)
		.run()
		.await;

	match outcome {
		Ok(HistoryOutcome::History(summaries)) => {
			println!("Recent transactions for {}:", args.address.trim());
			for summary in summaries {
				println!(
					"{}  {:>19}  {:>16} SOL",
					summary.signature, summary.display_time, summary.amount,
				);
			}
		},
		Ok(HistoryOutcome::NoHistory) => {
			println!(
				"No transactions found for this address on {}. Try airdropping some SOL first.",
				settings.rpc.http_endpoint
			);
		},
		Err(reason @ HistoryError::InvalidAddress(_)) => {
			eprintln!("{reason}. Please check the address and try again.");
			std::process::exit(1);
		},
		Err(reason) => {
			eprintln!("Error fetching transactions: {reason}");
			std::process::exit(1);
		},
	}

	Ok(())
}
