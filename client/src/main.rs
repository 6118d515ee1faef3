//! `notigasm` command-line client for the Notigasm backend.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, eyre};
use notigasm_client::composition::AppServices;
use notigasm_client::config::ClientSettings;
use notigasm_client::domain::ports::{
    OpaquePayload, StartStormRequest, StormFrequency, StormId, StormMode,
};
use notigasm_client::domain::{FriendList, Handle, RegistrationOutcome};
use ortho_config::OrthoConfig;
use serde::Serialize;
use serde_json::json;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `notigasm` command arguments.
#[derive(Debug, Parser)]
#[command(name = "notigasm", about = "Talk to the Notigasm backend", version)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check backend liveness.
    Health,
    /// Register this device's push token.
    Register {
        /// Handle to register; falls back to `NOTIGASM_HANDLE`.
        #[arg(long)]
        handle: Option<String>,
    },
    /// Start a notification storm.
    StartStorm {
        #[arg(long)]
        sender: String,
        #[arg(long)]
        target: String,
        /// `LOW`, `MED`, or `HIGH`.
        #[arg(long)]
        frequency: StormFrequency,
        #[arg(long)]
        minutes: Option<u32>,
        /// `csv` or `llm`.
        #[arg(long)]
        mode: Option<StormMode>,
        #[arg(long)]
        count: Option<u32>,
        #[arg(long)]
        theme: Option<String>,
    },
    /// Stop a running storm.
    StopStorm {
        #[arg(long = "storm-id", value_name = "id")]
        storm_id: i64,
    },
    /// List storms involving a handle.
    ListStorms {
        #[arg(long)]
        handle: String,
    },
    /// Show suggested friends.
    Friends {
        /// Filter by name or username.
        #[arg(long)]
        query: Option<String>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to create Tokio runtime")?;
    runtime.block_on(run(args.command))
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Health => {
            let (_, services) = load_services()?;
            print_payload(&services.backend().health().await?)
        }
        Command::Register { handle } => {
            let (settings, services) = load_services()?;
            let handle = handle
                .or_else(|| settings.handle().map(str::to_owned))
                .ok_or_else(|| eyre!("no handle given; pass --handle or set NOTIGASM_HANDLE"))?;
            let session = services.session(handle);
            report_registration(session.ensure_push_registration().await)
        }
        Command::StartStorm {
            sender,
            target,
            frequency,
            minutes,
            mode,
            count,
            theme,
        } => {
            let request = StartStormRequest {
                sender_handle: Handle::new(sender)?,
                target_handle: Handle::new(target)?,
                frequency,
                minutes,
                mode,
                count,
                theme,
            };
            let (_, services) = load_services()?;
            let started = services.backend().start_storm(&request).await?;
            if let Some(storm_id) = started.storm_id {
                info!(%storm_id, "storm started");
            }
            print_payload(&started.payload)
        }
        Command::StopStorm { storm_id } => {
            let (_, services) = load_services()?;
            print_payload(&services.backend().stop_storm(StormId(storm_id)).await?)
        }
        Command::ListStorms { handle } => {
            let handle = Handle::new(handle)?;
            let (_, services) = load_services()?;
            print_payload(&services.backend().list_storms(&handle).await?)
        }
        Command::Friends { query } => print_friends(query.as_deref()),
    }
}

fn load_services() -> Result<(ClientSettings, AppServices)> {
    let settings = ClientSettings::load_from_iter([OsString::from("notigasm")])
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let services =
        AppServices::from_settings(&settings).wrap_err("failed to build client services")?;
    Ok((settings, services))
}

fn report_registration(outcome: &RegistrationOutcome) -> Result<()> {
    let summary = match outcome {
        RegistrationOutcome::Registered(token) => json!({
            "outcome": outcome.label(),
            "token": token.to_string(),
        }),
        RegistrationOutcome::Skipped(reason) => json!({
            "outcome": outcome.label(),
            "reason": reason.as_str(),
        }),
        RegistrationOutcome::Failed(error) => {
            return Err(eyre!("push registration failed: {error}"));
        }
    };
    print_json(&summary)
}

fn print_friends(query: Option<&str>) -> Result<()> {
    let friends = FriendList::suggested().wrap_err("failed to load suggested friends")?;
    match query {
        Some(query) => print_json(&friends.search(query)),
        None => print_json(friends.entries()),
    }
}

fn print_payload(payload: &OpaquePayload) -> Result<()> {
    print_json(payload.as_json())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).wrap_err("failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}
