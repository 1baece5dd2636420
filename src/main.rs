use bookpay::application::checkout::{CheckoutOrchestrator, Liveness, shared_context};
use bookpay::domain::booking::{Booking, Group, Room, UserProfile};
use bookpay::domain::ports::SessionProviderBox;
use bookpay::infrastructure::in_memory::{
    ChargeScript, MemoryRecorder, ScriptedSession, StaticProvider, UnavailableProvider,
};
use bookpay::interfaces::csv::scenario_reader::{CheckoutScenario, ScenarioReader};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input checkout scenarios CSV file
    input: PathBuf,

    /// Reject every charge at the simulated gateway.
    #[arg(long)]
    fail_gateway: bool,

    /// Make the session provider yield no session.
    #[arg(long)]
    no_session: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = ScenarioReader::new(file);
    for (seq, scenario) in reader.scenarios().enumerate() {
        match scenario {
            Ok(scenario) => {
                if let Err(e) = run_checkout(&cli, seq as u64 + 1, &scenario).await {
                    eprintln!("Checkout failed: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading scenario: {}", e);
            }
        }
    }

    Ok(())
}

/// Runs one orchestrated checkout against the in-memory gateway and recorder,
/// emitting the recorded result as a JSON line on stdout.
async fn run_checkout(cli: &Cli, seq: u64, scenario: &CheckoutScenario) -> Result<()> {
    let booking = Booking {
        id: Some(seq),
        room_id: seq,
        group_id: seq,
        using_time: (0..scenario.slots)
            .map(|slot| format!("{:02}:00", 9 + slot))
            .collect(),
    };
    let room = Room {
        id: seq,
        price: scenario.room_price,
    };
    let group = Group {
        id: seq,
        name: scenario.group_name.clone(),
    };
    let user = UserProfile {
        nickname: Some(scenario.customer.clone()),
    };

    let provider: SessionProviderBox = if cli.no_session {
        Box::new(UnavailableProvider)
    } else {
        let script = if cli.fail_gateway {
            ChargeScript::Reject("declined by --fail-gateway".to_string())
        } else {
            ChargeScript::Echo
        };
        Box::new(StaticProvider::new(Box::new(ScriptedSession::new(script))))
    };
    let recorder = MemoryRecorder::new();

    let mut orchestrator = CheckoutOrchestrator::new(
        provider,
        Box::new(recorder.clone()),
        shared_context(Some(booking), Some(room), Some(group)),
        Some(user),
        Liveness::new(),
    );
    orchestrator.init().await;
    orchestrator.request_payment().await.into_diagnostic()?;

    for result in recorder.results().await {
        let line = serde_json::to_string(&result).into_diagnostic()?;
        println!("{line}");
    }

    Ok(())
}
