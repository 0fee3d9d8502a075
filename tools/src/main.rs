//! sim-runner: headless driver for the Zambezi expedition engine.
//!
//! Usage:
//!   sim-runner --seed 12345 --ticks 40 --db expedition.db
//!   sim-runner --seed 12345 --interval-ms 2000 --ticks 100
//!   sim-runner --ipc-mode --db expedition.db
//!
//! Plain mode runs a fixed number of ticks (optionally paced in real
//! time) and prints a run summary. IPC mode speaks newline-delimited
//! JSON on stdin/stdout for a dashboard front end; the loop exits on
//! `quit` or EOF so the recurring driver never outlives its consumer.

use anyhow::Result;
use expedition_core::{
    config::ExpeditionConfig,
    engine::ExpeditionEngine,
    logbook::{ExpeditionLogStore, LogIcon},
    snapshot::ExpeditionSnapshot,
    store::KvStore,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Tick {
        count: u64,
    },
    AddLog {
        title: String,
        #[serde(default)]
        body: String,
        icon: LogIcon,
    },
    Quit,
}

#[derive(serde::Serialize)]
struct UiState<'a> {
    snapshot: Option<&'a ExpeditionSnapshot>,
    total_route_km: f64,
    log_count: usize,
    logs: &'a [expedition_core::logbook::ExpeditionLogEntry],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ticks = parse_arg(&args, "--ticks", 40u64);
    let interval_ms = parse_arg(&args, "--interval-ms", 0u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(":memory:");
    let config_path = args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].as_str());

    let config = match config_path {
        Some(path) => ExpeditionConfig::from_path(path)?,
        None => ExpeditionConfig::default(),
    };

    if !ipc_mode {
        println!("Zambezi Source Explorer — sim-runner");
        println!("  started:     {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
        println!("  seed:        {seed}");
        println!("  ticks:       {ticks}");
        println!("  interval_ms: {interval_ms}");
        println!("  db:          {db}");
        println!("  route pts:   {}", config.route.len());
        println!();
    }

    let store = if db == ":memory:" {
        KvStore::in_memory()?
    } else {
        KvStore::open(db)?
    };
    let mut logbook = ExpeditionLogStore::open(store)?;
    let mut engine = ExpeditionEngine::new(config, seed);

    if ipc_mode {
        run_ipc_loop(&mut engine, &mut logbook)?;
    } else {
        for _ in 0..ticks {
            engine.tick()?;
            if interval_ms > 0 {
                thread::sleep(Duration::from_millis(interval_ms));
            }
        }
        print_summary(&engine, &logbook);
    }

    Ok(())
}

fn run_ipc_loop(
    engine: &mut ExpeditionEngine,
    logbook: &mut ExpeditionLogStore<KvStore>,
) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Tick { count } => {
                engine.run_ticks(count)?;
                write_state(&mut stdout, engine, logbook)?;
            }
            IpcCommand::GetState => {
                write_state(&mut stdout, engine, logbook)?;
            }
            IpcCommand::AddLog { title, body, icon } => {
                let position = engine.current_position();
                match logbook.create(&title, &body, icon, position)? {
                    Some(entry) => log::info!("Log {} pinned at {:?}", entry.id, entry.position),
                    None => log::warn!("Rejected log with empty title"),
                }
                write_state(&mut stdout, engine, logbook)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn write_state(
    stdout: &mut io::Stdout,
    engine: &ExpeditionEngine,
    logbook: &ExpeditionLogStore<KvStore>,
) -> Result<()> {
    let state = UiState {
        snapshot: engine.latest(),
        total_route_km: engine.total_route_km(),
        log_count: logbook.len(),
        logs: logbook.entries(),
    };
    writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
    Ok(())
}

fn print_summary(engine: &ExpeditionEngine, logbook: &ExpeditionLogStore<KvStore>) {
    println!("=== RUN SUMMARY ===");
    println!("  final tick:     {}", engine.clock.current_tick);
    println!("  route total:    {:.1} km", engine.total_route_km());
    match engine.latest() {
        Some(s) => {
            println!("  position:       ({:.4}, {:.4})", s.position.lat, s.position.lng);
            println!("  distance:       {:.1} km", s.distance_km);
            println!("  heart rate:     {} bpm", s.heart_rate);
            println!("  water pH:       {:.2}", s.ph);
            println!("  turbidity:      {:.2} NTU", s.turbidity);
            println!("  water temp:     {:.1} °C", s.water_temp);
            println!("  nearest threat: {:.1} km", s.nearest_threat_km);
            println!("  history window: {} samples", s.history.len());
        }
        None => println!("  (no ticks run)"),
    }
    println!("  log entries:    {}", logbook.len());
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
