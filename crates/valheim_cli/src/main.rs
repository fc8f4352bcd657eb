mod config;
mod convert;
mod report;

use std::fs;
use std::process;
use std::thread;
use std::time::{Duration, SystemTime};

use clap::Parser;
use sha2::{Digest, Sha256};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use valheim_core::{WorldSnapshot, aggregate_chests, decode_skills};

use config::{Cli, Role};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(msg) = cli.validate() {
        error!("{msg}");
        process::exit(2);
    }
    if cli.role == Role::Host
        && let Err(msg) = convert::require_java()
    {
        error!("{msg}");
        process::exit(2);
    }
    if let Err(e) = fs::create_dir_all(&cli.out_dir) {
        error!("could not create {}: {e}", cli.out_dir.display());
        process::exit(2);
    }

    info!(
        "Valheim tracker — role: {:?}, player: {}",
        cli.role, cli.player_name
    );
    info!("world: {}", cli.world_path().display());
    info!("reports: {}", cli.out_dir.display());
    info!("interval: {} min", cli.interval_minutes);

    run_loop(&cli);
}

/// Per-cycle state: the last world export hash and the last seen mtime of
/// the player file, so unchanged saves skip their decode and report.
#[derive(Default)]
struct Watch {
    last_world_hash: Option<[u8; 32]>,
    last_player_mtime: Option<SystemTime>,
}

fn run_loop(cli: &Cli) {
    let mut watch = Watch::default();

    loop {
        if cli.role == Role::Host
            && let Err(msg) = world_cycle(cli, &mut watch)
        {
            error!("world cycle failed: {msg}");
        }
        if let Err(msg) = player_cycle(cli, &mut watch) {
            error!("player cycle failed: {msg}");
        }

        if cli.once {
            return;
        }
        thread::sleep(Duration::from_secs(cli.interval_minutes * 60));
    }
}

fn world_cycle(cli: &Cli, watch: &mut Watch) -> Result<(), String> {
    let raw =
        convert::export_world_json(&cli.jar_path(), &cli.world_path(), &cli.world_json_path())?;

    let hash: [u8; 32] = Sha256::digest(raw.as_bytes()).into();
    if watch.last_world_hash == Some(hash) {
        info!("no world change detected; skipping report");
        return Ok(());
    }

    let snapshot: WorldSnapshot =
        serde_json::from_str(&raw).map_err(|e| format!("world export is not valid JSON: {e}"))?;
    let totals = aggregate_chests(&snapshot).map_err(|e| e.to_string())?;

    if totals.empty_chests > 0 {
        info!("{} chest(s) with no inventory payload", totals.empty_chests);
    }
    info!("{} item type(s) found across all chests", totals.len());

    let path = cli.out_dir.join("World.csv");
    report::write_world_csv(&path, &totals).map_err(|e| e.to_string())?;
    info!("updated {}", path.display());

    watch.last_world_hash = Some(hash);
    Ok(())
}

fn player_cycle(cli: &Cli, watch: &mut Watch) -> Result<(), String> {
    let player_path = cli.player_path();
    if !player_path.exists() {
        return Err(format!(
            "character file not found: {}",
            player_path.display()
        ));
    }

    let mtime = fs::metadata(&player_path)
        .and_then(|m| m.modified())
        .map_err(|e| format!("could not stat {}: {e}", player_path.display()))?;
    if watch.last_player_mtime == Some(mtime) {
        info!("no new save for {}; skipping report", cli.player_name);
        return Ok(());
    }
    watch.last_player_mtime = Some(mtime);

    info!("new save detected for {}, decoding", cli.player_name);
    let data =
        fs::read(&player_path).map_err(|e| format!("could not read {}: {e}", player_path.display()))?;
    let skills = decode_skills(&data).map_err(|e| e.to_string())?;

    if skills.is_empty() {
        warn!("no skills decoded; character file might be incomplete");
        return Ok(());
    }

    let path = cli.out_dir.join(format!("{}.csv", cli.player_name));
    report::write_skills_csv(&path, &skills).map_err(|e| e.to_string())?;
    info!("updated {} with {} skill(s)", path.display(), skills.len());

    Ok(())
}
