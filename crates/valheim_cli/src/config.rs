use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Role {
    /// Tracks the world's chest totals in addition to player skills.
    Host,
    /// Tracks player skills only.
    Player,
}

/// Tracker settings. Every option can come from the environment, so a
/// service install needs no command line at all.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(long, env = "ROLE", value_enum)]
    pub role: Role,
    /// World save file name, e.g. "Midgard.db".
    #[arg(long, env = "WORLD_NAME")]
    pub world_name: String,
    /// Character name; the tracker watches "<name>.fch" (lowercased).
    #[arg(long, env = "PLAYER_NAME")]
    pub player_name: String,
    #[arg(long, env = "WORLD_SAVE_DIR")]
    pub world_save_dir: PathBuf,
    #[arg(long, env = "CHAR_SAVE_DIR")]
    pub char_save_dir: PathBuf,
    /// Minutes between polling cycles.
    #[arg(long, env = "INTERVAL_MINUTES", default_value_t = 5)]
    pub interval_minutes: u64,
    /// Path to the valheim-save-tools jar used to export the world as
    /// JSON. Defaults to the jar sitting next to the tracker binary.
    #[arg(long, env = "JAR_PATH")]
    pub jar_path: Option<PathBuf>,
    /// Directory the CSV reports are written to.
    #[arg(long, env = "OUT_DIR", default_value = "reports")]
    pub out_dir: PathBuf,
    /// Run a single cycle and exit instead of polling.
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    pub fn world_path(&self) -> PathBuf {
        self.world_save_dir.join(&self.world_name)
    }

    pub fn player_path(&self) -> PathBuf {
        self.char_save_dir
            .join(format!("{}.fch", self.player_name.to_lowercase()))
    }

    pub fn world_json_path(&self) -> PathBuf {
        std::env::temp_dir().join("world.json")
    }

    /// The configured jar path, or "valheim-save-tools.jar" next to the
    /// running executable when none was given.
    pub fn jar_path(&self) -> PathBuf {
        match &self.jar_path {
            Some(path) => path.clone(),
            None => std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
                .unwrap_or_default()
                .join("valheim-save-tools.jar"),
        }
    }

    /// Fail fast on paths that cannot work before the loop starts.
    pub fn validate(&self) -> Result<(), String> {
        if self.role == Role::Host {
            if !self.world_save_dir.exists() {
                return Err(format!(
                    "WORLD_SAVE_DIR does not exist: {}",
                    self.world_save_dir.display()
                ));
            }
            if !self.world_path().exists() {
                return Err(format!(
                    "world file not found: {}",
                    self.world_path().display()
                ));
            }
            let jar = self.jar_path();
            if !jar.exists() {
                return Err(format!(
                    "valheim-save-tools jar not found: {} (set JAR_PATH or place it next to the binary)",
                    jar.display()
                ));
            }
        }
        if !self.char_save_dir.exists() {
            return Err(format!(
                "CHAR_SAVE_DIR does not exist: {}",
                self.char_save_dir.display()
            ));
        }
        Ok(())
    }
}
