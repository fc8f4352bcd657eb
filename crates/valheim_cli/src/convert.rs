//! Interface to the external valheim-save-tools converter.
//!
//! The world save is a proprietary binary; the jar converts it to JSON and
//! the tracker only ever reads that export. The converter runs out of
//! process, so the only contract here is argument order and exit status.

use std::fs;
use std::path::Path;
use std::process::Command;

pub fn require_java() -> Result<(), String> {
    match Command::new("java").arg("-version").output() {
        Ok(output) if output.status.success() => Ok(()),
        _ => Err(
            "java not found; install Java 17+ (Temurin/OpenJDK) and ensure 'java' is on PATH"
                .to_string(),
        ),
    }
}

/// Run the converter on the world save and return the exported JSON text.
pub fn export_world_json(jar: &Path, world: &Path, json_out: &Path) -> Result<String, String> {
    let output = Command::new("java")
        .arg("-jar")
        .arg(jar)
        .arg(world)
        .arg(json_out)
        .output()
        .map_err(|e| format!("failed to launch java: {e}"))?;

    if !output.status.success() {
        return Err(format!(
            "valheim-save-tools failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    fs::read_to_string(json_out)
        .map_err(|e| format!("failed to read {}: {e}", json_out.display()))
}
