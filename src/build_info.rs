//! Commit and date baked in by the build script.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line printed by `--version`.
pub fn version_line() -> String {
    format!("snake-arcade {} ({})", BUILD_DATE, BUILD_COMMIT)
}
