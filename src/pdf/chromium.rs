//! Chromium/Chrome binary discovery
//!
//! The report renderer prints through a headless Chromium. Discovery probes a
//! fixed list of known install paths for the current OS, then asks the OS
//! locator (`which` / `mdfind` / `where`). There is no fallback guess: when
//! nothing usable is found the renderer reports `BrowserNotFound` instead of
//! deferring the failure to a doomed launch.

use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(target_os = "linux")]
const CANDIDATE_PATHS: &[&str] = &[
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
    "/usr/bin/google-chrome",
    "/usr/bin/google-chrome-stable",
    "/snap/bin/chromium",
    "/usr/local/bin/chromium",
];

#[cfg(target_os = "macos")]
const CANDIDATE_PATHS: &[&str] = &[
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "/Applications/Chromium.app/Contents/MacOS/Chromium",
];

#[cfg(target_os = "windows")]
const CANDIDATE_PATHS: &[&str] = &[
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
];

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const CANDIDATE_PATHS: &[&str] = &[];

/// Locate a Chromium/Chrome binary.
///
/// A configured path wins, but only if it actually exists; a stale
/// configuration is treated the same as nothing found.
pub fn discover(configured: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = configured {
        if Path::new(path).exists() {
            return Some(PathBuf::from(path));
        }
        tracing::warn!("Configured chromium path {} does not exist", path);
        return None;
    }

    for candidate in CANDIDATE_PATHS {
        if Path::new(candidate).exists() {
            tracing::debug!("Found browser binary at {}", candidate);
            return Some(PathBuf::from(candidate));
        }
    }

    locate_via_os()
}

#[cfg(target_os = "linux")]
fn locate_via_os() -> Option<PathBuf> {
    for name in ["chromium", "chromium-browser", "google-chrome", "google-chrome-stable"] {
        if let Some(path) = run_locator("which", &[name]) {
            return Some(path);
        }
    }
    None
}

#[cfg(target_os = "macos")]
fn locate_via_os() -> Option<PathBuf> {
    let bundle = run_locator(
        "mdfind",
        &["kMDItemCFBundleIdentifier == 'com.google.Chrome'"],
    )?;
    Some(bundle.join("Contents/MacOS/Google Chrome"))
}

#[cfg(target_os = "windows")]
fn locate_via_os() -> Option<PathBuf> {
    run_locator("where", &["chrome.exe"])
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn locate_via_os() -> Option<PathBuf> {
    None
}

#[allow(dead_code)]
fn run_locator(program: &str, args: &[&str]) -> Option<PathBuf> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.lines().next()?.trim();
    if first.is_empty() {
        return None;
    }
    let path = PathBuf::from(first);
    path.exists().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_missing_path_is_rejected() {
        assert_eq!(discover(Some("/nonexistent/chromium-binary")), None);
    }

    #[test]
    fn test_configured_existing_path_wins() {
        // Any file that is guaranteed to exist works for the probe
        let this_file = env!("CARGO_MANIFEST_DIR").to_string() + "/Cargo.toml";
        assert_eq!(
            discover(Some(&this_file)),
            Some(PathBuf::from(&this_file))
        );
    }
}
