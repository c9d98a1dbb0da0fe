//! Built-in configuration baseline.
//!
//! Do not default a boolean to `true` here: `false` is what an unset field
//! reads as, so a user could never turn such an option off.

use super::{GraphConfig, OsConfig, StatsConfig, UserConfig};
use std::time::Duration;

const DEFAULT_STATS_DURATION: Duration = Duration::from_secs(3 * 60);

/// The fully populated default configuration. Pure, no I/O.
pub fn default_config() -> UserConfig {
    UserConfig {
        reporting: "undetermined".to_string(),
        confirm_on_quit: false,
        os: platform_os_config(),
        stats: StatsConfig {
            max_duration: DEFAULT_STATS_DURATION,
            graphs: Some(vec![
                GraphConfig {
                    caption: "CPU (%)".to_string(),
                    stat_path: "DerivedStats.CPUPercentage".to_string(),
                    color: "cyan".to_string(),
                    ..Default::default()
                },
                GraphConfig {
                    caption: "Memory (%)".to_string(),
                    stat_path: "DerivedStats.MemoryPercentage".to_string(),
                    color: "green".to_string(),
                    ..Default::default()
                },
            ]),
        },
    }
}

/// Open commands for the platform this binary was built for
#[cfg(target_os = "macos")]
pub fn platform_os_config() -> OsConfig {
    OsConfig {
        open_command: "open {{filename}}".to_string(),
        open_link_command: "open {{link}}".to_string(),
    }
}

/// Open commands for the platform this binary was built for
#[cfg(target_os = "windows")]
pub fn platform_os_config() -> OsConfig {
    OsConfig {
        open_command: r#"cmd /c "start "" {{filename}}""#.to_string(),
        open_link_command: r#"cmd /c "start "" {{link}}""#.to_string(),
    }
}

/// Open commands for the platform this binary was built for
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn platform_os_config() -> OsConfig {
    OsConfig {
        open_command: r#"sh -c "xdg-open {{filename}} >/dev/null""#.to_string(),
        open_link_command: r#"sh -c "xdg-open {{link}} >/dev/null""#.to_string(),
    }
}
