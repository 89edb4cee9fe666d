//! Command-line argument parsing
//!
//! Supports:
//! - Printing the keybind cheatsheet as JSON (the default)
//! - Reading an explicit niri config instead of the XDG default, either as
//!   `niri-keybinds CONFIG` or `niri-keybinds binds CONFIG`
//! - Detecting CPU/GPU temperature sensor paths

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;

/// Extract categorized niri keybinds for a cheatsheet
#[derive(Parser, Debug)]
#[command(name = "niri-keybinds", version, about = "Extract categorized niri keybinds")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Niri config file when no subcommand is given
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short = 'p', long, global = true)]
    pub pretty: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the keybind cheatsheet as JSON
    Binds {
        /// Niri config file (defaults to ~/.config/niri/config.kdl)
        #[arg(value_name = "CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print detected CPU/GPU temperature input paths
    Sensors {
        /// Where sysfs is mounted
        #[arg(long, value_name = "PATH")]
        sysfs_root: Option<PathBuf>,
    },
}

/// What the binary should do, with all defaults resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    Binds { config: PathBuf, pretty: bool },
    Sensors { sysfs_root: PathBuf },
}

impl CliArgs {
    /// Resolve CLI args against the app config
    ///
    /// CLI values win over `config.yaml`, which wins over built-in defaults.
    pub fn into_mode(self, app: &AppConfig) -> Result<RunMode, String> {
        match self.command {
            Some(CliCommand::Sensors { sysfs_root }) => Ok(RunMode::Sensors {
                sysfs_root: sysfs_root.unwrap_or_else(|| app.sysfs_root.clone()),
            }),
            Some(CliCommand::Binds { config }) => {
                Self::binds_mode(config.or(self.config), self.pretty, app)
            }
            None => Self::binds_mode(self.config, self.pretty, app),
        }
    }

    fn binds_mode(
        config: Option<PathBuf>,
        pretty: bool,
        app: &AppConfig,
    ) -> Result<RunMode, String> {
        let config = config
            .or_else(|| app.niri_config_path())
            .ok_or_else(|| "Cannot locate niri config: no home directory".to_string())?;

        Ok(RunMode::Binds {
            config,
            pretty: pretty || app.pretty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppConfig {
        AppConfig {
            niri_config: Some(PathBuf::from("/etc/niri/config.kdl")),
            pretty: false,
            sysfs_root: PathBuf::from("/sys"),
        }
    }

    #[test]
    fn test_no_subcommand_is_binds() {
        let args = CliArgs::parse_from(["niri-keybinds"]);
        assert_eq!(
            args.into_mode(&app()).unwrap(),
            RunMode::Binds {
                config: PathBuf::from("/etc/niri/config.kdl"),
                pretty: false,
            }
        );
    }

    #[test]
    fn test_explicit_config_overrides_app_config() {
        let args = CliArgs::parse_from(["niri-keybinds", "binds", "/tmp/other.kdl"]);
        assert_eq!(
            args.into_mode(&app()).unwrap(),
            RunMode::Binds {
                config: PathBuf::from("/tmp/other.kdl"),
                pretty: false,
            }
        );
    }

    #[test]
    fn test_bare_config_argument_is_binds() {
        let args = CliArgs::try_parse_from(["niri-keybinds", "/tmp/x/config.kdl"]).unwrap();
        assert_eq!(
            args.into_mode(&app()).unwrap(),
            RunMode::Binds {
                config: PathBuf::from("/tmp/x/config.kdl"),
                pretty: false,
            }
        );

        let args =
            CliArgs::try_parse_from(["niri-keybinds", "--pretty", "/tmp/x/config.kdl"]).unwrap();
        assert_eq!(
            args.into_mode(&app()).unwrap(),
            RunMode::Binds {
                config: PathBuf::from("/tmp/x/config.kdl"),
                pretty: true,
            }
        );
    }

    #[test]
    fn test_subcommand_name_is_not_a_config_path() {
        let args = CliArgs::parse_from(["niri-keybinds", "sensors"]);
        assert!(args.config.is_none());
        assert!(matches!(args.command, Some(CliCommand::Sensors { .. })));
    }

    #[test]
    fn test_pretty_from_flag_or_config() {
        let args = CliArgs::parse_from(["niri-keybinds", "binds", "--pretty"]);
        assert!(matches!(
            args.into_mode(&app()).unwrap(),
            RunMode::Binds { pretty: true, .. }
        ));

        let pretty_app = AppConfig {
            pretty: true,
            ..app()
        };
        let args = CliArgs::parse_from(["niri-keybinds"]);
        assert!(matches!(
            args.into_mode(&pretty_app).unwrap(),
            RunMode::Binds { pretty: true, .. }
        ));
    }

    #[test]
    fn test_sensors_root() {
        let args = CliArgs::parse_from(["niri-keybinds", "sensors"]);
        assert_eq!(
            args.into_mode(&app()).unwrap(),
            RunMode::Sensors {
                sysfs_root: PathBuf::from("/sys")
            }
        );

        let args = CliArgs::parse_from(["niri-keybinds", "sensors", "--sysfs-root", "/tmp/sys"]);
        assert_eq!(
            args.into_mode(&app()).unwrap(),
            RunMode::Sensors {
                sysfs_root: PathBuf::from("/tmp/sys")
            }
        );
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
