use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat, ThemeArg};
pub use root_commands::Commands;

/// Top-level CLI parser for the `milk` binary.
#[derive(Debug, Parser)]
#[command(name = "milk", version, about = "CeialMilk - dairy farm management")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max rows to print
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{
        AdminCommands, AuthCommands, BreedingCommands, FarmCommands, ProductionCommands,
        ThemeCommands,
    };
    use super::{Cli, Commands, OutputFormat, ThemeArg};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "milk", "--format", "json", "--limit", "10", "--verbose", "farm", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Farm {
                action: FarmCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["milk", "farm", "active", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        let flags = cli.global_flags();
        assert!(flags.quiet);
        assert_eq!(flags.format, OutputFormat::Raw);
    }

    #[test]
    fn verbosity_flags_pick_the_log_level() {
        let parse = |args: &[&str]| {
            Cli::try_parse_from(args)
                .expect("cli should parse")
                .global_flags()
                .log_level()
        };
        assert_eq!(parse(&["milk", "farm", "list"]), "warn");
        assert_eq!(parse(&["milk", "--verbose", "farm", "list"]), "debug");
        assert_eq!(parse(&["milk", "--verbose", "--quiet", "farm", "list"]), "error");
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["milk", "--format", "xml", "farm", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn farm_select_requires_numeric_id() {
        let cli = Cli::try_parse_from(["milk", "farm", "select", "42"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Farm {
                action: FarmCommands::Select { id: 42 }
            }
        ));
        assert!(Cli::try_parse_from(["milk", "farm", "select", "abc"]).is_err());
    }

    #[test]
    fn login_takes_credentials_from_flags() {
        let cli = Cli::try_parse_from([
            "milk",
            "auth",
            "login",
            "--email",
            "ana@fazenda.com",
            "--password",
            "segredo",
        ])
        .expect("cli should parse");
        let Commands::Auth {
            action: AuthCommands::Login(args),
        } = cli.command
        else {
            panic!("expected auth login");
        };
        assert_eq!(args.email, "ana@fazenda.com");
        assert_eq!(args.password, "segredo");
    }

    #[test]
    fn production_range_needs_both_bounds() {
        let cli = Cli::try_parse_from([
            "milk",
            "production",
            "list",
            "--from",
            "2025-01-01",
            "--to",
            "2025-01-31",
        ])
        .expect("cli should parse");
        let Commands::Production {
            action: ProductionCommands::List { from, to, .. },
        } = cli.command
        else {
            panic!("expected production list");
        };
        assert_eq!(from.map(|d| d.to_string()).as_deref(), Some("2025-01-01"));
        assert_eq!(to.map(|d| d.to_string()).as_deref(), Some("2025-01-31"));

        assert!(Cli::try_parse_from(["milk", "production", "list", "--from", "2025-01-01"]).is_err());
        assert!(
            Cli::try_parse_from(["milk", "production", "list", "--from", "01/01/2025", "--to", "2025-01-31"])
                .is_err()
        );
    }

    #[test]
    fn breeding_dry_offs_uses_kebab_case() {
        let cli = Cli::try_parse_from(["milk", "breeding", "dry-offs"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Breeding {
                action: BreedingCommands::DryOffs
            }
        ));
    }

    #[test]
    fn admin_users_accepts_offset() {
        let cli = Cli::try_parse_from(["milk", "admin", "users", "--offset", "40"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Admin {
                action: AdminCommands::Users { offset: 40, .. }
            }
        ));
    }

    #[test]
    fn theme_set_parses_value() {
        let cli = Cli::try_parse_from(["milk", "theme", "set", "dark"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Theme {
                action: ThemeCommands::Set {
                    theme: ThemeArg::Dark
                }
            }
        ));
        assert!(Cli::try_parse_from(["milk", "theme", "set", "solarized"]).is_err());
    }
}
