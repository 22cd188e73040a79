//! Command-line interface definition using clap.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use eventdesk_store::{SortOrder, StoreConfig};
use eventdesk_views::VisibilityFilter;

/// Origin used to build public event links.
pub const DEFAULT_ORIGIN: &str = "http://localhost:4200";

/// EventDesk - browse and manage a tenant's events
#[derive(Parser, Debug)]
#[command(name = "eventdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// URL of the events document
    #[arg(long, env = "EVENTDESK_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Tenant (organizer id) whose events are shown
    #[arg(long, env = "EVENTDESK_TENANT", global = true)]
    pub tenant: Option<String>,

    /// Read events from a local JSON document instead of the endpoint
    #[arg(long, global = true)]
    pub feed: Option<PathBuf>,

    /// Origin prefixed to public event links
    #[arg(long, env = "EVENTDESK_ORIGIN", default_value = DEFAULT_ORIGIN, global = true)]
    pub origin: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List events
    List {
        /// Match title or description (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Visibility filter
        #[arg(long, default_value = "all")]
        visibility: VisibilityArg,

        /// Order by start time
        #[arg(long, default_value = "asc")]
        sort: SortArg,

        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show one event
    Show {
        /// Event ID
        #[arg(required = true)]
        id: String,
    },

    /// Create an event (kept for this session only)
    Create(CreateArgs),

    /// Soft-delete an event (kept for this session only)
    Delete {
        /// Event ID
        #[arg(required = true)]
        id: String,
    },

    /// Resolve a route such as /p/events/details/<id> and show that screen
    Open {
        /// Route path
        #[arg(required = true)]
        path: String,
    },
}

/// Fields of the create form.
#[derive(clap::Args, Debug, Default)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub description: String,

    /// Start date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// Start time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    pub start_time: Option<NaiveTime>,

    /// End date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// End time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    pub end_time: Option<NaiveTime>,

    #[arg(long, default_value = "UTC")]
    pub timezone: String,

    #[arg(long, default_value = "")]
    pub venue_name: String,

    #[arg(long, default_value = "")]
    pub address: String,

    #[arg(long, default_value = "")]
    pub city: String,

    #[arg(long, default_value = "")]
    pub state: String,

    #[arg(long, default_value = "")]
    pub country: String,

    #[arg(long, default_value = "")]
    pub postal_code: String,

    /// Primary image URL (a placeholder is used if omitted)
    #[arg(long)]
    pub primary_image: Option<String>,

    /// Cover image URL (a placeholder is used if omitted)
    #[arg(long)]
    pub cover_image: Option<String>,

    /// Create the event as private
    #[arg(long)]
    pub private: bool,
}

/// Visibility filter for `list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum VisibilityArg {
    #[default]
    All,
    Public,
    Private,
}

impl From<VisibilityArg> for VisibilityFilter {
    fn from(arg: VisibilityArg) -> Self {
        match arg {
            VisibilityArg::All => VisibilityFilter::All,
            VisibilityArg::Public => VisibilityFilter::Public,
            VisibilityArg::Private => VisibilityFilter::Private,
        }
    }
}

/// Sort direction for `list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortArg {
    #[default]
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        SortOrder::from_ascending(arg == SortArg::Asc)
    }
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|e| format!("expected HH:MM: {}", e))
}

impl Cli {
    /// Store configuration from the global flags, defaults elsewhere.
    pub fn store_config(&self) -> StoreConfig {
        let mut config = StoreConfig::default();
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint.clone());
        }
        if let Some(tenant) = &self.tenant {
            config = config.with_tenant_id(tenant.clone());
        }
        config
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_list_defaults() {
        let cli = Cli::parse_from(["eventdesk", "list"]);
        match cli.command {
            Commands::List {
                search,
                visibility,
                sort,
                page,
                format,
            } => {
                assert!(search.is_none());
                assert_eq!(visibility, VisibilityArg::All);
                assert_eq!(sort, SortArg::Asc);
                assert_eq!(page, 1);
                assert_eq!(format, OutputFormat::Table);
            }
            _ => panic!("Expected List command"),
        }
        assert_eq!(cli.origin, DEFAULT_ORIGIN);
    }

    #[test]
    fn test_cli_parse_list_options() {
        let cli = Cli::parse_from([
            "eventdesk",
            "list",
            "--search",
            "gala",
            "--visibility",
            "private",
            "--sort",
            "desc",
            "--format",
            "json",
        ]);
        match cli.command {
            Commands::List {
                search,
                visibility,
                sort,
                format,
                ..
            } => {
                assert_eq!(search.as_deref(), Some("gala"));
                assert_eq!(VisibilityFilter::from(visibility), VisibilityFilter::Private);
                assert_eq!(SortOrder::from(sort), SortOrder::Descending);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parse_create() {
        let cli = Cli::parse_from([
            "eventdesk",
            "create",
            "--title",
            "Summer Festival",
            "--description",
            "Three stages of live music",
            "--start-date",
            "2025-06-01",
            "--start-time",
            "10:00",
            "--end-time",
            "18:30:00",
            "--private",
        ]);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.title, "Summer Festival");
                assert_eq!(args.start_date, NaiveDate::from_ymd_opt(2025, 6, 1));
                assert_eq!(args.start_time, NaiveTime::from_hms_opt(10, 0, 0));
                assert_eq!(args.end_time, NaiveTime::from_hms_opt(18, 30, 0));
                assert!(args.end_date.is_none());
                assert_eq!(args.timezone, "UTC");
                assert!(args.private);
            }
            _ => panic!("Expected Create command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        let result = Cli::try_parse_from([
            "eventdesk",
            "create",
            "--title",
            "x",
            "--description",
            "y",
            "--start-date",
            "06/01/2025",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_store_config_from_flags() {
        let cli = Cli::parse_from([
            "eventdesk",
            "--endpoint",
            "http://127.0.0.1:9/feed.json",
            "--tenant",
            "org-9",
            "show",
            "e1",
        ]);
        let config = cli.store_config();
        assert_eq!(config.endpoint, "http://127.0.0.1:9/feed.json");
        assert_eq!(config.tenant_id, "org-9");
        assert_eq!(config.organizer_name, StoreConfig::default().organizer_name);
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::parse_from(["eventdesk", "list", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_cli_help() {
        Cli::command().debug_assert();
    }
}
