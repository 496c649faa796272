use crate::export::ExportFormat;
use crate::models::habit::HABIT_COLORS;
use crate::models::task::TaskCategory;
use clap::{Parser, Subcommand};

/// Command-line interface definition for zenplan
#[derive(Parser)]
#[command(
    name = "zenplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "A local-first day planner: timeline calendar, tasks and habits stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Add a block to the day timeline
    Add {
        /// Title of the block
        #[arg(long, short = 't')]
        title: String,

        /// Day of the block (YYYY-MM-DD), defaults to today
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Start time (HH:MM), default 09:00
        #[arg(long = "start", conflicts_with = "slot")]
        start: Option<String>,

        /// End time (HH:MM), default 10:00
        #[arg(long = "end", conflicts_with = "slot")]
        end: Option<String>,

        /// Fill a whole hour slot (0-23): HH:00 to the next hour
        #[arg(long = "slot")]
        slot: Option<u32>,

        /// Category tag (defaults to the configured one)
        #[arg(long = "category")]
        category: Option<String>,
    },

    /// Edit an existing block (id or unique id prefix)
    Edit {
        id: String,

        #[arg(long, short = 't')]
        title: Option<String>,

        #[arg(long = "start")]
        start: Option<String>,

        #[arg(long = "end")]
        end: Option<String>,

        #[arg(long = "category")]
        category: Option<String>,
    },

    /// Delete a block (asks for confirmation)
    Del {
        /// Block id or unique id prefix
        id: String,
    },

    /// List blocks of one day or of every day
    List {
        #[arg(long, short = 'd', help = "Day to list (YYYY-MM-DD), defaults to today")]
        date: Option<String>,

        #[arg(long = "all", conflicts_with = "date", help = "List blocks of every day")]
        all: bool,
    },

    /// Show the hour-by-hour timeline of a day
    Day {
        #[arg(long, short = 'd')]
        date: Option<String>,
    },

    /// Show the week strip around a day (three days on either side)
    Week {
        #[arg(long, short = 'd')]
        date: Option<String>,
    },

    /// Follow the current-time indicator of a day until Enter is pressed
    Watch {
        #[arg(long, short = 'd')]
        date: Option<String>,
    },

    /// Manage the task list
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Manage the habit tracker
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },

    /// Show an optimized day plan produced by the planner
    Plan {
        /// Free-text brain dump sent along with the task titles
        #[arg(long = "dump", default_value = "")]
        dump: String,

        /// Planner response document (JSON)
        #[arg(long = "response", value_name = "FILE")]
        response: Option<String>,
    },

    /// Export calendar blocks
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Period filter: YYYY, YYYY-MM, YYYY-MM-DD, start:end or "all"
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite the output file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete all tasks, habits and blocks (asks for confirmation)
    Reset,

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task at the top of the list
    Add {
        title: String,

        #[arg(long, value_enum, default_value = "personal")]
        category: TaskCategory,
    },
    /// Flip a task between open and done
    Toggle { id: String },
    /// List tasks with the completion ratio
    List,
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a habit
    Add {
        title: String,

        /// Hex color (#rrggbb)
        #[arg(long, default_value = HABIT_COLORS[0])]
        color: String,
    },
    /// Mark a habit done (or undone) for today
    Toggle { id: String },
    /// Delete a habit (asks for confirmation)
    Del { id: String },
    /// List habits with their streaks
    List,
}
