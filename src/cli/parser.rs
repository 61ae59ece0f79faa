use crate::models::time_slot::TimeSlot;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line interface definition for rattendance
/// Terminal client for face-recognition classroom attendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Face attendance from the terminal: capture a class photo, review records, trigger exports",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.rattendance/rattendance.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the recognition service base URL
    #[arg(global = true, long = "server", value_name = "URL")]
    pub server: Option<String>,

    /// Override the Firestore REST base URL
    #[arg(global = true, long = "store-url", value_name = "URL", hide = true)]
    pub store_url: Option<String>,

    /// Print diagnostic logging (same as RUST_LOG=debug)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Class hierarchy flags shared by take, records and export.
#[derive(Args, Clone, Debug, Default)]
pub struct ClassArgs {
    /// Department (e.g. "Engineering")
    #[arg(long, short = 'd')]
    pub department: Option<String>,

    /// Course within the department (e.g. "B.Tech")
    #[arg(long, short = 'c')]
    pub course: Option<String>,

    /// Branch within the course (e.g. "Computer Science")
    #[arg(long, short = 'b')]
    pub branch: Option<String>,

    /// Year of study (e.g. "1st Year")
    #[arg(long, short = 'y')]
    pub year: Option<String>,

    /// Semester (e.g. "Semester 1")
    #[arg(long, short = 's')]
    pub semester: Option<String>,
}

impl ClassArgs {
    pub fn parts(&self) -> [Option<&str>; 5] {
        [
            self.department.as_deref(),
            self.course.as_deref(),
            self.branch.as_deref(),
            self.year.as_deref(),
            self.semester.as_deref(),
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the home screen
    Home,

    /// Browse the class hierarchy
    ///
    /// Prints the options for the first level not given on the command line,
    /// e.g. `rattendance classes -d Engineering -c B.Tech` lists branches.
    Classes {
        #[command(flatten)]
        class: ClassArgs,

        /// Print the whole hierarchy as a tree
        #[arg(long)]
        tree: bool,
    },

    /// Submit a class photo and mark attendance
    Take {
        /// Photo file, or "-" to read a camera capture from stdin
        #[arg(long, short = 'p', value_name = "FILE")]
        photo: Option<String>,

        #[command(flatten)]
        class: ClassArgs,

        /// Time slot: morning, afternoon or evening
        #[arg(long, short = 't', value_name = "SLOT")]
        slot: Option<TimeSlot>,

        /// Print the confirmation as JSON
        #[arg(long)]
        json: bool,
    },

    /// List today's attendance records for a class
    Records {
        #[command(flatten)]
        class: ClassArgs,

        /// Restrict to one time slot (default: all slots)
        #[arg(long, short = 't', value_name = "SLOT")]
        slot: Option<TimeSlot>,

        /// Query another day instead of today (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Ask the recognition service for a spreadsheet export
    Export {
        #[command(flatten)]
        class: ClassArgs,

        /// Time slot of the export
        #[arg(long, short = 't', value_name = "SLOT")]
        slot: Option<TimeSlot>,

        /// Print the export URL instead of opening a browser
        #[arg(long = "print-url")]
        print_url: bool,
    },

    /// Show or edit the local profile
    Profile {
        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,
    },
}
