use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for mantlog
/// CLI logbook for elevator/escalator maintenance across mall locations
#[derive(Parser)]
#[command(
    name = "mantlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Maintenance logbook for vertical transport equipment: record, browse, export and analyze",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or custom store files)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ShareVia {
    Whatsapp,
    Email,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a maintenance event
    Add {
        /// Date of the maintenance (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long = "tech", help = "Technician who performed the work")]
        technician: String,

        #[arg(long = "time", help = "Time of day (HH:MM, default: now)")]
        time: Option<String>,

        #[arg(long = "location", help = "Site: Marina, Boulevard or Ama")]
        location: Option<String>,

        #[arg(long = "sector", help = "Sub-area within the location (optional)")]
        sector: Option<String>,

        #[arg(long = "type", help = "Equipment type: asc (Ascensor) or esc (Escalera Mecánica)")]
        equipment_type: String,

        #[arg(long = "equipment", help = "Equipment identifier(s), e.g. \"1, 2, 3\"")]
        equipment_order: String,

        #[arg(long = "notes", help = "Free-text notes (optional)")]
        notes: Option<String>,

        #[arg(long = "audio", help = "Attach an audio note file (embedded as data URI)")]
        audio: Option<String>,
    },

    /// Edit an existing record (full-record replacement by id)
    Edit {
        /// Record id
        id: String,

        #[arg(long = "tech")]
        technician: Option<String>,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "time")]
        time: Option<String>,

        #[arg(long = "location")]
        location: Option<String>,

        #[arg(long = "sector")]
        sector: Option<String>,

        #[arg(long = "type")]
        equipment_type: Option<String>,

        #[arg(long = "equipment")]
        equipment_order: Option<String>,

        #[arg(long = "notes")]
        notes: Option<String>,

        #[arg(long = "audio")]
        audio: Option<String>,
    },

    /// Delete a record by id
    Del {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List filtered records as per-equipment tables
    List {
        #[arg(long, short, help = "Month filter (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(long, short, help = "Location filter (Marina, Boulevard, Ama or ALL)")]
        location: Option<String>,

        #[arg(long, short, help = "Case-insensitive search over technician/equipment/location/notes")]
        search: Option<String>,
    },

    /// Month calendar of record counts per location
    Calendar {
        #[arg(long, short, help = "Month filter (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(long, short, help = "Location filter (Marina, Boulevard, Ama or ALL)")]
        location: Option<String>,

        #[arg(long, short, help = "Case-insensitive search filter")]
        search: Option<String>,

        #[arg(long, help = "Show the detail of one day (YYYY-MM-DD)")]
        day: Option<String>,
    },

    /// Manage the shift schedule
    Shifts {
        #[arg(long = "list", help = "List stored shift assignments")]
        list: bool,

        #[arg(long = "now", help = "Show who is on duty right now")]
        now: bool,

        #[arg(long = "load", value_name = "FILE", help = "Extract shifts from a schedule image/PDF via AI and merge them")]
        load: Option<String>,

        #[arg(long = "date", help = "Shift date (YYYY-MM-DD), used with --name")]
        date: Option<String>,

        #[arg(long = "name", help = "Add one shift for --date with this person")]
        name: Option<String>,

        #[arg(long = "role", help = "Role: supervisor or tecnico")]
        role: Option<String>,

        #[arg(long = "shift-type", help = "Period: dia or noche")]
        shift_type: Option<String>,

        #[arg(long = "location", help = "Optional site for the shift")]
        location: Option<String>,
    },

    /// Export the filtered records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output path (default: pattern per format)")]
        file: Option<String>,

        #[arg(long, short)]
        month: Option<String>,

        #[arg(long, short)]
        location: Option<String>,

        #[arg(long, short)]
        search: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing output file")]
        force: bool,
    },

    /// Print a prefilled WhatsApp or email share link
    Share {
        #[arg(long, value_enum)]
        via: ShareVia,

        #[arg(long, short)]
        month: Option<String>,

        #[arg(long, short)]
        location: Option<String>,

        #[arg(long, short)]
        search: Option<String>,
    },

    /// AI analysis of the month's records
    Analyze {
        #[arg(long, short)]
        month: Option<String>,

        #[arg(long, short)]
        location: Option<String>,

        #[arg(long, short)]
        search: Option<String>,
    },

    /// AI comparison of an inventory photo against this month's records
    Inventory {
        /// Image file (jpg/png/webp) with an equipment list, floor plan or photo
        image: String,

        #[arg(long, short)]
        month: Option<String>,

        #[arg(long, short)]
        location: Option<String>,

        #[arg(long, short)]
        search: Option<String>,
    },

    /// Process a dictated voice command (create or delete a record)
    Voice {
        /// Audio file with the dictated command
        audio: String,

        #[arg(long = "consult", help = "Ask about pending equipment instead of dictating a command")]
        consult: bool,

        #[arg(
            long = "confirm-audio",
            value_name = "FILE",
            help = "Spoken yes/no answer gating a DELETE command"
        )]
        confirm_audio: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Skip the delete confirmation")]
        yes: bool,
    },

    /// Ask the in-app help assistant
    Ask {
        /// Question, in natural language
        question: String,
    },

    /// Show or set the persisted theme preference
    Theme {
        /// "dark" or "light"; omit to print the current value
        value: Option<String>,
    },

    /// Print or manage the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
