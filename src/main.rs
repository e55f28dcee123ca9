use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tasq::error::Result;
use tasq::merge::MergeMode;
use tasq::model::{Priority, Status};
use tasq::output::Format;

#[derive(Parser)]
#[command(
    name = "tasq",
    version,
    about = "Personal task tracker with two-way sync"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    format: Format,
    /// Shorthand for --format json
    #[arg(long, global = true, hide = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new .tasq directory here
    Init,
    /// Create a new task
    Create {
        /// Task title
        title: String,
        /// Task description
        #[arg(long, short)]
        description: Option<String>,
        /// Task priority
        #[arg(long, short, value_enum)]
        priority: Option<Priority>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Tags to attach (comma-separated)
        #[arg(long, short, value_delimiter = ',')]
        tag: Vec<String>,
    },
    /// List and filter tasks
    List {
        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<Status>,
        /// Filter by priority
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// Filter by tag
        #[arg(long)]
        tag: Option<String>,
        /// Show only overdue tasks
        #[arg(long)]
        overdue: bool,
        /// Show soft-deleted tasks instead of live ones
        #[arg(long)]
        deleted: bool,
    },
    /// Display a single task
    Show {
        /// Task ID (or unique prefix)
        id: String,
    },
    /// Edit task fields
    Edit {
        /// Task ID (or unique prefix)
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long, short)]
        description: Option<String>,
    },
    /// Update task status
    Status {
        /// Task ID (or unique prefix)
        id: String,
        /// New status
        #[arg(value_enum)]
        status: Status,
    },
    /// Update task priority
    Priority {
        /// Task ID (or unique prefix)
        id: String,
        /// New priority
        #[arg(value_enum)]
        priority: Priority,
    },
    /// Update task due date
    Due {
        /// Task ID (or unique prefix)
        id: String,
        /// New due date (YYYY-MM-DD)
        due: String,
    },
    /// Add a tag to a task
    Tag {
        /// Task ID (or unique prefix)
        id: String,
        /// Tag to add
        tag: String,
    },
    /// Remove a tag from a task
    Untag {
        /// Task ID (or unique prefix)
        id: String,
        /// Tag to remove
        tag: String,
    },
    /// Soft-delete a task (kept as a tombstone for sync)
    Delete {
        /// Task ID (or unique prefix)
        id: String,
    },
    /// Restore a soft-deleted task
    Restore {
        /// Task ID (or unique prefix)
        id: String,
    },
    /// Show task statistics
    Stats,
    /// Reconcile with another copy of the task set
    Sync {
        /// Directory containing the other .tasq store
        path: PathBuf,
        /// Conflict resolution mode
        #[arg(long, value_enum, default_value = "auto")]
        mode: MergeMode,
    },
}

fn run(cli: Cli, format: Format) -> Result<()> {
    let root = match &cli.command {
        Commands::Init => std::env::current_dir()?,
        _ => tasq::store::find_root()?,
    };

    match cli.command {
        Commands::Init => tasq::commands::init::run(&root, format),
        Commands::Create {
            title,
            description,
            priority,
            due,
            tag,
        } => tasq::commands::create::run(&root, title, description, priority, due, tag, format),
        Commands::List {
            status,
            priority,
            tag,
            overdue,
            deleted,
        } => tasq::commands::list::run(&root, status, priority, tag, overdue, deleted, format),
        Commands::Show { id } => tasq::commands::show::run(&root, &id, format),
        Commands::Edit {
            id,
            title,
            description,
        } => tasq::commands::edit::run(&root, &id, title, description, format),
        Commands::Status { id, status } => tasq::commands::status::run(&root, &id, status, format),
        Commands::Priority { id, priority } => {
            tasq::commands::priority::run(&root, &id, priority, format)
        }
        Commands::Due { id, due } => tasq::commands::due::run(&root, &id, &due, format),
        Commands::Tag { id, tag } => tasq::commands::tag::add(&root, &id, &tag, format),
        Commands::Untag { id, tag } => tasq::commands::tag::remove(&root, &id, &tag, format),
        Commands::Delete { id } => tasq::commands::delete::run(&root, &id, format),
        Commands::Restore { id } => tasq::commands::restore::run(&root, &id, format),
        Commands::Stats => tasq::commands::stats::run(&root, format),
        Commands::Sync { path, mode } => tasq::commands::sync::run(&root, &path, mode, format),
    }
}

fn main() {
    let cli = Cli::parse();
    let format = if cli.json { Format::Json } else { cli.format };
    if let Err(e) = run(cli, format) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}
