use clap::{Parser, Subcommand};

/// Version string: plain for release builds, `version@hash date` for dev
/// builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{VERSION}@{GIT_HASH} {GIT_COMMIT_DATE}")
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "notiz", version = get_version())]
#[command(about = "A pocket note shelf for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n")]
    Create {
        /// Title of the note (opens the editor if omitted)
        #[arg(required = false)]
        title: Option<String>,

        /// Content of the note
        #[arg(required = false)]
        content: Option<String>,

        /// Mark the note shared on creation
        #[arg(long)]
        shared: bool,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List notes
    #[command(alias = "ls")]
    List {
        /// Show only notes whose title or content contains this text
        #[arg(short, long)]
        query: Option<String>,

        /// Page to show
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// View one or more notes
    #[command(alias = "v")]
    View {
        /// Positions of the notes (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Edit a note
    #[command(alias = "e")]
    Edit {
        /// Position of the note in the list
        index: usize,

        /// New title (skips the editor when both are given)
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(long)]
        content: Option<String>,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Positions of the notes (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Share a note and print its public link
    Share {
        /// Position of the note in the list
        index: usize,
    },

    /// Fetch a note by its share id
    Shared {
        /// The id from a share link
        id: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (share-base-url, load-retries)
        key: Option<String>,

        /// Value to set (if omitted, prints the current value)
        value: Option<String>,
    },
}
