use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a project board and print it
    Show {
        /// Project ID
        project_id: String,
        /// Only show tasks assigned to this user
        #[arg(long)]
        mine: Option<String>,
    },

    /// Move a task to another slot and print the outcome
    Move {
        /// Project ID
        project_id: String,
        /// Task ID
        task_id: String,
        /// Current position as <list>:<index>
        #[arg(long)]
        from: String,
        /// Target position as <list>:<index>
        #[arg(long)]
        to: String,
    },
}
