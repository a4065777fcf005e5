use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a sample configuration file
    Init,
    /// Check the configuration file for problems
    Validate,
    /// Serve the dashboard page locally
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        /// Do not open the dashboard in a browser
        #[clap(long)]
        no_open: bool,
    },
    /// List projects from the analytics API
    Projects {
        /// Case-insensitive substring matched against name or type
        #[clap(short, long, default_value = "")]
        search: String,
        /// Exact status filter, empty for all statuses
        #[clap(long, default_value = "")]
        status: String,
        /// Maximum number of projects to fetch, overriding the configured limit
        #[clap(short, long)]
        limit: Option<u32>,
    },
    /// Request a delay/bottleneck prediction for one project
    Predict {
        #[clap(long)]
        cost: f64,
        #[clap(long)]
        benefit: f64,
        #[clap(long)]
        complexity: String,
        #[clap(long)]
        completion: f64,
        #[clap(long)]
        duration: u32,
        #[clap(long, default_value = "INCOME GENERATION")]
        project_type: String,
        #[clap(long, default_value = "North")]
        region: String,
        #[clap(long, default_value = "Admin & BI")]
        department: String,
    },
}
