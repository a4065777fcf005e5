use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "prodash")]
#[clap(about = "Project analytics dashboard client", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_limit_flag_parses() {
        let cli = Cli::try_parse_from(["prodash", "projects", "--limit", "5"]).unwrap();
        match cli.command {
            Commands::Projects { limit, .. } => assert_eq!(limit, Some(5)),
            _ => panic!("expected projects subcommand"),
        }

        let cli = Cli::try_parse_from(["prodash", "projects"]).unwrap();
        match cli.command {
            Commands::Projects { limit, .. } => assert_eq!(limit, None),
            _ => panic!("expected projects subcommand"),
        }
    }
}
