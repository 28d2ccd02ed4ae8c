use clap::Parser;

use bylaw_guard::cli::{Cli, Commands};
use bylaw_guard::commands::{run_check, run_config, run_init, run_score, run_validate, run_zone};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Validate(args) => run_validate(args, &cli),
        Commands::Score(args) => run_score(args, &cli),
        Commands::Zone(args) => run_zone(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}
