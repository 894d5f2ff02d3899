use clap::Parser;
use ged::cli::{Cli, Commands};
use ged::output::Printer;

fn main() {
    let cli = Cli::parse();
    let printer = Printer::new();

    let result = match cli.command {
        Commands::Convert(args) => ged::cli::convert::run(args, &printer),
        Commands::Validate(args) => ged::cli::validate::run(args, &printer),
        Commands::List(args) => ged::cli::list::run(args, &printer),
        Commands::Completions(args) => ged::cli::completions::run(args),
    };

    if let Err(error) = result {
        ged::diagnostics::report_error(&error);
        std::process::exit(1);
    }
}
