use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use miette::Result;
use slider::cli::Cli;
use slider::SliderError;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
            _ => {
                let _ = err.print();
                std::process::exit(1);
            }
        },
    };

    // No input file is a request for usage
    let Some(input) = cli.input.clone() else {
        Cli::command().print_help().map_err(SliderError::from)?;
        return Ok(());
    };

    let summary = slider::cli::render::run(&input, &cli)?;
    println!("{}", summary);

    Ok(())
}
