pub mod render;

use std::path::PathBuf;

use clap::Parser;

const FORMAT_HELP: &str = "\
format codes:
  !  monospace
  <  left align
  -  small font";

/// slider - render plain-text slide decks to PDF
#[derive(Parser, Debug)]
#[command(name = "slider")]
#[command(version, about, long_about = None, after_help = FORMAT_HELP)]
pub struct Cli {
    /// Slide file to render
    pub input: Option<PathBuf>,

    /// Output PDF file
    #[arg(default_value = "output.pdf")]
    pub output: PathBuf,

    /// Dark mode
    #[arg(short, long)]
    pub dark: bool,

    /// Render pages in 4:3 aspect ratio instead of 16:9
    #[arg(short = '4', long = "4:3")]
    pub standard: bool,

    /// YAML config file (page height, title, theme colours)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Render a final line even when it has no trailing newline
    #[arg(long)]
    pub keep_trailing: bool,

    /// Print a status line for every slide
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["slider", "talk.txt"]).unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("talk.txt")));
        assert_eq!(cli.output, PathBuf::from("output.pdf"));
        assert!(!cli.dark);
        assert!(!cli.standard);
        assert!(!cli.keep_trailing);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["slider", "-d", "-4", "talk.txt", "talk.pdf"]).unwrap();

        assert!(cli.dark);
        assert!(cli.standard);
        assert_eq!(cli.output, PathBuf::from("talk.pdf"));
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from(["slider", "--dark", "--4:3", "talk.txt"]).unwrap();

        assert!(cli.dark);
        assert!(cli.standard);
    }

    #[test]
    fn test_missing_input_is_allowed() {
        let cli = Cli::try_parse_from(["slider"]).unwrap();
        assert!(cli.input.is_none());
    }

    #[test]
    fn test_unknown_option() {
        let err = Cli::try_parse_from(["slider", "--bogus", "talk.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help() {
        let err = Cli::try_parse_from(["slider", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
