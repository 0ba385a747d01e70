use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        Self::register_output_directory_argument(command)
    }

    fn register_output_directory_argument(command: Command) -> Command {
        command.arg(Self::create_output_directory_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_output_directory_argument() -> Arg {
        arg!(output_directory: -o --output_directory <DIR> "Directory the PPM files are written to")
            .default_value(".")
            .value_parser(value_parser!(PathBuf))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            output_directory: Self::extract_output_directory_argument(matches),
        }
    }

    fn extract_output_directory_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_directory")
            .expect("Output directory must be provided, but was unset.")
            .clone()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};
    use std::path::Path;

    use super::CLIParser;

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_output_directory_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_output_directory_argument(command);
        let matches = command.get_matches_from(vec![
            PROGRAM_NAME_ARGUMENT,
            "--output_directory",
            "/tmp/patterns",
        ]);
        let output_directory = CLIParser::extract_output_directory_argument(&matches);
        assert_eq!(output_directory, Path::new("/tmp/patterns"));
    }

    #[test]
    fn parse_short_output_directory_argument() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, "-o", "images"]);
        assert_eq!(arguments.output_directory, Path::new("images"));
    }

    #[test]
    fn parse_without_arguments() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT]);
        assert_eq!(
            arguments.output_directory,
            Path::new("."),
            "output directory does not default to the working directory"
        );
    }

    #[test]
    fn parse_unknown_argument() {
        let command = CLIParser::create_base_command();
        let command = CLIParser::register_arguments(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--tile_size", "4"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::UnknownArgument);
        } else {
            panic!("Unknown argument tile_size not detected");
        }
    }
}
