use std::env::args_os;
use std::process::ExitCode;

use ppm_patterns::{generate_patterns, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match generate_patterns(&arguments) {
        Ok(paths) => {
            for path in paths {
                println!("Generated {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Generation failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
