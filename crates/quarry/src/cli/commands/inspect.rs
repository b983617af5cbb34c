//! Implementation of `quarry inspect`.

use std::{fs::File, process::ExitCode};

use quarry_text::read_tokens;

use crate::cli::args::InspectCommand;

/// Prints `position<TAB>term` for every token of the file.
pub fn run(cmd: &InspectCommand) -> ExitCode {
    let file = match File::open(&cmd.file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("error: cannot read {}: {e}", cmd.file.display());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = read_tokens(file, |token| println!("{}\t{}", token.position, token.text)) {
        eprintln!("error: cannot read {}: {e}", cmd.file.display());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
