mod app;

use app::formatter::OutputGenerator;
use std::process::ExitCode;

fn main() -> ExitCode {
    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", OutputGenerator::failed(&err));
            ExitCode::FAILURE
        }
    }
}
