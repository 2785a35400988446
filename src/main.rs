// Fri Oct 16 2026 - Alex

use clap::Parser;
use colored::Colorize;
use file_patcher::ui::{Args, CommandHandler};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match CommandHandler::new().execute(args) {
        Ok(report) if report.all_found() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(2),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
