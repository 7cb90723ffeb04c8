use std::process::ExitCode;

fn main() -> ExitCode {
    page_toc::cli::run()
}
