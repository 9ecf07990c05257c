use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::init();

    match chess_rules::console::run_console_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("console error: {err}");
            ExitCode::FAILURE
        }
    }
}
