use std::io;
use std::process::ExitCode;

use tt_lingua::LinguaLibrary;

fn main() -> ExitCode {
    tt_bridge::logging::init();

    let library = LinguaLibrary::new();
    let status = tt_bridge::main_with(
        &library,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(status)
}
