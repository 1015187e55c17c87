use std::process::ExitCode;

fn main() -> ExitCode {
    sitegen::exit_code(sitegen::execute_from_env())
}
