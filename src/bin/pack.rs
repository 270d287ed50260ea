use std::process::ExitCode;

fn main() -> ExitCode {
    le64::cli::pack::main()
}
