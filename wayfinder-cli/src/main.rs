//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = wayfinder_cli::run() {
        eprintln!("wayfinder: {err}");
        std::process::exit(1);
    }
}
