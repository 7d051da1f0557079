//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = tourpack_cli::run() {
        eprintln!("tourpack: {err}");
        std::process::exit(1);
    }
}
