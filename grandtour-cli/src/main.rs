//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = grandtour_cli::run() {
        eprintln!("grandtour: {err}");
        std::process::exit(1);
    }
}
