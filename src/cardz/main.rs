//! The `cardz` binary: a terminal client over the cardz library.
//!
//! Everything lives in [`cli`]; this file only turns a failed run into an
//! error line on stderr and exit status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
