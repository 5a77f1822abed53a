//! Array Operator Generator CLI
//!
//! Prints the C++ array container and its operator overloads.

use arraygenc::{init_tracing, list_catalog, parse_args, run, Command};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match command {
        Command::Generate(options) => {
            let mut stdout = std::io::stdout().lock();
            match run(&options, &mut stdout) {
                Ok(outcome) if outcome.is_success() => {}
                Ok(outcome) => {
                    if let Some(path) = &options.check {
                        eprintln!("{}: {outcome:?}, regenerate with -o", path.display());
                    }
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::List => {
            if let Err(e) = list_catalog(&mut std::io::stdout().lock()) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Command::Help => print_usage(),
        Command::Version => {
            println!("arraygen {}", env!("CARGO_PKG_VERSION"));
        }
    }
}

fn print_usage() {
    println!("Array operator generator");
    println!();
    println!("Usage: arraygen [options]");
    println!();
    println!("Options:");
    println!("  --name=<Ident>      Container type name (default: Array)");
    println!("  -o <path>           Write to a file instead of stdout");
    println!("  --check <path>      Exit 1 if the file differs from fresh output");
    println!("  --list              Print the operator catalog");
    println!("  -h, --help          Show this help message");
    println!("  -V, --version       Show version information");
    println!();
    println!("Examples:");
    println!("  arraygen > array.hpp");
    println!("  arraygen --name=Vec -o vec.hpp");
    println!("  arraygen --check array.hpp        # For CI");
    println!();
    println!("Set RUST_LOG=debug to log generation steps to stderr.");
}
