//! mdsel CLI
//!
//! Inspect and validate document selectors.

use mdselc::commands::{check_selector, explain_error, lex_selector, suggest_names, SuggestOptions};

fn main() {
    mdselc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: mdsel lex <selector>");
                std::process::exit(1);
            }
            lex_selector(&args[2]);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: mdsel check <selector>");
                std::process::exit(1);
            }
            if !check_selector(&args[2]) {
                std::process::exit(1);
            }
        }
        "suggest" => {
            if args.len() < 4 {
                eprintln!("Usage: mdsel suggest <name> <candidate>... [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --max=<n>         Show at most n suggestions (default: 3)");
                eprintln!("  --threshold=<n>   Maximum edit distance (default: from name length)");
                std::process::exit(1);
            }

            let mut options = SuggestOptions::default();
            let mut candidates = Vec::new();
            for arg in args.iter().skip(3) {
                match options.apply_flag(arg) {
                    Ok(true) => {}
                    Ok(false) => candidates.push(arg.clone()),
                    Err(msg) => {
                        eprintln!("{msg}");
                        std::process::exit(1);
                    }
                }
            }

            if !suggest_names(&args[2], &candidates, options) {
                std::process::exit(1);
            }
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: mdsel explain <ERROR_CODE>");
                eprintln!("Example: mdsel explain E0001");
                std::process::exit(1);
            }
            if !explain_error(&args[2]) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("mdsel {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("mdsel - document selector toolkit");
    println!();
    println!("Usage: mdsel <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <selector>                  Tokenize a selector and display tokens");
    println!("  check <selector>                Validate a selector (fails on the first error)");
    println!("  suggest <name> <candidate>...   Rank candidates by edit distance");
    println!("  explain <code>                  Explain an error code (e.g., E0001)");
    println!("  help                            Show this help message");
    println!("  version                         Show version information");
    println!();
    println!("Suggest options:");
    println!("  --max=<n>          Show at most n suggestions (default: 3)");
    println!("  --threshold=<n>    Maximum edit distance (default: from name length)");
    println!();
    println!("Examples:");
    println!("  mdsel lex 'namespace::heading:h2[1]'");
    println!("  mdsel check 'block:code[0]?lang=ts'");
    println!("  mdsel suggest instalation installation usage configuration");
    println!();
    println!("Set RUST_LOG=debug (or mdsel_lexer=trace) for diagnostics on stderr.");
}
