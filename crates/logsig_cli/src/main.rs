//! `logsig` command-line tool.

use std::io::{self, Write};

use logsig_cli::commands::{parse_options, read_input, run_group, run_scan, run_sig, RunConfig};

type Command = fn(&str, &RunConfig, &mut io::StdoutLock<'static>, &mut io::Stderr) -> io::Result<bool>;

fn main() {
    logsig_cli::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command: Command = match args[1].as_str() {
        "scan" => run_scan,
        "sig" => run_sig,
        "group" => run_group,
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("logsig {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let (config, path) = match parse_options(&args[2..]) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let text = match read_input(path.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read {}: {e}", path.as_deref().unwrap_or("stdin"));
            std::process::exit(1);
        }
    };

    let mut out = io::stdout().lock();
    let mut err = io::stderr();
    let result = command(&text, &config, &mut out, &mut err).and_then(|ok| {
        out.flush()?;
        Ok(ok)
    });
    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        // Closed pipe (`logsig sig | head`): nothing left to report to.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("logsig - log line tokenizer and signature renderer");
    println!();
    println!("Usage: logsig <command> [options] [file|-]");
    println!();
    println!("Commands:");
    println!("  scan       Print the tokens of every line");
    println!("  sig        Print one signature per line");
    println!("  group      Count lines per signature, most frequent first");
    println!("  help       Show this message");
    println!("  version    Show the version");
    println!();
    println!("Options:");
    println!("  --kv               Mark key=value and key: value pairs");
    println!("  --max-line=<n>     Reject lines longer than n bytes");
    println!("  --no-parallel      Scan lines on one thread");
    println!("  --top=<n>          group: print only the n most frequent signatures");
    println!();
    println!("Reads stdin when the file is '-' or omitted.");
    println!("Set RUST_LOG (e.g. RUST_LOG=logsig=debug) for diagnostics on stderr.");
}
