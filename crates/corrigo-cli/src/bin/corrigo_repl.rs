// corrigo-repl: interactive spelling correction.
//
// Loads a dictionary, reports build statistics, then corrects one input
// token per line. Suggestions print as `word - distance - frequency`,
// followed by the query time in milliseconds.
//
// Usage:
//   corrigo_repl [DICT_PATH] [-d DICT_PATH]
//
// The dictionary is resolved from the positional argument, the `-d` /
// `--dict-path` flag, the CORRIGO_DICT_PATH environment variable, or
// ./dictionary.txt, in that order. Exits 0 on end of input, 1 when the
// dictionary cannot be loaded.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use corrigo::CorrigoHandle;

#[global_allocator]
static GLOBAL: corrigo_cli::CountingAlloc = corrigo_cli::CountingAlloc;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_flag, args) = corrigo_cli::parse_dict_path(&args);

    if corrigo_cli::wants_help(&args) {
        println!("corrigo-repl: interactive spelling correction.");
        println!();
        println!("Usage: corrigo_repl [DICT_PATH] [OPTIONS]");
        println!();
        println!("Reads one token per line from stdin and prints ranked");
        println!("suggestions as `word - distance - frequency`.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file (word frequency per line)");
        println!("  -h, --help             Print this help");
        return;
    }

    let positional = args.first().map(String::as_str);
    let path = corrigo_cli::resolve_dict_path(dict_flag.as_deref().or(positional));

    let bytes_before = corrigo_cli::live_bytes();
    let build_start = Instant::now();
    let mut handle =
        CorrigoHandle::from_path(&path).unwrap_or_else(|e| corrigo_cli::fatal(&e.to_string()));
    let build_ms = build_start.elapsed().as_millis();
    let bytes_delta = corrigo_cli::live_bytes().saturating_sub(bytes_before);

    println!(
        "loaded {} words ({} deletion keys) from {} in {} ms, +{}",
        handle.word_count(),
        handle.key_count(),
        path.display(),
        build_ms,
        corrigo_cli::format_bytes(bytes_delta)
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    loop {
        let _ = write!(out, "> ");
        let _ = out.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let query_start = Instant::now();
        match handle.correct(input) {
            Ok(suggestions) => {
                for suggestion in &suggestions {
                    let _ = writeln!(out, "{suggestion}");
                }
                let elapsed = query_start.elapsed();
                let _ = writeln!(out, "{:.3} ms", elapsed.as_secs_f64() * 1000.0);
            }
            Err(e) => {
                eprintln!("error: {e}");
            }
        }
    }
}
