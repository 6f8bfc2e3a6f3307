// corrigo-check: check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word is in
// the dictionary:
//   C: word    (correct)
//   W: word    (wrong / not in dictionary)
//
// Usage:
//   corrigo_check [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary file (word frequency per line)
//   -s, --suggest           Also print suggestions for unknown words
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use corrigo::CorrigoHandle;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_flag, args) = corrigo_cli::parse_dict_path(&args);

    if corrigo_cli::wants_help(&args) {
        println!("corrigo-check: check spelling of words from stdin.");
        println!();
        println!("Usage: corrigo_check [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (not in dictionary)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file (word frequency per line)");
        println!("  -s, --suggest           Also print suggestions for unknown words");
        println!("  -h, --help              Print this help");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");
    let path = corrigo_cli::resolve_dict_path(dict_flag.as_deref());

    let mut handle =
        CorrigoHandle::from_path(&path).unwrap_or_else(|e| corrigo_cli::fatal(&e.to_string()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if handle.contains(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                match handle.correct(word) {
                    Ok(suggestions) => {
                        for suggestion in suggestions {
                            let _ = writeln!(out, "S: {}", suggestion.word);
                        }
                    }
                    Err(e) => eprintln!("error: {e}"),
                }
            }
        }
    }
}
