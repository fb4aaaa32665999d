use std::{fs, io, path::PathBuf, process};

use clap::Parser;
use quill::{interpreter::symbol_table::SymbolTable, parse, run, tokenize};

/// quill is a small imperative language where every value is a number.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as program text instead of a file path.
    #[arg(short, long)]
    eval: bool,

    /// Print the tokens of the program instead of running it.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the syntax tree of the program instead of running it.
    #[arg(long)]
    ast: bool,

    /// Path of the program to run, or the program itself with `--eval`.
    contents: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = if args.eval {
        args.contents
    } else {
        let path = PathBuf::from(&args.contents);
        fs::read_to_string(&path).unwrap_or_else(|_| {
                                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                               path.display());
                                     process::exit(1);
                                 })
    };

    if args.tokens {
        for token in tokenize(&source) {
            println!("{} {} {}", token.line, token.kind, token.text);
        }
        return;
    }

    let result = if args.ast {
        parse(&source, &mut SymbolTable::new()).map(|tree| println!("{tree:#?}"))
                                               .map_err(quill::error::Error::from)
    } else {
        run(&source, &mut io::stdout().lock())
    };

    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}
