use std::{env, fs::read_to_string, io::{self, Read}, process::exit, time::Instant};

use kaleido::{display_error, lexer::{lexer::tokenize, stream::TokenBuffer}, parser::{lookups::PrecedenceTable, parser::parse}};

struct Options {
    precedence: PrecedenceTable,
    dump_tokens: bool,
    file: Option<String>,
}

fn usage() -> ! {
    eprintln!("usage: kaleido [--precedence <op:prec,...>] [--tokens] [FILE]");
    exit(2)
}

fn parse_args() -> Options {
    let mut options = Options {
        precedence: PrecedenceTable::default(),
        dump_tokens: false,
        file: None,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--precedence" | "-p" => {
                let table = args.next().unwrap_or_else(|| usage());
                options.precedence = match table.parse() {
                    Ok(table) => table,
                    Err(error) => {
                        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
                        exit(2)
                    }
                };
            }
            "--tokens" => options.dump_tokens = true,
            "--help" | "-h" => usage(),
            _ if options.file.is_none() && !arg.starts_with('-') => options.file = Some(arg),
            _ => usage(),
        }
    }

    options
}

fn read_source(file: Option<&str>) -> io::Result<String> {
    match file {
        Some(path) => read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = parse_args();

    let source = match read_source(options.file.as_deref()) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read input: {}", error);
            exit(2)
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), options.file.clone()) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            exit(1)
        }
    };

    log::debug!("Tokenized in {:?}", start.elapsed());

    if options.dump_tokens {
        tokens.iter().for_each(|token| token.debug());
    }

    let parse_start = Instant::now();
    let output = parse(&mut TokenBuffer::new(tokens), &options.precedence);

    log::debug!("Parsed in {:?}", parse_start.elapsed());

    for item in &output.items {
        println!("{}", item);
    }

    if !output.is_ok() {
        for error in &output.errors {
            display_error(error, &source);
        }
        exit(1)
    }
}
