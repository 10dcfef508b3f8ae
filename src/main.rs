use std::{env, fs::read_to_string, process::exit};

use germc::{lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: germc <file>");
        exit(1);
    }

    let source = read_to_string(&args[1]).expect("Failed to read file!");

    let tokens = tokenize(source);
    for token in &tokens {
        println!("{}", token);
    }

    let (program, errors) = parse(&tokens);

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("Error: {} ({})", error.get_error_name(), error);
        }
        exit(1);
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&program.debug_json()).unwrap()
    );
}
