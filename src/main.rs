use std::{env, process::ExitCode, time::Instant};

use bish::{display_error, logger, parse_source, read_source};
use tracing::info;

fn main() -> ExitCode {
    logger::init_from_env();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file.bish>", args.first().map_or("bish", String::as_str));
        return ExitCode::from(2);
    }

    let file_path: &str = &args[1];

    let start = Instant::now();

    let file_contents = match read_source(file_path) {
        Ok(contents) => contents,
        Err(e) => {
            display_error(&e, "");
            return ExitCode::FAILURE;
        }
    };

    info!("Read {} in {:?}", file_path, start.elapsed());

    let parse_start = Instant::now();
    let module = match parse_source(&file_contents, Some(String::from(file_path))) {
        Ok(module) => module,
        Err(e) => {
            display_error(&e, &file_contents);
            return ExitCode::FAILURE;
        }
    };

    info!("Parsed in {:?}", parse_start.elapsed());
    info!(
        "{} function(s) besides {}",
        module.functions().len(),
        bish::ir::MAIN_FUNCTION_NAME
    );

    println!("{:#?}", module);

    info!("Total time: {:?}", start.elapsed());

    ExitCode::SUCCESS
}
