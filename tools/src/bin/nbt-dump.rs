use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::process::exit;

use clap::{App, Arg};
use env_logger::Env;
use log::{debug, error};

use nbtview::error::ErrorKind;
use nbtview::{de, snbt};

// Exit codes: 1 bad invocation, 2 runtime failure, 3 malformed input.
const EXIT_USER: i32 = 1;
const EXIT_RUNTIME: i32 = 2;
const EXIT_INVALID_INPUT: i32 = 3;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt-dump")
        .about("Print uncompressed binary NBT as stringified NBT")
        .arg(
            Arg::with_name("file")
                .help("file to read, stdin when absent")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("compact")
                .long("compact")
                .short("c")
                .help("print without newlines and indentation"),
        )
        .get_matches();

    let reader: Box<dyn Read> = match matches.value_of("file") {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                error!("{}: {}", path, e);
                exit(EXIT_USER);
            }
        },
        None => Box::new(io::stdin()),
    };

    let tag = match de::from_reader(reader) {
        Ok(Some(tag)) => tag,
        Ok(None) => {
            error!("no tag was read");
            exit(EXIT_RUNTIME);
        }
        Err(e) => {
            error!("{}", e);
            exit(match e.kind() {
                ErrorKind::InvalidInput => EXIT_INVALID_INPUT,
                _ => EXIT_RUNTIME,
            });
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let pretty = !matches.is_present("compact");
    let result = if pretty {
        snbt::to_writer_pretty(&mut out, &tag)
    } else {
        snbt::to_writer(&mut out, &tag)
    };

    let written = match result {
        Ok(n) => n,
        Err(e) => {
            error!("{}", e);
            exit(EXIT_RUNTIME);
        }
    };
    debug!("wrote {} bytes", written);

    if writeln!(out).is_err() || out.flush().is_err() {
        exit(EXIT_RUNTIME);
    }
}
