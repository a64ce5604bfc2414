extern crate clap;
extern crate hexdiff;

use clap::{App, Arg, ArgMatches};
use hexdiff::{
    fit_bytes, hex_diff, open_stream, parse_number, render_header, BlockWidth, Config,
    HexDiffError,
};
use std::convert::TryFrom;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn is_number(value: String) -> Result<(), String> {
    parse_number(&value).map(|_| ())
}

fn is_block_width(value: String) -> Result<(), String> {
    let width = parse_number(&value)?;
    usize::try_from(width)
        .ok()
        .and_then(|width| BlockWidth::new(width).ok())
        .map(|_| ())
        .ok_or_else(|| {
            format!(
                "block width must be within {}..={}",
                BlockWidth::MIN,
                BlockWidth::MAX
            )
        })
}

fn number_of(matches: &ArgMatches, name: &str) -> Option<u64> {
    matches.value_of(name).and_then(|value| parse_number(value).ok())
}

fn terminal_columns() -> Option<usize> {
    if !termion::is_tty(&io::stdout()) {
        return None;
    }
    termion::terminal_size()
        .ok()
        .map(|(columns, _)| usize::from(columns))
}

// --columns wins over --width, which wins over the detected terminal width.
fn block_width(matches: &ArgMatches, dense: bool) -> BlockWidth {
    if let Some(width) = number_of(matches, "columns")
        .and_then(|columns| usize::try_from(columns).ok())
        .and_then(|columns| BlockWidth::new(columns).ok())
    {
        return width;
    }
    let columns = number_of(matches, "width")
        .map(|width| usize::try_from(width).unwrap_or(usize::MAX))
        .or_else(terminal_columns);
    match columns {
        Some(columns) => fit_bytes(columns, dense),
        None => BlockWidth::DEFAULT,
    }
}

fn run(matches: &ArgMatches) -> Result<(), HexDiffError> {
    let dense = matches.is_present("dense");
    let config = Config {
        width: block_width(matches, dense),
        dense,
        show_all: matches.is_present("all"),
        skip_same: matches.is_present("skip-same"),
        max_len: number_of(matches, "max-len").unwrap_or(0),
        left_skip: number_of(matches, "SKIP1").unwrap_or(0),
        right_skip: number_of(matches, "SKIP2").unwrap_or(0),
    };
    log::debug!("{:?}", config);

    let (mut left, mut right) = match (matches.value_of("FILE1"), matches.value_of("FILE2")) {
        (Some(file_path_1), Some(file_path_2)) => {
            let left = open_stream(Path::new(file_path_1), config.left_skip)?;
            let right = open_stream(Path::new(file_path_2), config.right_skip)?;
            (left, right)
        }
        _ => unreachable!("FILE1 and FILE2 are required arguments"),
    };

    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    if let Err(why) = ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed)) {
        log::warn!("cannot install interrupt handler: {}", why);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "{}", render_header(config.width.get(), config.dense))
        .map_err(HexDiffError::Write)?;
    let summary = hex_diff(&mut left, &mut right, &mut out, &config, &cancel)?;
    out.flush().map_err(HexDiffError::Write)?;

    log::info!(
        "compared {} blocks ({} bytes), {} differing{}",
        summary.blocks,
        summary.bytes,
        summary.differing_blocks,
        if summary.cancelled { ", interrupted" } else { "" }
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = App::new("hexdiff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare two files side by side in hex, highlighting differing bytes")
        .arg(
            Arg::with_name("all")
                .short("a")
                .long("all")
                .help("Show every block instead of collapsing runs of equal blocks"),
        )
        .arg(
            Arg::with_name("dense")
                .short("d")
                .long("dense")
                .help("Omit the space between hex bytes"),
        )
        .arg(
            Arg::with_name("skip-same")
                .short("s")
                .long("skip-same")
                .help("Show only differing blocks"),
        )
        .arg(
            Arg::with_name("max-len")
                .short("n")
                .long("max-len")
                .value_name("BYTES")
                .help("Stop after comparing this many bytes (0 = no limit)")
                .takes_value(true)
                .validator(is_number),
        )
        .arg(
            Arg::with_name("columns")
                .short("c")
                .long("columns")
                .value_name("N")
                .help("Bytes per line (1-256, default: fit the terminal or 16)")
                .takes_value(true)
                .validator(is_block_width),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .value_name("COLS")
                .help("Fit lines to this many terminal columns")
                .takes_value(true)
                .validator(is_number),
        )
        .arg(
            Arg::with_name("FILE1")
                .help("First file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("FILE2")
                .help("Second file")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("SKIP1")
                .help("Starting offset in FILE1")
                .index(3)
                .validator(is_number),
        )
        .arg(
            Arg::with_name("SKIP2")
                .help("Starting offset in FILE2")
                .index(4)
                .validator(is_number),
        )
        .get_matches();

    match run(&matches) {
        Ok(()) => (),
        Err(HexDiffError::Write(ref why)) if why.kind() == ErrorKind::BrokenPipe => (),
        Err(why) => {
            eprintln!("hexdiff: {}", why);
            process::exit(1);
        }
    }
}
