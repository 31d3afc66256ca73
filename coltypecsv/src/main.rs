//! A command-line utility that reads delimited text and reports the most
//! specific type every column can hold.

#![allow(clippy::needless_return)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use coltype::prelude::*;
use log::*;

/// help template for clap args parser
const HELP_TEMPLATE: &str = "{name} - {version}
{about-section}
{usage-heading}
{tab}{usage}

{all-args}
{after-help}";

/// A command-line utility to discover the per-column types of delimited
/// text, such as CSV or TSV files.
#[derive(Clone, Debug, Parser)]
#[command(
  name = "coltypecsv",
  author,
  version,
  help_template = HELP_TEMPLATE,
)]
struct Cli {
  /// Path to write the report to.
  ///
  /// If absent, writes to standard output.
  #[arg(short = 'o')]
  output: Option<PathBuf>,
  /// The delimiter used in the input.
  #[arg(short = 'd', long, default_value = ",", verbatim_doc_comment)]
  delim: char,
  /// Use a tab as delimiter. Overrides --delim.
  #[arg(long = "tab", verbatim_doc_comment)]
  tab: bool,
  /// Treat the first record as column headers and name columns after them
  /// in the report.
  #[arg(short = 'H', long = "headers")]
  headers: bool,
  /// Report columns that contain only empty fields as this type.
  ///
  /// The engine itself keeps them as EMPTY; some consumers prefer a
  /// concrete default such as INT.
  #[arg(short = 'E', long = "empty-as")]
  empty_as: Option<FieldType>,
  /// Output extra/debug info while reading.
  #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
  verbose: bool,
  /// The name of the input file.
  ///
  /// If -, reads from standard input.
  input: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
  // init cli stuff
  let mut args = Cli::parse();
  let log_level = if args.verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  };
  env_logger::builder().filter_level(log_level).init();
  if args.tab {
    args.delim = '\t';
  }
  let delim_byte: u8 = args
    .delim
    .try_into()
    .expect("Delimiter must be an ASCII character!");
  // open the input
  let input: Box<dyn Read> =
    if args.input.as_os_str().eq_ignore_ascii_case("-") {
      Box::new(io::stdin())
    } else if args.input.is_file() {
      if let Some(bn) = args.input.file_name() {
        if let Some(sbn) = bn.to_str() {
          debug!("Reading {}...", sbn);
        }
      }
      Box::new(File::open(&args.input)?)
    } else {
      error!("Provided path either does not exist or is not a file!");
      std::process::exit(1);
    };
  let mut rdr = csv::ReaderBuilder::new()
    .delimiter(delim_byte)
    .has_headers(args.headers)
    .flexible(true)
    .from_reader(BufReader::new(input));
  // column names, if the first record holds them
  let names: Vec<String> = if args.headers {
    rdr.headers()?.iter().map(str::to_owned).collect()
  } else {
    Vec::new()
  };
  // feed every record through the engine
  let mut table = TableTypes::new();
  let mut record = csv::StringRecord::new();
  while rdr.read_record(&mut record)? {
    table.consume_record(record.iter());
  }
  debug!(
    "Consumed {} records across {} columns.",
    table.records(),
    table.width()
  );
  // write the report
  let output: BufWriter<Box<dyn Write>> =
    BufWriter::new(if let Some(ref op) = args.output {
      Box::new(File::create(op)?)
    } else {
      Box::new(io::stdout())
    });
  let mut wtr = csv::WriterBuilder::new().from_writer(output);
  if args.headers {
    wtr.write_record(["column", "name", "type"])?;
  } else {
    wtr.write_record(["column", "type"])?;
  }
  for (i, mut ctype) in table.types().into_iter().enumerate() {
    if ctype == FieldType::Empty {
      if let Some(dft) = args.empty_as {
        ctype = dft;
      }
    }
    let index = (i + 1).to_string();
    let tname = ctype.snake_case_name();
    if args.headers {
      let name = names.get(i).map(String::as_str).unwrap_or("");
      wtr.write_record([index.as_str(), name, tname.as_str()])?;
    } else {
      wtr.write_record([index.as_str(), tname.as_str()])?;
    }
  }
  wtr.flush()?;
  return Ok(());
}
