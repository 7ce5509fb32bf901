use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::Builder;
use log::{debug, info};

use sentence_parser::ast_printer::AstPrinter;
use sentence_parser::parser::Parser;
use sentence_parser::scanner::{read_source, Scanner};
use sentence_parser::token::TokenType;

/// Exit status for malformed input (sysexits `EX_DATAERR`).
const EXIT_DATA_ERR: i32 = 65;

#[derive(ClapParser, Debug)]
#[command(version, about = "Subject-verb-object sentence parser", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// Enable logging to app.log
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classifies every word of the input, printing one token per line
    Tokenize { filename: Option<PathBuf> },

    /// Parses the input as a single sentence and prints its tree
    Parse {
        filename: Option<PathBuf>,

        /// Print the parser's descent trace to stderr
        #[arg(long)]
        trace: bool,

        /// Print the tree as JSON instead of prefix form
        #[arg(long)]
        json: bool,
    },
}

/// Reads a file, or stdin when no filename is given, as UTF‑8 text.
fn read_input(filename: Option<PathBuf>) -> Result<String> {
    match filename {
        Some(filename) => {
            info!("Reading file: {:?}", filename);
            let file =
                File::open(&filename).context(format!("Failed to open file {:?}", filename))?;

            read_source(BufReader::new(file))
                .context(format!("Failed to read file {:?}", filename))
        }
        None => {
            info!("Reading stdin");

            read_source(io::stdin().lock()).context("Failed to read stdin")
        }
    }
}

fn init_logger() -> Result<()> {
    // Create or open the log file
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    Builder::new()
        .format(|buf, record| {
            // Strip 'sentence_parser::' from module path
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("sentence_parser::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug)
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    // Initialize logger only if --log flag is provided
    if args.log {
        init_logger()?;
    } else {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    info!("CLI arguments: {:?}", args);

    match args.commands {
        Commands::Tokenize { filename } => {
            info!("Running Tokenize subcommand");
            let source = read_input(filename)?;
            let mut tokenized = true;

            for token in Scanner::new(&source) {
                if token.token_type == TokenType::ERROR {
                    tokenized = false;
                }

                println!("{}", token);
            }

            if !tokenized {
                debug!("Unclassified input, exiting with code {}", EXIT_DATA_ERR);
                std::process::exit(EXIT_DATA_ERR);
            }

            info!("Tokenization completed successfully");
        }

        Commands::Parse {
            filename,
            trace,
            json,
        } => {
            info!("Running Parse subcommand");
            let source = read_input(filename)?;
            let mut parser = Parser::new(Scanner::new(&source)).with_trace(trace);
            let result = parser.parse();

            for line in parser.trace() {
                eprintln!("{}", line);
            }

            match result {
                Ok(sentence) => {
                    info!("Sentence parsed successfully");

                    if json {
                        let rendered = serde_json::to_string_pretty(&sentence)
                            .context("Failed to serialize sentence")?;
                        println!("{}", rendered);
                    } else {
                        let rendered = AstPrinter::print(&sentence);
                        debug!("AST: {}", rendered);
                        println!("{}", rendered);
                    }
                }

                Err(e) => {
                    debug!("Parse debug: {}", e);
                    eprintln!("{}", e);
                    std::process::exit(EXIT_DATA_ERR);
                }
            }

            info!("Parse subcommand completed");
        }
    }

    Ok(())
}
