mod args;
mod driver_error;

use args::Args;
use clap::Parser;
use driver_error::DriverError;
use picocc::*;
use std::fs;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

fn load_source(path: &Path) -> Result<String, DriverError> {
    if !fs::exists(path)? {
        let filename = path.to_string_lossy().to_string();
        return Err(DriverError::InputFileDoesNotExist(filename));
    }
    let source = fs::read_to_string(path)?;
    tracing::debug!("read {} bytes from {}", source.len(), path.display());
    Ok(source)
}

fn tokenize(source: &str, args: &Args) -> Result<lexer::TokenBuffer, DriverError> {
    let file = args.input.to_string_lossy();
    let tokens = lexer::Lexer::new(file.as_ref(), source)
        .with_max_identifier_len(args.max_identifier_len)
        .lex()?;

    if !args.parse {
        for token in &tokens {
            println!("{}", token.tag_name());
        }
    }
    Ok(tokens)
}

fn parse(tokens: &lexer::TokenBuffer, args: &Args) -> Result<ast::TranslationUnit, DriverError> {
    let unit = parser::parse(tokens)?;
    if args.parse {
        println!("{unit:#?}");
    }
    Ok(unit)
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::trace!("compiling: input={:?}", args.input);

    let source = load_source(&args.input)?;
    let tokens = tokenize(&source, &args)?;

    if args.lex {
        return Ok(());
    }

    let unit = parse(&tokens, &args)?;

    if !args.parse {
        println!("parsed {} toplevel item(s)", unit.len());
    }

    Ok(())
}
