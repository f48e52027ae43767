use clap::Parser;
use picocc::lexer::DEFAULT_MAX_IDENTIFIER_LEN;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Front end for a minimal C subset", long_about = None)]
pub struct Args {
    /// Stop after lexing and print the tokens
    #[arg(long, conflicts_with = "parse")]
    pub lex: bool,

    /// Stop after parsing and print the syntax tree
    #[arg(long)]
    pub parse: bool,

    /// Longest identifier accepted by the lexer, in bytes
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_IDENTIFIER_LEN)]
    pub max_identifier_len: usize,

    /// Source file to compile
    #[arg(default_value = "test-cases/001.c")]
    pub input: PathBuf,
}
