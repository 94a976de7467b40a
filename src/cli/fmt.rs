//! Fmt command implementation.
//!
//! Writes the fully resolved stadium to stdout: traits applied, defaults
//! filled in, and the ball written as `ballPhysics`.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::parser::load;
use crate::serialize::{serialize, serialize_compact};

/// Write a stadium back out as canonical JSON
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Stadium file to read
    pub file: PathBuf,

    /// Emit a single line instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: FmtArgs) -> Result<()> {
    let stadium = load(&args.file)?;

    let text = if args.compact {
        serialize_compact(&stadium)
    } else {
        serialize(&stadium)
    };
    println!("{}", text);

    Ok(())
}
