//! Calendar CLI application.
//!
//! # Usage
//! ```ignore
//! sundial          // Current month
//! sundial 2026     // Year 2026
//! sundial 2 2026   // February 2026
//! ```

use std::io::Write;

use sundial::args::{Args, get_date_request};
use sundial::error::Result;
use sundial::formatter::render;
use sundial::types::RenderContext;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("sundial: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let ctx = RenderContext::new(args);
    let request = get_date_request(args, ctx.today)?;
    let block = render(&ctx, &request)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(block.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
