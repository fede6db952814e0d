use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::{invert_hex, Colour};

/// Invert a hex colour
#[derive(Args, Debug)]
pub struct InvertArgs {
    /// Colour as #RRGGBB or RRGGBB
    pub hex: String,
}

pub fn run(args: InvertArgs, printer: &Printer) -> Result<()> {
    let inverted = invert_hex(&args.hex)?;
    let original = Colour::from_hex(&args.hex)?;

    printer.info(
        "Inverted",
        &format!(
            "{} -> {}",
            printer.swatch(original, &original.to_hex()),
            printer.swatch(original.inverted(), &inverted)
        ),
    );
    println!("{}", inverted);

    Ok(())
}
