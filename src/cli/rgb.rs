use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::Printer;
use crate::types::{ChannelOrder, Colour};

/// Split a hex colour into R G B components
#[derive(Args, Debug)]
pub struct RgbArgs {
    /// Colour as #RRGGBB or RRGGBB
    pub hex: String,

    /// Print channels in B G R order
    #[arg(long)]
    pub bgr: bool,
}

pub fn run(args: RgbArgs, config: &Config, printer: &Printer) -> Result<()> {
    let order = if args.bgr {
        ChannelOrder::Bgr
    } else {
        config.channel_order
    };

    let colour = Colour::from_hex(&args.hex)?;
    let (a, b, c) = colour.channels(order);

    let label = match order {
        ChannelOrder::Rgb => "RGB",
        ChannelOrder::Bgr => "BGR",
    };
    printer.info(label, &printer.swatch(colour, &colour.to_hex()));
    println!("{} {} {}", a, b, c);

    Ok(())
}
