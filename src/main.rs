use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use clockface_gen::icon_gen::{self, Options};

#[derive(Debug, Parser)]
#[clap(
    name = "clockface-gen",
    about = "Generate the stylized clock-face app icon at standard sizes"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "./icons")]
    output: PathBuf,

    /// PNG icon sizes to generate.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = [192u32, 512, 1024]
    )]
    sizes: Vec<u32>,

    /// Render variant: flat, gradient, soft, glossy or bold.
    #[clap(long, value_name = "NAME", default_value = "bold")]
    variant: String,

    /// Override the solid route marker color (CSS color format)
    #[clap(long, value_name = "COLOR")]
    route_a_color: Option<String>,

    /// Override the ring route marker color (CSS color format)
    #[clap(long, value_name = "COLOR")]
    route_b_color: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(Options {
        output: args.output,
        sizes: args.sizes,
        variant: args.variant,
        route_a_color: args.route_a_color,
        route_b_color: args.route_b_color,
    })
}
