use anyhow::Result;
use clap::Parser;
use textpic::RenderConfig;

/// Text-to-pixel renderer: every input byte becomes one colored pixel,
/// looked up in a 128-entry palette built from a reference image.
#[derive(Parser, Debug)]
#[command(name = "textpic")]
#[command(about = "🎨 Render text into a pixel image through a color palette")]
#[command(long_about = "Render text into a pixel image through a color palette.
Text comes from the arguments (joined with spaces) or from stdin when no
arguments are given; with --execute the text is run as a shell command and
its output is rendered instead.")]
struct Args {
    /// Text to render; stdin is read when no arguments are given
    text: Vec<String>,

    /// Output destination
    #[arg(short, long, default_value = "",
          help = "Output file (.png, .jpg or .gif); writes PNG to stdout when empty")]
    out: String,

    /// Execute mode
    #[arg(short, long,
          help = "Run the input as a shell command and render its stdout")]
    execute: bool,

    /// Output width in cells
    #[arg(short = 'W', long,
          help = "Output width in cells; defaults to the longest line's byte length")]
    width: Option<u32>,

    /// Output height in cells
    #[arg(short = 'H', long,
          help = "Output height in cells; defaults to the number of lines")]
    height: Option<u32>,

    /// Integer upscale factor (not a percentage)
    #[arg(short = 's', long, default_value_t = 1,
          help = "Expand every cell to an n×n pixel block; 1 keeps the image as-is")]
    size: u32,

    /// Palette selector
    #[arg(long, default_value = "",
          help = "Color table: empty for the built-in palette, 'ueda' for the alternate, or a path to a 128-pixel PNG")]
    table: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = RenderConfig {
        out: args.out,
        execute: args.execute,
        width: args.width,
        height: args.height,
        scale: args.size,
        table: args.table,
    };

    config.validate().map_err(anyhow::Error::msg)?;
    textpic::run(&config, &args.text)
}
