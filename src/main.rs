use clap::Parser;
use std::process;
use utilikit::cli::{Cli, Commands};
use utilikit::commands::convert::ConvertOptions;
use utilikit::commands::{convert, invert, sizes, stats, validate};
use utilikit::Logger;

/// Parses command line arguments and dispatches to the command handlers.
fn main() {
    Logger::header(env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sizes { dir, count, asc } => sizes::run(&dir, count, asc),
        Commands::Convert {
            input,
            format,
            output,
            theme,
            style,
            online,
            minify,
            no_standalone,
            no_embed,
            toc,
            list_styles,
        } => {
            if list_styles {
                convert::list_styles();
                Ok(())
            } else {
                let opts = ConvertOptions {
                    format,
                    output,
                    theme,
                    style,
                    online,
                    minify,
                    standalone: !no_standalone,
                    embed: !no_embed,
                    toc,
                };
                // input is required by clap unless --list-styles was given
                match input {
                    Some(input) => convert::run(&input, &opts),
                    None => Err("No input given".into()),
                }
            }
        }
        Commands::Validate { xml, xsd, verbose } => {
            match validate::validate(&xml, &xsd, verbose) {
                Ok(true) => Ok(()),
                Ok(false) => {
                    process::exit(1);
                }
                Err(e) => Err(e),
            }
        }
        Commands::Invert { path } => invert::run(&path),
        Commands::Stats {
            dist,
            size,
            scales,
            step,
            kind,
            output,
        } => stats::run(dist, size, &scales, step, kind, &output),
    };

    if let Err(e) = result {
        Logger::error(&format!("{}", e));
        process::exit(1);
    }
}
