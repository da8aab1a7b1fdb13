use std::{io, path::PathBuf};

use carousel_app::{
    core::{Hertz, Milliseconds},
    Carousel, ElementSource, InitialMarker,
};
use carousel_cli::{load_config, DirectorySource, TerminalPresenter};
use clap::{CommandFactory, Parser, Subcommand};

/// Image carousel
///
/// A command line application that shows the images of a directory one by one.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = false)]
struct Cli {
    /// Actual command
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rotate the images of the directory
    Run {
        /// Images directory
        #[arg(value_name = "DIR")]
        path: PathBuf,
        /// Configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Period between two slides
        #[arg(short, long, value_name = "MS", conflicts_with = "rate")]
        interval: Option<Milliseconds>,
        /// Slides per second
        #[arg(short, long, value_name = "Hz")]
        rate: Option<Hertz>,
        /// Who marks the first slide: "apply" or "external"
        #[arg(long, value_name = "POLICY")]
        initial_marker: Option<InitialMarker>,
        /// Stop after the given number of slides
        #[arg(short, long)]
        ticks: Option<u32>,
    },
    /// Print the slides in the order they will be shown
    List {
        /// Images directory
        #[arg(value_name = "DIR")]
        path: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// The shell to generate the completions for
        #[arg(value_enum)]
        shell: clap_complete_command::Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            path,
            config,
            interval,
            rate,
            initial_marker,
            ticks,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(interval) = interval {
                config.interval = interval;
            }
            if let Some(rate) = rate {
                config.interval = rate.into();
            }
            if let Some(initial_marker) = initial_marker {
                config.initial_marker = initial_marker;
            }

            let presenter = TerminalPresenter::new(io::stdout());
            let carousel = Carousel::launch(DirectorySource::new(&path), presenter, &config)?;

            let period = config.period();
            let deadline = async {
                match ticks {
                    // Wake up halfway to the tick after the last one.
                    Some(ticks) => tokio::time::sleep(period * ticks + period / 2).await,
                    None => std::future::pending::<()>().await,
                }
            };
            tokio::select! {
                () = deadline => {}
                result = tokio::signal::ctrl_c() => {
                    result?;
                    log::info!("Interrupted");
                }
            }

            let controller = carousel.stop().await?;
            if let Some(slide) = controller.active() {
                log::info!("Last shown slide: {}", slide);
            }
        }
        Command::List { path } => {
            let slides = DirectorySource::new(&path).query()?;
            for (index, slide) in slides.iter().enumerate() {
                println!("{index:>4} {slide}");
            }
        }
        Command::Completions { shell } => {
            shell.generate(&mut Cli::command(), &mut io::stdout());
        }
    }

    Ok(())
}
