//! # Hoin CLI
//!
//! Command-line interface for ESC/POS receipt printers.
//!
//! ## Usage
//!
//! ```bash
//! # Print a text file (or stdin) with tab stops every 8 columns
//! hoin text notes.txt --tab-width 8
//!
//! # Print an image on a printer at a specific address
//! hoin --addr 10.0.0.7 image logo.png --density double
//!
//! # Print a barcode through a USB device
//! hoin --device /dev/usb/lp0 barcode jan13 4006381333931 --hri below
//!
//! # Show the encoded bytes without touching a printer
//! hoin --dry-run cut --feed 3
//!
//! # Query every status record
//! hoin status
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=hoin=debug`).

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;

use hoin::{
    HoinError, Printer, PrinterConfig,
    protocol::{
        barcode::{HriPosition, Symbology},
        graphics::{Density, DotMode},
    },
    transport::{DeviceTarget, HealingTransport, MemoryTransport, TcpTarget, Transport},
};

/// Hoin - ESC/POS receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "hoin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Printer address, host[:port] (port defaults to 9100)
    #[arg(short, long, global = true, conflicts_with = "device")]
    addr: Option<String>,

    /// Printer device file, e.g. /dev/usb/lp0
    #[arg(short, long, global = true)]
    device: Option<PathBuf>,

    /// Printer preset (hop-e802, generic)
    #[arg(long, global = true, default_value = "hop-e802")]
    model: String,

    /// Read/write timeout in seconds, 0 to wait forever
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Do not wait for the printer after each image strip
    #[arg(long, global = true)]
    no_pace: bool,

    /// Print the encoded bytes as hex instead of sending them
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print text from a file, or stdin when no file (or `-`) is given
    Text {
        input: Option<PathBuf>,

        /// Width of the tab stop in columns
        #[arg(short, long, default_value_t = 4)]
        tab_width: i32,
    },

    /// Print the tab stop locations
    Tabs {
        /// Width of the tab stop in columns
        #[arg(short, long, default_value_t = 4)]
        tab_width: i32,
    },

    /// Print an image (PNG, JPEG, or anything else the image crate decodes)
    Image {
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = Density::Double)]
        density: Density,

        /// Dots per strip
        #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u8).range(8..=24))]
        dots: u8,
    },

    /// Print a barcode
    Barcode {
        #[arg(value_enum)]
        symbology: Symbology,

        data: String,

        /// Where to print the human-readable digits
        #[arg(long, value_enum, default_value_t = HriPosition::None)]
        hri: HriPosition,

        /// Bar height in dots (1-255)
        #[arg(long)]
        height: Option<i32>,
    },

    /// Cut the paper
    Cut {
        /// Motion units to feed before cutting
        #[arg(long)]
        feed: Option<i32>,
    },

    /// Feed the paper
    Feed {
        amount: i32,

        /// Count in lines instead of motion units
        #[arg(short, long)]
        lines: bool,
    },

    /// Sound the buzzer
    Beep {
        #[arg(long, default_value_t = 1)]
        times: i32,

        /// Length of each beep in 100ms units
        #[arg(long, default_value_t = 1)]
        duration: i32,
    },

    /// Beep a message in morse code
    Morse { message: String },

    /// Query and show every status record
    Status,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), HoinError> {
    let cli = Cli::parse();

    let mut config = PrinterConfig::by_name(&cli.model).ok_or_else(|| {
        HoinError::Validation(hoin::ValidationError::InvalidChoice {
            value: cli.model.clone(),
            choices: "hop-e802, generic".to_string(),
        })
    })?;
    if let Some(secs) = cli.timeout {
        config = config.with_timeout((secs > 0).then(|| Duration::from_secs(secs)));
    }
    if cli.no_pace || cli.dry_run {
        config = config.with_pacing(false);
    }

    if cli.dry_run {
        let mut printer = Printer::with_config(MemoryTransport::new(), &config);
        let result = execute(&mut printer, &cli.command);
        for chunk in printer.transport().writes() {
            println!("{}", hex(chunk));
        }
        return result;
    }

    if let Some(path) = &cli.device {
        let transport = HealingTransport::connect(DeviceTarget::new(path))?;
        return execute(&mut Printer::with_config(transport, &config), &cli.command);
    }

    let addr = match (&cli.addr, config.default_addr) {
        (Some(addr), _) => addr.clone(),
        (None, Some(addr)) => addr.to_string(),
        (None, None) => {
            return Err(HoinError::transport(
                format!("{} has no default address", config.name),
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "use --addr or --device"),
            ));
        }
    };
    let target = TcpTarget::new(addr).with_timeout(config.io_timeout);
    let transport = HealingTransport::connect(target)?;
    execute(&mut Printer::with_config(transport, &config), &cli.command)
}

fn execute<T: Transport>(printer: &mut Printer<T>, command: &Commands) -> Result<(), HoinError> {
    match command {
        Commands::Text { input, tab_width } => {
            let text = read_input(input.as_deref())?;
            printer.set_tab_width(*tab_width)?;
            printer.print(&text)?;
        }

        Commands::Tabs { tab_width } => {
            printer.set_tab_width(*tab_width)?;
            let ruler: Vec<String> = (0..=32).map(|i| i.to_string()).collect();
            printer.println(&ruler.join("\t"))?;
            printer.transmit_error_status()?;
        }

        Commands::Image {
            input,
            density,
            dots,
        } => {
            let img = image::open(input).map_err(|e| {
                HoinError::Image(format!("could not decode {}: {}", input.display(), e))
            })?;
            let mode = DotMode::try_from(*dots)?;
            info!(
                path = %input.display(),
                width = img.width(),
                height = img.height(),
                "printing image"
            );
            printer.print_image(&img, *density, mode)?;
        }

        Commands::Barcode {
            symbology,
            data,
            hri,
            height,
        } => {
            printer.set_hri_position(*hri)?;
            match height {
                Some(n) => printer.set_barcode_height(*n)?,
                None => printer.reset_barcode_height()?,
            }
            printer.print_barcode(*symbology, data)?;
            printer.line_feed()?;
        }

        Commands::Cut { feed } => match feed {
            Some(n) => printer.cut_feed(*n)?,
            None => printer.cut()?,
        },

        Commands::Feed { amount, lines } => {
            if *lines {
                printer.feed_lines(*amount)?;
            } else {
                printer.feed(*amount)?;
            }
        }

        Commands::Beep { times, duration } => printer.beep(*times, *duration)?,

        Commands::Morse { message } => printer.morse(message)?,

        Commands::Status => {
            println!("printer:      {:?}", printer.transmit_printer_status()?);
            println!("offline:      {:?}", printer.transmit_offline_status()?);
            println!("error:        {:?}", printer.transmit_error_status()?);
            println!("paper sensor: {:?}", printer.transmit_paper_sensor_status()?);
        }
    }
    Ok(())
}

/// Contents of `path`, or stdin when it is absent or `-`.
fn read_input(path: Option<&Path>) -> Result<String, HoinError> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .map_err(|e| HoinError::transport(format!("could not read {}", p.display()), e)),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
