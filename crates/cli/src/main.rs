#![deny(unsafe_code)]
//! CLI binary for value-ramp.
//!
//! Subcommands:
//! - `ramp`: print the rows of a value ramp
//! - `copy <index> <field>`: copy one row's HSV, RGB or HEX text to the clipboard
//! - `pick`: seed a ramp from one pixel of an image (eyedropper)
//! - `convert <hex>`: show a color as HSV, RGB and HEX

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use std::fs;
use std::path::PathBuf;
use std::process;
use value_ramp_core::{
    rgb_to_hsv, ColorRow, HexColor, RampController, RampForm, RampRequest, RangePolicy, RowField,
};
use value_ramp_host::{ImageSampler, SystemClipboard};

#[derive(Parser)]
#[command(name = "value-ramp", about = "HSV value ramps with copyable HSV/RGB/HEX rows")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// The five ramp fields. Unset fields take the form defaults
/// (hue 0, saturation 255, value 255, step 5, count 8).
#[derive(Args)]
struct RampArgs {
    /// Base hue in degrees (0-360).
    #[arg(long, allow_hyphen_values = true)]
    hue: Option<String>,

    /// Base saturation (0-255).
    #[arg(short, long, allow_hyphen_values = true)]
    saturation: Option<String>,

    /// Base value (0-255).
    #[arg(short, long, allow_hyphen_values = true)]
    value: Option<String>,

    /// Value decrement per row.
    #[arg(long, allow_hyphen_values = true)]
    step: Option<String>,

    /// Number of rows.
    #[arg(short, long, allow_hyphen_values = true)]
    count: Option<String>,

    /// Reject out-of-range fields instead of converting them as given.
    #[arg(long)]
    strict: bool,

    /// Load the ramp fields from a JSON request file.
    #[arg(long, conflicts_with_all = ["hue", "saturation", "value", "step", "count"])]
    request: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the rows of a value ramp.
    Ramp {
        #[command(flatten)]
        ramp: RampArgs,
    },
    /// Copy one field of a row to the system clipboard.
    Copy {
        /// Row number (1-based).
        index: usize,

        /// Which text to copy: hsv, rgb or hex.
        field: RowField,

        #[command(flatten)]
        ramp: RampArgs,

        /// Print the text instead of touching the clipboard.
        #[arg(long)]
        print: bool,
    },
    /// Seed a ramp from the color of one pixel in an image (e.g. a screenshot).
    Pick {
        /// Image to sample.
        #[arg(long)]
        image: PathBuf,

        /// Pixel column.
        #[arg(short, long)]
        x: u32,

        /// Pixel row.
        #[arg(short, long)]
        y: u32,

        /// Value decrement per row.
        #[arg(long, allow_hyphen_values = true)]
        step: Option<String>,

        /// Number of rows.
        #[arg(short, long, allow_hyphen_values = true)]
        count: Option<String>,

        /// Reject out-of-range step or count.
        #[arg(long)]
        strict: bool,
    },
    /// Show a hex color as HSV, RGB and HEX.
    Convert {
        /// Color like "#1a2b3c" or "1a2b3c".
        color: String,
    },
}

/// Largest ramp the CLI will render. Every row is materialized before
/// printing, so an unbounded count would exhaust memory.
const MAX_ROWS: usize = 10_000;

fn policy(strict: bool) -> RangePolicy {
    if strict {
        RangePolicy::Strict
    } else {
        RangePolicy::Permissive
    }
}

fn form_from_args(args: &RampArgs) -> Result<RampForm, CliError> {
    if let Some(path) = &args.request {
        let json = fs::read_to_string(path)
            .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
        return Ok(RampForm::from(RampRequest::from_json(&json)?));
    }
    let mut form = RampForm::default();
    let overrides = [
        (&args.hue, &mut form.hue),
        (&args.saturation, &mut form.saturation),
        (&args.value, &mut form.value),
        (&args.step, &mut form.step),
        (&args.count, &mut form.count),
    ];
    for (arg, field) in overrides {
        if let Some(text) = arg {
            field.clone_from(text);
        }
    }
    Ok(form)
}

fn check_row_cap(form: &RampForm, policy: RangePolicy) -> Result<(), CliError> {
    let count = form.parse(policy)?.count;
    if count > MAX_ROWS {
        return Err(CliError::Input(format!(
            "count {count} exceeds the limit of {MAX_ROWS} rows"
        )));
    }
    Ok(())
}

fn controller_from_args(args: &RampArgs) -> Result<RampController, CliError> {
    let form = form_from_args(args)?;
    let policy = policy(args.strict);
    check_row_cap(&form, policy)?;
    let mut controller = RampController::new(form, policy);
    controller.refresh()?;
    Ok(controller)
}

fn print_rows(rows: &[ColorRow]) {
    for row in rows {
        println!(
            "{:>3}  {:<20} {:<20} {}",
            row.index,
            row.hsv.to_string(),
            row.rgb.to_string(),
            row.hex
        );
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Ramp { ramp } => {
            let controller = controller_from_args(&ramp)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(controller.rows())?);
            } else {
                print_rows(controller.rows());
            }
        }
        Command::Copy {
            index,
            field,
            ramp,
            print,
        } => {
            let controller = controller_from_args(&ramp)?;
            let text = if print {
                controller.row(index)?.copy_text(field)
            } else {
                controller.copy(index, field, &mut SystemClipboard::new())?
            };
            if cli.json {
                let info = serde_json::json!({
                    "index": index,
                    "field": field.to_string(),
                    "text": text,
                    "copied": !print,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{text}");
                if !print {
                    eprintln!("copied row {index} {field} to clipboard");
                }
            }
        }
        Command::Pick {
            image,
            x,
            y,
            step,
            count,
            strict,
        } => {
            let sampler = ImageSampler::open(&image)?;
            let mut form = RampForm::default();
            if let Some(step) = step {
                form.step = step;
            }
            if let Some(count) = count {
                form.count = count;
            }
            let policy = policy(strict);
            check_row_cap(&form, policy)?;
            let mut controller = RampController::new(form, policy);
            controller.toggle_eyedropper();
            let hsv = controller
                .pick(&sampler, x, y)?
                .ok_or_else(|| CliError::Host("eyedropper was not armed".into()))?;
            if cli.json {
                let info = serde_json::json!({
                    "image": image.display().to_string(),
                    "x": x,
                    "y": y,
                    "picked": hsv,
                    "rows": controller.rows(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!("picked {hsv} at ({x}, {y}) from {}", image.display());
                print_rows(controller.rows());
            }
        }
        Command::Convert { color } => {
            let hex = HexColor::parse(&color)?;
            let rgb = hex.to_rgb();
            let hsv = rgb_to_hsv(rgb);
            if cli.json {
                let info = serde_json::json!({
                    "hsv": hsv,
                    "rgb": rgb,
                    "hex": hex,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{hsv}");
                println!("{rgb}");
                println!("{hex}");
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        log::debug!("exiting with code {}", e.exit_code());
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
