#![deny(unsafe_code)]
//! CLI binary for swatch color conversion.
//!
//! Subcommands:
//! - `convert <color>`: show a color in RGB, HSL, CMYK, and hex
//! - `adjust <color> --op <name> --amount <x>` or `adjust --recipe <json>`
//! - `edit <color> <channel>=<text>...`: replay picker field edits
//! - `list`: print channel and adjustment names

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::process;
use swatch_core::{Adjustment, Channel, ColorModel, ColorNotation, Recipe};

#[derive(Parser)]
#[command(name = "swatch", about = "RGB / HSL / CMYK color conversion CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Keep the alpha channel (hex output becomes AARRGGBB).
    #[arg(long, global = true)]
    alpha: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a color in every model.
    Convert {
        /// Color as #RRGGBB, #AARRGGBB, rgb:r,g,b[,a], hsl:h,s,l[,a], or cmyk:c,m,y,k[,a].
        color: String,
    },
    /// Apply a brightness, saturation, or hue adjustment.
    Adjust {
        /// Starting color (required unless --recipe is given).
        color: Option<String>,

        /// Adjustment name (see `swatch list`).
        #[arg(long)]
        op: Option<String>,

        /// Absolute value for set-* operators, factor for modify-* operators.
        #[arg(long, default_value_t = 1.0)]
        amount: f64,

        /// Recipe as a JSON string, or @path to read it from a file.
        #[arg(long, conflicts_with_all = ["color", "op"])]
        recipe: Option<String>,
    },
    /// Replay color picker field edits, e.g. `hue=240 sat=50 hex=FF8000`.
    Edit {
        /// Starting color.
        color: String,

        /// Edits as <channel>=<text>, applied in order.
        edits: Vec<String>,
    },
    /// List channel and adjustment names.
    List,
}

/// Opens a picker model on `color`, keeping the model it was written in
/// authoritative so gray hues and CMYK key survive.
fn model_for(color: &str, enable_alpha: bool) -> Result<ColorModel, CliError> {
    let notation: ColorNotation = color.parse()?;
    let mut model = ColorModel::new(notation.to_rgb(), enable_alpha);
    match notation {
        ColorNotation::Hsl(hsl) => model.set_hsl(hsl),
        ColorNotation::Cmyk(cmyk) => model.set_cmyk(cmyk),
        ColorNotation::Rgb(_) => {}
    }
    Ok(model)
}

fn load_recipe(arg: &str) -> Result<Recipe, CliError> {
    let text = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::Io(format!("reading recipe {path}: {e}")))?,
        None => arg.to_string(),
    };
    serde_json::from_str(&text).map_err(|e| CliError::Input(format!("invalid --recipe JSON: {e}")))
}

fn print_model(model: &ColorModel, json: bool, extra: serde_json::Value) -> Result<(), CliError> {
    let readout = model.readout();
    if json {
        let mut info = serde_json::json!({
            "rgb": model.primary(),
            "hsl": model.hsl(),
            "cmyk": model.cmyk(),
            "readout": readout,
        });
        if let (Some(obj), serde_json::Value::Object(more)) = (info.as_object_mut(), extra) {
            obj.extend(more);
        }
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("hex   #{}", readout.hex);
        println!(
            "rgb   {} {} {}  alpha {}",
            readout.red, readout.green, readout.blue, readout.alpha
        );
        println!(
            "hsb   {}° {}% {}%",
            readout.hue, readout.saturation, readout.brightness
        );
        println!(
            "cmyk  {}% {}% {}% {}%",
            readout.cyan, readout.magenta, readout.yellow, readout.key
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let channels: Vec<&str> = Channel::ALL.iter().map(|c| c.label()).collect();
            let adjustments = Adjustment::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "channels": channels,
                    "adjustments": adjustments,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Channels:");
                for ch in Channel::ALL {
                    println!("  {:<10} 0-{}", ch.label(), ch.max());
                }
                println!("Adjustments:");
                println!("  {}", adjustments.join(", "));
            }
        }
        Command::Convert { color } => {
            let model = model_for(&color, cli.alpha)?;
            print_model(&model, cli.json, serde_json::json!({ "input": color }))?;
        }
        Command::Adjust {
            color,
            op,
            amount,
            recipe,
        } => {
            let recipe = match (recipe, color, op) {
                (Some(arg), _, _) => load_recipe(&arg)?,
                (None, Some(color), Some(op)) => {
                    let start: ColorNotation = color.parse()?;
                    Recipe::new(start.to_rgb()).then(Adjustment::from_name(&op, amount)?)
                }
                (None, None, _) => {
                    return Err(CliError::Input("adjust needs a color or --recipe".into()))
                }
                (None, Some(_), None) => {
                    return Err(CliError::Input("adjust needs --op or --recipe".into()))
                }
            };
            let out = recipe.run();
            let model = ColorModel::new(out, cli.alpha);
            print_model(&model, cli.json, serde_json::json!({ "recipe": recipe }))?;
        }
        Command::Edit { color, edits } => {
            let mut model = model_for(&color, cli.alpha)?;
            for edit in &edits {
                let (name, text) = edit.split_once('=').ok_or_else(|| {
                    CliError::Input(format!("edit {edit:?} must look like <channel>=<text>"))
                })?;
                if name.trim().eq_ignore_ascii_case("hex") {
                    model.edit_hex(text)?;
                } else {
                    model.edit(Channel::from_name(name)?, text)?;
                }
            }
            print_model(&model, cli.json, serde_json::json!({ "edits": edits }))?;
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
