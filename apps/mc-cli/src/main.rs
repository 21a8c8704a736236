use clap::Parser;
use mc_channel::{
    ChannelConfig, ChannelError, FlowMode, PerformanceReport, Preset, calc_channel_perf,
};
use mc_core::CC_PER_CUBIC_FOOT;
use mc_props::{CoolantKind, CoolantProps, FlowUnit, MaterialLibrary, PropsError};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "microchannel")]
#[command(about = "Microchannel heat-sink thermal and pressure-drop estimates", long_about = None)]
struct Cli {
    /// Preset design name (LSLaserBackplane, LSTEColdPlate, LSTEHotPlate, LSEpiTip)
    #[arg(required_unless_present_any = ["list_materials", "list_presets"])]
    preset: Option<String>,

    /// Material dataset JSON (defaults to the bundled dataset)
    #[arg(long)]
    materials: Option<PathBuf>,

    /// Flow mode: constFlow or constPressure
    #[arg(long)]
    mode: Option<FlowMode>,

    /// Flow rate override [ccm]; selects constFlow unless --mode is given
    #[arg(long, conflicts_with = "pressure")]
    flow_rate: Option<f64>,

    /// Pressure drop override [psi]; selects constPressure unless --mode is given
    #[arg(long)]
    pressure: Option<f64>,

    /// Print the inputs and report as JSON
    #[arg(long)]
    json: bool,

    /// Also print coolant, material and optimum-dimension details
    #[arg(long)]
    details: bool,

    /// List materials in the dataset and exit
    #[arg(long)]
    list_materials: bool,

    /// List preset designs and exit
    #[arg(long)]
    list_presets: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Channel(#[from] ChannelError),
    #[error(transparent)]
    Props(#[from] PropsError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to format output")]
    Format(#[from] std::fmt::Error),
    #[error("no preset given")]
    MissingPreset,
}

type CliResult<T> = Result<T, CliError>;

/// `--json` document: the resolved inputs alongside the report.
#[derive(Serialize)]
struct JsonOutput<'a> {
    preset: &'static str,
    mode: FlowMode,
    coolant: CoolantKind,
    coolant_temperature_c: f64,
    concentration_pct: Option<f64>,
    coolant_properties: &'a CoolantProps,
    material: &'a str,
    report: &'a PerformanceReport,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Execute the command line and return what should go to stdout.
fn run(cli: &Cli) -> CliResult<String> {
    if cli.list_presets {
        return Ok(render_presets()?);
    }

    let materials = match &cli.materials {
        Some(path) => MaterialLibrary::load(path)?,
        None => MaterialLibrary::bundled()?,
    };
    if cli.list_materials {
        return Ok(render_materials(&materials)?);
    }

    let preset: Preset = cli.preset.as_deref().ok_or(CliError::MissingPreset)?.parse()?;
    let config = apply_overrides(preset.build(&materials)?, cli)?;
    tracing::info!(
        preset = preset.name(),
        mode = config.operating().mode.name(),
        "solving"
    );
    let report = calc_channel_perf(&config)?;

    if cli.json {
        let coolant = config.coolant();
        let doc = JsonOutput {
            preset: preset.name(),
            mode: config.operating().mode,
            coolant: coolant.kind(),
            coolant_temperature_c: coolant.temperature_c(),
            concentration_pct: coolant.concentration_pct(),
            coolant_properties: coolant.props(),
            material: config.material().name(),
            report: &report,
        };
        let mut out = serde_json::to_string_pretty(&doc)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = render_report(&report)?;
    if cli.details {
        out.push_str(&render_details(&config, &report)?);
    }
    Ok(out)
}

fn apply_overrides(config: ChannelConfig, cli: &Cli) -> CliResult<ChannelConfig> {
    if cli.mode.is_none() && cli.flow_rate.is_none() && cli.pressure.is_none() {
        return Ok(config);
    }
    let mut op = *config.operating();
    if let Some(flow_rate) = cli.flow_rate {
        op.flow_rate_ccm = flow_rate;
        op.mode = FlowMode::ConstFlow;
    }
    if let Some(pressure) = cli.pressure {
        op.pressure_psi = pressure;
        op.mode = FlowMode::ConstPressure;
    }
    if let Some(mode) = cli.mode {
        op.mode = mode;
    }
    Ok(config.with_operating(op)?)
}

fn render_report(r: &PerformanceReport) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "\nRTotal (degree C/W): {:.4}", r.r_total)?;
    writeln!(out, "RConv (degree C/W): {:.4}", r.r_conv)?;
    writeln!(out, "RHeat (degree C/W): {:.4}", r.r_heat)?;
    writeln!(out, "RCond (degree C/W): {:.4}", r.r_cond)?;
    writeln!(out, "surface area multiplier alpha: {:.3}", r.alpha)?;
    writeln!(out, "finEta (%): {:.2}", r.fin_eta)?;
    writeln!(out, "flow speed (cm/s): {:.2}", r.velocity_cm_s)?;
    writeln!(out, "pressure drop p (psi): {:.2}", r.pressure_psi)?;
    writeln!(out, "flow rate f (ccm): {:.2}", r.flow_rate_ccm)?;
    writeln!(out, "Re: {:.2}", r.reynolds)?;
    writeln!(out, "NuAvg: {:.2}", r.nusselt_avg)?;
    writeln!(out, "xCrit (mm): {:.2}", r.x_crit_mm)?;
    Ok(out)
}

fn render_details(
    config: &ChannelConfig,
    r: &PerformanceReport,
) -> Result<String, std::fmt::Error> {
    let coolant = config.coolant();
    let material = config.material();
    let rate = match coolant.flow_unit() {
        FlowUnit::Ccm => r.flow_rate_ccm,
        FlowUnit::Cfm => r.flow_rate_ccm / CC_PER_CUBIC_FOOT,
    };
    let regime = if r.is_laminar() { "laminar" } else { "turbulent" };

    let mut out = String::new();
    writeln!(out, "\nmode: {}", config.operating().mode)?;
    write!(
        out,
        "coolant: {} at {:.1} C",
        coolant.kind(),
        coolant.temperature_c()
    )?;
    match coolant.concentration_pct() {
        Some(conc) => writeln!(out, ", {conc:.0}% glycol")?,
        None => writeln!(out)?,
    }
    writeln!(
        out,
        "coolant Rth at {:.2} {} (degree C/W): {:.4}",
        rate,
        coolant.flow_unit().label(),
        coolant.flow_thermal_resistance(rate)
    )?;
    writeln!(
        out,
        "wall: {} (k = {:.3} W/cm-K)",
        material.name(),
        material.conductivity()
    )?;
    writeln!(out, "channels: {}", config.geometry().total_channels())?;
    writeln!(out, "flow regime: {regime}")?;
    writeln!(out, "zcOpt (mm): {:.3}", r.optimum.channel_height_mm)?;
    writeln!(out, "wcOpt0 (mm): {:.3}", r.optimum.channel_width_mm)?;
    Ok(out)
}

fn render_presets() -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for preset in Preset::ALL {
        let d = preset.design();
        writeln!(
            out,
            "{:<18} {:>3} channels, {} wall, {} at {:.0} C",
            preset.name(),
            d.geometry.total_channels(),
            d.material,
            d.coolant.name,
            d.coolant.temperature_c
        )?;
    }
    Ok(out)
}

fn render_materials(materials: &MaterialLibrary) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for name in materials.names() {
        if let Ok(m) = materials.get(&name) {
            writeln!(
                out,
                "{:<10} rho {:>7.3} g/cm3  k {:>6.3} W/cm-K  cp {:>6.3} J/g-K  CTE {:>6.3}",
                m.name(),
                m.density(),
                m.conductivity(),
                m.specific_heat(),
                m.linear_expansion()
            )?;
        }
    }
    Ok(out)
}
