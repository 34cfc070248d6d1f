//! CLI logic for the netdot transpiler.
//!
//! This module contains the core CLI logic: read the input documents, parse
//! or merge them, render DOT and write the result.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::info;

use netdot::{
    NetdotError, NetworkBuilder,
    config::{AppConfig, RenderConfig},
};

/// Run the netdot CLI application
///
/// A single input is rendered on its own; several inputs are merged first,
/// which only keeps topology, device, links and intent documents.
///
/// # Errors
///
/// Returns `NetdotError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Warnings, when the configuration denies them
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), NetdotError> {
    info!(
        inputs = args.inputs.len(),
        output_path = args.output;
        "Processing network documents"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(view) = args.view {
        app_config = AppConfig::new(RenderConfig::new(view), app_config.diagnostics().clone());
    }

    let sources = args
        .inputs
        .iter()
        .map(fs::read_to_string)
        .collect::<Result<Vec<_>, _>>()?;

    let builder = NetworkBuilder::new(app_config);
    let data = match sources.as_slice() {
        [single] => builder.parse(single)?.data,
        many => {
            let many: Vec<&str> = many.iter().map(String::as_str).collect();
            builder.merge(&many)?
        }
    };
    let dot = builder.render_dot(&data)?;

    write_output(Path::new(&args.output), &dot)?;

    info!(output_file = args.output; "Network exported successfully");

    Ok(())
}

#[cfg(feature = "graphviz")]
fn write_output(path: &Path, dot: &str) -> Result<(), NetdotError> {
    use graphviz_rust::cmd::{CommandArg, Format};

    if path.extension().and_then(|ext| ext.to_str()) == Some("svg") {
        info!("Running Graphviz to produce SVG");
        let svg = graphviz_rust::exec_dot(dot.to_string(), vec![CommandArg::Format(Format::Svg)])?;
        fs::write(path, svg)?;
        return Ok(());
    }

    fs::write(path, dot)?;
    Ok(())
}

#[cfg(not(feature = "graphviz"))]
fn write_output(path: &Path, dot: &str) -> Result<(), NetdotError> {
    fs::write(path, dot)?;
    Ok(())
}
