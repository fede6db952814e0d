//! Nodes command implementation.
//!
//! Lists the registry, either as a readable summary or as the host's
//! object-info JSON.

use clap::Args;

use crate::error::{NodeError, Result};
use crate::node::{InputSpec, NodeSpec};
use crate::output::{plural, Printer};
use crate::registry::NodeRegistry;
use crate::types::Value;

/// List the registered nodes
#[derive(Args, Debug)]
pub struct NodesArgs {
    /// Print object-info JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: NodesArgs, printer: &Printer) -> Result<()> {
    let registry = NodeRegistry::builtin();

    if args.json {
        let json = serde_json::to_string_pretty(&registry.object_info()).map_err(|e| {
            NodeError::Parse {
                message: format!("Failed to serialize node info: {}", e),
                help: None,
            }
        })?;
        println!("{}", json);
        return Ok(());
    }

    printer.status("Registered", &plural(registry.len(), "node", "nodes"));
    println!("{}", format_listing(&registry));

    Ok(())
}

/// Human-readable summary of every node in the registry.
pub fn format_listing(registry: &NodeRegistry) -> String {
    registry
        .iter()
        .map(|(name, node)| format_node(name, &node.spec()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_node(name: &str, spec: &NodeSpec) -> String {
    let inputs = spec.inputs.iter().map(format_input).collect::<Vec<_>>();
    let outputs = spec
        .outputs
        .iter()
        .map(|o| format!("{}: {}", o.name, o.ty))
        .collect::<Vec<_>>();

    format!(
        "{} [{}] {}\n  in:  {}\n  out: {}",
        name,
        spec.category,
        spec.function,
        inputs.join(", "),
        outputs.join(", ")
    )
}

fn format_input(input: &InputSpec) -> String {
    match (&input.int_options, &input.default) {
        (Some(o), _) => format!("{}: {} = {} [{}..{}]", input.name, input.ty, o.default, o.min, o.max),
        (None, Some(Value::Color(default))) => format!("{}: {} = {}", input.name, input.ty, default),
        _ => format!("{}: {}", input.name, input.ty),
    }
}
