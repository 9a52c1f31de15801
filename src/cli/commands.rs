use std::fmt;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::complex::Complex;
use crate::config::{Settings, ValueKind};
use crate::errors::TreeError;
use crate::layout::TreeLayout;
use crate::traversal::Order;
use crate::tree_traits::TreeRender;

/// Values the front end can build trees of.
pub trait Payload: Clone + PartialOrd + fmt::Debug + fmt::Display + DeserializeOwned {
    fn parse_value(s: &str) -> CliResult<Self>;
}

impl Payload for f64 {
    fn parse_value(s: &str) -> CliResult<Self> {
        s.trim()
            .parse()
            .map_err(|e| CliError::InvalidArgs(format!("invalid value '{s}': {e}")))
    }
}

impl Payload for Complex {
    fn parse_value(s: &str) -> CliResult<Self> {
        s.parse()
            .map_err(|e| CliError::InvalidArgs(format!("invalid value '{s}': {e}")))
    }
}

/// Instantiates `$func::<$t, K>` for the runtime arity. Trees carry their arity as a
/// const parameter, so only a fixed set of arities is available here.
macro_rules! with_arity {
    ($arity:expr, $func:ident::<$t:ty>($($arg:expr),*)) => {
        match $arity {
            1 => $func::<$t, 1>($($arg),*),
            2 => $func::<$t, 2>($($arg),*),
            3 => $func::<$t, 3>($($arg),*),
            4 => $func::<$t, 4>($($arg),*),
            n => Err(CliError::InvalidArgs(format!(
                "unsupported arity {n}, expected 1 to 4"
            ))),
        }
    };
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Ok(());
    };
    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    let kind = if cli.complex {
        ValueKind::Complex
    } else {
        settings.value_kind
    };
    debug!(%kind, "value kind");
    match kind {
        ValueKind::Real => run::<f64>(cli, command, &settings),
        ValueKind::Complex => run::<Complex>(cli, command, &settings),
    }
}

fn run<T: Payload>(cli: &Cli, command: &Commands, settings: &Settings) -> CliResult<()> {
    match command {
        Commands::Show { layout } => {
            let (layout, arity) = load_layout::<T>(cli, settings, layout)?;
            with_arity!(arity, _show::<T>(&layout, settings))
        }
        Commands::Heapify { layout } => {
            let (layout, arity) = load_layout::<T>(cli, settings, layout)?;
            with_arity!(arity, _heapify::<T>(&layout, settings))
        }
        Commands::Find { layout, value } => {
            let key = T::parse_value(value)?;
            let (layout, arity) = load_layout::<T>(cli, settings, layout)?;
            with_arity!(arity, _find::<T>(&layout, &key))
        }
        Commands::Completion { .. } => Ok(()),
    }
}

/// Arity precedence: layout file, then `--arity`, then settings.
fn load_layout<T: Payload>(
    cli: &Cli,
    settings: &Settings,
    path: &Path,
) -> CliResult<(TreeLayout<T>, usize)> {
    let layout = TreeLayout::<T>::load(path)?;
    let arity = layout.arity.or(cli.arity).unwrap_or(settings.arity);
    Ok((layout, arity))
}

#[instrument(skip_all)]
fn _show<T: Payload, const K: usize>(layout: &TreeLayout<T>, settings: &Settings) -> CliResult<()> {
    let tree = layout.build::<K>()?;
    output::header(&format!(
        "{}-ary tree: {} nodes, depth {}",
        K,
        tree.len(),
        tree.depth()
    ));
    if settings.render {
        output::info(&tree.to_tree_string());
    }
    for order in settings.orders_for(K) {
        let values = tree.values(order)?;
        output::sequence(&order.to_string(), &values.iter().join(", "));
    }
    Ok(())
}

#[instrument(skip_all)]
fn _heapify<T: Payload, const K: usize>(
    layout: &TreeLayout<T>,
    settings: &Settings,
) -> CliResult<()> {
    let mut tree = layout.build::<K>()?;
    let before = tree.values(Order::BreadthFirst)?;
    tree.heapify();
    let after = tree.values(Order::BreadthFirst)?;

    output::header(&format!("{}-ary tree heapified", K));
    output::sequence("before", &before.iter().join(", "));
    output::sequence("after", &after.iter().join(", "));
    if settings.render {
        output::info(&tree.to_tree_string());
    }
    Ok(())
}

#[instrument(skip_all)]
fn _find<T: Payload, const K: usize>(layout: &TreeLayout<T>, key: &T) -> CliResult<()> {
    let tree = layout.build::<K>()?;
    let Some(idx) = tree.find(key) else {
        return Err(TreeError::NotFound(key.to_string()).into());
    };

    output::success(&format!("found {key}"));
    let children = tree.children(idx);
    if children.is_empty() {
        output::detail(&"leaf");
    }
    for &child in children {
        if let Some(value) = tree.value(child) {
            output::detail(value);
        }
    }
    Ok(())
}
