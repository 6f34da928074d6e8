#![deny(missing_docs)]
//! Process initialisation for handler binaries: `.env` loading, the panic hook and the tracing subscriber.
//!
//! The subscriber depends on [Environment]: prod and dev emit flattened json lines, local emits pretty
//! output, or an indented tree when `TREE_TRACING_INDENT` is set.

use handler_env::Environment;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_tree::HierarchicalLayer;

/// Local only, the indent width of the [HierarchicalLayer]. Unset, zero or unparsable keeps pretty output.
pub const TREE_TRACING_VAR: &str = "TREE_TRACING_INDENT";

/// Initializes a handler binary, see [HandlerEntrypoint::init]
#[derive(Debug, Default)]
pub struct HandlerEntrypoint;

/// sentinel struct which guarantees that we called [HandlerEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint {
    /// the environment the subscriber was configured for
    pub env: Environment,
}

impl HandlerEntrypoint {
    /// load `.env`, install the panic hook and the global subscriber.
    /// The environment is resolved after `.env` is loaded so it may set `ENVIRONMENT` locally.
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let env = Environment::new_or_prod();
        let tree_indent = tree_tracing_indent(std::env::var(TREE_TRACING_VAR).ok().as_deref());

        match (env, tree_indent) {
            (Environment::Local, None) => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            (Environment::Local, Some(indent)) => {
                Registry::default()
                    .with(EnvFilter::from_default_env())
                    .with(HierarchicalLayer::new(indent))
                    .init();
            }
            (Environment::Production | Environment::Develop, _) => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        tracing::trace!(env = %env, tree_indent = ?tree_indent, "entrypoint initialized");

        InitializedEntrypoint { env }
    }
}

fn tree_tracing_indent(value: Option<&str>) -> Option<usize> {
    value?.trim().parse::<usize>().ok().filter(|indent| *indent > 0)
}
