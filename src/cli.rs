//! CLI tool for testing the dialog bridge
//!
//! # Usage
//!
//! Print the resolved spec for a request without showing anything:
//! ```bash
//! modeler-dialog-cli spec close --options '{"name":"diagram.bpmn"}'
//! ```
//!
//! Actually show a dialog via the native host:
//! ```bash
//! modeler-dialog-cli show save --options '{"name":"diagram.bpmn","fileType":"bpmn"}'
//! ```
//!
//! List the supported request types:
//! ```bash
//! modeler-dialog-cli kinds
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use modeler_dialogs::{
    DialogBridge, DialogKind, DialogOptions, FilePreferences, NativeHost,
};

#[derive(Parser, Debug)]
#[command(name = "modeler-dialog-cli")]
#[command(about = "CLI tool for testing the modeler dialog bridge")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a request into its spec and print it as JSON (no dialog shown)
    Spec {
        /// Request type tag (e.g. "close", "save")
        request_type: String,
        /// Options as JSON (e.g. '{"name":"diagram.bpmn"}')
        #[arg(long, short, default_value = "{}")]
        options: String,
    },

    /// Show a dialog via the native host and print the outcome as JSON
    Show {
        /// Request type tag (e.g. "close", "save")
        request_type: String,
        /// Options as JSON (e.g. '{"name":"diagram.bpmn"}')
        #[arg(long, short, default_value = "{}")]
        options: String,
    },

    /// List the supported request type tags
    Kinds,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match args.command {
        Commands::Spec {
            request_type,
            options,
        } => {
            let options: DialogOptions = serde_json::from_str(&options)?;
            let bridge = DialogBridge::new(NativeHost::new(), FilePreferences::open_default());
            let spec = bridge.build_spec(&request_type, &options)?;
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }

        Commands::Show {
            request_type,
            options,
        } => {
            let options: DialogOptions = serde_json::from_str(&options)?;
            let mut bridge =
                DialogBridge::new(NativeHost::new(), FilePreferences::open_default());
            let outcome = bridge.invoke(&request_type, &options)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }

        Commands::Kinds => {
            for kind in DialogKind::ALL {
                println!("{kind}");
            }
        }
    }

    Ok(())
}
