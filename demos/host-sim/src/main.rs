use clap::{Parser, Subcommand};
use scout_channel::{ChannelRegistry, MethodCall, MethodReply};
use scout_code_generator::{CodeGeneratorPlugin, CHANNEL};

#[derive(Parser)]
#[command(name = "host-sim")]
#[command(about = "Drive the scout_code_generator channel like a host runtime", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deliver a single method call and print the reply
    Call {
        /// Method name (e.g. getPlatformVersion)
        method: String,
        /// Channel to deliver the call on
        #[arg(short, long, default_value = CHANNEL)]
        channel: String,
        /// JSON argument payload
        #[arg(short, long)]
        args: Option<String>,
    },
    /// List the registered channels
    Channels,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // The host owns the registry; plugins only register into it.
    let mut registry = ChannelRegistry::new();
    CodeGeneratorPlugin::register(&mut registry)?;

    match cli.command {
        Commands::Call {
            method,
            channel,
            args,
        } => {
            let call = match args {
                Some(raw) => MethodCall::with_args(method, serde_json::from_str(&raw)?),
                None => MethodCall::new(method),
            };

            match registry.dispatch(&channel, call).await? {
                MethodReply::Success(value) => match value.as_str() {
                    Some(text) => println!("{}", text),
                    None => println!("{}", value),
                },
                MethodReply::NotImplemented => println!("not implemented"),
            }
        }
        Commands::Channels => {
            for name in registry.channels() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
