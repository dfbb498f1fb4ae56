mod args;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use rand::random;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;
use dnscodec::hex::{from_hex, to_hex};
use dnscodec::{name, Message, Record, Wire};
use crate::args::{Args, Command};
use crate::config::{load_config, Config};

fn main() {
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config.apply_args(&args),
        Err(err) => {
            eprintln!("Failed to load config: {:#}", err);

            std::process::exit(1);
        }
    };

    let level = match config.log_level() {
        Ok(level) => level,
        Err(err) => {
            eprintln!("{:#}", err);

            std::process::exit(1);
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to initialize logger");

    match run(args.command, &config) {
        Ok(output) => print!("{}", output),
        Err(err) => {
            error!("{:#}", err);

            std::process::exit(1);
        }
    }
}

/// Executes one subcommand and returns the text to print.
fn run(command: Command, config: &Config) -> Result<String> {
    match command {
        Command::Query { name, qtype, qclass, id, no_recursion } => {
            let mut message = Message::query(
                id.unwrap_or_else(random),
                &name,
                config.qtype(qtype.as_deref())?,
                config.qclass(qclass.as_deref())?,
            )?;

            if no_recursion || !config.recursion_desired() {
                message.flags_mut().set_rd(0)?;
            }

            render_message(&message, config)
        }
        Command::Answer { name, data, ttl, qtype, qclass, id } => {
            let qtype = config.qtype(qtype.as_deref())?;
            let qclass = config.qclass(qclass.as_deref())?;
            let data = from_hex(&data).context("invalid --data")?;

            let mut message = Message::query(id.unwrap_or_else(random), &name, qtype, qclass)?;
            message.flags_mut().set_qr(1)?;
            message.flags_mut().set_ra(1)?;
            message.add_answer(&Record::new(&name, qtype, qclass, ttl, &data)?)?;

            render_message(&message, config)
        }
        Command::Decode { hex } => {
            let data = from_hex(&hex).context("invalid message hex")?;

            let mut message = Message::new();
            let n = message
                .deserialize(&data)
                .context("failed to decode message")?;
            info!("decoded {} of {} bytes", n, data.len());

            Ok(format!("{}\n", message))
        }
        Command::Name { name: domain } => {
            let labels = name::encode(&domain)?;

            Ok(format!("{}\n{}\n", to_hex(&labels), name::debug_string(&labels)))
        }
    }
}

fn render_message(message: &Message, config: &Config) -> Result<String> {
    let mut buf = vec![0u8; config.max_message_size()];
    let n = message
        .serialize(&mut buf)
        .context("failed to serialize message")?;
    info!("encoded {} bytes", n);

    Ok(format!("{}\n{}\n", to_hex(&buf[..n]), message))
}
