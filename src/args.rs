use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(about = "Encode and decode DNS messages")]
pub(crate) struct Args {
    /// Config file, defaults to ~/.dnscodec/conf.toml
    #[arg(long, short)]
    pub(crate) config: Option<String>,
    /// trace, debug, info, warn or error
    #[arg(long, short)]
    pub(crate) log_level: Option<String>,
    /// Size of the buffer messages are serialized into
    #[arg(long, short)]
    pub(crate) max_message_size: Option<usize>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Build a standard query for NAME
    Query {
        name: String,
        #[arg(long, short = 't')]
        qtype: Option<String>,
        #[arg(long)]
        qclass: Option<String>,
        #[arg(long, value_parser = parse_u16)]
        id: Option<u16>,
        #[arg(long, default_value_t = false)]
        no_recursion: bool,
    },
    /// Build a response for NAME carrying one answer record
    Answer {
        name: String,
        /// Record data as hex, e.g. c0a80101
        #[arg(long, short)]
        data: String,
        #[arg(long, default_value_t = 3600)]
        ttl: u32,
        #[arg(long, short = 't')]
        qtype: Option<String>,
        #[arg(long)]
        qclass: Option<String>,
        #[arg(long, value_parser = parse_u16)]
        id: Option<u16>,
    },
    /// Decode a hex encoded message
    Decode { hex: String },
    /// Show the label encoding of NAME
    Name { name: String },
}

/// Accepts decimal or `0x` prefixed hex.
fn parse_u16(s: &str) -> Result<u16, String> {
    let res = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse::<u16>(),
    };

    res.map_err(|e| format!("invalid id {:?}: {}", s, e))
}
