use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use e131rx_core::{DatagramSource, Receiver, UdpDatagramSource, E131_DEFAULT_PORT};

#[derive(Parser, Debug)]
#[command(name = "e131rx")]
#[command(version)]
#[command(
    about = "E1.31 (sACN) receiver: decode DMX universes from the network.",
    long_about = None,
    after_help = "Examples:\n  e131rx listen --universe 1\n  e131rx listen --universe 7 --json --count 10\n  e131rx listen --unicast --port 5568"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Receive E1.31 data packets and print universe activity.
    Listen {
        /// Universe whose multicast group to join (1..=63999)
        #[arg(short, long, default_value_t = 1)]
        universe: u16,

        /// UDP port to bind
        #[arg(short, long, default_value_t = E131_DEFAULT_PORT)]
        port: u16,

        /// Bind a plain unicast socket instead of joining a multicast group
        #[arg(long)]
        unicast: bool,

        /// Print one JSON line per accepted packet
        #[arg(long)]
        json: bool,

        /// Stop after this many accepted packets
        #[arg(short = 'n', long)]
        count: Option<u64>,

        /// Suppress per-packet error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Listen {
            universe,
            port,
            unicast,
            json,
            count,
            quiet,
        } => run_listen(universe, port, unicast, json, count, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_listen(
    universe: u16,
    port: u16,
    unicast: bool,
    json: bool,
    count: Option<u64>,
    quiet: bool,
) -> Result<()> {
    let mut source = if unicast {
        UdpDatagramSource::unicast(port)
            .with_context(|| format!("bind unicast socket on port {port}"))?
    } else {
        UdpDatagramSource::multicast(universe, port)
            .with_context(|| format!("join multicast group for universe {universe}"))?
    };

    let mut receiver = Receiver::new();
    let mut buf = [0u8; e131rx_core::packet::layout::MAX_LEN];

    loop {
        let datagram = source.try_receive(&mut buf).context("receive datagram")?;
        let Some(len) = datagram else {
            std::thread::sleep(Duration::from_millis(1));
            continue;
        };

        match receiver.parse_packet(&buf[..len]) {
            Ok(0) => {}
            Ok(_) => {
                print_packet(&receiver, json)?;
                if let Some(limit) = count {
                    if receiver.stats().num_packets >= limit {
                        break;
                    }
                }
            }
            Err(err) => {
                if !quiet {
                    eprintln!("dropped datagram: {err}");
                }
            }
        }
    }

    let stats =
        serde_json::to_string(&receiver.stats()).context("encode statistics as JSON")?;
    println!("{stats}");
    Ok(())
}

fn print_packet(receiver: &Receiver, json: bool) -> Result<()> {
    if json {
        let line = serde_json::json!({
            "universe": receiver.universe(),
            "priority": receiver.priority(),
            "sequence": receiver.sequence_number(),
            "source_name": receiver.source_name(),
            "channels": receiver.channel_count(),
            "data": receiver.data(),
        });
        println!("{line}");
    } else {
        println!(
            "universe {} seq {:3} priority {:3} channels {:3} [{}]",
            receiver.universe(),
            receiver.sequence_number(),
            receiver.priority(),
            receiver.channel_count(),
            receiver.source_name(),
        );
    }
    Ok(())
}
