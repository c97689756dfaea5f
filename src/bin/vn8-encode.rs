use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vn8_rs::{AddressWidths, MemoryEnv, MnemonicTable};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Encode a single instruction for the 8-bit von Neumann CPU"
)]
struct Opts {
    /// Address widths as JSON ({ "short_bits": 8, "far_bits": 10 })
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Define a label, NAME=ADDR (repeatable)
    #[arg(short, long = "label", value_name = "NAME=ADDR")]
    labels: Vec<String>,
    #[arg(value_name = "MNEMONIC")]
    mnemonic: String,
    /// Operands, already split (e.g. `djrnz R1 loop`)
    #[arg(value_name = "OPERAND")]
    operands: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let widths = match &opts.config {
        Some(path) => {
            let txt = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<AddressWidths>(&txt)?
        }
        None => AddressWidths::default(),
    };

    let mut env = MemoryEnv::new(widths);
    env.set_line(1);
    for def in &opts.labels {
        let (name, addr) = def
            .split_once('=')
            .with_context(|| format!("expected NAME=ADDR, got `{def}`"))?;
        let addr = vn8_rs::literal::parse_integer(addr.trim())?;
        env.define_label(name.trim(), addr);
    }

    let table = MnemonicTable::build();
    let args: Vec<&str> = opts.operands.iter().map(String::as_str).collect();
    table.encode(&opts.mnemonic, &args, &mut env)?;

    let hex: Vec<String> = env.bytes.iter().map(|b| format!("{b:02x}")).collect();
    println!("{}", hex.join(" "));
    Ok(())
}
