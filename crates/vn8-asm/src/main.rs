use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use vn8_asm::{assemble, Assembly};
use vn8_rs::{AddressWidths, MnemonicTable};

#[derive(Parser, Debug)]
#[command(author, version, about = "Assembler for the 8-bit von Neumann CPU", long_about=None)]
struct Cli {
    /// Address widths as JSON ({ "short_bits": 8, "far_bits": 10 })
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Override the far (label/jump) address width
    #[arg(long)]
    far_bits: Option<u32>,
    /// Override the short (variable) address width
    #[arg(long)]
    short_bits: Option<u32>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble a source file into a raw binary
    Build {
        /// Input assembly file (one instruction per line)
        input: PathBuf,
        /// Output binary file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Assemble and print a listing
    List {
        input: PathBuf,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Export labels to JSON (Vec<{ addr, name }>)
        #[arg(long, value_name = "FILE")]
        labels_out: Option<PathBuf>,
        /// Write listing to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print every known mnemonic
    Mnemonics,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct LabelKV {
    addr: u32,
    name: String,
}

fn load_widths(cli: &Cli) -> Result<AddressWidths> {
    let mut widths = match &cli.config {
        Some(path) => {
            let txt = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<AddressWidths>(&txt)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => AddressWidths::default(),
    };
    if let Some(b) = cli.far_bits {
        widths.far_bits = b;
    }
    if let Some(b) = cli.short_bits {
        widths.short_bits = b;
    }
    anyhow::ensure!(widths.far_bits <= 32, "far address width is limited to 32 bits");
    Ok(widths)
}

fn assemble_file(
    path: &Path,
    table: &MnemonicTable,
    widths: AddressWidths,
) -> Result<Assembly> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let asm = assemble(&text, table, widths).with_context(|| format!("{}", path.display()))?;
    Ok(asm)
}

fn write_listing(buf: &mut String, asm: &Assembly) -> fmt::Result {
    for l in &asm.listing {
        write!(buf, "{:#06x}: ", l.addr)?;
        for b in &l.bytes {
            write!(buf, "{b:02x} ")?;
        }
        // int is one byte, everything else two
        let pad = 3 * (2 - l.bytes.len().min(2));
        writeln!(buf, "{:pad$}  {:>4} | {}", "", l.line, l.text)?;
    }
    if !asm.labels.is_empty() {
        writeln!(buf, "\nLabels:")?;
        for (name, addr) in &asm.labels {
            writeln!(buf, "  {addr:#06x} {name}")?;
        }
    }
    if !asm.variables.is_empty() {
        writeln!(buf, "\nVariables:")?;
        for (name, addr) in &asm.variables {
            writeln!(buf, "  {addr:#04x} {name}")?;
        }
    }
    Ok(())
}

fn render_text(asm: &Assembly) -> Result<String> {
    let mut buf = String::new();
    write_listing(&mut buf, asm)?;
    Ok(buf)
}

fn label_kvs(asm: &Assembly) -> Vec<LabelKV> {
    let mut v: Vec<LabelKV> = asm
        .labels
        .iter()
        .map(|(name, addr)| LabelKV { addr: *addr, name: name.clone() })
        .collect();
    v.sort_by_key(|kv| kv.addr);
    v
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let widths = load_widths(&cli)?;
    let table = MnemonicTable::build();

    match &cli.cmd {
        Command::Build { input, output } => {
            let asm = assemble_file(input, &table, widths)?;
            std::fs::write(output, &asm.bytes)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("{} bytes -> {}", asm.bytes.len(), output.display());
        }
        Command::List { input, format, labels_out, out } => {
            let asm = assemble_file(input, &table, widths)?;
            let rendered = match format {
                OutputFormat::Text => render_text(&asm)?,
                OutputFormat::Json => serde_json::to_string_pretty(&asm)?,
            };
            if let Some(path) = labels_out {
                std::fs::write(path, serde_json::to_string_pretty(&label_kvs(&asm))?)?;
            }
            if let Some(path) = out {
                std::fs::write(path, rendered)?;
            } else {
                print!("{rendered}");
                if matches!(format, OutputFormat::Json) {
                    println!();
                }
            }
        }
        Command::Mnemonics => {
            for m in table.mnemonics() {
                let desc = table.lookup(m).context("table lookup")?;
                println!("{m:<8} {:?}", desc.family());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_listing_aligns_one_byte_int() {
        let table = MnemonicTable::build();
        let src = "start: int 0\njmp start\n";
        let asm = assemble(src, &table, AddressWidths::default()).unwrap();
        let text = render_text(&asm).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "0x0000: 48         1 | start: int 0");
        assert_eq!(lines.next().unwrap(), "0x0001: 40 00      2 | jmp start");
        assert!(text.contains("  0x0000 start"));
    }

    #[test]
    fn label_export_sorted_by_address() {
        let table = MnemonicTable::build();
        let asm = assemble("b: nop\na: nop\n", &table, AddressWidths::default()).unwrap();
        let kvs = label_kvs(&asm);
        assert_eq!(kvs[0].name, "b");
        assert_eq!(kvs[1].addr, 2);
    }
}
