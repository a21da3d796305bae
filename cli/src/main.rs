mod emit;
mod load;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use unidna_ucd::{BidiClass, CompiledSet, CompiledTable, JoiningType, Mapping};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the UCD data files
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Directory the generated modules are written to
    #[arg(short, long, value_name = "DIR", default_value = "src/tables")]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the Bidi_Class table from DerivedBidiClass.txt
    Bidi,
    /// Generate the joining type table and virama set from
    /// DerivedJoiningType.txt and UnicodeData.txt
    Joining,
    /// Generate the IDNA mapping table from IdnaMappingTable.txt
    Mapping,
    /// Generate all of the above
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create {}", cli.out_dir.display()))?;

    match cli.command {
        Command::Bidi => gen_bidi(&cli)?,
        Command::Joining => gen_joining(&cli)?,
        Command::Mapping => gen_mapping(&cli)?,
        Command::All => {
            gen_bidi(&cli)?;
            gen_joining(&cli)?;
            gen_mapping(&cli)?;
        }
    }

    Ok(())
}

fn gen_bidi(cli: &Cli) -> Result<()> {
    let records = load::range_records::<BidiClass>(&cli.data_dir.join("DerivedBidiClass.txt"))?;
    let table = CompiledTable::compile(records);
    write_module(cli, "bidi.rs", emit::bidi_module(&table), table.len())
}

fn gen_joining(cli: &Cli) -> Result<()> {
    // U is the query time default, keeping those records out keeps the
    // table sparse.
    let records: Vec<_> =
        load::range_records::<JoiningType>(&cli.data_dir.join("DerivedJoiningType.txt"))?
            .into_iter()
            .filter(|rec| rec.value != JoiningType::U)
            .collect();
    let table = CompiledTable::compile(records);
    let viramas =
        CompiledSet::compile(load::virama_points(&cli.data_dir.join("UnicodeData.txt"))?);

    let entries = table.len() + viramas.len();
    write_module(
        cli,
        "joining.rs",
        emit::joining_module(&table, &viramas),
        entries,
    )
}

fn gen_mapping(cli: &Cli) -> Result<()> {
    let records = load::range_records::<Mapping>(&cli.data_dir.join("IdnaMappingTable.txt"))?;
    let table = CompiledTable::compile(records);
    write_module(cli, "mapping.rs", emit::mapping_module(&table), table.len())
}

fn write_module(cli: &Cli, name: &str, module: String, entries: usize) -> Result<()> {
    let out = cli.out_dir.join(name);
    fs::write(&out, module).with_context(|| format!("failed to write {}", out.display()))?;
    println!("generated {} with {} entries", out.display(), entries);
    Ok(())
}
