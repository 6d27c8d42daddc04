use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hoa_store::{
    default_rules, Configuration, Hoa, HoaCsvPersistence, HoaData, HoaRepository,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hoa-store", version, about = "Append HOA records to a deduplicated CSV store")]
struct Cli {
    /// Directory holding hoa.csv (overrides DATA_STORE_PATH)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Print the saved records as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Save every record of a CSV file (columns: name,mailing_address,agent_name,status,formed_in)
    Import {
        #[arg(value_name = "PATH")]
        input: PathBuf,
    },
    /// Save a single record
    Add(AddArgs),
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    address: String,

    #[arg(long)]
    agent: Option<String>,

    #[arg(long)]
    status: String,

    #[arg(long)]
    formed_in: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store_file = match &cli.data_dir {
        Some(dir) => dir.join(hoa_store::config::HOA_FILE_NAME),
        None => Configuration::from_env(&default_rules())?.store_file(),
    };

    let records = match cli.command {
        Commands::Import { input } => load_records(&input)?,
        Commands::Add(args) => vec![HoaData {
            name: args.name,
            mailing_address: args.address,
            agent_name: args.agent,
            status: args.status,
            formed_in: args.formed_in,
        }],
    };

    let repository = HoaRepository::new(HoaCsvPersistence::open(&store_file));
    let hoas: Vec<Hoa> = records.into_iter().map(|d| repository.create(d)).collect();

    let saved = repository
        .save(hoas)
        .with_context(|| format!("Failed to save records to {}", store_file.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else {
        println!("✓ Submitted {} records to {}", saved.len(), store_file.display());
    }

    Ok(())
}

fn load_records(path: &Path) -> Result<Vec<HoaData>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut records = Vec::new();
    for (line_num, result) in rdr.deserialize().enumerate() {
        let record: HoaData = result.with_context(|| {
            format!("Failed to parse CSV line {} in {}", line_num + 2, path.display())
        })?;
        records.push(record);
    }

    Ok(records)
}
