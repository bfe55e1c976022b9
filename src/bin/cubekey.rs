use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cubekey::{
    extract_columns, generate_column_families, parser, regenerate_cube, ColumnSource, CubeMode,
    RegenerateOptions,
};

#[derive(Parser)]
#[command(name = "cubekey")]
#[command(about = "Derive cube row-key layouts and aggregation groups from dimension definitions")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the row key of a cube and print the updated cube as JSON
    Regen {
        /// Cube descriptor (YAML or JSON)
        #[arg(long)]
        cube: PathBuf,

        /// Data model with the lookup joins (YAML or JSON)
        #[arg(long)]
        model: PathBuf,

        /// Designer flow: addNewCube, editExistCube or default
        #[arg(long, default_value = "editExistCube")]
        mode: CubeMode,

        /// Options file (YAML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Plain columns per synthesized aggregation group
        #[arg(long)]
        max_group_size: Option<usize>,

        /// Prune aggregation groups in the default flow
        #[arg(long)]
        prune_default: bool,

        /// Also regenerate the measure column families
        #[arg(long)]
        families: bool,
    },
    /// List the row-key columns a cube's dimensions contribute
    Columns {
        #[arg(long)]
        cube: PathBuf,

        #[arg(long)]
        model: PathBuf,
    },
    /// Print the measure column-family layout of a cube as JSON
    Families {
        #[arg(long)]
        cube: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cubekey=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Regen {
            cube,
            model,
            mode,
            config,
            max_group_size,
            prune_default,
            families,
        } => {
            let options = RegenerateOptions::resolve(config.as_deref(), max_group_size, prune_default)
                .context("loading regenerate options")?;

            let mut draft = parser::parse_cube_file(&cube)?;
            let model = parser::parse_model_file(&model)?;

            draft.rowkey = regenerate_cube(&draft, &model, mode, &options)?;
            if families {
                draft.hbase_mapping.column_family = generate_column_families(&draft.measures);
            }
            info!(
                cube = %draft.name,
                %mode,
                columns = draft.rowkey.rowkey_columns.len(),
                groups = draft.rowkey.aggregation_groups.len(),
                "row key regenerated"
            );

            println!("{}", parser::to_json(&draft)?);
        }
        Commands::Columns { cube, model } => {
            let draft = parser::parse_cube_file(&cube)?;
            let model = parser::parse_model_file(&model)?;
            let extracted = extract_columns(&draft.dimensions, &model.lookups)?;

            for column in extracted.columns() {
                let source = match extracted.source_of(column) {
                    Some(ColumnSource::ForeignKey { table }) => format!("foreign key of {}", table),
                    Some(ColumnSource::Direct) => "column".to_string(),
                    Some(ColumnSource::Hierarchy) => "hierarchy".to_string(),
                    None => continue,
                };
                let marker = if extracted.is_hierarchy(column) { " [H]" } else { "" };
                println!("{}\t{}{}", column, source, marker);
            }
        }
        Commands::Families { cube } => {
            let draft = parser::parse_cube_file(&cube)?;
            let families = generate_column_families(&draft.measures);
            println!("{}", serde_json::to_string_pretty(&families)?);
        }
    }

    Ok(())
}
