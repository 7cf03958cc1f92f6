use anyhow::{anyhow, bail, Context, Result};
use bravais_kpoints::interfaces::Dimension;
use bravais_kpoints::kpath::{KPoint, KPointRegistry};
use bravais_kpoints::lattice::LatticeBasis;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use nalgebra::DVector;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "kpoints")]
#[command(about = "High-symmetry k-points of extended Bravais lattice types")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the extended Bravais types of a dimension
    List {
        /// Spatial dimension (2 or 3)
        #[arg(short, long, default_value = "3", value_parser = clap::value_parser!(u8).range(2..=3))]
        dimension: u8,
    },
    /// Print the k-points of one extended Bravais type
    Points {
        /// Spatial dimension (2 or 3)
        #[arg(short, long, default_value = "3", value_parser = clap::value_parser!(u8).range(2..=3))]
        dimension: u8,

        /// Extended Bravais type identifier, e.g. cF1 or mC2
        #[arg(short, long)]
        type_id: String,

        /// Direct lattice basis, vectors separated by ';' and components by ','
        #[arg(short, long)]
        basis: Option<String>,

        /// Convert to cartesian coordinates (requires --basis)
        #[arg(long)]
        cartesian: bool,

        /// Print JSON instead of a plain table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct PointsReport<'a> {
    type_id: &'a str,
    dimension: Dimension,
    cartesian: bool,
    points: Vec<KPoint>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting kpoints v{}", bravais_kpoints::VERSION);
    let registry = KPointRegistry::standard().context("failed to build the k-point registry")?;

    match cli.command {
        Commands::List { dimension } => list_types(&registry, to_dimension(dimension)?),
        Commands::Points {
            dimension,
            type_id,
            basis,
            cartesian,
            json,
        } => {
            let dimension = to_dimension(dimension)?;
            let basis = basis
                .map(|text| parse_basis(&text, dimension))
                .transpose()?;
            print_points(&registry, dimension, &type_id, basis.as_ref(), cartesian, json)
        }
    }
}

fn to_dimension(rank: u8) -> Result<Dimension> {
    Dimension::from_rank(rank as usize).ok_or_else(|| anyhow!("unsupported dimension {rank}"))
}

fn parse_basis(text: &str, dimension: Dimension) -> Result<LatticeBasis> {
    let vectors = text
        .split(';')
        .map(|vector| {
            let components = vector
                .split(',')
                .map(|x| x.trim().parse::<f64>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .with_context(|| format!("invalid basis vector `{vector}`"))?;
            Ok(DVector::from_vec(components))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(LatticeBasis::from_base_vectors(
        dimension,
        &vectors,
        bravais_kpoints::interfaces::Space::Real,
    )?)
}

fn list_types(registry: &KPointRegistry, dimension: Dimension) -> Result<()> {
    let dispatch = registry.dispatch(dimension);
    for type_id in dispatch.type_ids() {
        let requirement = if dispatch.is_constant(type_id)? {
            "constant"
        } else {
            "needs basis"
        };
        println!("{type_id:<6} {requirement:<12} {}", dispatch.labels(type_id)?.join(" "));
    }
    Ok(())
}

fn print_points(
    registry: &KPointRegistry,
    dimension: Dimension,
    type_id: &str,
    basis: Option<&LatticeBasis>,
    cartesian: bool,
    json: bool,
) -> Result<()> {
    let table = registry.get_points(dimension, type_id, basis)?;
    let points = if cartesian {
        let Some(basis) = basis else {
            bail!("--cartesian requires --basis");
        };
        table.cartesianize(&basis.reciprocal()?)?
    } else {
        table.iter().cloned().collect()
    };

    if json {
        let report = PointsReport {
            type_id,
            dimension,
            cartesian,
            points,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for point in &points {
            let coordinates: Vec<String> =
                point.position.iter().map(|x| format!("{x:>10.6}")).collect();
            println!("{:<4} {}", point.label, coordinates.join(" "));
        }
    }
    Ok(())
}
