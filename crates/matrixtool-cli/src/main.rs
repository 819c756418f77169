use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use matrixtool::{Delimiter, KernelConfig};
use matrixtool_cli::commands::{
    load_config, run_det, run_echelon, run_fit, run_inverse, run_random, run_rank, run_transpose,
};

fn matrix_file_arg() -> Arg {
    Arg::new("matrix")
        .help("Path to a headerless CSV or TSV matrix file")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATRIXTOOL_LOG", "error,matrixtool=info"))
        .init();

    let matches = Command::new("matrixtool")
        .version(clap::crate_version!())
        .about("Dense matrix algebra from the command line")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .global(true)
                .help("Path to a JSON kernel configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .global(true)
                .help("Decimal places to print. Overrides the configuration file.")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .global(true)
                .help("Field separator of matrix files. Overrides the configuration file.")
                .value_parser(["auto", "csv", "comma", "tsv", "tab"])
                .value_hint(ValueHint::Other),
        )
        .subcommand(
            Command::new("det")
                .about("Print the determinant of a square matrix")
                .arg(matrix_file_arg()),
        )
        .subcommand(
            Command::new("inverse")
                .about("Print the inverse of a square matrix")
                .arg(matrix_file_arg()),
        )
        .subcommand(
            Command::new("rank")
                .about("Print the rank of a matrix")
                .arg(matrix_file_arg()),
        )
        .subcommand(
            Command::new("echelon")
                .about("Print the row echelon form of a matrix")
                .arg(matrix_file_arg()),
        )
        .subcommand(
            Command::new("transpose")
                .about("Print the transpose of a matrix")
                .arg(matrix_file_arg()),
        )
        .subcommand(
            Command::new("fit")
                .about("Fit a polynomial through the points of a two-column x,y file")
                .arg(
                    Arg::new("points")
                        .help("Path to a two-column CSV or TSV file of sample points")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("random")
                .about("Print a matrix of uniform random entries")
                .arg(
                    Arg::new("rows")
                        .help("Number of rows")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("cols")
                        .help("Number of columns")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("min")
                        .long("min")
                        .help("Lower bound of the entries (default 0)")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("max")
                        .long("max")
                        .help("Upper bound of the entries (default 1)")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for the random generator. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .get_matches();

    let config = resolve_config(&matches)?;

    let output = match matches.subcommand() {
        Some(("det", sub_m)) => run_det(matrix_path(sub_m, "matrix"), &config),
        Some(("inverse", sub_m)) => run_inverse(matrix_path(sub_m, "matrix"), &config),
        Some(("rank", sub_m)) => run_rank(matrix_path(sub_m, "matrix"), &config),
        Some(("echelon", sub_m)) => run_echelon(matrix_path(sub_m, "matrix"), &config),
        Some(("transpose", sub_m)) => run_transpose(matrix_path(sub_m, "matrix"), &config),
        Some(("fit", sub_m)) => run_fit(matrix_path(sub_m, "points"), &config),
        Some(("random", sub_m)) => handle_random(sub_m, config),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    match output {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1)
        }
    }
}

fn resolve_config(matches: &ArgMatches) -> Result<KernelConfig> {
    let config_path = matches.get_one::<PathBuf>("config");
    if let Some(path) = config_path {
        log::info!("[matrixtool] Using config: {:?}", path);
    }
    let mut config = load_config(config_path.map(PathBuf::as_path))?;
    if let Some(&precision) = matches.get_one::<usize>("precision") {
        config.precision = Some(precision);
    }
    if let Some(delimiter) = matches.get_one::<String>("delimiter") {
        config.delimiter = Delimiter::from_str(delimiter).map_err(anyhow::Error::msg)?;
    }
    Ok(config)
}

fn matrix_path<'a>(matches: &'a ArgMatches, name: &str) -> &'a Path {
    let path: &PathBuf = matches.get_one(name).unwrap();
    log::info!("[matrixtool] Reading matrix: {:?}", path);
    path
}

fn handle_random(matches: &ArgMatches, mut config: KernelConfig) -> Result<String> {
    let rows = *matches.get_one::<usize>("rows").unwrap();
    let cols = *matches.get_one::<usize>("cols").unwrap();
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    log::info!("[matrixtool] Random {}x{} matrix, seed {:?}", rows, cols, config.seed);
    let range = match (
        matches.get_one::<f64>("min").copied(),
        matches.get_one::<f64>("max").copied(),
    ) {
        (None, None) => None,
        (min, max) => Some((min.unwrap_or(0.0), max.unwrap_or(1.0))),
    };
    run_random(rows, cols, range, &config)
}
