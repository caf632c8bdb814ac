use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use photo_points::{output, process_files, FailurePolicy};

fn main() {
    let matches = Command::new("Photo Points")
        .version("0.1")
        .about("Extracts GPS positions from photo metadata into a GeoJSON FeatureCollection")
        .arg(
            Arg::new("files")
                .num_args(1..)
                .required(true)
                .help("Input photo files"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("Indent the GeoJSON output"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Stop on the first file without a usable position"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log every extracted position"),
        )
        .get_matches();

    // Diagnostics go to stderr; stdout carries the GeoJSON document.
    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter_level(if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    });
    logger.init();

    // Get input files
    let files: Vec<PathBuf> = matches
        .get_many::<String>("files")
        .unwrap()
        .map(PathBuf::from)
        .collect();

    // A file that yields no position is skipped (and reported) by default;
    // --strict turns it into a fatal error instead.
    let policy = if matches.get_flag("strict") {
        FailurePolicy::Abort
    } else {
        FailurePolicy::Skip
    };

    let points = match process_files(&files, policy) {
        Ok(points) => points,
        Err(e) => {
            eprintln!("Error processing files: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = output::write_collection(&points, matches.get_flag("pretty"), stdout.lock()) {
        eprintln!("Error writing GeoJSON: {}", e);
        std::process::exit(1);
    }
}
