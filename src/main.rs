use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{debug, info, SetLoggerError};
use pointgen::{ConfigOverrides, Preset, Uniqueness};
use rand::{rngs::StdRng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dataset size to start from
    #[arg(long, short, value_enum, default_value_t = Preset::Full)]
    preset: Preset,

    /// JSON file with options laid over the preset
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long, short)]
    seed: Option<u64>,

    #[arg(long)]
    known_count: Option<usize>,

    #[arg(long)]
    unknown_count: Option<usize>,

    /// Rule for rejecting colliding points
    #[arg(long, value_enum)]
    uniqueness: Option<Uniqueness>,

    /// Directory the two JSON files are written to
    #[arg(long, short)]
    output_dir: Option<PathBuf>,

    /// Log debug output
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            known_count: self.known_count,
            unknown_count: self.unknown_count,
            uniqueness: self.uniqueness,
            seed: self.seed,
            output_dir: self.output_dir.clone(),
            ..ConfigOverrides::default()
        }
    }
}

fn init_logger(verbose: bool) -> Result<(), SetLoggerError> {
    use simplelog::*;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    debug!("Logger successfully initialized");

    Ok(())
}

/// Lays the config file (if any) and then the command line flags over the
/// chosen preset.
fn resolve_config(args: &Args) -> pointgen::Result<pointgen::Config> {
    let mut config = args.preset.config();

    if let Some(path) = &args.config {
        config.apply(ConfigOverrides::from_file(path)?);
        info!("Loaded config file: {}", path.display());
    }

    config.apply(args.overrides());

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logger(args.verbose).context("Could not initialize logger")?;

    let config = resolve_config(&args)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let summary = pointgen::run(&config, &mut rng).context("Point generation failed")?;

    println!(
        "Known = {} points in {}",
        summary.known_count,
        summary.known_path.display()
    );
    println!(
        "Unknown = {} points in {}",
        summary.unknown_count,
        summary.unknown_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use super::*;

    fn write_config(dir: &Path) -> PathBuf {
        let path = dir.join("config.json");
        fs::write(
            &path,
            r#"{
                "known_count": 50,
                "unknown_count": 4,
                "uniqueness": "unordered",
                "seed": 1,
                "output_dir": "from-file",
                "json_indent": 2
            }"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn flags_beat_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path());

        let args = Args::parse_from([
            "pointgen",
            "--preset",
            "small",
            "--config",
            path.to_str().unwrap(),
            "--known-count",
            "7",
            "--uniqueness",
            "shared-axis",
            "--seed",
            "99",
            "--output-dir",
            "from-flags",
        ]);
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.known_count, 7);
        assert_eq!(config.uniqueness, Uniqueness::SharedAxis);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.output_dir, PathBuf::from("from-flags"));
        // Not given on the command line, so the file wins.
        assert_eq!(config.unknown_count, 4);
        assert_eq!(config.json_indent, 2);
    }

    #[test]
    fn unset_flags_keep_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path());

        let args = Args::parse_from(["pointgen", "-c", path.to_str().unwrap()]);
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.known_count, 50);
        assert_eq!(config.unknown_count, 4);
        assert_eq!(config.uniqueness, Uniqueness::Unordered);
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.output_dir, PathBuf::from("from-file"));
        assert_eq!(config.value_precision, 8);
    }

    #[test]
    fn flags_over_preset_without_file() {
        let args = Args::parse_from(["pointgen", "-p", "small", "--unknown-count", "3"]);
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.known_count, 300);
        assert_eq!(config.unknown_count, 3);
        assert_eq!(config.uniqueness, Uniqueness::Exact);
        assert_eq!(config.seed, None);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args::parse_from(["pointgen", "--config", "/nonexistent/pointgen.json"]);

        assert!(matches!(
            resolve_config(&args),
            Err(pointgen::Error::Io { .. })
        ));
    }
}
