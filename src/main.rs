use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use identicon_renderer::{IdenticonConfig, IdenticonError, Result, generate};

/// identicon - Render a hex hash as an SVG identicon
#[derive(Parser, Debug)]
#[command(name = "identicon")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Width and height of the icon in pixels
    #[arg(short, long, default_value_t = 256)]
    size: u32,

    /// JSON file with color settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hex hash to render (at least 11 digits)
    hash: String,

    /// Path of the SVG file to write
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => IdenticonConfig::default(),
    };

    let document = generate(&cli.hash, cli.size, &config)?;
    document.save(&cli.output)?;

    log::info!("Wrote {}x{} identicon to {}", cli.size, cli.size, cli.output.display());
    Ok(())
}

fn load_config(path: &Path) -> Result<IdenticonConfig> {
    let json = fs::read_to_string(path).map_err(|source| IdenticonError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = IdenticonConfig::from_json(&json)?;
    log::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("identicon-cli-{}-{}", std::process::id(), name))
    }

    fn cli(hash: &str, output: PathBuf) -> Cli {
        Cli {
            size: 32,
            config: None,
            hash: hash.to_string(),
            output,
        }
    }

    #[test]
    fn invalid_hash_writes_nothing() {
        let output = temp_path("invalid.svg");
        let _ = fs::remove_file(&output);

        let err = run(&cli("not-a-hash", output.clone())).unwrap_err();
        assert!(matches!(err, IdenticonError::InvalidHashFormat(_)));
        assert!(!output.exists());

        let err = run(&cli("0123456789", output.clone())).unwrap_err();
        assert!(err.to_string().contains("too short"));
        assert!(!output.exists());
    }

    #[test]
    fn valid_hash_writes_svg() {
        let output = temp_path("valid.svg");
        run(&cli("a9993e364706816aba3e25717850c26c9cd0d89d", output.clone())).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let _ = fs::remove_file(&output);
        assert!(written.starts_with("<svg"));
        assert!(written.contains("width=\"32\""));
    }

    #[test]
    fn bad_config_is_reported() {
        let config = temp_path("config.json");
        fs::write(&config, "{ \"saturation\": \"high\" }").unwrap();
        let output = temp_path("config.svg");

        let mut args = cli("a9993e364706816aba3e25717850c26c9cd0d89d", output.clone());
        args.config = Some(config.clone());
        let err = run(&args).unwrap_err();
        let _ = fs::remove_file(&config);

        assert!(matches!(err, IdenticonError::Config(_)));
        assert!(!output.exists());
    }
}
