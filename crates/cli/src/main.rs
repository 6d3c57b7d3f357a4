use std::{
  fs,
  path::{Path, PathBuf},
  process::ExitCode,
};

use clap::{Parser, Subcommand};
use fwcrc::{
  CATALOGUE, Crc,
  legacy::LegacyAlgorithm,
  params,
  validate::{self, FirmwareLayout},
};
use log::{LevelFilter, error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "CRC checksums and firmware image integrity checks", long_about = None)]
struct Cli {
  /// Increase log verbosity (-v debug, -vv trace).
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Validate the embedded CRC-16 in the first two bytes of a file.
  Check {
    file: PathBuf,
    /// Number of bytes to read, checksum prefix included. Defaults to the whole file.
    #[arg(short, long)]
    size: Option<usize>,
  },
  /// Write a copy of a file prefixed with its CRC-16.
  Embed { input: PathBuf, output: PathBuf },
  /// Compute the CRC-32 of a firmware image payload.
  Firmware {
    file: PathBuf,
    /// Header bytes skipped before the payload.
    #[arg(long, default_value_t = FirmwareLayout::V1.header_len)]
    header_len: usize,
    /// Offset of the version byte within the header.
    #[arg(long, default_value_t = FirmwareLayout::V1.version_offset)]
    version_offset: usize,
    /// Required version byte.
    #[arg(long, default_value_t = FirmwareLayout::V1.version, value_parser = parse_u8)]
    header_version: u8,
  },
  /// Compute a CRC over a whole file.
  Sum {
    file: PathBuf,
    /// Fixed configuration: crc16-raw, crc16-final, crc16-forward, or crc32.
    #[arg(short, long, conflicts_with = "preset", default_value = "crc32")]
    algorithm: LegacyAlgorithm,
    /// Catalogue algorithm name, e.g. CRC-16/MODBUS.
    #[arg(short, long)]
    preset: Option<String>,
  },
  /// List catalogue algorithms with their check values.
  List,
  /// Run the known-answer self test.
  Selftest,
}

fn parse_u8(s: &str) -> Result<u8, std::num::ParseIntError> {
  match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
    Some(hex) => u8::from_str_radix(hex, 16),
    None => s.parse(),
  }
}

fn read(path: &Path) -> Result<Vec<u8>, ExitCode> {
  fs::read(path).map_err(|err| {
    error!("could not read {}: {err}", path.display());
    ExitCode::FAILURE
  })
}

fn run(command: Command) -> Result<(), ExitCode> {
  match command {
    Command::Check { file, size } => {
      let size = size.unwrap_or(usize::MAX);
      match validate::validate_file_crc16(&file, size) {
        Ok(true) => println!("{}: OK", file.display()),
        Ok(false) => {
          println!("{}: FAILED", file.display());
          return Err(ExitCode::FAILURE);
        }
        Err(err) => {
          error!("{err}");
          return Err(ExitCode::FAILURE);
        }
      }
    }
    Command::Embed { input, output } => {
      let payload = read(&input)?;
      validate::write_with_crc16(&output, &payload).map_err(|err| {
        error!("could not write {}: {err}", output.display());
        ExitCode::FAILURE
      })?;
      info!("wrote {} ({} bytes)", output.display(), payload.len() + validate::EMBEDDED_CRC_LEN);
    }
    Command::Firmware {
      file,
      header_len,
      version_offset,
      header_version,
    } => {
      let layout = FirmwareLayout {
        header_len,
        version_offset,
        version: header_version,
        ..FirmwareLayout::V1
      };
      let crc = validate::compute_firmware_crc32_with(&file, &layout).map_err(|err| {
        error!("{err}");
        ExitCode::FAILURE
      })?;
      println!("{crc:08x}  {}", file.display());
    }
    Command::Sum {
      file,
      algorithm,
      preset,
    } => {
      let data = read(&file)?;
      let (crc, width) = match preset {
        Some(name) => {
          let Some(algo) = params::find(&name) else {
            error!("unknown algorithm {name:?}; see `list`");
            return Err(ExitCode::FAILURE);
          };
          let engine = Crc::new(algo.params).map_err(|err| {
            error!("{}: {err}", algo.name);
            ExitCode::FAILURE
          })?;
          (engine.checksum(&data), algo.params.width)
        }
        None => (algorithm.compute(&data), algorithm.params().width),
      };
      let digits = usize::from(width).div_ceil(4);
      println!("{crc:0digits$x}  {}", file.display());
    }
    Command::List => {
      for algo in CATALOGUE {
        let p = &algo.params;
        println!(
          "{:<20} width={:<2} poly={:#010x} init={:#010x} refin={:<5} refout={:<5} xorout={:#010x} check={:#010x}",
          algo.name, p.width, p.polynomial, p.initial, p.reflect_in, p.reflect_out, p.xor_out, algo.check
        );
      }
    }
    Command::Selftest => {
      fwcrc::self_test().map_err(|failure| {
        error!("{failure}");
        ExitCode::FAILURE
      })?;
      println!("self test passed");
    }
  }
  Ok(())
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let level = match cli.verbose {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  pretty_env_logger::formatted_builder().filter_level(level).init();

  match run(cli.command) {
    Ok(()) => ExitCode::SUCCESS,
    Err(code) => code,
  }
}
