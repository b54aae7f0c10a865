//! Entry point for the **tilerc** tool.
//!
//! Builds the descriptor from the user's settings and then, depending on
//! the flags given:
//!
//! * `--check` (default): validate the descriptor and print every finding.
//!   Exits with status 1 if any finding is an error.
//! * `--dump`: print the descriptor as JSON on stdout.
//! * `--load`: install the descriptor into the recording host and print a
//!   summary.
//! * `--press <chord>`: install, then fire the binding for `<chord>`
//!   (e.g. `mod4+Return`), launching spawned programs for real.
//!
//! `--config <path>` overrides the settings file location.  Results go to
//! stdout; set `RUST_LOG=info` to also see what the host was told.

use log::{error, info};
use std::path::PathBuf;
use tilerc::config::Config;
use tilerc::descriptor::Descriptor;
use tilerc::host::RecordingHost;
use tilerc::keys::Chord;
use tilerc::loader::Loader;
use tilerc::validate::{has_errors, validate};

/// Resolve the config directory (`$XDG_CONFIG_HOME/tilerc`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("tilerc")
}

/// Value following `flag` on the command line, if present.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

/// Load the settings file, falling back to compiled-in defaults.
fn load_config(args: &[String]) -> Config {
    let path = flag_value(args, "--config")
        .map(PathBuf::from)
        .unwrap_or_else(|| config_dir().join("config.json"));
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

//  Main

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(&args);
    let descriptor = Descriptor::from_config(&config);

    let code = if args.iter().any(|a| a == "--dump") {
        run_dump(&descriptor)
    } else if let Some(chord) = flag_value(&args, "--press") {
        run_press(&descriptor, &config, &chord)
    } else if args.iter().any(|a| a == "--load") {
        run_load(&descriptor, &config)
    } else {
        run_check(&descriptor)
    };
    std::process::exit(code);
}

fn run_dump(descriptor: &Descriptor) -> i32 {
    match serde_json::to_string_pretty(descriptor) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            error!("failed to serialize descriptor: {}", e);
            1
        }
    }
}

fn run_check(descriptor: &Descriptor) -> i32 {
    let issues = validate(descriptor);
    for issue in &issues {
        println!("{}: {}", issue.severity(), issue);
    }
    println!("{} finding(s)", issues.len());
    if has_errors(&issues) {
        1
    } else {
        0
    }
}

fn run_load(descriptor: &Descriptor, config: &Config) -> i32 {
    let mut loader = Loader::new(RecordingHost::new(config.duplicate_policy));
    match loader.load(descriptor) {
        Ok(report) => {
            println!("{}", report);
            0
        }
        Err(e) => {
            error!("load failed: {}", e);
            1
        }
    }
}

fn run_press(descriptor: &Descriptor, config: &Config, chord: &str) -> i32 {
    let chord: Chord = match chord.parse() {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };
    let mut loader = Loader::new(RecordingHost::new(config.duplicate_policy).with_live_spawn());
    if let Err(e) = loader.load(descriptor) {
        error!("load failed: {}", e);
        return 1;
    }
    let host = loader.host_mut();
    match host.press(&chord) {
        Ok(()) => {
            for entry in host.log() {
                println!("{}", entry);
            }
            for cmd in host.spawned() {
                println!("spawned {}", cmd);
            }
            0
        }
        Err(e) => {
            error!("{}: {}", chord, e);
            1
        }
    }
}
