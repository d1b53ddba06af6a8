//! Build script for s6d05a-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates panel.toml, then embeds it as postcard bytes

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use s6d05a_core::config::PanelConfig;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    embed_config(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse panel.toml, validate it and write the serialized form to OUT_DIR
fn embed_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a panel.toml configuration file.          ║\n\
            ║  Please create one in the s6d05a-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read panel.toml", &e.to_string()),
    };

    let config: PanelConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("Invalid panel.toml", &e.to_string()),
    };

    if let Err(e) = config.validate() {
        fail("Invalid panel configuration", &format!("{}", e));
    }

    let bytes = match postcard::to_allocvec(&config) {
        Ok(bytes) => bytes,
        Err(e) => fail("Failed to serialize panel configuration", &e.to_string()),
    };

    let mut f = File::create(out_dir.join("panel.bin")).unwrap();
    f.write_all(&bytes).unwrap();
}

fn fail(what: &str, detail: &str) -> ! {
    let lines = detail
        .lines()
        .map(|l| format!("║  {:<64}║", l))
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        what, lines
    );
}
