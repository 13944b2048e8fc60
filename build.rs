use std::env;
use std::fs;
use std::path::Path;

mod env_file;

use env_file::{parse_line, EnvLine, CONFIG_KEYS};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=env_file.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_path = Path::new(".env");
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_path) {
        Ok(contents) => contents,
        Err(_) => {
            println!("cargo:warning=No .env file found, using built-in defaults. Copy .env.example to .env to override them.");
            return;
        }
    };

    for (number, line) in contents.lines().enumerate() {
        match parse_line(line) {
            EnvLine::Skip => {}
            // The process environment wins over .env
            EnvLine::Entry { key, .. } if env::var_os(key).is_some() => {}
            EnvLine::Entry { key, value } => println!("cargo:rustc-env={}={}", key, value),
            EnvLine::Unknown(key) => {
                println!("cargo:warning=.env:{}: {} is not read by the dashboard", number + 1, key)
            }
            EnvLine::Malformed => {
                println!("cargo:warning=.env:{}: expected KEY=VALUE", number + 1)
            }
        }
    }
}
