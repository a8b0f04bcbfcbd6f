//! Build script for deskhub-firmware
//!
//! - Adds the esp-hal and defmt linker scripts
//! - Validates device.toml at compile time

use std::fs;
use std::path::Path;

fn main() {
    setup_linker();
    validate_config();
}

/// Link against the esp-hal memory layout and the defmt sections
fn setup_linker() {
    println!("cargo:rustc-link-arg=-Tlinkall.x");
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate device.toml configuration at compile time
fn validate_config() {
    // Re-run if device.toml changes
    println!("cargo:rerun-if-changed=device.toml");

    let config_path = Path::new("device.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: device.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a device.toml configuration file.         ║\n\
            ║  Please create one in the deskhub-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read device.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in device.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_wifi(&config, &mut errors);
    validate_backend(&config, &mut errors);
    validate_timing(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid device configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=device.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Look up a required table, recording an error if it is missing
fn section<'a>(
    config: &'a toml::Value,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<&'a toml::value::Table> {
    match config.get(name) {
        Some(toml::Value::Table(t)) => Some(t),
        Some(_) => {
            errors.push(format!("[{}] must be a table", name));
            None
        }
        None => {
            errors.push(format!("Missing [{}] section", name));
            None
        }
    }
}

/// Check a string key and its length limit
fn check_string(
    table: &toml::value::Table,
    section: &str,
    key: &str,
    max_len: usize,
    required_non_empty: bool,
    errors: &mut Vec<String>,
) -> Option<String> {
    match table.get(key) {
        Some(toml::Value::String(s)) => {
            if required_non_empty && s.is_empty() {
                errors.push(format!("[{}] '{}' cannot be empty", section, key));
            }
            if s.len() > max_len {
                errors.push(format!(
                    "[{}] '{}' longer than {} bytes",
                    section, key, max_len
                ));
            }
            Some(s.clone())
        }
        Some(_) => {
            errors.push(format!("[{}] '{}' must be a string", section, key));
            None
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            None
        }
    }
}

/// Validate wireless credentials
fn validate_wifi(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(wifi) = section(config, "wifi", errors) else {
        return;
    };

    check_string(wifi, "wifi", "ssid", 32, true, errors);
    check_string(wifi, "wifi", "passphrase", 64, false, errors);
}

/// Validate backend address
fn validate_backend(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(backend) = section(config, "backend", errors) else {
        return;
    };

    check_string(backend, "backend", "host", 64, true, errors);

    match backend.get("port") {
        Some(toml::Value::Integer(port)) => {
            if *port < 1 || *port > 65535 {
                errors.push("[backend] port must be 1-65535".to_string());
            }
        }
        Some(_) => errors.push("[backend] 'port' must be an integer".to_string()),
        None => errors.push("[backend] missing 'port'".to_string()),
    }

    if let Some(path) = check_string(backend, "backend", "path", 64, true, errors) {
        if !path.starts_with('/') {
            errors.push("[backend] path must start with '/'".to_string());
        }
    }
}

/// Validate the optional poll cadence
fn validate_timing(config: &toml::Value, errors: &mut Vec<String>) {
    let timing = match config.get("timing") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[timing] must be a table".to_string());
            return;
        }
        None => return,
    };

    for key in ["poll_interval_s", "association_poll_ms"] {
        match timing.get(key) {
            Some(toml::Value::Integer(value)) => {
                if *value < 1 || *value > i64::from(u32::MAX) {
                    errors.push(format!("[timing] {} must be a positive integer", key));
                }
            }
            Some(_) => errors.push(format!("[timing] '{}' must be an integer", key)),
            None => {}
        }
    }
}
