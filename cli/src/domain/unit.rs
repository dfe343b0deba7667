//! Service unit generation — pure functions, no I/O, no async.

#![allow(clippy::format_push_string)]

use sha2::{Digest, Sha256};

use crate::domain::resolve::ResolvedInstance;

/// `github-actions-runner.<instance>.service`
#[must_use]
pub fn unit_name(instance_name: &str) -> String {
    format!("github-actions-runner.{instance_name}.service")
}

/// Generate the systemd unit running one runner instance.
///
/// One `Environment="<name>=<value>"` line is emitted per proxy setting
/// that resolved to a value; unset settings produce no line at all.
///
/// Returns the unit file string — does NOT write to disk.
#[must_use]
pub fn systemd_unit(instance: &ResolvedInstance) -> String {
    let name = &instance.name;
    let dir = &instance.paths.instance;

    let mut out = String::new();
    out.push_str(&format!(
        "# Generated by ghrunner for instance {name} - DO NOT EDIT\n"
    ));
    out.push_str("[Unit]\n");
    out.push_str(&format!("Description=github-actions-runner-{name}\n"));
    out.push_str("After=network-online.target\n");
    out.push_str("Wants=network-online.target\n");
    out.push('\n');
    out.push_str("[Service]\n");
    out.push_str(&format!("User={}\n", instance.ownership.user));
    out.push_str(&format!("WorkingDirectory={dir}\n"));
    for (key, value) in instance.proxy.env_pairs() {
        out.push_str(&format!(
            "Environment=\"{key}={}\"\n",
            systemd_escape(value)
        ));
    }
    out.push_str(&format!("ExecStart={dir}/runsvc.sh\n"));
    out.push_str("KillMode=process\n");
    out.push_str("KillSignal=SIGTERM\n");
    out.push_str("TimeoutStopSec=5min\n");
    out.push_str("Restart=always\n");
    out.push('\n');
    out.push_str("[Install]\n");
    out.push_str("WantedBy=multi-user.target\n");

    out
}

/// Escapes a value for a double-quoted systemd assignment: `\` and `"` get a
/// backslash, `%` specifiers are doubled.
fn systemd_escape(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', "\\\"")
        .replace('%', "%%")
}

/// SHA-256 of rendered file content as 64 lowercase hex characters.
#[must_use]
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
