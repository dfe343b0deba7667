//! Configuration script generation — pure functions, no I/O.
//!
//! The script requests a registration token, drops any previous
//! registration of the instance, and registers it again. Re-running it on
//! every convergence pass is safe because of the `--replace` flag.

#![allow(clippy::format_push_string)]

use crate::domain::platform::{PlatformProfile, ScriptDialect};
use crate::domain::resolve::ResolvedInstance;

/// Renders the configuration script for `instance` in the dialect of the
/// selected platform.
///
/// Returns the script body — does NOT write to disk.
#[must_use]
pub fn configuration_script(profile: &PlatformProfile, instance: &ResolvedInstance) -> String {
    match profile.dialect {
        ScriptDialect::Bash => bash_script(profile, instance),
        ScriptDialect::PowerShell => powershell_script(profile, instance),
    }
}

/// Labels joined with `,` and no whitespace, in declaration order.
#[must_use]
pub fn joined_labels(labels: &[String]) -> String {
    labels.join(",")
}

fn registration_url(instance: &ResolvedInstance) -> String {
    format!(
        "{}/{}",
        instance.endpoint.api_url, instance.registration_path
    )
}

/// Characters a POSIX shell word can carry without quoting.
fn is_plain(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_-./:,@%+=".contains(c)
}

/// Bash word for `value`: unchanged when plain, otherwise single-quoted with
/// embedded `'` closed, escaped and reopened.
#[must_use]
pub fn sh_quote(value: &str) -> String {
    if !value.is_empty() && value.chars().all(is_plain) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

/// PowerShell verbatim string: single quotes, embedded `'` doubled. Always
/// quoted so `,` is never read as an array separator.
#[must_use]
pub fn ps_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn bash_script(profile: &PlatformProfile, instance: &ResolvedInstance) -> String {
    let config_tool = sh_quote(&instance.paths.in_instance(profile.config_tool));

    let mut out = String::new();
    out.push_str("#!/bin/bash\n");
    out.push_str(&format!(
        "# Generated by ghrunner for instance {} - DO NOT EDIT\n",
        instance.name
    ));
    out.push_str("set -e\n");
    out.push('\n');

    for (key, value) in instance.proxy.env_pairs() {
        out.push_str(&format!("export {key}={}\n", sh_quote(value)));
    }
    if instance.ownership.user == "root" {
        out.push_str("export RUNNER_ALLOW_RUNASROOT=true\n");
    }
    out.push('\n');

    out.push_str("# Request a registration token.\n");
    out.push_str(&format!(
        "TOKEN=$(curl -s -XPOST -H {} \\\n",
        sh_quote(&format!("authorization: token {}", instance.token))
    ));
    out.push_str(&format!(
        "  {} | jq -r .token)\n",
        sh_quote(&registration_url(instance))
    ));
    out.push('\n');

    out.push_str(&format!("cd {}\n", sh_quote(&instance.paths.instance)));
    out.push('\n');
    out.push_str("# Drop a previous registration, if any.\n");
    out.push_str(&format!(
        "{config_tool} remove --token \"${{TOKEN}}\" || true\n"
    ));
    out.push('\n');
    out.push_str("# Register the runner.\n");
    out.push_str(&format!(
        "{config_tool} --unattended --url {} --token \"${{TOKEN}}\" --name {}",
        sh_quote(&instance.target_url),
        sh_quote(&instance.runner_name)
    ));
    if !instance.labels.is_empty() {
        out.push_str(&format!(
            " --labels {}",
            sh_quote(&joined_labels(&instance.labels))
        ));
    }
    out.push_str(" --replace\n");

    out
}

fn powershell_script(profile: &PlatformProfile, instance: &ResolvedInstance) -> String {
    let config_tool = ps_quote(&instance.paths.in_instance(profile.config_tool));

    let mut out = String::new();
    out.push_str(&format!(
        "# Generated by ghrunner for instance {} - DO NOT EDIT\n",
        instance.name
    ));
    out.push_str("$ErrorActionPreference = \"Stop\"\n");
    out.push('\n');

    for (key, value) in instance.proxy.env_pairs() {
        out.push_str(&format!("$env:{key} = {}\n", ps_quote(value)));
    }
    out.push('\n');

    out.push_str("# Request a registration token.\n");
    out.push_str(&format!(
        "$headers = @{{ Authorization = {} }}\n",
        ps_quote(&format!("token {}", instance.token))
    ));
    out.push_str(&format!(
        "$response = Invoke-RestMethod -Method Post -Headers $headers -Uri {}\n",
        ps_quote(&registration_url(instance))
    ));
    out.push_str("$token = $response.token\n");
    out.push('\n');

    out.push_str(&format!(
        "Set-Location {}\n",
        ps_quote(&instance.paths.instance)
    ));
    out.push('\n');
    out.push_str("# Drop a previous registration, if any.\n");
    out.push_str(&format!(
        "try {{ & {config_tool} remove --token $token }} catch {{ }}\n"
    ));
    out.push('\n');
    out.push_str("# Register the runner as a service.\n");
    out.push_str(&format!(
        "& {config_tool} --unattended --url {} --token $token --name {}",
        ps_quote(&instance.target_url),
        ps_quote(&instance.runner_name)
    ));
    if !instance.labels.is_empty() {
        out.push_str(&format!(
            " --labels {}",
            ps_quote(&joined_labels(&instance.labels))
        ));
    }
    out.push_str(" --replace --runasservice\n");

    out
}

// ── Unit tests ───────────────────────────────────────────────────────────────
