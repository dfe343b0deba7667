//! Property-based tests for path derivation, overlay merging, and script
//! rendering.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;

use ghrunner_cli::domain::lint::is_valid_instance_name;
use ghrunner_cli::domain::paths::InstallPaths;
use ghrunner_cli::domain::proxy::ProxySettings;
use ghrunner_cli::domain::script::joined_labels;
use ghrunner_cli::domain::{compile, resolve_identity};
use runner_common::{GlobalConfig, InstanceConfig, Platform, RunnerManifest};

// ============================================================================
// Path derivation
// ============================================================================

proptest! {
    /// Root is `<base>-<version>`, instance is `<root>/<name>`.
    #[test]
    fn prop_paths_follow_composition_rule(
        base in "/[a-z]{1,12}(/[a-z_-]{1,12}){0,3}",
        version in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
        name in "[a-z][a-z0-9_]{0,15}",
    ) {
        let paths = InstallPaths::new(&base, &version, &name);
        prop_assert_eq!(&paths.root, &format!("{base}-{version}"));
        prop_assert_eq!(&paths.instance, &format!("{}/{name}", paths.root));
    }
}

// ============================================================================
// Proxy overlay
// ============================================================================

fn opt_url() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("http://[a-z]{1,10}\\.local(:[0-9]{2,4})?")
}

proptest! {
    /// Each field takes the instance value, else the global value, else none.
    #[test]
    fn prop_proxy_overlay_is_field_by_field(
        g_http in opt_url(), g_https in opt_url(), g_no in opt_url(),
        i_http in opt_url(), i_https in opt_url(), i_no in opt_url(),
    ) {
        let global = GlobalConfig {
            http_proxy: g_http.clone(),
            https_proxy: g_https.clone(),
            no_proxy: g_no.clone(),
            ..GlobalConfig::default()
        };
        let instance = InstanceConfig {
            http_proxy: i_http.clone(),
            https_proxy: i_https.clone(),
            no_proxy: i_no.clone(),
            ..InstanceConfig::default()
        };
        let resolved = ProxySettings::resolve(&global, &instance);
        prop_assert_eq!(resolved.http_proxy, i_http.or(g_http));
        prop_assert_eq!(resolved.https_proxy, i_https.or(g_https));
        prop_assert_eq!(resolved.no_proxy, i_no.or(g_no));
    }
}

// ============================================================================
// Labels and script rendering
// ============================================================================

proptest! {
    /// Joined labels keep order and contain no whitespace or trailing commas.
    #[test]
    fn prop_labels_join_without_spaces(labels in proptest::collection::vec("[a-z0-9_-]{1,10}", 1..6)) {
        let joined = joined_labels(&labels);
        prop_assert!(!joined.contains(' '));
        prop_assert!(!joined.ends_with(','));
        prop_assert_eq!(joined.split(',').collect::<Vec<_>>(), labels.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Any manifest with an identity compiles, and every instance gets its
    /// configuration step.
    #[test]
    fn prop_identity_present_always_compiles(
        org in "[a-z]{1,10}",
        names in proptest::collection::btree_set("[a-z][a-z0-9_]{0,10}", 0..5),
        platform in prop_oneof![Just(Platform::Linux), Just(Platform::Windows)],
    ) {
        let mut manifest = RunnerManifest {
            global: GlobalConfig { org_name: Some(org), ..GlobalConfig::default() },
            ..RunnerManifest::default()
        };
        for name in &names {
            manifest.instances.insert(name.clone(), InstanceConfig::default());
        }
        let plan = compile(&manifest, platform).unwrap();
        for name in &names {
            let step = format!("{name}-run_configure_install_runner");
            prop_assert!(plan.get(&step).is_some(), "missing {}", step);
        }
    }

    /// Identity fails only when both fields are unset or empty.
    #[test]
    fn prop_identity_requires_one_name(
        org in proptest::option::of("[a-z]{0,6}"),
        ent in proptest::option::of("[a-z]{0,6}"),
    ) {
        let has_org = org.as_deref().is_some_and(|s| !s.is_empty());
        let has_ent = ent.as_deref().is_some_and(|s| !s.is_empty());
        let result = resolve_identity(org.as_deref(), ent.as_deref());
        prop_assert_eq!(result.is_ok(), has_org || has_ent);
        if has_ent {
            prop_assert!(result.unwrap().is_enterprise());
        }
    }

    /// Instance names accepted by the linter never contain path separators.
    #[test]
    fn prop_valid_instance_names_are_path_safe(name in "\\PC{0,20}") {
        if is_valid_instance_name(&name) {
            prop_assert!(!name.contains('/'));
            prop_assert!(!name.contains('\\'));
            prop_assert!(name != "." && name != "..");
        }
    }
}
