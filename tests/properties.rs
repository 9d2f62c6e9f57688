//! Property tests for the resolver and renderer invariants.

use std::fs;

use proptest::prelude::*;
use stackup::config::{self, Overrides};
use stackup::{EnvTemplate, StackConfig, TemplateContext};
use tempfile::TempDir;

fn resolve_in_named_root(
    name: &str,
    overrides: &Overrides,
) -> Result<StackConfig, stackup::AppError> {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path().join(name);
    fs::create_dir_all(&root).expect("create stack root");
    config::resolve(&root, &root.join(config::STACK_ENV_FILE), overrides)
}

proptest! {
    #[test]
    fn rendering_same_inputs_twice_is_byte_identical(
        domain in "[a-z][a-z0-9-]{0,11}",
        port in 1u16..,
        key in proptest::option::of("base64:[A-Za-z0-9+/]{8,24}"),
    ) {
        let stack = StackConfig { base_domain: domain, frontend_port: port };
        let ctx = TemplateContext::new(&stack, key);

        for template in EnvTemplate::ALL {
            let first = stackup::template::render(template, &ctx).expect("render");
            let second = stackup::template::render(template, &ctx).expect("render");
            prop_assert_eq!(&first, &second);
            prop_assert!(!first.contains("{{"), "placeholder survived: {}", first);
        }
    }

    #[test]
    fn resolver_never_yields_empty_domain_or_bad_port(
        domain in "[a-z][a-z0-9-]{0,11}",
        port in 1u16..,
    ) {
        let overrides =
            Overrides { domain: Some(domain), port: Some(port.to_string()) };
        let resolved = resolve_in_named_root("stack", &overrides).expect("resolve");
        prop_assert!(!resolved.base_domain.is_empty());
        prop_assert!(resolved.frontend_port >= 1);
        prop_assert_eq!(resolved.frontend_port, port);
    }

    #[test]
    fn resolver_rejects_ports_that_are_not_positive_integers(
        port in "(0|0*[a-z][a-z0-9]{0,6}|-[0-9]{1,4})",
    ) {
        let overrides = Overrides { domain: None, port: Some(port) };
        let result = resolve_in_named_root("stack", &overrides);
        prop_assert!(result.is_err());
    }

    #[test]
    fn default_domain_follows_the_stack_directory_name(
        name in "[a-z][a-z0-9]{0,11}",
    ) {
        let resolved =
            resolve_in_named_root(&name, &Overrides::default()).expect("resolve");
        prop_assert_eq!(resolved.base_domain, name);
    }
}
