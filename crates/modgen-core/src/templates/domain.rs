//! Domain module templates

use super::manifest::PackageManifest;
use super::Artifact;
use crate::kind::ModuleKind;
use crate::naming::ModuleName;
use std::path::Path;

pub(super) fn artifacts(name: &ModuleName) -> Vec<Artifact> {
    let domain = name.package_name(ModuleKind::Domain);
    let base = Path::new(ModuleKind::Domain.prefix()).join(name.as_str());

    vec![
        Artifact::new(
            base.join("Package.swift"),
            PackageManifest::library(&domain).render(),
        ),
        Artifact::new(
            base.join("Sources")
                .join(&domain)
                .join(format!("{name}DomainBootstrap.swift")),
            bootstrap_source(name),
        ),
    ]
}

fn bootstrap_source(name: &ModuleName) -> String {
    format!(
        r#"import LibraryServiceLoader

public enum {name}DomainBootstrap {{
    public static func configure(manager: ServiceManager = .shared) {{
        // Configure domain services here
    }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_domain_paths() {
        let name = ModuleName::parse("health-Kit").unwrap();
        let generated = artifacts(&name);

        assert_eq!(generated[0].path, PathBuf::from("Domain/healthKit/Package.swift"));
        assert_eq!(
            generated[1].path,
            PathBuf::from("Domain/healthKit/Sources/DomainhealthKit/healthKitDomainBootstrap.swift")
        );
        assert!(generated[0].content.contains(r#"name: "DomainhealthKit","#));
    }

    #[test]
    fn test_bootstrap_has_empty_configure_hook() {
        let name = ModuleName::parse("Health").unwrap();
        let source = bootstrap_source(&name);

        assert!(source.contains("public enum HealthDomainBootstrap {"));
        assert!(source.contains("public static func configure(manager: ServiceManager = .shared) {"));
    }
}
