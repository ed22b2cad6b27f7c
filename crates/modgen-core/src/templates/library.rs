//! Library module templates

use super::manifest::PackageManifest;
use super::Artifact;
use crate::kind::ModuleKind;
use crate::naming::ModuleName;
use std::path::Path;

pub(super) fn artifacts(name: &ModuleName) -> Vec<Artifact> {
    let library = name.package_name(ModuleKind::Library);
    let base = Path::new(ModuleKind::Library.prefix()).join(name.as_str());

    vec![
        Artifact::new(
            base.join("Package.swift"),
            PackageManifest::library(&library).render(),
        ),
        Artifact::new(
            base.join("Sources")
                .join(&library)
                .join(format!("{name}Manager.swift")),
            manager_source(name),
        ),
    ]
}

fn manager_source(name: &ModuleName) -> String {
    format!(
        r#"public enum {name}Manager {{
    public static func start() {{
        // Initialize {name} manager
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
    fn test_library_paths_and_manager() {
        let name = ModuleName::parse("Network").unwrap();
        let generated = artifacts(&name);

        assert_eq!(generated.len(), 2);
        assert_eq!(generated[0].path, PathBuf::from("Library/Network/Package.swift"));
        assert_eq!(
            generated[1].path,
            PathBuf::from("Library/Network/Sources/LibraryNetwork/NetworkManager.swift")
        );
        assert!(generated[1].content.starts_with("public enum NetworkManager {"));
        assert!(generated[1].content.contains("public static func start() {"));
    }
}
