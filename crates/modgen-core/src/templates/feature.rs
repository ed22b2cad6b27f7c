//! Feature module templates: an Api package and an Impl package

use super::manifest::{PackageDependency, PackageManifest};
use super::Artifact;
use crate::kind::ModuleKind;
use crate::naming::ModuleName;
use std::path::Path;

pub(super) fn artifacts(name: &ModuleName) -> Vec<Artifact> {
    let feature = name.package_name(ModuleKind::Feature);
    let api = format!("{feature}Api");
    let impl_unit = format!("{feature}Impl");
    let base = Path::new(ModuleKind::Feature.prefix()).join(name.as_str());

    let api_dir = base.join(&api);
    let impl_dir = base.join(&impl_unit);

    vec![
        Artifact::new(
            api_dir.join("Package.swift"),
            PackageManifest::library(&api).render(),
        ),
        Artifact::new(
            api_dir.join("Sources").join(&api).join(format!("{api}.swift")),
            api_source(name, &feature),
        ),
        Artifact::new(
            impl_dir.join("Package.swift"),
            PackageManifest::library(&impl_unit)
                .with_dependency(PackageDependency::new(&api, format!("../{api}")))
                .with_dependency(PackageDependency::service_loader())
                .render(),
        ),
        Artifact::new(
            impl_dir
                .join("Sources")
                .join(&impl_unit)
                .join(format!("{name}FeatureModule.swift")),
            impl_source(name, &feature),
        ),
    ]
}

fn api_source(name: &ModuleName, feature: &str) -> String {
    format!(
        r#"import SwiftUI

public protocol {feature}Buildable {{
    func make{name}View() -> AnyView
}}
"#
    )
}

fn impl_source(name: &ModuleName, feature: &str) -> String {
    format!(
        r#"import SwiftUI
import LibraryServiceLoader
import {feature}Api

struct {name}FeatureView: View {{
    var body: some View {{
        Text("{name} Feature")
    }}
}}

public struct {name}FeatureBuilder: {feature}Buildable {{
    public init() {{}}
    public func make{name}View() -> AnyView {{ AnyView({name}FeatureView()) }}
}}

public enum {name}FeatureModule {{
    public static func register(in manager: ServiceManager = .shared) {{
        // Register builder to ServiceManager
        manager.register({feature}Buildable.self) {{ {name}FeatureBuilder() }}
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
    fn test_feature_paths_in_generation_order() {
        let name = ModuleName::parse("User").unwrap();
        let paths: Vec<PathBuf> = artifacts(&name).into_iter().map(|a| a.path).collect();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("Feature/User/FeatureUserApi/Package.swift"),
                PathBuf::from("Feature/User/FeatureUserApi/Sources/FeatureUserApi/FeatureUserApi.swift"),
                PathBuf::from("Feature/User/FeatureUserImpl/Package.swift"),
                PathBuf::from("Feature/User/FeatureUserImpl/Sources/FeatureUserImpl/UserFeatureModule.swift"),
            ]
        );
    }

    #[test]
    fn test_api_declares_buildable_protocol() {
        let name = ModuleName::parse("User").unwrap();
        let source = api_source(&name, "FeatureUser");

        assert!(source.contains("public protocol FeatureUserBuildable {"));
        assert!(source.contains("func makeUserView() -> AnyView"));
    }

    #[test]
    fn test_impl_registers_builder_under_protocol() {
        let name = ModuleName::parse("User").unwrap();
        let source = impl_source(&name, "FeatureUser");

        assert!(source.contains("import FeatureUserApi"));
        assert!(source.contains("public struct UserFeatureBuilder: FeatureUserBuildable {"));
        assert!(source.contains(
            "manager.register(FeatureUserBuildable.self) { UserFeatureBuilder() }"
        ));
    }

    #[test]
    fn test_impl_manifest_depends_on_api_and_service_loader() {
        let name = ModuleName::parse("User").unwrap();
        let generated = artifacts(&name);
        let manifest = &generated[2].content;

        assert!(manifest.contains(r#".package(name: "FeatureUserApi", path: "../FeatureUserApi")"#));
        assert!(manifest.contains(r#".product(name: "LibraryServiceLoader", package: "LibraryServiceLoader")"#));
    }
}
