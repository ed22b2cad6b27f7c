//! `Package.swift` rendering

/// Swift tools version declared by every generated manifest
pub const SWIFT_TOOLS_VERSION: &str = "5.9";

/// Minimum iOS platform declared by every generated manifest
pub const IOS_PLATFORM: &str = "v17";

/// A local package dependency, referenced by name and relative path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDependency {
    pub name: String,
    pub path: String,
}

impl PackageDependency {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// The shared service-registry package, as seen from `Feature/<M>/<Unit>`
    pub fn service_loader() -> Self {
        Self::new("LibraryServiceLoader", "../../../Library/ServiceLoader")
    }
}

/// A single-target library package manifest
#[derive(Debug, Clone)]
pub struct PackageManifest {
    pub name: String,
    pub dependencies: Vec<PackageDependency>,
}

impl PackageManifest {
    pub fn library(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, dependency: PackageDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn render(&self) -> String {
        let name = &self.name;
        let mut out = format!(
            "// swift-tools-version: {SWIFT_TOOLS_VERSION}\n\
             import PackageDescription\n\
             \n\
             let package = Package(\n    \
                 name: \"{name}\",\n    \
                 platforms: [ .iOS(.{IOS_PLATFORM}) ],\n    \
                 products: [ .library(name: \"{name}\", targets: [\"{name}\"]) ],\n"
        );

        if !self.dependencies.is_empty() {
            let packages = self
                .dependencies
                .iter()
                .map(|d| format!("        .package(name: \"{}\", path: \"{}\")", d.name, d.path))
                .collect::<Vec<_>>()
                .join(",\n");
            out.push_str(&format!("    dependencies: [\n{packages}\n    ],\n"));
        }

        out.push_str(&format!(
            "    targets: [\n        .target(\n            name: \"{name}\",\n"
        ));

        if !self.dependencies.is_empty() {
            let products = self
                .dependencies
                .iter()
                .map(|d| {
                    format!(
                        "                .product(name: \"{}\", package: \"{}\")",
                        d.name, d.name
                    )
                })
                .collect::<Vec<_>>()
                .join(",\n");
            out.push_str(&format!(
                "            dependencies: [\n{products}\n            ],\n"
            ));
        }

        out.push_str("            path: \"Sources\"\n        )\n    ]\n)\n");
        out
    }
}
