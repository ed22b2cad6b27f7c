//! The three module kinds a scaffold can produce

use crate::naming::ModuleName;
use std::fmt;

/// Module kind, selecting which fixed template set is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// UI feature split into an Api and an Impl package
    Feature,
    /// Domain package with a bootstrap hook
    Domain,
    /// Library package with a manager entry point
    Library,
}

impl ModuleKind {
    /// Prefix used for package names and the top-level directory
    pub fn prefix(&self) -> &'static str {
        match self {
            ModuleKind::Feature => "Feature",
            ModuleKind::Domain => "Domain",
            ModuleKind::Library => "Library",
        }
    }

    /// Names of the packages this kind creates for `name`
    pub fn unit_names(&self, name: &ModuleName) -> Vec<String> {
        let package = name.package_name(*self);
        match self {
            ModuleKind::Feature => vec![format!("{package}Api"), format!("{package}Impl")],
            ModuleKind::Domain | ModuleKind::Library => vec![package],
        }
    }

    /// Completion message, e.g. `Feature module created: Feature/User/(FeatureUserApi, FeatureUserImpl)`
    pub fn summary(&self, name: &ModuleName) -> String {
        format!(
            "{} module created: {}/{}/({})",
            self.prefix(),
            self.prefix(),
            name,
            self.unit_names(name).join(", ")
        )
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_names_created_units() {
        let name = ModuleName::parse("User").unwrap();
        assert_eq!(
            ModuleKind::Feature.summary(&name),
            "Feature module created: Feature/User/(FeatureUserApi, FeatureUserImpl)"
        );
        assert_eq!(
            ModuleKind::Domain.summary(&name),
            "Domain module created: Domain/User/(DomainUser)"
        );
        assert_eq!(
            ModuleKind::Library.summary(&name),
            "Library module created: Library/User/(LibraryUser)"
        );
    }
}
