use serde::Serialize;

use crate::catalog::{BuilderCatalog, CatalogKind, Catalogs};
use crate::descriptor::Module;
use crate::error::{Error, Result};

/// Commands a module's builder runs, with the builder's description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandList {
    pub info: String,
    #[serde(rename = "commands")]
    pub command: Vec<String>,
}

/// Resolve the builder commands for `module`.
///
/// A module that names a builder in its build parameters is looked up in
/// `custom` only; every other module is looked up by type in `standard`.
/// The first definition with a matching name wins.
pub fn resolve(
    module: &Module,
    standard: &BuilderCatalog,
    custom: &BuilderCatalog,
) -> Result<CommandList> {
    let selection = module.builder()?;
    let kind = selection.catalog();
    let catalog = match kind {
        CatalogKind::Standard => standard,
        CatalogKind::Custom => custom,
    };

    let Some(definition) = catalog.find(selection.name()) else {
        return Err(Error::builder_not_found(selection.name(), kind.label()));
    };

    Ok(CommandList {
        info: definition.info.clone(),
        command: definition
            .commands
            .iter()
            .map(|template| template.command.clone())
            .collect(),
    })
}

/// Resolve against a loaded catalog pair.
pub fn provide_commands(module: &Module, catalogs: &Catalogs) -> Result<CommandList> {
    resolve(module, &catalogs.standard, &catalogs.custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{parse, BuilderDefinition, CommandTemplate};
    use crate::error::ErrorCode;
    use std::collections::BTreeMap;

    fn definition(name: &str, info: &str, commands: &[&str]) -> BuilderDefinition {
        BuilderDefinition {
            name: name.to_string(),
            info: info.to_string(),
            commands: commands
                .iter()
                .map(|c| CommandTemplate {
                    command: c.to_string(),
                })
                .collect(),
        }
    }

    fn module(name: &str, module_type: &str, builder: Option<&str>) -> Module {
        let mut build_parameters = BTreeMap::new();
        if let Some(builder) = builder {
            build_parameters.insert(
                "builder".to_string(),
                serde_yml::Value::String(builder.to_string()),
            );
        }
        Module {
            name: name.to_string(),
            module_type: module_type.to_string(),
            path: None,
            build_parameters,
        }
    }

    fn catalogs() -> (BuilderCatalog, BuilderCatalog) {
        let standard = BuilderCatalog {
            builders: vec![
                definition("html5", "build ui", &["npm install", "grunt", "npm prune --production"]),
                definition("java", "build java", &["mvn -B package"]),
            ],
        };
        let custom = BuilderCatalog {
            builders: vec![definition("npm", "custom npm", &["npm run build"])],
        };
        (standard, custom)
    }

    #[test]
    fn standard_module_gets_catalog_entry_in_order() {
        let (standard, custom) = catalogs();

        let list = resolve(&module("ui", "html5", None), &standard, &custom).unwrap();

        assert_eq!(list.info, "build ui");
        assert_eq!(
            list.command,
            vec!["npm install", "grunt", "npm prune --production"]
        );
    }

    #[test]
    fn custom_module_ignores_standard_catalog() {
        let (mut standard, custom) = catalogs();
        standard
            .builders
            .insert(0, definition("npm", "standard npm", &["npm ci"]));

        let list = resolve(&module("srv", "nodejs", Some("npm")), &standard, &custom).unwrap();

        assert_eq!(list.info, "custom npm");
        assert_eq!(list.command, vec!["npm run build"]);
    }

    #[test]
    fn custom_builder_only_in_standard_is_not_found() {
        let (standard, custom) = catalogs();

        let err = resolve(&module("srv", "nodejs", Some("java")), &standard, &custom).unwrap_err();

        assert_eq!(err.code, ErrorCode::BuilderNotFound);
        assert_eq!(
            err.message,
            "the java builder is not defined in the custom commands configuration"
        );
    }

    #[test]
    fn unknown_type_is_not_found_in_commands() {
        let (standard, custom) = catalogs();

        let err = resolve(&module("x", "golang", None), &standard, &custom).unwrap_err();

        assert_eq!(err.code, ErrorCode::BuilderNotFound);
        assert_eq!(
            err.message,
            "the golang builder is not defined in the commands configuration"
        );
    }

    #[test]
    fn first_matching_definition_wins() {
        let (mut standard, custom) = catalogs();
        standard
            .builders
            .push(definition("html5", "shadowed", &["never"]));

        let list = resolve(&module("ui", "html5", None), &standard, &custom).unwrap();

        assert_eq!(list.info, "build ui");
    }

    #[test]
    fn numeric_builder_resolves_in_custom_catalog() {
        let (mut standard, mut custom) = catalogs();
        standard.builders.insert(0, definition("html5", "standard ui", &["npm ci"]));
        custom.builders.push(definition("2", "second pipeline", &["make two"]));
        let mut ui = module("ui", "html5", None);
        ui.build_parameters
            .insert("builder".to_string(), serde_yml::Value::Number(2u64.into()));

        let list = resolve(&ui, &standard, &custom).unwrap();

        assert_eq!(list.info, "second pipeline");
        assert_eq!(list.command, vec!["make two"]);
    }

    #[test]
    fn builder_without_commands_resolves_to_empty_list() {
        let standard = parse("builders:\n  - name: noop\n    info: nothing\n", CatalogKind::Standard)
            .unwrap();

        let list = resolve(&module("n", "noop", None), &standard, &BuilderCatalog::default())
            .unwrap();

        assert_eq!(list.info, "nothing");
        assert!(list.command.is_empty());
    }

    #[test]
    fn provide_commands_uses_embedded_catalogs() {
        let catalogs = Catalogs::embedded().unwrap();

        let list = provide_commands(&module("ui", "html5", None), catalogs).unwrap();

        assert_eq!(list.command.first().map(String::as_str), Some("npm install --production"));
    }
}
