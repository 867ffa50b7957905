//! Project layout checks.
//!
//! Checks never fail hard: every problem becomes a [`ValidationIssue`] so a
//! single pass reports all of them.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::descriptor::ProjectDescriptor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    #[serde(rename = "msg")]
    pub message: String,
    pub module: String,
    pub expected_path: String,
}

type ProjectCheck = fn(&ProjectDescriptor, &Path) -> Vec<ValidationIssue>;

const PROJECT_CHECKS: &[ProjectCheck] = &[validate_module_paths];

/// Run every project check and collect their issues in check order.
pub fn validate_project(descriptor: &ProjectDescriptor, project_root: &Path) -> Vec<ValidationIssue> {
    PROJECT_CHECKS
        .iter()
        .flat_map(|check| check(descriptor, project_root))
        .collect()
}

/// One issue per module whose directory cannot be read.
pub fn validate_module_paths(
    descriptor: &ProjectDescriptor,
    project_root: &Path,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for module in &descriptor.modules {
        let dir = module.dir(project_root);
        if fs::read_dir(&dir).is_ok() {
            continue;
        }

        crate::log_status!("validate", "Module {} missing at {}", module.name, dir.display());

        let expected = dir.to_string_lossy().to_string();
        issues.push(ValidationIssue {
            message: format!(
                "Module <{}> not found in project. Expected path: <{}>",
                module.name, expected
            ),
            module: module.name.clone(),
            expected_path: expected,
        });
    }

    issues
}
