//! Pure functions for planning widget table changes (Functional Core).

use super::config::{ColorIndex, TableConfig};

/// What `DescribeTable` reported about an existing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    /// Hash key attribute of the table.
    pub key_attr: String,
    /// Table and all of its indexes are `ACTIVE`.
    pub active: bool,
    pub index_names: Vec<String>,
}

impl TableState {
    fn has_index(&self, name: &str) -> bool {
        self.index_names.iter().any(|n| n == name)
    }
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, create it with the color index.
    CreateTable { config: TableConfig },
    /// Table exists without the color index.
    AddColorIndex {
        table_name: String,
        index: ColorIndex,
    },
    /// Table is keyed on another attribute; only a recreate can fix it.
    KeyMismatch {
        table_name: String,
        existing: String,
        desired: String,
    },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    DeleteTable { table_name: String },
    AlreadyGone { table_name: String },
}

/// Compares the existing table against the desired configuration.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    let table_name = desired.table_name.clone();
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            config: desired.clone(),
        };
    };

    if state.key_attr != desired.key_attr {
        DeployPlan::KeyMismatch {
            table_name,
            existing: state.key_attr.clone(),
            desired: desired.key_attr.clone(),
        }
    } else if !state.has_index(&desired.color_index.name) {
        DeployPlan::AddColorIndex {
            table_name,
            index: desired.color_index.clone(),
        }
    } else {
        DeployPlan::NoChanges { table_name }
    }
}

pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    let table_name = table_name.to_string();
    match current {
        Some(_) => DestroyPlan::DeleteTable { table_name },
        None => DestroyPlan::AlreadyGone { table_name },
    }
}

fn format_index(index: &ColorIndex) -> Vec<String> {
    vec![
        format!("+ Color index: {}", index.name),
        format!("    {} (S) / {} (S), projection ALL", index.partition_key, index.sort_key),
    ]
}

/// Renders a deploy plan; the leading `+ - ~ = !` marks the kind of change.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => {
            let mut lines = vec![
                format!("+ Create table: {}", config.table_name),
                format!("    Key: {} (S), billing PAY_PER_REQUEST", config.key_attr),
            ];
            lines.extend(format_index(&config.color_index));
            lines
        }
        DeployPlan::AddColorIndex { table_name, index } => {
            let mut lines = vec![format!("~ Update table: {}", table_name)];
            lines.extend(format_index(index));
            lines
        }
        DeployPlan::KeyMismatch {
            table_name,
            existing,
            desired,
        } => vec![format!(
            "! Table '{}' is keyed on '{}', expected '{}'",
            table_name, existing, desired
        )],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!("- Delete table: {} (ALL DATA WILL BE LOST)", table_name)]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::config::widget_table_config;
    use super::*;

    fn existing(key_attr: &str, indexes: &[&str]) -> TableState {
        TableState {
            key_attr: key_attr.to_string(),
            active: true,
            index_names: indexes.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = widget_table_config();

        let plan = calculate_deploy_plan(None, &desired);
        assert_eq!(plan, DeployPlan::CreateTable { config: desired });
    }

    #[test]
    fn test_missing_color_index_is_added() {
        let desired = widget_table_config();

        let plan = calculate_deploy_plan(Some(&existing("PK", &["other-index"])), &desired);
        assert_eq!(
            plan,
            DeployPlan::AddColorIndex {
                table_name: "widgets".to_string(),
                index: desired.color_index.clone(),
            }
        );
    }

    #[test]
    fn test_renamed_color_index_is_added() {
        let desired = widget_table_config().with_color_index("testing_color_idx");

        let plan = calculate_deploy_plan(Some(&existing("PK", &["color-index"])), &desired);
        assert!(matches!(plan, DeployPlan::AddColorIndex { .. }));
    }

    #[test]
    fn test_key_mismatch_is_reported() {
        let desired = widget_table_config().with_key_attr("name");

        let plan = calculate_deploy_plan(Some(&existing("PK", &["color-index"])), &desired);
        assert_eq!(
            format_deploy_plan(&plan),
            vec!["! Table 'widgets' is keyed on 'PK', expected 'name'".to_string()]
        );
    }

    #[test]
    fn test_complete_table_needs_no_changes() {
        let plan = calculate_deploy_plan(
            Some(&existing("PK", &["color-index"])),
            &widget_table_config(),
        );

        assert_eq!(
            format_deploy_plan(&plan),
            vec!["= Table 'widgets' is up to date".to_string()]
        );
    }

    #[test]
    fn test_create_plan_lists_key_and_index() {
        let plan = DeployPlan::CreateTable {
            config: widget_table_config(),
        };

        assert_eq!(
            format_deploy_plan(&plan),
            vec![
                "+ Create table: widgets".to_string(),
                "    Key: PK (S), billing PAY_PER_REQUEST".to_string(),
                "+ Color index: color-index".to_string(),
                "    color (S) / PK (S), projection ALL".to_string(),
            ]
        );
    }

    #[test]
    fn test_destroy_plan() {
        let plan = calculate_destroy_plan(Some(&existing("PK", &[])), "widgets");
        assert_eq!(
            plan,
            DestroyPlan::DeleteTable {
                table_name: "widgets".to_string()
            }
        );

        let plan = calculate_destroy_plan(None, "widgets");
        assert_eq!(
            format_destroy_plan(&plan),
            vec!["= Table 'widgets' does not exist".to_string()]
        );
    }
}
