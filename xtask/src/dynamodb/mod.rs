//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the widget table.
    Deploy(DeployCommand),

    /// Seed the widget table with demo widgets.
    Seed(SeedCommand),
}

/// Table naming shared by every action, matching the handler environment.
#[derive(Debug, Clone, clap::Args)]
pub struct TableArgs {
    /// Table name to use.
    #[arg(long, default_value = "widgets", env = "DynamoName")]
    pub table_name: String,

    /// Primary key attribute holding the widget name.
    #[arg(long, default_value = "PK", env = "DynamoPartitionKey")]
    pub partition_key: String,

    /// Name of the color index.
    #[arg(long, default_value = "color-index", env = "DynamoIndexColor")]
    pub color_index: String,
}

/// Deploy or update the widget table.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy the widget DynamoDB table.

By default, this command creates the widget table keyed by widget name,
with a Global Secondary Index on the color attribute. An existing table
missing the color index gets it added. A table keyed on a different
attribute is reported and left alone.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating/updating.
    #[arg(long)]
    pub destroy: bool,

    #[command(flatten)]
    pub table: TableArgs,
}

/// Seed the widget table.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Insert demo widgets into DynamoDB.

Always writes the fixed demo set (TEST001..TEST004, FOO and a few blue
widgets for the color report), then pads with generated WIDGET-NNN
widgets until --count is reached. Existing widgets with the same name
are overwritten.")]
pub struct SeedCommand {
    /// Total number of widgets to write.
    #[arg(long, default_value = "8")]
    pub count: usize,

    #[command(flatten)]
    pub table: TableArgs,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &global).await,
    }
}

fn confirm(prompt: &str, default: bool) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| DynamodbError::Prompt(e.to_string()))?;

    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();
    let table_name = &cmd.table.table_name;

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await;
    let current_state = client::get_table_state(&dynamo_client, table_name).await?;

    if cmd.destroy {
        let plan = planning::calculate_destroy_plan(current_state.as_ref(), table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            confirm(
                "Are you sure you want to delete this table? ALL DATA WILL BE LOST",
                false,
            )?;
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
        return Ok(());
    }

    let table_config = config::widget_table_config()
        .with_table_name(table_name)
        .with_key_attr(&cmd.table.partition_key)
        .with_color_index(&cmd.table.color_index);

    let plan = planning::calculate_deploy_plan(current_state.as_ref(), &table_config);

    if !global.is_silent() {
        aprintln!("{}", p_c("Deploy Plan:"));
        for line in planning::format_deploy_plan(&plan) {
            match line.chars().next() {
                Some('+') => aprintln!("  {}", p_g(&line)),
                Some('-') => aprintln!("  {}", p_r(&line)),
                Some('~') => aprintln!("  {}", p_y(&line)),
                Some('!') => aprintln!("  {}", p_r(&line)),
                _ => aprintln!("  {}", line),
            }
        }
        aprintln!();
    }

    if matches!(plan, planning::DeployPlan::KeyMismatch { .. }) {
        return deploy::execute_deploy_plan(&dynamo_client, &plan).await;
    }

    if matches!(plan, planning::DeployPlan::NoChanges { .. }) {
        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure is up to date."));
        }
        return Ok(());
    }

    if !cmd.force {
        confirm("Apply these changes?", true)?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Applying changes..."));
    }

    deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

    if !global.is_silent() {
        aprintln!("{}", p_g("Infrastructure deployed successfully."));
    }

    Ok(())
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();
    let table_name = &cmd.table.table_name;

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!("{} {}", p_b("Table:"), table_name);
        aprintln!("{} {}", p_b("Partition key:"), cmd.table.partition_key);
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await;

    if client::get_table_state(&dynamo_client, table_name)
        .await?
        .is_none()
    {
        return Err(DynamodbError::TableNotFound {
            table_name: table_name.clone(),
        });
    }

    let widgets = seed::generate_seed_widgets(cmd.count);

    if !global.is_silent() {
        aprintln!("{}", p_c("Widgets to write:"));
        for widget in widgets.iter().take(5) {
            aprintln!("  {} ({})", widget.name, widget.color);
        }
        if widgets.len() > 5 {
            aprintln!("  ... and {} more", widgets.len() - 5);
        }
        aprintln!();
    }

    if !cmd.force {
        confirm(&format!("Write {} widgets?", widgets.len()), true)?;
    }

    let inserted =
        seed::seed_widgets(&dynamo_client, table_name, &cmd.table.partition_key, &widgets).await?;

    if !global.is_silent() {
        aprintln!("{} {} widgets written.", p_g("Success:"), inserted);
    }

    Ok(())
}
