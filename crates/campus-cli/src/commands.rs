//! Record commands
//!
//! One handler runs every entity: the engines interpret the entity's
//! descriptor configuration, this module only wires them to the terminal.

use std::sync::Arc;

use campus_api::Api;
use campus_engine::{DetailEngine, FormEngine, ListEngine, Notifier, SubmitOutcome};

use crate::console::{self, ConsoleNotifier};
use crate::entities::EntityConfig;
use crate::error::CliError;
use crate::output::OutputFormat;
use crate::{ConfigCommands, RecordCommands};

pub async fn run(
    action: RecordCommands,
    entity: EntityConfig,
    api: Arc<dyn Api>,
    notifier: Arc<ConsoleNotifier>,
    format: OutputFormat,
) -> Result<(), CliError> {
    match action {
        RecordCommands::List => {
            let mut list = list_engine(&entity, api, notifier);
            list.load().await?;
            let headers: Vec<String> =
                list.columns().iter().map(|c| c.label.clone()).collect();
            format.print_table(&headers, list.rows(), &list.records().to_vec());
        }
        RecordCommands::View { id } => {
            let mut list = list_engine(&entity, api, notifier.clone());
            list.load().await?;
            match list.view(&id) {
                Some(pairs) => format.print_record(&pairs, &pairs),
                None => notifier.error("Record not found"),
            }
        }
        RecordCommands::Show { id } => {
            let mut detail =
                DetailEngine::new(entity.schema, entity.endpoint, api, notifier);
            detail.load(&id).await?;
            let rows = detail.rows();
            format.print_record(&rows, &detail.record());
        }
        RecordCommands::Create => {
            let mut form =
                FormEngine::create(entity.schema, entity.endpoint, api, notifier).await;
            drive_form(&mut form).await?;
        }
        RecordCommands::Edit { id } => {
            let mut form =
                FormEngine::edit(entity.schema, entity.endpoint, api, notifier, &id).await?;
            drive_form(&mut form).await?;
        }
        RecordCommands::Delete { id } => {
            let mut list = list_engine(&entity, api, notifier);
            list.delete(&id).await;
        }
    }
    Ok(())
}

fn list_engine(
    entity: &EntityConfig,
    api: Arc<dyn Api>,
    notifier: Arc<ConsoleNotifier>,
) -> ListEngine {
    ListEngine::new(
        entity.schema.clone(),
        entity.endpoint,
        entity.columns.clone(),
        api,
        notifier,
    )
}

/// Fill, submit, and on validation failure offer one more pass with the
/// server's messages shown inline.
async fn drive_form(form: &mut FormEngine) -> Result<(), CliError> {
    console::fill_form(form)?;
    loop {
        match form.submit().await {
            SubmitOutcome::Saved(_) | SubmitOutcome::Cancelled => return Ok(()),
            SubmitOutcome::Blocked | SubmitOutcome::Failed => {
                if form.errors().is_empty() {
                    return Ok(());
                }
                console::fill_form(form)?;
            }
        }
    }
}

pub fn run_config(action: ConfigCommands) -> Result<(), CliError> {
    match action {
        ConfigCommands::Set { key, value } => {
            let mut config = crate::config::Config::load(None)?;
            config.set(&key, value)?;
            config.save()?;
            println!("{key} updated");
        }
        ConfigCommands::Get { key } => match crate::config::Config::load(None)?.get(&key) {
            Some(value) => println!("{value}"),
            None => println!("{key} is not set"),
        },
        ConfigCommands::List => {
            let config = crate::config::Config::load(None)?;
            for key in ["api_url", "token", "default_format"] {
                println!("{key} = {}", config.get(key).unwrap_or_else(|| "(unset)".into()));
            }
        }
        ConfigCommands::Init => {
            crate::config::Config::default().save()?;
            println!("Initialized ~/.campus/config.toml");
        }
    }
    Ok(())
}
