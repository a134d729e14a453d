//! Label command - read or change host labels

use super::Target;
use crate::cli::args::{LabelAction, LabelArgs};
use crate::config::Config;
use crate::error::HostInfoResult;
use crate::machine::get_store_from_machine;
use crate::ui::{self, UiContext};

/// Execute the label command
pub async fn execute(args: LabelArgs, target: &Target, config: &Config) -> HostInfoResult<()> {
    let ctx = UiContext::detect();
    let machine = target.machine(config)?;
    let persistent = machine.has_store();
    let mut store = get_store_from_machine(machine);
    let mut info = store.get(false).await?;

    match args.action {
        LabelAction::Get { prefix } => {
            println!("{}", info.get_label_value(&prefix));
            return Ok(());
        }
        LabelAction::Add { labels } => {
            for label in labels {
                if !info.add_label(label.as_str()) {
                    ui::step_warn_hint(&ctx, "Label already present", &label);
                }
            }
        }
        LabelAction::Remove { labels } => {
            for label in &labels {
                if !info.remove_label(label) {
                    ui::step_warn_hint(&ctx, "Label not present", label);
                }
            }
        }
        LabelAction::Set { prefix, value } => info.set_label_value(&prefix, &value),
    }

    store.commit(&info).await?;
    ui::step_ok(&ctx, &format!("Labels updated ({} total)", info.labels.len()));
    if !persistent {
        ui::step_warn_hint(&ctx, "Changes not persisted", "store.backend is memory");
    }

    Ok(())
}
