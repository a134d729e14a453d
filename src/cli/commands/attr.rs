//! Attr command - read or change host attributes

use super::Target;
use crate::cli::args::{AttrAction, AttrArgs};
use crate::config::Config;
use crate::error::{HostInfoError, HostInfoResult};
use crate::machine::get_store_from_machine;
use crate::ui::{self, UiContext};

/// Execute the attr command
pub async fn execute(args: AttrArgs, target: &Target, config: &Config) -> HostInfoResult<()> {
    let ctx = UiContext::detect();
    let machine = target.machine(config)?;
    let persistent = machine.has_store();
    let mut store = get_store_from_machine(machine);
    let mut info = store.get(false).await?;

    match args.action {
        AttrAction::Get { key } => {
            let value = info
                .attributes
                .get(&key)
                .ok_or_else(|| HostInfoError::User(format!("Attribute not set: {}", key)))?;
            println!("{}", value);
            return Ok(());
        }
        AttrAction::Set { pairs } => {
            for (key, value) in pairs {
                info.attributes.insert(key, value);
            }
        }
        AttrAction::Unset { keys } => {
            for key in &keys {
                if info.attributes.remove(key).is_none() {
                    ui::step_warn_hint(&ctx, "Attribute not set", key);
                }
            }
        }
    }

    store.commit(&info).await?;
    ui::step_ok(
        &ctx,
        &format!("Attributes updated ({} total)", info.attributes.len()),
    );
    if !persistent {
        ui::step_warn_hint(&ctx, "Changes not persisted", "store.backend is memory");
    }

    Ok(())
}
