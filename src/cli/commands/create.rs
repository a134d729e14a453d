//! Create command - write host info for a new host

use super::Target;
use crate::cli::args::CreateArgs;
use crate::config::Config;
use crate::error::{HostInfoError, HostInfoResult};
use crate::info::HostInfo;
use crate::machine::get_store_from_machine;
use crate::ui::{self, UiContext};
use tracing::debug;

/// Execute the create command
pub async fn execute(args: CreateArgs, target: &Target, config: &Config) -> HostInfoResult<()> {
    let ctx = UiContext::detect();
    let machine = target.machine(config)?;
    let hostname = machine.hostname().to_string();
    let persistent = machine.has_store();
    let mut store = get_store_from_machine(machine);

    // Only a missing record is free to claim; an unreadable one needs --force.
    if persistent && !args.force {
        match store.get(true).await {
            Ok(_) => return Err(HostInfoError::HostExists(hostname)),
            Err(e) if e.is_not_found() => debug!("No existing host info: {}", e),
            Err(e) => return Err(e),
        }
    }

    let mut info = HostInfo::default();
    for label in args.labels {
        info.add_label(label);
    }
    info.attributes.extend(args.attrs);

    store.commit(&info).await?;
    ui::step_ok_detail(&ctx, &format!("Created host info for {}", hostname), &store.describe());

    Ok(())
}
