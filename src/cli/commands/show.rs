//! Show command - print host labels, attributes and derived properties

use super::Target;
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::Config;
use crate::error::HostInfoResult;
use crate::info::HostInfo;
use crate::machine::get_store_from_machine;
use crate::ui::{self, UiContext};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// JSON view of a host
#[derive(Serialize)]
struct HostView<'a> {
    hostname: &'a str,
    labels: &'a [String],
    attributes: &'a BTreeMap<String, String>,
    board: &'a str,
    os: &'a str,
    build: Option<&'a str>,
    pools: BTreeSet<&'a str>,
}

impl<'a> HostView<'a> {
    fn new(hostname: &'a str, info: &'a HostInfo) -> Self {
        Self {
            hostname,
            labels: &info.labels,
            attributes: &info.attributes,
            board: info.board(),
            os: info.os(),
            build: info.build(),
            pools: info.pools(),
        }
    }
}

/// Execute the show command
pub async fn execute(args: ShowArgs, target: &Target, config: &Config) -> HostInfoResult<()> {
    let machine = target.machine(config)?;
    let hostname = machine.hostname().to_string();
    let mut store = get_store_from_machine(machine);
    let info = store.get(false).await?;

    match args.format {
        OutputFormat::Table => print_table(&hostname, &info),
        OutputFormat::Json => print_json(&hostname, &info)?,
        OutputFormat::Plain => print_plain(&info),
    }

    Ok(())
}

fn print_table(hostname: &str, info: &HostInfo) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, hostname);

    ui::key_value(&ctx, "board", or_dash(info.board()));
    ui::key_value(&ctx, "os", or_dash(info.os()));
    ui::key_value(&ctx, "build", info.build().unwrap_or("-"));
    let pools: Vec<&str> = info.pools().into_iter().collect();
    ui::key_value(&ctx, "pools", or_dash(&pools.join(", ")));

    ui::section(&ctx, "Labels");
    if info.labels.is_empty() {
        ui::step_info(&ctx, "No labels");
    }
    for label in &info.labels {
        println!("  {}", label);
    }

    ui::section(&ctx, "Attributes");
    if info.attributes.is_empty() {
        ui::step_info(&ctx, "No attributes");
    }
    for (key, value) in &info.attributes {
        ui::key_value(&ctx, key, value);
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn print_json(hostname: &str, info: &HostInfo) -> HostInfoResult<()> {
    let json = serde_json::to_string_pretty(&HostView::new(hostname, info))?;
    println!("{}", json);
    Ok(())
}

fn print_plain(info: &HostInfo) {
    for label in &info.labels {
        println!("{}", label);
    }
}
