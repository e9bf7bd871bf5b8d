use clap::Args;
use prettytable::{format, row, Table};
use pksav::{
    gen3::inspect_blocks,
    gen4::{probe_layouts, save::BlockProbe},
};

use crate::load::{Generation, SaveArgs};

#[derive(Debug, Args)]
pub struct Opts {
    #[command(flatten)]
    pub save: SaveArgs,
    /// Print the full report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table
}

fn gba_report(save_data: &[u8], json: bool) -> anyhow::Result<String> {
    let reports = inspect_blocks(save_data);
    if json {
        return Ok(serde_json::to_string_pretty(&reports)?);
    }

    let mut table = new_table();
    table.add_row(row!["OFFSET", "SAVE INDEX", "VALID", "BAD SECTIONS"]);
    for report in &reports {
        let bad_sections: Vec<String> = report
            .sections
            .iter()
            .filter(|section| !section.signature_ok || section.checksum_stored != section.checksum_computed)
            .map(|section| section.id.to_string())
            .collect();
        table.add_row(row![
            format!("0x{:05x}", report.offset),
            report.save_index.map(|index| index.to_string()).unwrap_or_else(|| "mixed".to_owned()),
            report.valid,
            bad_sections.join(","),
        ]);
    }
    Ok(table.to_string())
}

fn describe(probe: &Option<BlockProbe>) -> String {
    match probe {
        None => "-".to_owned(),
        Some(block) if block.ok => format!("ok #{} link {}", block.save_count, block.link_value),
        Some(block) => format!(
            "crc {:04x} != {:04x}",
            block.checksum_computed, block.checksum_stored
        ),
    }
}

fn ds_report(save_data: &[u8], json: bool) -> anyhow::Result<String> {
    let probes = probe_layouts(save_data);
    if json {
        return Ok(serde_json::to_string_pretty(&probes)?);
    }

    let mut table = new_table();
    table.add_row(row!["GAME", "COPY", "GENERAL", "STORAGE"]);
    for probe in &probes {
        table.add_row(row![
            probe.game,
            format!("{:?}", probe.copy),
            describe(&probe.general),
            describe(&probe.storage),
        ]);
    }
    Ok(table.to_string())
}

pub fn render(opts: &Opts) -> anyhow::Result<String> {
    let loaded = opts.save.load()?;
    match loaded.generation {
        Generation::Gba => gba_report(&loaded.data, opts.json),
        Generation::Ds => ds_report(&loaded.data, opts.json),
    }
}

pub fn run(opts: Opts) -> anyhow::Result<()> {
    print!("{}", render(&opts)?);
    Ok(())
}
