use std::time::Instant;

use colored::*;
use netkit_common::config::ScanOptions;
use netkit_common::network::ports::{PortRange, ScanReport};
use netkit_core::scanner;

use crate::terminal::{colors, print, spinner::ScanSpinner};

pub async fn scan(host: &str, start: u16, end: u16, opts: ScanOptions) -> anyhow::Result<()> {
    let range = PortRange::new(start, end)?;
    print::header(&format!("scanning {host} ports {range}"));

    let spinner = ScanSpinner::start(host, range.len());
    let start_time = Instant::now();
    let report = scanner::scan_ports_with_progress(host, range, opts, spinner.tick_handle()).await;
    spinner.finish_and_clear();

    print_report(&report);

    let open: ColoredString = format!("{} open ports", report.open_ports.len()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64())
        .bold()
        .yellow();
    print::fat_separator();
    print::print_status(format!("Scan Complete: {open} identified in {total_time}"));
    Ok(())
}

fn print_report(report: &ScanReport) {
    if report.open_ports.is_empty() {
        print::no_results("open ports");
        return;
    }

    for port in &report.open_ports {
        print::print_status(format!(
            "{} {}",
            format!("{port}/tcp").color(colors::ACCENT),
            "open".color(colors::PRIMARY)
        ));
    }
}
