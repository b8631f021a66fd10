use colored::*;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    println!("{msg}");
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

/// Renders `key....: value` lines with the colons lined up.
pub fn aligned_lines(pairs: &[(&str, ColoredString)]) {
    let key_width: usize = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in pairs {
        print_status(aligned(key, value, key_width));
    }
}

fn aligned(key: &str, value: &ColoredString, key_width: usize) -> String {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    )
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref()));
}

pub fn no_results(what: &str) {
    print(&format!("{}", format!("No {what} found").red().bold()));
}
