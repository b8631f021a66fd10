use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const IPV4_ADDR: Color = Color::BrightCyan;
pub const IPV6_ADDR: Color = Color::BrightBlue;
