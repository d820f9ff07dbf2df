use chrono::{DateTime, Datelike, TimeZone, Timelike};

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// 文件大小：B / KB / MB，保留一位小数
pub fn file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

pub fn month_name(month: u32) -> &'static str {
    MONTHS_PT
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// 例如 "05 de setembro de 2025 às 14:30"
pub fn long_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!(
        "{:02} de {} de {} às {:02}:{:02}",
        date.day(),
        month_name(date.month()),
        date.year(),
        date.hour(),
        date.minute()
    )
}

/// 例如 "05/09/2025"
pub fn short_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// 姓名首字母，最多两位
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
