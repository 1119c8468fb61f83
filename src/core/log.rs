use crate::config::Config;
use crate::errors::AppResult;
use crate::store::activity::{ActivityEntry, read_entries};
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 60;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex")
});

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// ANSI colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "record" => Colour::Green,
        "roster" => Colour::Cyan,
        "export" | "report" => Colour::Blue,
        "contacts" => Colour::Yellow,
        "error" => Colour::Red,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to [`MAX_OP_WIDTH`] visible characters.
fn op_target(entry: &ActivityEntry) -> String {
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    if plain.chars().count() > MAX_OP_WIDTH {
        let mut s: String = plain.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    }
}

pub struct LogLogic;

impl LogLogic {
    /// One line per entry; only the operation word is coloured.
    pub fn format_entries(entries: &[ActivityEntry]) -> Vec<String> {
        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.timestamp.len()).max().unwrap_or(0);
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10);

        entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let visible = op_target(entry);
                let color = color_for_operation(&entry.operation);
                let colored = match visible.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(visible.as_str()).to_string(),
                };
                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    idx + 1,
                    entry.timestamp,
                    colored,
                    padding,
                    entry.message,
                )
            })
            .collect()
    }

    /// Entries whose operation equals `operation` (case-insensitive); all when `None`.
    pub fn filter(entries: Vec<ActivityEntry>, operation: Option<&str>) -> Vec<ActivityEntry> {
        match operation.map(str::trim) {
            Some(op) if !op.is_empty() => entries
                .into_iter()
                .filter(|e| e.operation.eq_ignore_ascii_case(op))
                .collect(),
            _ => entries,
        }
    }

    pub fn print_log(cfg: &Config, operation: Option<&str>) -> AppResult<()> {
        let entries = Self::filter(read_entries(&cfg.activity_log())?, operation);
        if entries.is_empty() {
            match operation {
                Some(op) => info(format!("No '{op}' entries in the activity log.")),
                None => info("Activity log is empty."),
            }
            return Ok(());
        }

        println!("Activity log:\n");
        for line in Self::format_entries(&entries) {
            println!("{line}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(op: &str, target: &str, msg: &str) -> ActivityEntry {
        ActivityEntry {
            timestamp: "2025-11-20T10:00:00+00:00".into(),
            operation: op.into(),
            target: target.into(),
            message: msg.into(),
        }
    }

    #[test]
    fn long_targets_are_truncated() {
        let long = "x".repeat(80);
        let lines = LogLogic::format_entries(&[entry("export", &long, "done")]);
        let plain = strip_ansi(&lines[0]);
        assert!(plain.contains("..."));
        assert!(!plain.contains(&long));
        assert!(plain.ends_with("=> done"));
    }

    #[test]
    fn columns_line_up_without_colour_codes() {
        let lines = LogLogic::format_entries(&[
            entry("init", "", "ready"),
            entry("record", "2025-11-20", "2 present"),
        ]);
        let arrows: Vec<usize> = lines
            .iter()
            .map(|l| strip_ansi(l).find("=>").unwrap())
            .collect();
        assert_eq!(arrows[0], arrows[1]);
        assert!(strip_ansi(&lines[1]).starts_with("2: 2025-11-20T10:00:00+00:00 | record (2025-11-20)"));
    }

    #[test]
    fn filter_keeps_one_operation() {
        let entries = vec![
            entry("init", "", "ready"),
            entry("record", "2025-11-20", "2 present"),
            entry("RECORD", "2025-11-21", "1 present"),
        ];
        assert_eq!(LogLogic::filter(entries.clone(), None).len(), 3);
        assert_eq!(LogLogic::filter(entries.clone(), Some(" ")).len(), 3);

        let records = LogLogic::filter(entries, Some("record"));
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|e| e.target.starts_with("2025-11-")));
    }
}
