//! Column-aligned help text for a set of options.

use crate::opt::Opt;
use crate::registry::Registry;

struct Row {
    short: String,
    long: String,
    help: String,
    extra: Vec<String>,
}

impl Row {
    fn new(opt: &(dyn Opt + '_)) -> Self {
        let spec = opt.spec();
        let suffix = opt.usage_suffix();
        let with_suffix = |name: Option<&str>| match name {
            Some(name) if !name.is_empty() => format!("{name}{suffix}"),
            _ => String::new(),
        };

        let help_suffix = opt.help_suffix();
        let help = match (spec.help().trim(), help_suffix.as_str()) {
            (text, "") => text.to_string(),
            ("", suffix) => suffix.to_string(),
            (text, suffix) => format!("{text} {suffix}"),
        };

        Self {
            short: with_suffix(spec.short()),
            long: with_suffix(spec.long()),
            help,
            extra: opt.extra_help(),
        }
    }
}

/// Render one line per option (short name, long name, help) followed by
/// any extra lines the option provides, such as enum choices.
pub fn render_help(registry: &Registry<'_>) -> String {
    let rows: Vec<Row> = registry.options().map(Row::new).collect();
    let short_width = rows.iter().map(|r| r.short.len()).max().unwrap_or(0);
    let long_width = rows.iter().map(|r| r.long.len()).max().unwrap_or(0);

    let mut out = String::from("Syntax:\n");
    for row in &rows {
        let line = format!(
            "  {:short_width$}  {:long_width$}  {}",
            row.short, row.long, row.help
        );
        out.push_str(line.trim_end());
        out.push('\n');

        for extra in &row.extra {
            let line = format!("  {:short_width$}  {:long_width$}  - {}", "", "", extra);
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}
