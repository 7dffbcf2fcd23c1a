//! Output rendering for the `--output` formats.
//!
//! A [`Printer`] is built once per invocation from the global flags and
//! handles both shaping (table via `tabled`, JSON/YAML via serde, plain
//! identifiers for scripting) and emission (stdout, honoring `--quiet`).

use std::io::{self, IsTerminal, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Pretty-printed JSON for structured data with no table form.
pub fn render_json_pretty<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).expect("serialization should not fail")
}

/// Renders command results in the format selected by `--output`.
pub struct Printer {
    format: OutputFormat,
    quiet: bool,
}

impl Printer {
    pub fn new(global: &GlobalOpts) -> Self {
        Self {
            format: global.output.clone(),
            quiet: global.quiet,
        }
    }

    /// Print a listing: a table of `to_row` rows, serde output of the
    /// items themselves, or one `id_of` identifier per line for `plain`.
    pub fn list<T, R>(&self, items: &[T], to_row: impl Fn(&T) -> R, id_of: impl Fn(&T) -> String)
    where
        T: serde::Serialize,
        R: Tabled,
    {
        self.emit(&self.fmt_list(items, to_row, id_of));
    }

    /// Print a single record. Table mode delegates to `detail`, which
    /// returns a pre-formatted field/value view.
    pub fn single<T>(&self, item: &T, detail: impl Fn(&T) -> String, id_of: impl Fn(&T) -> String)
    where
        T: serde::Serialize,
    {
        self.emit(&self.fmt_single(item, detail, id_of));
    }

    /// Print pre-rendered text, respecting quiet mode.
    pub fn emit(&self, text: &str) {
        if self.quiet || text.is_empty() {
            return;
        }
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{text}");
    }

    fn fmt_list<T, R>(&self, items: &[T], to_row: impl Fn(&T) -> R, id_of: impl Fn(&T) -> String) -> String
    where
        T: serde::Serialize,
        R: Tabled,
    {
        match self.format {
            OutputFormat::Table => {
                let rows: Vec<R> = items.iter().map(to_row).collect();
                Table::new(rows).with(Style::rounded()).to_string()
            }
            OutputFormat::Plain => items.iter().map(id_of).collect::<Vec<_>>().join("\n"),
            _ => self.serialize(items),
        }
    }

    fn fmt_single<T>(&self, item: &T, detail: impl Fn(&T) -> String, id_of: impl Fn(&T) -> String) -> String
    where
        T: serde::Serialize,
    {
        match self.format {
            OutputFormat::Table => detail(item),
            OutputFormat::Plain => id_of(item),
            _ => self.serialize(item),
        }
    }

    fn serialize<T: serde::Serialize + ?Sized>(&self, data: &T) -> String {
        match self.format {
            OutputFormat::JsonCompact => {
                serde_json::to_string(data).expect("serialization should not fail")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(data).expect("serialization should not fail")
            }
            _ => render_json_pretty(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputFormat, Printer};
    use tabled::Tabled;

    #[derive(serde::Serialize)]
    struct Item {
        id: String,
        label: String,
    }

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "ID")]
        id: String,
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: "a-1".into(), label: "first".into() },
            Item { id: "a-2".into(), label: "second".into() },
        ]
    }

    fn printer(format: OutputFormat) -> Printer {
        Printer { format, quiet: false }
    }

    #[test]
    fn plain_lists_one_identifier_per_line() {
        let out = printer(OutputFormat::Plain).fmt_list(
            &items(),
            |i| Row { id: i.id.clone() },
            |i| i.id.clone(),
        );
        assert_eq!(out, "a-1\na-2");
    }

    #[test]
    fn json_serializes_the_items_not_the_rows() {
        let out = printer(OutputFormat::JsonCompact).fmt_list(
            &items(),
            |i| Row { id: i.id.clone() },
            |i| i.id.clone(),
        );
        assert_eq!(out, r#"[{"id":"a-1","label":"first"},{"id":"a-2","label":"second"}]"#);
    }

    #[test]
    fn table_renders_rows() {
        let out = printer(OutputFormat::Table).fmt_list(
            &items(),
            |i| Row { id: i.id.clone() },
            |i| i.id.clone(),
        );
        assert!(out.contains("ID"), "got: {out}");
        assert!(out.contains("a-1"), "got: {out}");
    }

    #[test]
    fn single_uses_detail_in_table_mode() {
        let item = Item { id: "a-1".into(), label: "first".into() };
        let out = printer(OutputFormat::Table)
            .fmt_single(&item, |i| format!("id: {}", i.id), |i| i.id.clone());
        assert_eq!(out, "id: a-1");
    }

    #[test]
    fn yaml_round_trips_through_serde() {
        let item = Item { id: "a-1".into(), label: "first".into() };
        let out = printer(OutputFormat::Yaml)
            .fmt_single(&item, |i| i.id.clone(), |i| i.id.clone());
        assert!(out.contains("id: a-1"), "got: {out}");
        assert!(out.contains("label: first"), "got: {out}");
    }
}
