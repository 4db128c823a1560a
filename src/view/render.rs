use minijinja::{context, Environment};
use tabled::{builder::Builder, settings::Style};

use super::model::{ComparisonView, Fragment, Page, Report, SelectControl, StatCard};
use crate::Result;


/// Turns view models into output text.
pub trait Renderer {
    /// Content of one output region.
    fn render(&self, fragment: &Fragment) -> Result<String>;

    /// The full dashboard: tabs, dropdowns and every region.
    fn render_page(&self, page: &Page) -> Result<String>;

    /// Populated selection dropdowns.
    fn render_selects(&self, selects: &[SelectControl]) -> Result<String>;
}

/// HTML output through minijinja. Template names end in `.html`, so every
/// interpolated value is escaped.
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template("fragment.html", include_str!("templates/fragment.html"))?;
        env.add_template("stats_grid.html", include_str!("templates/stats_grid.html"))?;
        env.add_template("selects.html", include_str!("templates/selects.html"))?;
        env.add_template("page.html", include_str!("templates/page.html"))?;
        Ok(Self { env })
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, fragment: &Fragment) -> Result<String> {
        let tmpl = self.env.get_template("fragment.html")?;
        Ok(tmpl.render(context! { fragment => fragment })?)
    }

    fn render_page(&self, page: &Page) -> Result<String> {
        let tmpl = self.env.get_template("page.html")?;
        Ok(tmpl.render(context! { page => page })?)
    }

    fn render_selects(&self, selects: &[SelectControl]) -> Result<String> {
        let tmpl = self.env.get_template("selects.html")?;
        Ok(tmpl.render(context! { selects => selects })?)
    }
}

/// Plain terminal output with box-drawn tables.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn stat_table(cards: &[StatCard]) -> String {
        let mut builder = Builder::default();
        builder.push_record(cards.iter().map(|c| c.label.to_string()));
        builder.push_record(cards.iter().map(|c| c.value.clone()));
        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }

    fn report(report: &Report) -> String {
        let mut out = String::new();
        if let Some(heading) = &report.heading {
            out.push_str(heading);
            out.push('\n');
        }
        out.push_str(&Self::stat_table(&report.cards));
        out.push('\n');

        let mut builder = Builder::default();
        builder.push_record(report.table.headers.iter().map(|h| h.to_string()));
        for row in &report.table.rows {
            builder.push_record(row.iter().cloned());
        }
        let mut table = builder.build();
        table.with(Style::rounded());
        out.push_str(&table.to_string());
        out
    }

    fn comparison(view: &ComparisonView) -> String {
        let mut builder = Builder::default();
        let mut header = vec![String::new()];
        header.extend(view.entries.iter().map(|e| e.title.clone()));
        builder.push_record(header);

        // Every entry carries the same three cards in the same order.
        let labels: Vec<&str> = view
            .entries
            .first()
            .map(|e| e.cards.iter().map(|c| c.label).collect())
            .unwrap_or_default();
        for (idx, label) in labels.into_iter().enumerate() {
            let mut row = vec![label.to_string()];
            row.extend(view.entries.iter().map(|e| {
                e.cards
                    .get(idx)
                    .map(|c| c.value.clone())
                    .unwrap_or_default()
            }));
            builder.push_record(row);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        format!("{}\n{}", view.heading, table)
    }
}

impl Renderer for TextRenderer {
    fn render(&self, fragment: &Fragment) -> Result<String> {
        Ok(match fragment {
            Fragment::Empty => String::new(),
            Fragment::Loading { message } | Fragment::Error { message } => message.clone(),
            Fragment::Report(report) => Self::report(report),
            Fragment::Comparison(view) => Self::comparison(view),
        })
    }

    fn render_page(&self, page: &Page) -> Result<String> {
        let mut sections = vec![page.title.to_string()];
        for pane in &page.panes {
            let marker = if pane.active { "*" } else { " " };
            let mut section = format!("{} {}", marker, pane.title);
            let body = self.render(&pane.fragment)?;
            if !body.is_empty() {
                section.push('\n');
                section.push_str(&body);
            }
            sections.push(section);
        }
        Ok(sections.join("\n\n"))
    }

    fn render_selects(&self, selects: &[SelectControl]) -> Result<String> {
        let mut lines = Vec::new();
        for select in selects {
            lines.push(format!("[{}]", select.id));
            lines.extend(select.options.iter().map(|o| format!("  {}", o)));
        }
        Ok(lines.join("\n"))
    }
}

/// The view models themselves, as pretty JSON.
#[derive(Debug, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, fragment: &Fragment) -> Result<String> {
        Ok(serde_json::to_string_pretty(fragment)?)
    }

    fn render_page(&self, page: &Page) -> Result<String> {
        Ok(serde_json::to_string_pretty(page)?)
    }

    fn render_selects(&self, selects: &[SelectControl]) -> Result<String> {
        Ok(serde_json::to_string_pretty(selects)?)
    }
}
