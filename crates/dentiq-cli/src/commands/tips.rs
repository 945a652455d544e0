//! Tips browser command.

use clap::Subcommand;
use serde::Serialize;

use dentiq_core::widgets::{CategoryTab, TipCard};
use dentiq_core::{Config, TipCategory, TipsBrowser};

#[derive(Subcommand)]
pub enum TipsAction {
    /// List the tips of a category
    List {
        /// Category id (daily, nutrition, problems, children)
        #[arg(long)]
        category: Option<TipCategory>,
        /// Tip ids to show as already read; repeatable
        #[arg(long = "read")]
        read: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the categories
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct TipsPage {
    title: &'static str,
    category: CategoryTab,
    tips: Vec<TipCard>,
    read_count: usize,
    total_count: usize,
}

pub fn run(action: TipsAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut browser = TipsBrowser::builtin()?.with_config(config);

    match action {
        TipsAction::List {
            category,
            read,
            json,
        } => {
            if let Some(category) = category {
                browser.select_category(category);
            }
            for id in &read {
                browser.mark_read(id)?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&page(&browser))?);
            } else {
                print!("{}", render_text(&browser));
            }
        }
        TipsAction::Categories { json } => {
            let tabs = browser.tabs();
            if json {
                println!("{}", serde_json::to_string_pretty(&tabs)?);
            } else {
                for tab in tabs {
                    let count = tab
                        .id
                        .parse::<TipCategory>()
                        .map(|c| browser.tips_in(c).len())
                        .unwrap_or_default();
                    println!("{:<10} {} ({count})", tab.id, tab.name);
                }
            }
        }
    }
    Ok(())
}

fn page(browser: &TipsBrowser) -> TipsPage {
    let category = browser
        .tabs()
        .into_iter()
        .find(|t| t.selected)
        .unwrap_or_else(|| {
            let c = browser.selected_category();
            CategoryTab {
                id: c.id().to_string(),
                name: c.name().to_string(),
                icon: c.icon(),
                selected: true,
            }
        });

    TipsPage {
        title: TipsBrowser::TITLE,
        category,
        tips: browser.visible_tips(),
        read_count: browser.read_count(),
        total_count: browser.total_count(),
    }
}

fn render_text(browser: &TipsBrowser) -> String {
    let mut out = format!(
        "{}\n== {} ==\n",
        TipsBrowser::TITLE,
        browser.selected_category().name()
    );

    for card in browser.visible_tips() {
        let mark = if card.is_read { "[x]" } else { "[ ]" };
        out.push_str(&format!(
            "\n{mark} {} ({}, {})\n    {}\n",
            card.title, card.difficulty_label, card.read_time, card.content
        ));
    }

    out.push('\n');
    out.push_str(&browser.footer());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_marks_read_tips() {
        let mut browser = TipsBrowser::builtin().unwrap();
        browser.mark_read("flossing-guide").unwrap();

        let text = render_text(&browser);
        assert!(text.contains("== Ежедневный уход =="));
        assert!(text.contains("[x] Как правильно использовать зубную нить (Средне, 3 мин)"));
        assert!(text.contains("[ ] Правильная техника чистки зубов"));
        assert!(text.ends_with("Прочитано советов: 1 из 9\n"));
    }

    #[test]
    fn page_reports_selected_category() {
        let mut browser = TipsBrowser::builtin().unwrap();
        browser.select_category(TipCategory::Children);
        let page = page(&browser);
        assert_eq!(page.category.id, "children");
        assert_eq!(page.tips.len(), 1);
        assert_eq!(page.total_count, 9);
    }
}
