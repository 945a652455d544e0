use clap::ValueEnum;

use dentiq_core::content;

#[derive(Clone, Copy, ValueEnum)]
pub enum CatalogKind {
    Calculator,
    Quest,
    Tips,
}

pub fn run(which: CatalogKind) -> Result<(), Box<dyn std::error::Error>> {
    let json = match which {
        CatalogKind::Calculator => serde_json::to_string_pretty(&content::calculator_questions()?)?,
        CatalogKind::Quest => serde_json::to_string_pretty(&content::quest_stages()?)?,
        CatalogKind::Tips => serde_json::to_string_pretty(&content::tips()?)?,
    };
    println!("{json}");
    Ok(())
}
