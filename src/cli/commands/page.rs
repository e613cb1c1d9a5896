//! Landing page command handler.

use anyhow::Result;
use clap::ValueEnum;
use std::fmt::Write;

use super::load_config;
use crate::config::ResolveOptions;
use crate::i18n::{self, Bundle};
use crate::ui::Style;

/// A section of the landing page, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Home,
    About,
    Features,
    Faq,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Home, Self::About, Self::Features, Self::Faq];

    /// Navigation label for this section.
    pub const fn label(self, bundle: &Bundle) -> &'static str {
        match self {
            Self::Home => bundle.nav.home,
            Self::About => bundle.nav.about,
            Self::Features => bundle.nav.features,
            Self::Faq => bundle.nav.faq,
        }
    }
}

pub fn run_page(section: Option<Section>, options: &ResolveOptions) -> Result<()> {
    let config = load_config(options)?;
    let bundle = i18n::resolve(config.language);
    print!("{}", render_page(bundle, section));
    Ok(())
}

/// Renders the whole page, or a single section.
pub fn render_page(bundle: &Bundle, section: Option<Section>) -> String {
    let mut out = String::new();

    match section {
        Some(section) => render_section(&mut out, bundle, section),
        None => {
            render_nav(&mut out, bundle);
            for section in Section::ALL {
                render_section(&mut out, bundle, section);
            }
        }
    }

    out
}

fn render_nav(out: &mut String, bundle: &Bundle) {
    let labels: Vec<String> = Section::ALL
        .iter()
        .map(|s| Style::label(s.label(bundle)))
        .collect();
    let _ = writeln!(out, "{}", labels.join("  |  "));
    out.push('\n');
}

fn render_section(out: &mut String, bundle: &Bundle, section: Section) {
    match section {
        Section::Home => {
            let hero = &bundle.hero;
            let _ = writeln!(out, "{}", Style::header(hero.title));
            let _ = writeln!(out, "{}", Style::secondary(hero.subtitle));
            let _ = writeln!(
                out,
                "{} {}",
                Style::command(format!("[{}]", hero.cta)),
                Style::hint("aide chat")
            );
        }
        Section::About => {
            let _ = writeln!(out, "{}", Style::header(bundle.about.title));
            let _ = writeln!(out, "{}", bundle.about.description);
        }
        Section::Features => {
            let _ = writeln!(out, "{}", Style::header(bundle.features.title));
            for item in &bundle.features.items {
                let _ = writeln!(
                    out,
                    "  {} {}",
                    Style::value("•"),
                    Style::value(item.title)
                );
                let _ = writeln!(out, "    {}", Style::secondary(item.description));
            }
        }
        Section::Faq => {
            let _ = writeln!(out, "{}", Style::header(bundle.faq.title));
            for item in &bundle.faq.items {
                let _ = writeln!(out, "  {} {}", Style::code("?"), item.question);
                let _ = writeln!(out, "    {}", Style::secondary(item.answer));
            }
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_full_page_contains_every_section() {
        let bundle = i18n::resolve(Language::En);
        let page = render_page(bundle, None);

        assert!(page.contains(bundle.hero.title));
        assert!(page.contains(bundle.about.title));
        assert!(page.contains(bundle.features.title));
        assert!(page.contains(bundle.faq.title));
        assert!(page.contains(bundle.nav.features));
    }

    #[test]
    fn test_single_section_only() {
        let bundle = i18n::resolve(Language::Ru);
        let page = render_page(bundle, Some(Section::Faq));

        assert!(page.contains(bundle.faq.title));
        assert!(page.contains(bundle.faq.items[0].question));
        assert!(!page.contains(bundle.hero.title));
    }

    #[test]
    fn test_section_labels_follow_language() {
        assert_eq!(Section::Home.label(i18n::resolve(Language::Ru)), "Главная");
        assert_eq!(Section::Faq.label(i18n::resolve(Language::En)), "FAQ");
    }
}
