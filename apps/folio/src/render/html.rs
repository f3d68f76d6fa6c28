//! HTML output for a `PageDocument`: layout chrome, SEO tags and the
//! EntryCard / Chip / RepositoryCard markup.

use crate::render::view::{
    Card, Chip, EntryCard, LanguageChip, PageDocument, RepositoryCard, Section, SectionKind,
    SeoMeta,
};

const STYLES: &str = r#"
body { margin: 0; font-family: -apple-system, "Segoe UI", Roboto, sans-serif; color: #222; }
.background { background: #f5f5f7; min-height: 100vh; }
.site-header, main, .site-footer { max-width: 860px; margin: 0 auto; padding: 0 1rem; }
.site-header h1 { margin: 0; padding: 1.5rem 0 0.5rem; }
.experience { background: #fff; border-radius: 8px; margin: 1rem 0; padding: 1rem; }
.experience a { color: inherit; text-decoration: none; }
.experience-header { display: flex; align-items: center; gap: 0.75rem; }
.icon { display: inline-block; width: 30px; height: 30px; }
.title { margin: 0; }
.location { color: #777; font-size: 0.85rem; margin: 0.25rem 0 0; }
.skills, .languages, .topics { display: flex; flex-wrap: wrap; gap: 0.4rem; }
.chip { border-radius: 12px; padding: 0.15rem 0.6rem; font-size: 0.8rem; }
.repositories-container { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }
.repository-card { background: #fff; border-radius: 8px; padding: 1rem; }
.repository-card a { color: #0366d6; text-decoration: none; }
.language-dot { display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 0.3rem; background: #ccc; }
.topic { background: #e1ecf4; color: #0366d6; border-radius: 12px; padding: 0.1rem 0.5rem; font-size: 0.75rem; }
.site-footer { color: #999; font-size: 0.75rem; padding: 2rem 1rem; }
"#;

/// Renders the full HTML document. All text and attribute values are escaped.
pub fn render_html(page: &PageDocument) -> String {
    let mut out = String::with_capacity(16 * 1024);

    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\">\n", escape(&page.seo.lang)));
    out.push_str("<head>\n");
    render_head(&mut out, &page.seo);
    out.push_str("</head>\n<body>\n<div class=\"background\">\n");

    out.push_str(&format!(
        "<header class=\"site-header\"><h1>{}</h1></header>\n<main>\n",
        escape(&page.seo.title)
    ));
    for section in &page.sections {
        render_section(&mut out, section);
    }
    out.push_str("</main>\n");

    out.push_str("<footer class=\"site-footer\">");
    if let Some(at) = page.generated_at {
        out.push_str(&format!(
            "Généré le <time datetime=\"{}\">{}</time>",
            at.to_rfc3339(),
            at.format("%Y-%m-%d")
        ));
    }
    out.push_str("</footer>\n</div>\n</body>\n</html>\n");

    out
}

fn render_head(out: &mut String, seo: &SeoMeta) {
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(&seo.title)));
    out.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape(&seo.description)
    ));
    if !seo.author.is_empty() {
        out.push_str(&format!(
            "<meta name=\"author\" content=\"{}\">\n",
            escape(&seo.author)
        ));
    }
    out.push_str(&format!(
        "<meta property=\"og:title\" content=\"{}\">\n",
        escape(&seo.title)
    ));
    out.push_str(&format!(
        "<meta property=\"og:description\" content=\"{}\">\n",
        escape(&seo.description)
    ));
    out.push_str("<meta property=\"og:type\" content=\"website\">\n");
    out.push_str(&format!("<style>{STYLES}</style>\n"));
}

fn render_section(out: &mut String, section: &Section) {
    let class = match section.kind {
        SectionKind::Experience => "experience",
        SectionKind::Education => "education",
        SectionKind::Repositories => "repositories",
    };
    out.push_str(&format!("<section class=\"section section-{class}\">\n"));
    out.push_str(&format!("<h2>{}</h2>\n", escape(&section.heading)));

    let gallery = section.kind == SectionKind::Repositories;
    if gallery {
        out.push_str("<div class=\"repositories-container\">\n");
    }
    for card in &section.cards {
        match card {
            Card::Entry(entry) => out.push_str(&entry_card_html(entry)),
            Card::Repository(repository) => out.push_str(&repository_card_html(repository)),
        }
    }
    if gallery {
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}

/// The header and icon sit inside the outbound link. The skills row is
/// always emitted, empty or not.
pub fn entry_card_html(card: &EntryCard) -> String {
    let icon = card
        .icon
        .as_ref()
        .map(|asset| {
            format!(
                "<img src=\"{}\" width=\"{}\" height=\"{}\" alt=\"\">",
                escape(&asset.src),
                asset.width,
                asset.height
            )
        })
        .unwrap_or_default();

    let location = if card.location.is_empty() {
        String::new()
    } else {
        format!("<p class=\"location\">{}</p>", escape(&card.location))
    };

    let chips: String = card.skills.iter().map(chip_html).collect();

    format!(
        "<div class=\"experience\" data-key=\"{key}\">\
         <a target=\"_blank\" rel=\"noopener noreferrer\" href=\"{link}\">\
         <div class=\"experience-header\"><span class=\"icon\">{icon}</span>\
         <h3 class=\"title\">{title}</h3></div></a>\
         <div class=\"description\">{location}<p class=\"excerpt\">{excerpt}</p>\
         <div class=\"skills\">{chips}</div></div></div>\n",
        key = card.key,
        link = escape(&card.link),
        title = escape(&card.title),
        excerpt = escape(&card.excerpt),
    )
}

pub fn chip_html(chip: &Chip) -> String {
    format!(
        "<span class=\"chip\" style=\"background-color: {}; color: {}\">{}</span>",
        escape(&chip.background_color),
        escape(&chip.color),
        escape(&chip.text)
    )
}

pub fn repository_card_html(card: &RepositoryCard) -> String {
    let description = card
        .description
        .as_ref()
        .map(|d| format!("<p class=\"repository-description\">{}</p>", escape(d)))
        .unwrap_or_default();
    let languages: String = card.languages.iter().map(language_html).collect();
    let topics: String = card
        .topics
        .iter()
        .map(|t| format!("<span class=\"topic\">{}</span>", escape(t)))
        .collect();

    format!(
        "<div class=\"repository-card\" data-key=\"{key}\">\
         <a target=\"_blank\" rel=\"noopener noreferrer\" href=\"{url}\">\
         <h3 class=\"repository-name\">{name}</h3></a>{description}\
         <div class=\"languages\">{languages}</div>\
         <div class=\"topics\">{topics}</div></div>\n",
        key = card.key,
        url = escape(&card.url),
        name = escape(&card.name),
    )
}

fn language_html(language: &LanguageChip) -> String {
    let dot_style = language
        .color
        .as_ref()
        .map(|c| format!(" style=\"background-color: {}\"", escape(c)))
        .unwrap_or_default();
    format!(
        "<span class=\"language\"><span class=\"language-dot\"{dot_style}></span>{}</span>",
        escape(&language.name)
    )
}

pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
