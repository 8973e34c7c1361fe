//! HTML, sitemap and robots templates for one generated site.
//!
//! Every value interpolated into markup goes through [`escape_html`].
//! JSON-LD blocks are built with `serde_json` with `<` written as `\u003c`
//! so no value can close the script element.

use std::fmt::Write as _;

use serde_json::{Value, json};

/// Placeholder contact number printed on every page.
pub const DEFAULT_PHONE: &str = "(555) 123-4567";

/// A sub-service page rendered for every site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubService {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
}

impl SubService {
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

pub const SUB_SERVICES: [SubService; 3] = [
    SubService {
        name: "Water Extraction",
        slug: "water-extraction",
        description: "Rapid removal of standing water using industrial pumps and vacuums.",
    },
    SubService {
        name: "Structural Drying",
        slug: "structural-drying",
        description: "Drying and dehumidification of walls, floors and other structural elements.",
    },
    SubService {
        name: "Mold Remediation",
        slug: "mold-remediation",
        description: "Safe removal and prevention of mold and mildew growth.",
    },
];

pub(crate) const HOME_FILE: &str = "index.html";
pub(crate) const FAQ_FILE: &str = "faq.html";

/// Values shared by every page of a site.
pub(crate) struct PageContext<'a> {
    pub niche: &'a str,
    pub city: &'a str,
    pub phone: &'a str,
    pub slug: &'a str,
    pub year: i32,
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

fn json_ld(value: &Value) -> String {
    let text = format!("{value:#}").replace('<', "\\u003c");
    format!("<script type=\"application/ld+json\">\n{text}\n</script>")
}

/// Files of a site in sitemap order: home, sub-services, FAQ.
pub(crate) fn page_files() -> Vec<String> {
    let mut files = vec![HOME_FILE.to_owned()];
    files.extend(SUB_SERVICES.iter().map(SubService::file_name));
    files.push(FAQ_FILE.to_owned());
    files
}

fn layout(ctx: &PageContext<'_>, title: &str, description: &str, head: &str, main: &str) -> String {
    let niche = escape_html(ctx.niche);
    let city = escape_html(ctx.city);
    let phone = escape_html(ctx.phone);
    let mut nav = format!("<a href=\"{HOME_FILE}\">Home</a>");
    for service in &SUB_SERVICES {
        let _ = write!(nav, "\n        <a href=\"{}\">{}</a>", service.file_name(), service.name);
    }
    let _ = write!(nav, "\n        <a href=\"{FAQ_FILE}\">FAQ</a>");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <link rel="stylesheet" href="static/style.css">
{head}
</head>
<body>
    <header>
        <p class="brand">{niche} {city}</p>
        <p class="call">24/7 Emergency Line: <a href="tel:{phone}">{phone}</a></p>
        <nav>
        {nav}
        </nav>
    </header>
    <main>
{main}
    </main>
    <footer>
        <p>&copy; {year} {niche} {city}. Serving {city} and surrounding areas.</p>
    </footer>
</body>
</html>
"#,
        title = escape_html(title),
        description = escape_html(description),
        year = ctx.year,
    )
}

fn lead_form(ctx: &PageContext<'_>, selected: Option<&str>) -> String {
    let mut options = String::from("<option value=\"\">General inquiry</option>");
    for service in &SUB_SERVICES {
        let marker = if selected == Some(service.name) { " selected" } else { "" };
        let _ = write!(options, "<option value=\"{0}\"{marker}>{0}</option>", service.name);
    }
    format!(
        r#"        <section id="contact">
            <h2>Request Service in {city}</h2>
            <form class="lead-form" action="/api/lead" method="post">
                <input type="hidden" name="site_slug" value="{slug}">
                <label>Name <input type="text" name="name" required></label>
                <label>Phone <input type="tel" name="phone" required></label>
                <label>Email <input type="email" name="email"></label>
                <label>Service <select name="service">{options}</select></label>
                <label>Message <textarea name="message" rows="4"></textarea></label>
                <button type="submit">Get Help Now</button>
            </form>
        </section>"#,
        city = escape_html(ctx.city),
        slug = escape_html(ctx.slug),
    )
}

fn business_schema(ctx: &PageContext<'_>) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": format!("{} {}", ctx.niche, ctx.city),
        "address": {
            "@type": "PostalAddress",
            "addressLocality": ctx.city,
            "addressRegion": "",
            "postalCode": "",
            "streetAddress": "",
        },
        "telephone": ctx.phone,
        "priceRange": "$$$",
        "areaServed": { "@type": "City", "name": ctx.city },
        "url": format!("/{}/{HOME_FILE}", ctx.slug),
    })
}

pub(crate) fn home_page(ctx: &PageContext<'_>) -> String {
    let niche = escape_html(ctx.niche);
    let city = escape_html(ctx.city);
    let mut cards = String::new();
    for service in &SUB_SERVICES {
        let _ = write!(
            cards,
            "\n            <article>\n                <h3><a href=\"{}\">{}</a></h3>\n                <p>{}</p>\n            </article>",
            service.file_name(),
            service.name,
            service.description,
        );
    }
    let main = format!(
        r#"        <section class="hero">
            <h1>{niche} in {city}</h1>
            <p>Fast, certified {niche_lower} for homes and businesses across {city}. Call now or request a callback below.</p>
        </section>
        <section class="services">
            <h2>Our Services</h2>{cards}
        </section>
{form}"#,
        niche_lower = escape_html(&ctx.niche.to_lowercase()),
        form = lead_form(ctx, None),
    );
    layout(
        ctx,
        &format!("{} in {} | 24/7 Local Experts", ctx.niche, ctx.city),
        &format!("Trusted {} services in {}. Available 24/7.", ctx.niche, ctx.city),
        &json_ld(&business_schema(ctx)),
        &main,
    )
}

pub(crate) fn service_page(ctx: &PageContext<'_>, service: &SubService) -> String {
    let main = format!(
        r#"        <section class="hero">
            <h1>{name} in {city}</h1>
            <p>{description}</p>
            <p>Part of our {niche} services. Technicians are on call around the clock.</p>
        </section>
{form}"#,
        name = service.name,
        city = escape_html(ctx.city),
        description = service.description,
        niche = escape_html(ctx.niche),
        form = lead_form(ctx, Some(service.name)),
    );
    layout(
        ctx,
        &format!("{} in {} | {}", service.name, ctx.city, ctx.niche),
        &format!("{} {} in {}.", service.name, ctx.niche.to_lowercase(), ctx.city),
        "",
        &main,
    )
}

/// Question/answer pairs for the FAQ page.
pub(crate) fn faqs(niche: &str) -> [(String, &'static str); 3] {
    let niche = niche.to_lowercase();
    [
        (
            format!("How quickly can you respond to {niche} emergencies?"),
            "We offer 24/7 emergency response and aim to arrive within one hour of your call.",
        ),
        (
            "Are your technicians certified?".to_owned(),
            "Yes, all of our technicians are IICRC-certified and trained in the latest restoration techniques.",
        ),
        (
            format!("Do you work with insurance companies for {niche} claims?"),
            "We can coordinate directly with your insurer to streamline the claims process.",
        ),
    ]
}

pub(crate) fn faq_page(ctx: &PageContext<'_>) -> String {
    let faqs = faqs(ctx.niche);
    let entities: Vec<Value> = faqs
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": { "@type": "Answer", "text": answer },
            })
        })
        .collect();
    let schema = json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entities,
    });

    let mut items = String::new();
    for (question, answer) in &faqs {
        let _ = write!(
            items,
            "\n            <div class=\"faq\">\n                <h3>{}</h3>\n                <p>{}</p>\n            </div>",
            escape_html(question),
            escape_html(answer),
        );
    }
    let main = format!(
        "        <section>\n            <h1>Frequently Asked Questions</h1>{items}\n        </section>\n{}",
        lead_form(ctx, None)
    );
    layout(
        ctx,
        &format!("{} FAQ | {}", ctx.niche, ctx.city),
        &format!("Answers to common {} questions in {}.", ctx.niche.to_lowercase(), ctx.city),
        &json_ld(&schema),
        &main,
    )
}

pub(crate) fn sitemap(slug: &str) -> String {
    let slug = escape_html(slug);
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for file in page_files() {
        let _ = writeln!(xml, "  <url><loc>/{slug}/{file}</loc></url>");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub(crate) fn robots(slug: &str) -> String {
    format!("User-agent: *\nAllow: /\nSitemap: /{slug}/sitemap.xml\n")
}
