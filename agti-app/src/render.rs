//! Plain-text rendering of the views.

use directory::{display_phone, mailto_link, whatsapp_link};
use shared_types::{ChatMessage, ChatRole, Company, DashboardSummary, FilterState, Language, Selection};

use crate::i18n::{strings, Strings};

const BAR_WIDTH: usize = 30;

/// Group digits the way the language writes them: 12,345 or 12.345
pub fn format_number(value: u64, language: Language) -> String {
    let separator = match language {
        Language::En => ',',
        Language::Id => '.',
    };

    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(len)
}

fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
}

pub fn render_dashboard(summary: &DashboardSummary, language: Language) -> String {
    let t = &strings(language).dashboard;
    let mut output = heading(t.title);

    output.push_str(&format!(
        "\n{}: {}  ({})\n",
        t.total_members, summary.total_companies, t.active_registry
    ));
    output.push_str(&format!(
        "{}: {}  ({})\n",
        t.total_workforce,
        format_number(summary.total_employees, language),
        t.registered_employees
    ));

    output.push_str(&format!("\n{}\n", t.verified_compliance));
    let compliance = [
        (t.iso_9001, summary.compliance.iso_9001),
        (t.sni_mandatory, summary.compliance.sni_wajib),
        (t.sni_voluntary, summary.compliance.sni_sukarela),
        (t.oeko_tex, summary.compliance.oeko_tex),
    ];
    for (label, count) in compliance {
        output.push_str(&format!("  {:<16} {:>4}\n", label, count));
    }

    output.push_str(&format!("\n{}\n", t.industry_composition));
    let max = summary.categories.iter().map(|c| c.count).max().unwrap_or(0);
    for entry in &summary.categories {
        let datum = entry.datum();
        output.push_str(&format!(
            "  {:<16} {:>4} {}\n",
            datum.label,
            datum.count,
            bar(datum.count, max)
        ));
    }

    output.push_str(&format!("\n{}\n", t.regional_distribution));
    let max = summary.regions.iter().map(|r| r.count).max().unwrap_or(0);
    for entry in &summary.regions {
        let datum = entry.datum();
        output.push_str(&format!(
            "  {:<16} {:>4} {}\n",
            datum.label,
            datum.count,
            bar(datum.count, max)
        ));
    }

    output.push_str(&format!("\n{}\n", t.last_updated));
    output
}

fn describe_filter(filter: &FilterState, t: &Strings) -> String {
    let company_type = match &filter.company_type {
        Selection::All => t.directory.all_types.to_string(),
        Selection::Only(company_type) => company_type.to_string(),
    };
    let province = match &filter.province {
        Selection::All => t.directory.all_regions.to_string(),
        Selection::Only(province) => province.to_string(),
    };

    if filter.search.is_empty() {
        format!("{} | {}", company_type, province)
    } else {
        format!("\"{}\" | {} | {}", filter.search, company_type, province)
    }
}

pub fn render_directory(filter: &FilterState, results: &[&Company], language: Language) -> String {
    let t = strings(language);
    let mut output = heading(t.directory.title);

    output.push_str(&format!("{}\n", describe_filter(filter, t)));
    output.push_str(&format!(
        "{} {} {}\n",
        t.directory.found,
        results.len(),
        t.directory.companies
    ));

    if results.is_empty() {
        output.push_str(&format!("\n{}\n", t.directory.no_results));
        if filter.has_active_filters() {
            output.push_str(&format!("({}: agti directory)\n", t.directory.reset_filters));
        }
        return output;
    }

    for company in results {
        output.push('\n');
        output.push_str(&render_company_card(company, language));
    }
    output
}

pub fn render_company_card(company: &Company, language: Language) -> String {
    let t = &strings(language).directory;
    let mut output = String::new();

    let badge = if company.verified {
        format!(" [{}]", t.verified)
    } else {
        String::new()
    };
    output.push_str(&format!(
        "[{}] {}{}  <{}>\n",
        company.id, company.name, badge, company.company_type
    ));
    output.push_str(&format!("    {}\n", company.description));
    output.push_str(&format!(
        "    {} | {} | {}\n",
        company.location(),
        format_number(u64::from(company.employees), language),
        company
            .certifications
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    ));
    output.push_str(&format!(
        "    {} {}\n",
        t.key_markets,
        company.export_markets.join(", ")
    ));
    output.push_str(&format!("    {}: {}\n", t.capacity, company.capacity));
    output.push_str(&format!("    {}: agti show {}\n", t.view_profile, company.id));
    output
}

pub fn render_company_detail(company: &Company, language: Language) -> String {
    let t = &strings(language).detail;
    let mut output = heading(&company.name);

    output.push_str(&format!("{} | {}\n", company.company_type, company.location()));
    if company.verified {
        output.push_str(&format!("✔ {}\n", t.verified_member));
    }

    output.push_str(&format!("\n{}\n  {}\n", t.overview, company.description));
    output.push_str(&format!("\n{}\n  {}\n", t.specialization, company.specialization));

    output.push_str(&format!(
        "\n{}\n  {} ({})\n",
        t.primary_email,
        company.contact_email,
        mailto_link(company)
    ));
    output.push_str(&format!(
        "{}\n  {} ({}: {})\n",
        t.contact_number,
        display_phone(company),
        t.chat_wa,
        whatsapp_link(company)
    ));

    output.push_str(&format!("\n{}\n", t.export_markets));
    for market in &company.export_markets {
        output.push_str(&format!("  - {}\n", market));
    }

    output.push_str(&format!("\n{}\n", t.production_stats));
    output.push_str(&format!(
        "  {}: {}\n",
        t.workforce,
        format_number(u64::from(company.employees), language)
    ));
    output.push_str(&format!("  {}: {}\n", t.monthly_capacity, company.capacity));

    output.push_str(&format!("\n{}\n", t.compliance));
    for cert in &company.certifications {
        output.push_str(&format!("  - {}\n", cert));
    }

    output.push_str(&format!("\n{}: agti directory\n", t.back));
    output
}

pub fn render_message(message: &ChatMessage) -> String {
    let speaker = match message.role {
        ChatRole::User => "you",
        ChatRole::Assistant => "agti",
    };
    format!("{}> {}\n", speaker, message.content)
}

pub fn render_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_about(language: Language) -> String {
    let t = strings(language);
    let about = &t.about;
    let mut output = heading(about.title);

    output.push_str(&format!("{}\n\n{}\n", about.subtitle, about.description));
    for (title, description) in &about.features {
        output.push_str(&format!("\n* {}\n  {}\n", title, description));
    }
    output.push_str(&format!("\n{}\n  {}\n", about.vision_title, about.vision));
    output.push_str(&format!("\n{}\n  {}\n", about.mission_title, about.mission));
    output.push_str(&format!("\n{} • {}\n", t.sidebar.member_title, t.ai.powered_by));
    output
}
