use shared_types::{Company, Language};

use super::types::MemberContext;

/// JSON array of the member projection embedded in the prompt
pub fn build_member_context(companies: &[Company]) -> Result<String, serde_json::Error> {
    let members: Vec<MemberContext> = companies.iter().map(MemberContext::from).collect();
    serde_json::to_string(&members)
}

pub fn language_directive(language: Language) -> &'static str {
    match language {
        Language::Id => "Jawablah dalam Bahasa Indonesia yang profesional dan solutif.",
        Language::En => "Answer in professional, solution-oriented English.",
    }
}

pub fn build_system_prompt(member_context: &str, language: Language) -> String {
    format!(
        r#"You are the Senior Expert Consultant for the Asosiasi Garmen dan Tekstil Indonesia (AGTI).

## Your Role

Provide expert advice on:
1. **Technical Issues**: Spinning, weaving, knitting, dyeing, finishing, and sewing processes. Troubleshooting defects.
2. **Management**: Factory efficiency, LEAN manufacturing, HR in the garment industry, cost control, supply chain.
3. **Regulations**: Export/import rules, SNI compliance, ISO standards, sustainability (ESG).
4. **Partner Matching**: You have access to the AGTI Member Database 2026.

## Data Context (AGTI Members)

{}

## Rules

1. {}
2. Use your GENERAL KNOWLEDGE to answer technical and management questions (e.g. "How to fix needle breakage?"). You are NOT limited to the member data for technical advice.
3. IF the user asks for a supplier or partner, ONLY recommend companies from the Data Context above.
4. Be professional, concise, and act like a senior industry consultant.
5. Format your response in Markdown."#,
        member_context,
        language_directive(language),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory::members;

    #[test]
    fn test_member_context_projection() {
        let context = build_member_context(&members()[..1]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&context).unwrap();
        let first = &parsed[0];
        let company = &members()[0];

        assert_eq!(first["name"], company.name.as_str());
        assert_eq!(first["type"], company.company_type.label());
        assert_eq!(first["location"], company.location().as_str());
        assert_eq!(first["certificates"], company.certifications.join(", ").as_str());
        assert_eq!(first["markets"], company.export_markets.join(", ").as_str());
        assert_eq!(first["email"], company.contact_email.as_str());
        assert_eq!(first["phone"], company.phone.as_str());

        let keys: Vec<&String> = first.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 9);
        assert!(first.get("description").is_none());
        assert!(first.get("employees").is_none());
    }

    #[test]
    fn test_prompt_embeds_context_and_language() {
        let prompt = build_system_prompt("[{\"name\":\"PT X\"}]", Language::Id);
        assert!(prompt.contains("[{\"name\":\"PT X\"}]"));
        assert!(prompt.contains("Bahasa Indonesia"));
        assert!(prompt.contains("Markdown"));

        let prompt = build_system_prompt("[]", Language::En);
        assert!(prompt.contains("solution-oriented English"));
        assert!(!prompt.contains("Bahasa Indonesia yang profesional"));
    }
}
