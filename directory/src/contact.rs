use shared_types::Company;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// WhatsApp click-to-chat link for the company phone number
pub fn whatsapp_link(company: &Company) -> String {
    format!("{}{}", WHATSAPP_BASE, company.phone)
}

pub fn mailto_link(company: &Company) -> String {
    format!("mailto:{}", company.contact_email)
}

/// International display form, e.g. "+6281122334455"
pub fn display_phone(company: &Company) -> String {
    format!("+{}", company.phone)
}
