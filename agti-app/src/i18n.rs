//! Localized UI strings.

use shared_types::Language;

pub struct Strings {
    pub dashboard: DashboardStrings,
    pub directory: DirectoryStrings,
    pub detail: DetailStrings,
    pub ai: AiStrings,
    pub about: AboutStrings,
    pub sidebar: SidebarStrings,
}

pub struct DashboardStrings {
    pub title: &'static str,
    pub total_members: &'static str,
    pub active_registry: &'static str,
    pub verified_compliance: &'static str,
    pub iso_9001: &'static str,
    pub sni_mandatory: &'static str,
    pub sni_voluntary: &'static str,
    pub oeko_tex: &'static str,
    pub total_workforce: &'static str,
    pub registered_employees: &'static str,
    pub industry_composition: &'static str,
    pub regional_distribution: &'static str,
    pub last_updated: &'static str,
}

pub struct DirectoryStrings {
    pub title: &'static str,
    pub all_types: &'static str,
    pub all_regions: &'static str,
    pub found: &'static str,
    pub companies: &'static str,
    pub no_results: &'static str,
    pub view_profile: &'static str,
    pub capacity: &'static str,
    pub verified: &'static str,
    pub key_markets: &'static str,
    pub reset_filters: &'static str,
}

pub struct DetailStrings {
    pub back: &'static str,
    pub verified_member: &'static str,
    pub overview: &'static str,
    pub specialization: &'static str,
    pub primary_email: &'static str,
    pub contact_number: &'static str,
    pub export_markets: &'static str,
    pub production_stats: &'static str,
    pub compliance: &'static str,
    pub workforce: &'static str,
    pub monthly_capacity: &'static str,
    pub chat_wa: &'static str,
}

pub struct AiStrings {
    pub title: &'static str,
    pub intro: &'static str,
    pub placeholder: &'static str,
    pub analyzing: &'static str,
    pub powered_by: &'static str,
}

pub struct AboutStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: [(&'static str, &'static str); 4],
    pub vision_title: &'static str,
    pub vision: &'static str,
    pub mission_title: &'static str,
    pub mission: &'static str,
}

pub struct SidebarStrings {
    pub dashboard: &'static str,
    pub directory: &'static str,
    pub ai: &'static str,
    pub about: &'static str,
    pub member_title: &'static str,
}

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Id => &ID,
    }
}

static EN: Strings = Strings {
    dashboard: DashboardStrings {
        title: "Executive Overview",
        total_members: "Total Members",
        active_registry: "Active 2026 Registry",
        verified_compliance: "Verified Compliance",
        iso_9001: "ISO 9001",
        sni_mandatory: "Mandatory SNI",
        sni_voluntary: "Voluntary SNI",
        oeko_tex: "OEKO-TEX",
        total_workforce: "Total Workforce",
        registered_employees: "Registered Employees",
        industry_composition: "Industry Composition",
        regional_distribution: "Regional Distribution",
        last_updated: "Last Updated: October 2025",
    },
    directory: DirectoryStrings {
        title: "Member Directory",
        all_types: "All Industry Types",
        all_regions: "All Regions",
        found: "Found",
        companies: "companies matching criteria",
        no_results: "No companies found matching your filters.",
        view_profile: "View Full Profile",
        capacity: "CAPACITY",
        verified: "Verified",
        key_markets: "Key Markets:",
        reset_filters: "Reset Filters",
    },
    detail: DetailStrings {
        back: "Back to Directory",
        verified_member: "Verified Member",
        overview: "Company Overview",
        specialization: "Specialization",
        primary_email: "Primary Email",
        contact_number: "Contact Number",
        export_markets: "Export Markets",
        production_stats: "Production Stats",
        compliance: "Compliance & Certifications",
        workforce: "Total Workforce",
        monthly_capacity: "Monthly Capacity",
        chat_wa: "Chat WhatsApp",
    },
    ai: AiStrings {
        title: "Business & Technical Consultation",
        intro: "**Welcome.** I am your Expert Consultant for the Textile & Garment Industry. You can discuss **Technical Issues** (defects, machine efficiency), **Management** (HR, LEAN manufacturing, ERP, Productivity, ISO 9001:2015).",
        placeholder: "Describe your problem (e.g., 'How to reduce fabric shrinkage?' or 'Management tips for high turnover')...",
        analyzing: "Consulting expert knowledge base...",
        powered_by: "Powered by Gemini 2.5 Flash • AGTI Expert System",
    },
    about: AboutStrings {
        title: "About DIRECTORY AGTI 2026",
        subtitle: "The official integrated database for the Indonesian Textile and Garment Association.",
        description: "DIRECTORY AGTI 2026 is a digital platform designed to centralize data on textile and garment companies across Indonesia. We aim to facilitate transparency, ease of business, and global connectivity for our members.",
        features: [
            ("Comprehensive Database", "Detailed profiles of factories, spinning mills, and accessory suppliers."),
            ("Verified Compliance", "Tracking of critical certifications like ISO, SNI, and OEKO-TEX."),
            ("Expert Consultation", "Integrated Expert consultant to solve technical and management challenges."),
            ("Global Connectivity", "Connecting Indonesian manufacturers with international markets."),
        ],
        vision_title: "Our Vision",
        vision: "To become the global reference for the Indonesian textile industry and drive sustainable growth.",
        mission_title: "Our Mission",
        mission: "To provide accurate data, foster innovation through technology, and bridge the gap between local manufacturers and the global supply chain.",
    },
    sidebar: SidebarStrings {
        dashboard: "Executive Dashboard",
        directory: "Member Directory",
        ai: "Consultation",
        about: "About AGTI Directory",
        member_title: "DIRECTORY AGTI",
    },
};

static ID: Strings = Strings {
    dashboard: DashboardStrings {
        title: "Ringkasan Eksekutif",
        total_members: "Total Anggota",
        active_registry: "Registri Aktif 2026",
        verified_compliance: "Kepatuhan Terverifikasi",
        iso_9001: "ISO 9001",
        sni_mandatory: "SNI Wajib",
        sni_voluntary: "SNI Sukarela",
        oeko_tex: "OEKO-TEX",
        total_workforce: "Total Tenaga Kerja",
        registered_employees: "Karyawan Terdaftar",
        industry_composition: "Komposisi Industri",
        regional_distribution: "Distribusi Regional",
        last_updated: "Terakhir Diperbarui: Oktober 2025",
    },
    directory: DirectoryStrings {
        title: "Direktori Anggota",
        all_types: "Semua Jenis Industri",
        all_regions: "Semua Wilayah",
        found: "Ditemukan",
        companies: "perusahaan sesuai kriteria",
        no_results: "Tidak ada perusahaan yang ditemukan dengan filter Anda.",
        view_profile: "Lihat Profil Lengkap",
        capacity: "KAPASITAS",
        verified: "Terverifikasi",
        key_markets: "Pasar Utama:",
        reset_filters: "Reset Filter",
    },
    detail: DetailStrings {
        back: "Kembali ke Direktori",
        verified_member: "Anggota Terverifikasi",
        overview: "Tinjauan Perusahaan",
        specialization: "Spesialisasi",
        primary_email: "Email Utama",
        contact_number: "Nomor Kontak",
        export_markets: "Pasar Ekspor",
        production_stats: "Statistik Produksi",
        compliance: "Kepatuhan & Sertifikasi",
        workforce: "Total Tenaga Kerja",
        monthly_capacity: "Kapasitas Bulanan",
        chat_wa: "Chat WhatsApp",
    },
    ai: AiStrings {
        title: "Konsultasi Bisnis & Teknis",
        intro: "**Selamat Datang.** Saya adalah Konsultan Ahli Industri Tekstil & Garmen. Anda bisa mendiskusikan **Masalah Teknis** (cacat kain, efisiensi mesin), **Manajemen** (SDM, LEAN manufacturing, ERP, Produktivitas, ISO 9001:2015).",
        placeholder: "Jelaskan masalah Anda (mis: 'Cara mengatasi cacat shading pada celupan' atau 'Strategi efisiensi produksi')...",
        analyzing: "Menganalisis permasalahan...",
        powered_by: "Didukung oleh Gemini 2.5 Flash • Sistem Pakar AGTI",
    },
    about: AboutStrings {
        title: "Apa itu DIRECTORY AGTI",
        subtitle: "Basis data terintegrasi resmi Asosiasi Garmen dan Tekstil Indonesia.",
        description: "DIRECTORY AGTI 2026 adalah platform digital yang dirancang untuk memusatkan data perusahaan tekstil dan garmen di seluruh Indonesia. Kami bertujuan untuk memfasilitasi transparansi, kemudahan berbisnis, dan konektivitas global bagi anggota kami.",
        features: [
            ("Basis Data Lengkap", "Profil mendalam tentang pabrik, pemintalan, dan pemasok aksesoris."),
            ("Kepatuhan Terverifikasi", "Pelacakan sertifikasi penting seperti ISO, SNI, dan OEKO-TEX."),
            ("Konsultasi Ahli", "Konsultan Ahli untuk memecahkan tantangan teknis dan manajemen."),
            ("Konektivitas Global", "Menghubungkan produsen Indonesia dengan pasar rantai pasok global."),
        ],
        vision_title: "Visi Kami",
        vision: "Menjadi referensi global untuk industri tekstil Indonesia dan mendorong pertumbuhan yang berkelanjutan.",
        mission_title: "Misi Kami",
        mission: "Menyediakan data yang akurat, mendorong inovasi melalui teknologi, dan menjembatani kesenjangan antara produsen lokal dan pasar global.",
    },
    sidebar: SidebarStrings {
        dashboard: "Dashboard Eksekutif",
        directory: "Direktori Anggota",
        ai: "Konsultasi Masalah",
        about: "Apa itu Directory AGTI",
        member_title: "DIRECTORY AGTI",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_differ() {
        assert_ne!(strings(Language::En).ai.intro, strings(Language::Id).ai.intro);
        assert_eq!(strings(Language::Id).directory.reset_filters, "Reset Filter");
    }
}
