//! Member registry compiled into the binary.

use shared_types::{Company, CompanyType, Province};
use std::sync::OnceLock;

static MEMBERS: OnceLock<Vec<Company>> = OnceLock::new();

/// The association member registry. Built on first access, never mutated.
pub fn members() -> &'static [Company] {
    MEMBERS.get_or_init(|| {
        let companies = seed();
        tracing::debug!(count = companies.len(), "Member registry loaded");
        companies
    })
}

struct Seed {
    id: &'static str,
    name: &'static str,
    company_type: CompanyType,
    province: Province,
    city: &'static str,
    capacity: &'static str,
    employees: u32,
    certifications: &'static [&'static str],
    export_markets: &'static [&'static str],
    specialization: &'static str,
    description: &'static str,
    contact_email: &'static str,
    phone: &'static str,
    verified: bool,
}

impl From<&Seed> for Company {
    fn from(seed: &Seed) -> Self {
        Company {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            company_type: seed.company_type,
            province: seed.province,
            city: seed.city.to_string(),
            capacity: seed.capacity.to_string(),
            employees: seed.employees,
            certifications: seed.certifications.iter().map(|c| c.to_string()).collect(),
            export_markets: seed.export_markets.iter().map(|m| m.to_string()).collect(),
            specialization: seed.specialization.to_string(),
            description: seed.description.to_string(),
            contact_email: seed.contact_email.to_string(),
            phone: seed.phone.to_string(),
            verified: seed.verified,
        }
    }
}

fn seed() -> Vec<Company> {
    SEEDS.iter().map(Company::from).collect()
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        name: "PT Sinar Busana Nusantara",
        company_type: CompanyType::Garment,
        province: Province::WestJava,
        city: "Bandung",
        capacity: "450,000 pcs/month",
        employees: 3200,
        certifications: &["ISO 9001:2015", "WRAP Gold", "SNI Wajib Pakaian Bayi"],
        export_markets: &["USA", "Japan", "EU"],
        specialization: "Woven shirts, kidswear, and uniforms",
        description: "Integrated garment manufacturer serving global brands with cutting, sewing, and finishing under one roof.",
        contact_email: "export@sinarbusana.co.id",
        phone: "6281122334455",
        verified: true,
    },
    Seed {
        id: "2",
        name: "PT Tenun Prima Jaya",
        company_type: CompanyType::Textile,
        province: Province::CentralJava,
        city: "Pekalongan",
        capacity: "3,500,000 meters/month",
        employees: 1850,
        certifications: &["ISO 9001:2015", "OEKO-TEX Standard 100", "SNI Sukarela Kain Tenun"],
        export_markets: &["Middle East", "Malaysia", "Australia"],
        specialization: "Rayon and cotton woven fabrics, batik printing",
        description: "Weaving and printing mill known for rayon challis and traditional batik motifs on modern looms.",
        contact_email: "sales@tenunprima.co.id",
        phone: "6282233445566",
        verified: true,
    },
    Seed {
        id: "3",
        name: "PT Benang Mas Spinning",
        company_type: CompanyType::Spinning,
        province: Province::CentralJava,
        city: "Karanganyar",
        capacity: "2,400 tons/month",
        employees: 1400,
        certifications: &["ISO 9001:2015", "ISO 14001:2015", "OEKO-TEX Standard 100"],
        export_markets: &["China", "Bangladesh", "Vietnam"],
        specialization: "Ring-spun cotton and polyester-cotton yarn",
        description: "Spinning mill with compact and ring frames producing Ne 20 to Ne 60 yarn for knitting and weaving.",
        contact_email: "marketing@benangmas.co.id",
        phone: "6283344556677",
        verified: true,
    },
    Seed {
        id: "4",
        name: "PT Garmen Kreasi Indah",
        company_type: CompanyType::Garment,
        province: Province::Banten,
        city: "Tangerang",
        capacity: "800,000 pcs/month",
        employees: 5200,
        certifications: &["WRAP Platinum", "BSCI", "SNI Wajib Pakaian Bayi", "ISO 9001:2015"],
        export_markets: &["USA", "Canada", "EU", "Japan"],
        specialization: "Knit sportswear and activewear",
        description: "High-volume knit garment exporter with in-house sublimation printing and bonded seam lines.",
        contact_email: "business@kreasiindah.co.id",
        phone: "6284455667788",
        verified: true,
    },
    Seed {
        id: "5",
        name: "PT Aksesori Global Mandiri",
        company_type: CompanyType::Accessories,
        province: Province::Dki,
        city: "Jakarta Utara",
        capacity: "12,000,000 pcs/month",
        employees: 620,
        certifications: &["OEKO-TEX Standard 100", "ISO 9001:2015"],
        export_markets: &["Vietnam", "Cambodia", "Bangladesh"],
        specialization: "Buttons, zippers, and woven labels",
        description: "Trim and accessories supplier for garment factories across Southeast Asia.",
        contact_email: "order@aksesoriglobal.co.id",
        phone: "6285566778899",
        verified: false,
    },
    Seed {
        id: "6",
        name: "PT Denim Nusa Indigo",
        company_type: CompanyType::Textile,
        province: Province::WestJava,
        city: "Purwakarta",
        capacity: "2,000,000 meters/month",
        employees: 2100,
        certifications: &["ISO 9001:2015", "GOTS", "OEKO-TEX Made in Green"],
        export_markets: &["USA", "Turkey", "EU"],
        specialization: "Indigo denim fabric and stretch denim",
        description: "Vertically integrated denim mill with rope dyeing, weaving, and ozone finishing.",
        contact_email: "denim@nusaindigo.co.id",
        phone: "6286677889900",
        verified: true,
    },
    Seed {
        id: "7",
        name: "CV Bali Craft Apparel",
        company_type: CompanyType::Garment,
        province: Province::Bali,
        city: "Denpasar",
        capacity: "35,000 pcs/month",
        employees: 180,
        certifications: &["SNI Sukarela Kaos"],
        export_markets: &["Australia", "EU"],
        specialization: "Resort wear and hand-printed t-shirts",
        description: "Boutique apparel maker producing small-batch resort collections for tourism retailers.",
        contact_email: "hello@balicraft.co.id",
        phone: "6287788990011",
        verified: false,
    },
    Seed {
        id: "8",
        name: "PT Rajut Sentosa Abadi",
        company_type: CompanyType::Textile,
        province: Province::EastJava,
        city: "Surabaya",
        capacity: "1,200 tons/month",
        employees: 950,
        certifications: &["ISO 9001:2008", "SNI Wajib Kain Rajut"],
        export_markets: &["Philippines", "Thailand"],
        specialization: "Circular knit fabrics, fleece, and jersey",
        description: "Knitting and dyeing mill supplying jersey and fleece to domestic and regional garment makers.",
        contact_email: "info@rajutsentosa.co.id",
        phone: "6288899001122",
        verified: true,
    },
    Seed {
        id: "9",
        name: "PT Pintal Jaya Makmur",
        company_type: CompanyType::Spinning,
        province: Province::Banten,
        city: "Serang",
        capacity: "1,600 tons/month",
        employees: 1100,
        certifications: &["ISO 9001:2015", "Global Recycled Standard"],
        export_markets: &["Japan", "Korea", "Taiwan"],
        specialization: "Recycled polyester and viscose blended yarn",
        description: "Spinning mill focused on recycled and sustainable fibre blends for fast-fashion suppliers.",
        contact_email: "yarn@pintaljaya.co.id",
        phone: "6289900112233",
        verified: true,
    },
    Seed {
        id: "10",
        name: "PT Label Tekstil Surya",
        company_type: CompanyType::Accessories,
        province: Province::EastJava,
        city: "Sidoarjo",
        capacity: "5,000,000 pcs/month",
        employees: 340,
        certifications: &["SNI Sukarela Label", "OEKO-TEX Standard 100"],
        export_markets: &["Indonesia", "Malaysia"],
        specialization: "Printed labels, hangtags, and packaging",
        description: "Branding and packaging accessories with quick-turnaround digital printing.",
        contact_email: "cs@labelsurya.co.id",
        phone: "6281011121314",
        verified: false,
    },
    Seed {
        id: "11",
        name: "PT Seragam Prima Indonesia",
        company_type: CompanyType::Garment,
        province: Province::Dki,
        city: "Jakarta Timur",
        capacity: "120,000 pcs/month",
        employees: 760,
        certifications: &["ISO 9001:2015", "SNI Wajib Seragam Sekolah", "ISO 45001:2018"],
        export_markets: &["Singapore", "Brunei"],
        specialization: "Corporate, school, and medical uniforms",
        description: "Uniform specialist serving government tenders, hospitals, and corporate clients.",
        contact_email: "tender@seragamprima.co.id",
        phone: "6281213141516",
        verified: true,
    },
    Seed {
        id: "12",
        name: "PT Batik Warna Lestari",
        company_type: CompanyType::Textile,
        province: Province::CentralJava,
        city: "Solo",
        capacity: "400,000 meters/month",
        employees: 430,
        certifications: &["SNI Sukarela Batik", "Batikmark"],
        export_markets: &["Japan", "Netherlands"],
        specialization: "Hand-drawn and stamped batik fabric with natural dyes",
        description: "Heritage batik workshop combining canting artisans with natural-dye colour kitchens.",
        contact_email: "batik@warnalestari.co.id",
        phone: "6281415161718",
        verified: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_is_not_empty() {
        assert_eq!(members().len(), SEEDS.len());
        assert!(!members().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = members().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), members().len());
    }

    #[test]
    fn test_phones_are_digits_only() {
        for company in members() {
            assert!(
                company.phone.chars().all(|c| c.is_ascii_digit()),
                "{} has a non-digit phone",
                company.name
            );
        }
    }

    #[test]
    fn test_registry_is_stable_across_calls() {
        assert!(std::ptr::eq(members(), members()));
    }
}
