//! Best-guess HR contact synthesis. The addresses are never verified.

/// Builds an HR address for a listing.
///
/// Priority:
/// 1. employer website → bare lowercase domain → `hr@<domain>`
/// 2. company name → lowercase, no spaces/commas/periods, `.com` → `hr@<domain>`
/// 3. `careers@<company-lowercased-nospaces>.com`
pub fn synthesize_hr_email(company: &str, employer_website: Option<&str>) -> String {
    let domain = employer_website
        .and_then(domain_from_website)
        .or_else(|| domain_from_company(company));

    match domain {
        Some(domain) => format!("hr@{domain}"),
        None => format!("careers@{}.com", company.to_lowercase().replace(' ', "")),
    }
}

/// `https://www.Acme.io/careers` → `acme.io`
fn domain_from_website(website: &str) -> Option<String> {
    let website = website.trim().to_lowercase();
    let host = website
        .strip_prefix("https://")
        .or_else(|| website.strip_prefix("http://"))
        .unwrap_or(&website);
    let host = host.strip_prefix("www.").unwrap_or(host);
    let host = host.split('/').next().unwrap_or_default();
    (!host.is_empty()).then(|| host.to_string())
}

/// `Tech, Corp.` → `techcorp.com`
fn domain_from_company(company: &str) -> Option<String> {
    let stem: String = company
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | ',' | '.'))
        .collect();
    (!stem.is_empty()).then(|| format!("{stem}.com"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_website_domain_wins() {
        assert_eq!(
            synthesize_hr_email("Acme Corporation", Some("https://www.Acme.io/careers")),
            "hr@acme.io"
        );
    }

    #[test]
    fn test_http_website_without_www() {
        assert_eq!(
            synthesize_hr_email("Globex", Some("http://globex.co.in")),
            "hr@globex.co.in"
        );
    }

    #[test]
    fn test_upper_case_scheme_and_www() {
        assert_eq!(
            synthesize_hr_email("Acme", Some("HTTPS://WWW.Acme.io/careers")),
            "hr@acme.io"
        );
        assert_eq!(
            synthesize_hr_email("Acme", Some("  Http://Acme.IO  ")),
            "hr@acme.io"
        );
    }

    #[test]
    fn test_company_name_when_no_website() {
        assert_eq!(synthesize_hr_email("Tech, Corp.", None), "hr@techcorp.com");
        assert_eq!(
            synthesize_hr_email("DataStream Inc.", None),
            "hr@datastreaminc.com"
        );
    }

    #[test]
    fn test_blank_website_falls_through_to_company() {
        assert_eq!(
            synthesize_hr_email("InnovateX", Some("")),
            "hr@innovatex.com"
        );
        assert_eq!(
            synthesize_hr_email("InnovateX", Some("https://")),
            "hr@innovatex.com"
        );
    }

    #[test]
    fn test_careers_fallback_when_nothing_usable() {
        assert_eq!(synthesize_hr_email("", None), "careers@.com");
        assert_eq!(synthesize_hr_email("...", None), "careers@....com");
    }
}
