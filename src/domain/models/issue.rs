use std::fmt;

use url::Url;

use crate::infra::config::SiteConfig;

/// Identifier of the first ever published issue.
pub const FIRST_ISSUE_ID: IssueId = IssueId(1);

/// Sequential number of a magazine issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IssueId(pub u32);

impl IssueId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for IssueId {
    fn from(value: u32) -> Self {
        IssueId(value)
    }
}

impl SiteConfig {
    /// Download URL of an issue's PDF.
    ///
    /// The directory segment is the id in uppercase hex, zero padded to two digits.
    /// Ids are not bounds checked, unknown issues only fail once fetched.
    pub fn issue_url(&self, issue_id: IssueId) -> Result<Url, url::ParseError> {
        let base = self.base_url().trim_end_matches('/');
        Url::parse(&format!(
            "{base}/files/Zines/0x{:02X}/{}{}.pdf",
            issue_id.0,
            self.file_prefix(),
            issue_id.0
        ))
    }
}

/// Last path segment of a URL, the name an issue is saved under.
pub fn file_name_of(url: &Url) -> Option<&str> {
    url.path_segments()?.next_back().filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_zine_url_with_two_digit_hex_directory() {
        let site = SiteConfig::default();
        let url = site.issue_url(IssueId(7)).unwrap();
        assert_eq!(
            url.as_str(),
            "http://www.digitalwhisper.co.il/files/Zines/0x07/DigitalWhisper7.pdf"
        );
        let url = site.issue_url(IssueId(171)).unwrap();
        assert_eq!(
            url.as_str(),
            "http://www.digitalwhisper.co.il/files/Zines/0xAB/DigitalWhisper171.pdf"
        );
    }

    #[test]
    fn hex_directory_widens_instead_of_truncating() {
        let url = SiteConfig::default().issue_url(IssueId(0x1F4)).unwrap();
        assert!(url.path().contains("/0x1F4/"));
        assert!(url.path().ends_with("DigitalWhisper500.pdf"));
    }

    #[test]
    fn every_url_ends_with_its_pdf_name() {
        let site = SiteConfig::default();
        for n in 1..=300u32 {
            let url = site.issue_url(IssueId(n)).unwrap();
            assert!(url.as_str().ends_with(&format!("DigitalWhisper{n}.pdf")));
            assert!(url.as_str().contains(&format!("0x{n:02X}/")));
        }
    }

    #[test]
    fn file_name_is_the_last_path_segment() {
        let url = SiteConfig::default().issue_url(IssueId(42)).unwrap();
        assert_eq!(file_name_of(&url), Some("DigitalWhisper42.pdf"));
        assert_eq!(file_name_of(&Url::parse("http://host/dir/").unwrap()), None);
    }
}
