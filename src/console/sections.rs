//! Static section table and per-section detail blocks.
//!
//! Adding a section is a data change: append a row to [`SECTIONS`] and a
//! `section.<id>` key to each locale file.

/// Accent family a section button is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionColor {
    Green,
    Cyan,
    Purple,
}

/// A named navigational context with its own fixed detail text.
#[derive(Debug)]
pub struct Section {
    pub id: &'static str,
    /// English name used in command output.
    pub name: &'static str,
    /// i18n key of the button label.
    pub name_key: &'static str,
    pub icon: &'static str,
    pub color: SectionColor,
    pub details: &'static [&'static str],
}

impl Section {
    /// Localized button label.
    pub fn display_name(&self) -> String {
        t!(self.name_key).to_string()
    }

    pub fn detail_lines(&self) -> Vec<String> {
        self.details.iter().map(|l| l.to_string()).collect()
    }
}

pub const SECTIONS: &[Section] = &[
    Section {
        id: "files",
        name: "Files",
        name_key: "section.files",
        icon: "▤",
        color: SectionColor::Green,
        details: &[
            "Files: /var/www",
            "  drwxr-xr-x  html/           4.2 GB",
            "  drwxr-xr-x  backups/       18.7 GB",
            "  drwxr-xr-x  uploads/        2.9 GB",
            "  -rw-r--r--  .htaccess       1.1 KB",
            "  -rw-r--r--  robots.txt      0.2 KB",
        ],
    },
    Section {
        id: "settings",
        name: "Settings",
        name_key: "section.settings",
        icon: "⚙",
        color: SectionColor::Cyan,
        details: &[
            "Panel settings:",
            "  hostname         hosting-control",
            "  timezone         UTC",
            "  auto_backup      enabled (daily 03:00)",
            "  ssl_renewal      automatic",
            "  php_version      8.2",
        ],
    },
    Section {
        id: "stats",
        name: "Statistics",
        name_key: "section.stats",
        icon: "▥",
        color: SectionColor::Purple,
        details: &[
            "Traffic statistics (last 24h):",
            "  requests         1,284,913",
            "  unique visitors  48,210",
            "  bandwidth        212.4 GB",
            "  avg response     84 ms",
            "  error rate       0.12%",
        ],
    },
    Section {
        id: "domains",
        name: "Domains",
        name_key: "section.domains",
        icon: "◎",
        color: SectionColor::Green,
        details: &[
            "Domains:",
            "  example.com         active   SSL ✓  expires 2027-03-14",
            "  shop.example.com    active   SSL ✓  expires 2027-03-14",
            "  mail.example.com    active   SSL ✓  expires 2026-12-01",
            "  legacy-site.net     parked   SSL ✗",
        ],
    },
    Section {
        id: "databases",
        name: "Databases",
        name_key: "section.databases",
        icon: "◫",
        color: SectionColor::Cyan,
        details: &[
            "Databases:",
            "  mysql      wordpress_db     1.8 GB   online",
            "  mysql      shop_db          6.4 GB   online",
            "  postgres   analytics       12.3 GB   online",
            "  redis      cache          512.0 MB   online",
        ],
    },
    Section {
        id: "servers",
        name: "Servers",
        name_key: "section.servers",
        icon: "▦",
        color: SectionColor::Purple,
        details: &[
            "Servers:",
            "  web-01    10.0.0.11   nginx 1.24     online",
            "  web-02    10.0.0.12   nginx 1.24     online",
            "  db-01     10.0.0.21   postgres 15    online",
            "  mail-01   10.0.0.31   postfix        maintenance",
        ],
    },
    Section {
        id: "logs",
        name: "Logs",
        name_key: "section.logs",
        icon: "☰",
        color: SectionColor::Green,
        details: &[
            "Recent log entries:",
            "  [INFO]  nginx: configuration reloaded",
            "  [WARN]  php-fpm: pool www seems busy",
            "  [INFO]  certbot: certificate renewed for example.com",
            "  [ERROR] backup: remote storage timeout, retry scheduled",
        ],
    },
    Section {
        id: "api",
        name: "API",
        name_key: "section.api",
        icon: "⌘",
        color: SectionColor::Cyan,
        details: &[
            "API endpoints:",
            "  GET     /api/v1/status",
            "  GET     /api/v1/domains",
            "  POST    /api/v1/backups",
            "  DELETE  /api/v1/cache",
            "  rate limit: 1000 req/min",
        ],
    },
];

/// Resources listed for the default `home` section.
pub const HOME_DETAILS: &[&str] = &[
    "Current section resources:",
    "  ./var/www/html",
    "  ./etc/nginx/sites-enabled",
    "  ./home/user/backups",
    "  ./opt/applications",
];

pub fn find_section(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}

/// Valid section ids in table order.
pub fn section_ids() -> Vec<&'static str> {
    SECTIONS.iter().map(|s| s.id).collect()
}

/// Detail block for any id. Total: `home` and unknown ids get fallbacks.
pub fn section_details(id: &str) -> Vec<String> {
    if let Some(section) = find_section(id) {
        return section.detail_lines();
    }
    if id == crate::constants::DEFAULT_SECTION {
        return HOME_DETAILS.iter().map(|l| l.to_string()).collect();
    }
    vec![format!("No resources registered for section '{}'", id)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_eight_sections_in_order() {
        assert_eq!(
            section_ids(),
            vec!["files", "settings", "stats", "domains", "databases", "servers", "logs", "api"]
        );
    }

    #[test]
    fn ids_are_unique_and_lowercase() {
        let ids: HashSet<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
        for s in SECTIONS {
            assert_eq!(s.id, s.id.to_lowercase());
            assert!(!s.id.contains(' '));
        }
    }

    #[test]
    fn detail_blocks_are_distinct() {
        let blocks: HashSet<_> = SECTIONS.iter().map(|s| s.details).collect();
        assert_eq!(blocks.len(), SECTIONS.len());
        assert!(SECTIONS.iter().all(|s| !s.details.is_empty()));
    }

    #[test]
    fn colors_cycle_green_cyan_purple() {
        let expected = [SectionColor::Green, SectionColor::Cyan, SectionColor::Purple];
        for (i, s) in SECTIONS.iter().enumerate() {
            assert_eq!(s.color, expected[i % 3], "section {}", s.id);
        }
    }

    #[test]
    fn details_for_known_section() {
        assert_eq!(section_details("logs")[0], "Recent log entries:");
    }

    #[test]
    fn details_for_home() {
        assert_eq!(section_details("home")[0], "Current section resources:");
        assert_eq!(section_details("home").len(), HOME_DETAILS.len());
    }

    #[test]
    fn details_for_unknown_is_placeholder() {
        let lines = section_details("nowhere");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("nowhere"));
    }

    #[test]
    fn english_names_match_english_labels() {
        let _locale = crate::utils::lock_locale("en");
        for s in SECTIONS {
            assert_eq!(s.display_name(), s.name, "section {}", s.id);
        }
    }

    #[test]
    fn display_names_resolve_in_english() {
        let _locale = crate::utils::lock_locale("en");
        assert_eq!(find_section("files").map(|s| s.display_name()), Some("Files".to_string()));
        assert_eq!(find_section("api").map(|s| s.display_name()), Some("API".to_string()));
    }
}
