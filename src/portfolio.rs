pub const OWNER_NAME: &str = "Alex Morgan";
pub const OWNER_TITLE: &str = "Software Engineer";
pub const OWNER_TAGLINE: &str =
    "I build fast, reliable software for the web and the systems underneath it.";
pub const OWNER_EMAIL: &str = "hello@alexmorgan.dev";
pub const PROFILE_IMAGE: &str = "/profile.svg";
pub const FAVICON: &str = "/favicon.ico";
pub const RESUME_FILE: &str = "/resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "AlexMorganResume.pdf";
/// Icon class styled in input.css
pub const DOWNLOAD_ICON: &str = "extra-download";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub external_link: &'static str,
    pub link_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// devicon class used for the skill badge
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

/// Gallery order is display order.
pub static PROJECTS: &[Project] = &[
    Project {
        title: "Terminal Portfolio",
        description: "A personal site that doubles as a shell, with a virtual filesystem, tab completion and command history, rendered with Leptos.",
        external_link: "https://github.com/alexmorgan/terminal-portfolio",
        link_label: "View on GitHub",
    },
    Project {
        title: "Packet Mapper",
        description: "Fast concurrent network discovery CLI that fingerprints hosts over ARP, ICMP and TCP.",
        external_link: "https://github.com/alexmorgan/packet-mapper",
        link_label: "View on GitHub",
    },
    Project {
        title: "Small ETL",
        description: "Configurable extract-transform-load pipelines that pull from REST APIs and write CSV bundles, locally or on Lambda.",
        external_link: "https://github.com/alexmorgan/small-etl",
        link_label: "View on GitHub",
    },
    Project {
        title: "Minesweeper Online",
        description: "Multiplayer minesweeper with a Rust game server and a WASM client.",
        external_link: "https://mines.alexmorgan.dev",
        link_label: "Play it",
    },
];

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "Rust",
        icon: "devicon-rust-original",
    },
    Skill {
        name: "TypeScript",
        icon: "devicon-typescript-plain",
    },
    Skill {
        name: "Go",
        icon: "devicon-go-original-wordmark",
    },
    Skill {
        name: "Python",
        icon: "devicon-python-plain",
    },
    Skill {
        name: "PostgreSQL",
        icon: "devicon-postgresql-plain",
    },
    Skill {
        name: "Docker",
        icon: "devicon-docker-plain",
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/alexmorgan",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/alexmorgan",
        icon: "devicon-linkedin-plain",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_have_external_links() {
        assert!(!PROJECTS.is_empty());
        for p in PROJECTS {
            assert!(
                p.external_link.starts_with("https://"),
                "{} should link out over https",
                p.title
            );
            assert!(!p.link_label.is_empty());
        }
    }

    #[test]
    fn test_linked_assets_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in [PROFILE_IMAGE, RESUME_FILE, FAVICON] {
            let path = public.join(asset.trim_start_matches('/'));
            assert!(path.is_file(), "{} should exist", path.display());
        }
    }

    #[test]
    fn test_download_icon_is_styled() {
        let css = include_str!("../input.css");
        assert!(css.contains(&format!(".{}", DOWNLOAD_ICON)));
    }

    #[test]
    fn test_project_titles_unique() {
        let mut titles = PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), PROJECTS.len());
    }
}
