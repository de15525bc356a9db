//! Prompt Builder — assembles persona system prompts from static template text,
//! the resume document and the site page catalog.
//!
//! Every variant is built once at startup; only the frontend URL is substituted
//! per initialization.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::normalize_base_url;
use crate::persona::prompts::{
    SitePage, BACKGROUND_TEMPLATE, FINAL_INSTRUCTIONS_TEMPLATE, FRONTEND_URL_PLACEHOLDER,
    NAVIGATION_HEADER, PORTFOLIO_PERSONA_TEMPLATE, SITE_PAGES, SUGGESTION_HEADER,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptType {
    Portfolio,
}

impl PromptType {
    pub const ALL: &'static [PromptType] = &[PromptType::Portfolio];

    /// Variant used for unknown keys, including the `"default"` key clients send
    /// when they omit `prompt_type`.
    pub const FALLBACK: PromptType = PromptType::Portfolio;

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptType::Portfolio => "portfolio",
        }
    }

    /// Total lookup: unknown keys degrade to `FALLBACK` instead of failing.
    pub fn resolve(key: &str) -> PromptType {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == key)
            .unwrap_or(Self::FALLBACK)
    }
}

/// The person the assistant speaks as, plus the documents it draws on.
#[derive(Debug, Clone)]
pub struct Persona {
    pub name: String,
    pub resume: String,
    pub linkedin: String,
}

impl Persona {
    /// Reads the resume (required) and LinkedIn profile (optional) from disk.
    pub fn load(name: &str, resume_path: &Path, linkedin_path: Option<&Path>) -> Result<Self> {
        let resume = std::fs::read_to_string(resume_path)
            .with_context(|| format!("Failed to read resume at '{}'", resume_path.display()))?;

        let linkedin = match linkedin_path {
            Some(path) => std::fs::read_to_string(path).with_context(|| {
                format!("Failed to read LinkedIn profile at '{}'", path.display())
            })?,
            None => String::new(),
        };

        Ok(Self {
            name: name.to_string(),
            resume,
            linkedin,
        })
    }
}

/// Immutable set of prebuilt prompts, one per `PromptType`.
/// Templates still contain `{FRONTEND_URL}`; `render` resolves it.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    portfolio: String,
}

impl PromptCatalog {
    pub fn build(persona: &Persona) -> Self {
        Self {
            portfolio: build_portfolio_prompt(persona, SITE_PAGES),
        }
    }

    pub fn template(&self, prompt_type: PromptType) -> &str {
        match prompt_type {
            PromptType::Portfolio => &self.portfolio,
        }
    }

    /// Produces the final system prompt with every placeholder occurrence replaced.
    pub fn render(&self, prompt_type: PromptType, frontend_url: &str) -> String {
        self.template(prompt_type)
            .replace(FRONTEND_URL_PLACEHOLDER, &normalize_base_url(frontend_url))
    }

    pub fn available() -> Vec<&'static str> {
        PromptType::ALL.iter().map(PromptType::as_str).collect()
    }
}

fn build_portfolio_prompt(persona: &Persona, pages: &[SitePage]) -> String {
    let mut prompt = PORTFOLIO_PERSONA_TEMPLATE.replace("{name}", &persona.name);

    prompt.push_str(
        &BACKGROUND_TEMPLATE
            .replace("{linkedin}", &persona.linkedin)
            .replace("{resume}", &persona.resume),
    );

    prompt.push_str(NAVIGATION_HEADER);
    for page in pages {
        prompt.push_str(&format!("- {} - {}\n", page.path, page.description));
    }

    prompt.push_str(SUGGESTION_HEADER);
    for page in pages {
        prompt.push_str(&format!(
            "- {} → \"{} {}{}\"\n",
            page.topic, page.suggestion, FRONTEND_URL_PLACEHOLDER, page.path
        ));
    }

    prompt.push_str(&FINAL_INSTRUCTIONS_TEMPLATE.replace("{name}", &persona.name));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn make_persona() -> Persona {
        Persona {
            name: "Eddie Khanna".to_string(),
            resume: "Software Engineer at Acme, 2021-present. Rust, TypeScript.".to_string(),
            linkedin: String::new(),
        }
    }

    #[test]
    fn test_resolve_known_key() {
        assert_eq!(PromptType::resolve("portfolio"), PromptType::Portfolio);
    }

    #[test]
    fn test_resolve_unknown_key_falls_back_to_portfolio() {
        assert_eq!(PromptType::resolve("default"), PromptType::Portfolio);
        assert_eq!(PromptType::resolve("pirate"), PromptType::Portfolio);
        assert_eq!(PromptType::resolve(""), PromptType::Portfolio);
    }

    #[test]
    fn test_template_contains_identity_resume_and_pages() {
        let catalog = PromptCatalog::build(&make_persona());
        let template = catalog.template(PromptType::Portfolio);

        assert!(template.starts_with("You are Eddie Khanna"));
        assert!(template.contains("## Resume:\nSoftware Engineer at Acme"));
        for page in SITE_PAGES {
            assert!(template.contains(&format!("- {} - {}", page.path, page.description)));
            assert!(template.contains(&format!("{FRONTEND_URL_PLACEHOLDER}{}", page.path)));
        }
        assert!(!template.contains("{name}"));
        assert!(!template.contains("{resume}"));
    }

    #[test]
    fn test_render_replaces_every_placeholder() {
        let catalog = PromptCatalog::build(&make_persona());
        let prompt = catalog.render(PromptType::Portfolio, "https://eddie.dev");

        assert!(!prompt.contains(FRONTEND_URL_PLACEHOLDER));
        assert_eq!(
            prompt.matches("https://eddie.dev/").count(),
            SITE_PAGES.len()
        );
        assert!(prompt.contains("https://eddie.dev/about"));
    }

    #[test]
    fn test_render_trims_trailing_slash() {
        let catalog = PromptCatalog::build(&make_persona());
        let prompt = catalog.render(PromptType::Portfolio, "https://eddie.dev/");

        assert!(prompt.contains("https://eddie.dev/contact"));
        assert!(!prompt.contains("https://eddie.dev//"));
    }

    #[test]
    fn test_render_does_not_mutate_catalog() {
        let catalog = PromptCatalog::build(&make_persona());
        let _ = catalog.render(PromptType::Portfolio, "https://a.example");
        let second = catalog.render(PromptType::Portfolio, "https://b.example");

        assert!(second.contains("https://b.example/about"));
        assert!(!second.contains("https://a.example"));
    }

    #[test]
    fn test_available_lists_portfolio() {
        assert_eq!(PromptCatalog::available(), vec!["portfolio"]);
    }

    #[test]
    fn test_load_reads_resume_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Staff Engineer, distributed systems").unwrap();

        let persona = Persona::load("Eddie Khanna", file.path(), None).unwrap();
        assert_eq!(persona.resume.trim(), "Staff Engineer, distributed systems");
        assert!(persona.linkedin.is_empty());
    }

    #[test]
    fn test_load_missing_resume_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("resume.txt");

        let err = Persona::load("Eddie Khanna", &missing, None).unwrap_err();
        assert!(err.to_string().contains("Failed to read resume"));
    }
}
