use crate::constants::*;
use crate::core::{Portfolio, SceneLifecycleState};
use crate::dom;
use web_sys as web;

/// The section content panel. Visibility follows the lifecycle flags; the body
/// is rebuilt only when the shown section or locale changes.
pub struct ModalView {
    document: web::Document,
    root: web::HtmlElement,
    shown: Option<usize>,
}

impl ModalView {
    pub fn find(document: &web::Document) -> Option<Self> {
        let root = dom::html_element(document, MODAL_ID)?;
        Some(Self {
            document: document.clone(),
            root,
            shown: None,
        })
    }

    /// Force the body to rebuild on the next reveal (locale switch).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    pub fn sync(&mut self, state: &SceneLifecycleState, portfolio: &Portfolio) {
        if state.modal_visible {
            if let Some(section) = state.active_section {
                if self.shown != Some(section) {
                    self.fill(section, portfolio);
                    self.shown = Some(section);
                }
            }
        }
        dom::set_class(&self.root, CLASS_VISIBLE, state.modal_visible);
        dom::set_class(&self.root, CLASS_CLOSING, state.modal_closing);
        _ = self
            .root
            .set_attribute("aria-hidden", if state.modal_visible { "false" } else { "true" });
    }

    fn fill(&self, section: usize, portfolio: &Portfolio) {
        dom::set_text(
            &self.document,
            MODAL_TITLE_ID,
            portfolio.label(section).unwrap_or_default(),
        );
        let Some(body) = dom::html_element(&self.document, MODAL_BODY_ID) else {
            return;
        };
        body.set_text_content(None);
        for line in section_lines(portfolio, section) {
            let tag = if line.href.is_some() { "a" } else { "p" };
            let Ok(el) = self.document.create_element(tag) else {
                continue;
            };
            el.set_text_content(Some(&line.text));
            if let Some(href) = &line.href {
                _ = el.set_attribute("href", href);
                _ = el.set_attribute("target", "_blank");
                _ = el.set_attribute("rel", "noopener");
            }
            _ = body.append_child(&el);
        }
    }
}

pub struct BodyLine {
    pub text: String,
    pub href: Option<String>,
}

impl BodyLine {
    fn text(text: String) -> Self {
        Self { text, href: None }
    }
}

/// Body lines for a section, keyed by position in the bundled order:
/// about, skills, experience, contact.
pub fn section_lines(portfolio: &Portfolio, section: usize) -> Vec<BodyLine> {
    match section {
        1 => vec![
            BodyLine::text(portfolio.hero.name.clone()),
            BodyLine::text(portfolio.hero.title.clone()),
            BodyLine::text(portfolio.hero.tagline.clone()),
        ],
        2 => portfolio
            .skills
            .iter()
            .map(|s| BodyLine::text(format!("{}  {:?}  {}%", s.name, s.tier(), s.level)))
            .collect(),
        3 => portfolio
            .experiences
            .iter()
            .map(|e| {
                BodyLine::text(format!(
                    "{} / {} ({})  {}  [{}]",
                    e.company,
                    e.role,
                    e.period,
                    e.description,
                    e.techs.join(", ")
                ))
            })
            .collect(),
        4 => portfolio
            .contacts
            .iter()
            .map(|c| BodyLine {
                text: c.label.clone(),
                href: Some(c.url.clone()),
            })
            .collect(),
        _ => Vec::new(),
    }
}
