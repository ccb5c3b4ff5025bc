//! Template selection across the theme stack.
//!
//! Candidates are tried in caller order; for each candidate every theme is
//! tried top-down before moving on to the next candidate. A name-specific
//! variant anywhere in the stack therefore beats a generic variant in a
//! more specific theme.

use std::fmt;

use scheme_fs::{NormalizedPath, split_segments};

use crate::locator::FileLocator;

/// Template used when a filtered template name is empty.
pub const INDEX_TEMPLATE: &str = "index.php";

/// Performs the actual load of a located template.
pub trait TemplateLoader {
    fn load_template(&mut self, path: &NormalizedPath, require_once: bool);
}

/// Host template system consulted by the semantic helpers.
pub trait TemplateHost: TemplateLoader {
    /// Called before a located template part is loaded.
    fn do_action(&mut self, _action: &str, _part: &TemplatePart<'_>) {}

    /// Host default behaviour when the scheme has no template for `part`.
    fn fallback(&mut self, part: &TemplatePart<'_>);
}

/// Filter callback the host invokes for its own template selection.
pub trait TemplateFilter {
    /// Return the scheme's template for `template`, or `template` unchanged.
    fn filter_template(&self, template: &str) -> String;
}

/// Template kinds the host may route through [`TemplateFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateHook {
    NotFound,
    Search,
    Taxonomy,
    FrontPage,
    Home,
    Attachment,
    Single,
    Page,
    Category,
    Tag,
    Author,
    Date,
    Archive,
    CommentsPopup,
    Paged,
    Index,
    Comments,
}

impl TemplateHook {
    pub const ALL: [TemplateHook; 17] = [
        Self::NotFound,
        Self::Search,
        Self::Taxonomy,
        Self::FrontPage,
        Self::Home,
        Self::Attachment,
        Self::Single,
        Self::Page,
        Self::Category,
        Self::Tag,
        Self::Author,
        Self::Date,
        Self::Archive,
        Self::CommentsPopup,
        Self::Paged,
        Self::Index,
        Self::Comments,
    ];

    /// Host filter name, e.g. `404_template`.
    pub fn filter_name(&self) -> &'static str {
        match self {
            Self::NotFound => "404_template",
            Self::Search => "search_template",
            Self::Taxonomy => "taxonomy_template",
            Self::FrontPage => "front_page_template",
            Self::Home => "home_template",
            Self::Attachment => "attachment_template",
            Self::Single => "single_template",
            Self::Page => "page_template",
            Self::Category => "category_template",
            Self::Tag => "tag_template",
            Self::Author => "author_template",
            Self::Date => "date_template",
            Self::Archive => "archive_template",
            Self::CommentsPopup => "comments_popup_template",
            Self::Paged => "paged_template",
            Self::Index => "index_template",
            Self::Comments => "comments_template",
        }
    }
}

impl fmt::Display for TemplateHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.filter_name())
    }
}

/// A template part requested by a page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePart<'a> {
    Header(Option<&'a str>),
    Footer(Option<&'a str>),
    Sidebar(Option<&'a str>),
    Part { slug: &'a str, name: Option<&'a str> },
    SearchForm,
}

impl TemplatePart<'_> {
    /// Candidate file names, name-qualified variant first.
    pub fn candidates(&self) -> Vec<String> {
        let (slug, name) = match *self {
            Self::Header(name) => ("header", name),
            Self::Footer(name) => ("footer", name),
            Self::Sidebar(name) => ("sidebar", name),
            Self::Part { slug, name } => (slug, name),
            Self::SearchForm => ("searchform", None),
        };

        let mut candidates = Vec::with_capacity(2);
        if let Some(name) = name {
            candidates.push(format!("{slug}-{name}.php"));
        }
        candidates.push(format!("{slug}.php"));
        candidates
    }

    /// Action fired before the part is loaded.
    pub fn action(&self) -> String {
        match self {
            Self::Header(_) => "get_header".to_string(),
            Self::Footer(_) => "get_footer".to_string(),
            Self::Sidebar(_) => "get_sidebar".to_string(),
            Self::Part { slug, .. } => format!("get_template_part_{slug}"),
            Self::SearchForm => "get_search_form".to_string(),
        }
    }

    /// Whether the host should guard against loading the part twice.
    pub fn require_once(&self) -> bool {
        matches!(self, Self::Header(_) | Self::Footer(_) | Self::Sidebar(_))
    }
}

/// How a template part request was satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOutcome {
    /// The scheme supplied this template and the host loaded it
    Located(NormalizedPath),
    /// The host's default behaviour was used
    HostDefault,
}

/// Picks templates from the theme stack.
#[derive(Debug, Clone, Copy)]
pub struct TemplateResolver<'a> {
    locator: FileLocator<'a>,
}

impl<'a> TemplateResolver<'a> {
    pub fn new(locator: FileLocator<'a>) -> Self {
        Self { locator }
    }

    /// First existing candidate, trying every theme for each candidate.
    pub fn locate_template<I, S>(&self, candidates: I) -> Option<NormalizedPath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stack = self.locator.stack();
        if stack.is_empty() {
            return None;
        }

        let paths = self.locator.paths();
        for candidate in candidates {
            let candidate = candidate.as_ref();
            // An empty candidate would name the theme directory itself
            if NormalizedPath::relative([candidate]).is_empty() {
                continue;
            }
            for theme in stack.top_down() {
                let located = paths.theme_file(theme, [candidate]);
                if located.exists() {
                    tracing::debug!(theme, candidate, "Located template");
                    return Some(located);
                }
            }
        }
        None
    }

    /// Locate a template and hand it to `loader` when found.
    pub fn load_template<I, S>(
        &self,
        candidates: I,
        loader: &mut impl TemplateLoader,
        require_once: bool,
    ) -> Option<NormalizedPath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let located = self.locate_template(candidates)?;
        loader.load_template(&located, require_once);
        Some(located)
    }

    /// Located template, or `default` unchanged when nothing matches.
    pub fn locate_template_or<I, S>(&self, candidates: I, default: &str) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.locate_template(candidates)
            .map(|path| path.to_string())
            .unwrap_or_else(|| default.to_string())
    }

    /// Resolve a template part through the scheme, falling back to the host.
    pub fn get_part(&self, part: TemplatePart<'_>, host: &mut impl TemplateHost) -> PartOutcome {
        match self.locate_template(part.candidates()) {
            Some(located) => {
                host.do_action(&part.action(), &part);
                host.load_template(&located, part.require_once());
                PartOutcome::Located(located)
            }
            None => {
                tracing::debug!(?part, "No scheme template, using host default");
                host.fallback(&part);
                PartOutcome::HostDefault
            }
        }
    }

    pub fn get_header(&self, name: Option<&str>, host: &mut impl TemplateHost) -> PartOutcome {
        self.get_part(TemplatePart::Header(name), host)
    }

    pub fn get_footer(&self, name: Option<&str>, host: &mut impl TemplateHost) -> PartOutcome {
        self.get_part(TemplatePart::Footer(name), host)
    }

    pub fn get_sidebar(&self, name: Option<&str>, host: &mut impl TemplateHost) -> PartOutcome {
        self.get_part(TemplatePart::Sidebar(name), host)
    }

    pub fn get_template_part(
        &self,
        slug: &str,
        name: Option<&str>,
        host: &mut impl TemplateHost,
    ) -> PartOutcome {
        self.get_part(TemplatePart::Part { slug, name }, host)
    }

    pub fn get_search_form(&self, host: &mut impl TemplateHost) -> PartOutcome {
        self.get_part(TemplatePart::SearchForm, host)
    }
}

impl TemplateFilter for TemplateResolver<'_> {
    fn filter_template(&self, template: &str) -> String {
        let template = if template.is_empty() {
            INDEX_TEMPLATE
        } else {
            template
        };

        match split_segments(template).last() {
            Some(basename) => self.locate_template_or([basename], template),
            None => template.to_string(),
        }
    }
}
