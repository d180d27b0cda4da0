/// Where activating a link takes the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Web URL (`http`, `https` or protocol-relative); opened in a new
    /// browsing context.
    External(&'a str),
    /// Other scheme such as `mailto:` or `tel:`, handed to the system handler
    /// from the current context.
    Handler(&'a str),
    /// In-page fragment such as `#projects`; scrolls in place.
    Anchor(&'a str),
    /// Path on this site such as `/dawn-of-ragnarok.html`.
    SameSite(&'a str),
}

impl<'a> LinkTarget<'a> {
    pub fn classify(link: &'a str) -> Self {
        let link = link.trim();
        if let Some(fragment) = link.strip_prefix('#') {
            return Self::Anchor(fragment);
        }
        if link.starts_with("//") {
            return Self::External(link);
        }
        match scheme(link) {
            Some(scheme) if is_web_scheme(scheme) => Self::External(link),
            Some(_) => Self::Handler(link),
            None => Self::SameSite(link),
        }
    }

    pub fn opens_new_context(self) -> bool {
        matches!(self, Self::External(_))
    }

    /// `(target, rel)` attributes for an `<a>` element.
    pub fn anchor_attributes(self) -> (Option<&'static str>, Option<&'static str>) {
        if self.opens_new_context() {
            (Some("_blank"), Some("noopener noreferrer"))
        } else {
            (None, None)
        }
    }
}

fn scheme(link: &str) -> Option<&str> {
    let (scheme, _) = link.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

fn is_web_scheme(scheme: &str) -> bool {
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}
