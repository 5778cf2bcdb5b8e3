//! Article publishing split into single-purpose pieces.
//!
//! Validation, formatting, storage and author notification each live behind
//! their own function or trait. [`ArticleProcessor`] only sequences them.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ArticleError, Result};
use crate::notification::NotificationService;

/// Unvalidated article as submitted by an author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    /// Raw title
    pub title: String,
    /// Raw body text; newlines are significant
    pub content: String,
    /// Author name or address, used as the notification recipient
    pub author: String,
}

impl ArticleDraft {
    /// Builds a draft from anything string-like
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }
}

/// A published article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Identifier assigned by the repository
    pub id: String,
    /// Hyphenated lowercase title
    pub title: String,
    /// Content with newlines rendered as `<br>`
    pub content: String,
    /// Author, unchanged from the draft
    pub author: String,
    /// When processing completed
    pub published_at: DateTime<Utc>,
}

/// Minimum lengths, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationRules {
    /// Shortest acceptable title
    pub min_title_chars: usize,
    /// Shortest acceptable content
    pub min_content_chars: usize,
}

impl ValidationRules {
    /// 5 / 100
    pub const STRICT: Self = Self {
        min_title_chars: 5,
        min_content_chars: 100,
    };

    /// 3 / 50
    #[must_use]
    pub const fn relaxed() -> Self {
        Self {
            min_title_chars: 3,
            min_content_chars: 50,
        }
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::STRICT
    }
}

/// Checks the draft against `rules`, title first
///
/// # Errors
///
/// [`ArticleError::TitleTooShort`] or [`ArticleError::ContentTooShort`].
pub fn validate(
    draft: &ArticleDraft,
    rules: ValidationRules,
) -> std::result::Result<(), ArticleError> {
    if draft.title.chars().count() < rules.min_title_chars {
        return Err(ArticleError::TitleTooShort);
    }
    if draft.content.chars().count() < rules.min_content_chars {
        return Err(ArticleError::ContentTooShort);
    }
    Ok(())
}

/// Lowercases `title` and replaces every run of whitespace with a single `-`
///
/// ```rust
/// use solid_patterns::article::format_title;
///
/// assert_eq!(format_title("The  Importance of\tSOLID"), "the-importance-of-solid");
/// ```
#[must_use]
pub fn format_title(title: &str) -> String {
    let lower = title.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_gap = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_gap {
                out.push('-');
                in_gap = true;
            }
        } else {
            out.push(c);
            in_gap = false;
        }
    }
    out
}

/// Replaces each `\n` in `content` with `<br>`
#[must_use]
pub fn format_content(content: &str) -> String {
    content.replace('\n', "<br>")
}

/// Source of article identifiers
///
/// Identifiers carry no uniqueness or durability guarantee beyond what an
/// implementation documents.
pub trait IdGenerator {
    /// Produces the next identifier
    fn next_id(&mut self) -> String;
}

/// Nine random lowercase base-36 characters per id
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    const ALPHABET: &'static [u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    const LEN: usize = 9;
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> String {
        let mut rng = rand::thread_rng();
        (0..Self::LEN)
            .map(|_| char::from(Self::ALPHABET[rng.gen_range(0..Self::ALPHABET.len())]))
            .collect()
    }
}

/// `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Starts counting at 1 with the given prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("article")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Where formatted articles are stored
pub trait ArticleRepository {
    /// Stores `article` and returns the identifier it was saved under
    ///
    /// The `id` field of the argument is ignored.
    ///
    /// # Errors
    ///
    /// Implementation-specific storage failures.
    fn save(&mut self, article: &Article) -> Result<String>;
}

/// Keeps saved articles in memory for the lifetime of the value
#[derive(Debug, Default)]
pub struct InMemoryRepository<G = RandomIdGenerator> {
    ids: G,
    saved: Vec<Article>,
}

impl<G: IdGenerator> InMemoryRepository<G> {
    /// Empty repository drawing ids from `ids`
    pub const fn new(ids: G) -> Self {
        Self {
            ids,
            saved: Vec::new(),
        }
    }

    /// Articles saved so far, oldest first
    #[must_use]
    pub fn saved(&self) -> &[Article] {
        &self.saved
    }
}

impl<G: IdGenerator> ArticleRepository for InMemoryRepository<G> {
    fn save(&mut self, article: &Article) -> Result<String> {
        let id = self.ids.next_id();
        tracing::debug!(%id, title = %article.title, "saving article");
        self.saved.push(Article {
            id: id.clone(),
            ..article.clone()
        });
        Ok(id)
    }
}

/// Runs a draft through validation, formatting, storage and author notification
#[derive(Debug)]
pub struct ArticleProcessor<R, N> {
    rules: ValidationRules,
    repository: R,
    notifier: N,
}

impl<R: ArticleRepository, N: NotificationService> ArticleProcessor<R, N> {
    /// Processor using the default [`ValidationRules`]
    pub fn new(repository: R, notifier: N) -> Self {
        Self::with_rules(ValidationRules::default(), repository, notifier)
    }

    /// Processor using explicit `rules`
    pub const fn with_rules(rules: ValidationRules, repository: R, notifier: N) -> Self {
        Self {
            rules,
            repository,
            notifier,
        }
    }

    /// Publishes `draft`
    ///
    /// Nothing is saved and nobody is notified when validation fails.
    ///
    /// # Errors
    ///
    /// Validation failures as [`crate::Error::Article`], plus anything the
    /// repository or notifier returns.
    pub fn process(&mut self, draft: &ArticleDraft) -> Result<Article> {
        validate(draft, self.rules)?;

        let mut article = Article {
            id: String::new(),
            title: format_title(&draft.title),
            content: format_content(&draft.content),
            author: draft.author.clone(),
            published_at: Utc::now(),
        };
        article.id = self.repository.save(&article)?;

        self.notifier.send(
            &article.author,
            &format!("Your article \"{}\" has been published", article.title),
        )?;

        tracing::debug!(id = %article.id, "article published");
        Ok(article)
    }

    /// Borrows the repository
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Borrows the notifier
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_whitespace_runs_collapse() {
        assert_eq!(format_title("  Hello   World "), "-hello-world-");
        assert_eq!(format_title("ÁRVORE Grande"), "árvore-grande");
    }

    #[test]
    fn title_lowercasing_uses_final_sigma() {
        assert_eq!(format_title("ΟΔΟΣ ΑΘΗΝΩΝ"), "οδος-αθηνων");
        assert_eq!(format_title(" ΟΔΟΣ "), "-οδος-");
    }

    #[test]
    fn content_newlines_become_breaks() {
        assert_eq!(format_content("a\nb\n"), "a<br>b<br>");
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let rules = ValidationRules {
            min_title_chars: 5,
            min_content_chars: 0,
        };
        // four characters, eight bytes
        let draft = ArticleDraft::new("ãããã", "", "x");
        assert_eq!(validate(&draft, rules), Err(ArticleError::TitleTooShort));
    }

    #[test]
    fn random_ids_are_nine_base36_chars() {
        let id = RandomIdGenerator.next_id();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIdGenerator::new("post");
        assert_eq!(ids.next_id(), "post-1");
        assert_eq!(ids.next_id(), "post-2");
    }
}
