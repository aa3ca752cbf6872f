//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, SearchArgs};
use crate::client::NewsFeedClient;
use crate::config::{ClientConfig, SearchDefaults};
use crate::error::Result;
use crate::search::SearchRequestBuilder;
use crate::types::Article;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub async fn run(&self) -> Result<()> {
        let output = self.execute().await?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return the rendered output
    pub async fn execute(&self) -> Result<String> {
        let config = self.client_config()?;
        let client = NewsFeedClient::from_config(&config)?;

        let (pages, first_page) = match &self.cli.command {
            Commands::First { search, pages } => {
                let mut builder = build_request(&config.defaults, search)?;
                if let Some(count) = pages {
                    builder = builder.pages_count(*count)?;
                }
                let request = builder.build()?;
                info!(
                    "Fetching up to {} pages for {:?}",
                    request.pages_count(),
                    request.keywords()
                );
                (client.first_pages(&request).await?, 1)
            }
            Commands::All { search } => {
                let request = build_request(&config.defaults, search)?.build()?;
                info!("Fetching all pages for {:?}", request.keywords());
                (client.all_pages(&request).await?, 1)
            }
            Commands::Page { search, number } => {
                let request = build_request(&config.defaults, search)?.build()?;
                info!("Fetching page {} for {:?}", number, request.keywords());
                (vec![client.page_by_index(&request, *number).await?], *number)
            }
        };

        let articles: usize = pages.iter().map(Vec::len).sum();
        info!("Retrieved {} articles on {} pages", articles, pages.len());

        render_pages(&pages, self.cli.format, first_page)
    }

    /// Config file merged with command-line overrides
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(key) = &self.cli.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(endpoint) = &self.cli.endpoint {
            config.endpoint = endpoint.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn build_request(
    defaults: &SearchDefaults,
    search: &SearchArgs,
) -> Result<SearchRequestBuilder> {
    let mut builder = defaults.builder(search.keywords.iter().cloned())?;
    if let Some(category) = &search.category {
        builder = builder.category(category.clone());
    }
    if let Some(country) = &search.country {
        builder = builder.country(country.clone());
    }
    if let Some(size) = search.page_size {
        builder = builder.page_size(size)?;
    }
    Ok(builder)
}

/// Render fetched pages; `first_page` numbers the first list in pretty output
pub fn render_pages(
    pages: &[Vec<Article>],
    format: OutputFormat,
    first_page: u32,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(pages)?),
        OutputFormat::Pretty => {
            let mut out = String::new();
            for (page_number, articles) in (first_page..).zip(pages) {
                out.push_str(&format!(
                    "Page {page_number} ({} articles)\n",
                    articles.len()
                ));
                for article in articles {
                    write_article(&mut out, article);
                }
            }
            Ok(out.trim_end().to_string())
        }
    }
}

fn write_article(out: &mut String, article: &Article) {
    let title = article.title.as_deref().unwrap_or("(untitled)");
    let source = article
        .source
        .as_ref()
        .and_then(|s| s.name.as_deref())
        .unwrap_or("unknown source");

    out.push_str(&format!("  - {title} [{source}]\n"));
    if let Some(published) = &article.published_at {
        out.push_str(&format!("    {published}\n"));
    }
    if let Some(url) = &article.url {
        out.push_str(&format!("    {url}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::search::SearchRequest;
    use crate::types::ArticleSource;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn article(title: &str) -> Article {
        Article {
            source: Some(ArticleSource {
                id: None,
                name: Some("Wire".to_string()),
            }),
            title: Some(title.to_string()),
            url: Some(format!("https://example.com/{title}")),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_pretty() {
        let pages = vec![vec![article("a"), article("b")], vec![article("c")]];
        let out = render_pages(&pages, OutputFormat::Pretty, 1).unwrap();

        assert_eq!(
            out,
            "Page 1 (2 articles)\n  - a [Wire]\n    https://example.com/a\n  - b [Wire]\n    \
             https://example.com/b\nPage 2 (1 articles)\n  - c [Wire]\n    https://example.com/c"
        );
    }

    #[test]
    fn test_render_pretty_numbers_from_first_page() {
        let out = render_pages(&[Vec::new()], OutputFormat::Pretty, 4).unwrap();
        assert_eq!(out, "Page 4 (0 articles)");
    }

    #[test]
    fn test_render_pretty_published_and_fallbacks() {
        let dated = Article {
            published_at: Some("2024-01-01T00:00:00Z".to_string()),
            ..article("a")
        };
        let out = render_pages(&[vec![dated, Article::default()]], OutputFormat::Pretty, 1)
            .unwrap();

        assert_eq!(
            out,
            "Page 1 (2 articles)\n  - a [Wire]\n    2024-01-01T00:00:00Z\n    \
             https://example.com/a\n  - (untitled) [unknown source]"
        );
    }

    #[test]
    fn test_render_json() {
        let out = render_pages(&[vec![article("a")]], OutputFormat::Json, 1).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0][0]["title"], "a");
        assert_eq!(value[0][0]["source"]["name"], "Wire");
    }

    #[test]
    fn test_cli_parses_search() {
        let cli = Cli::parse_from([
            "newsfeed",
            "first",
            "biden",
            "trump",
            "--country",
            "us",
            "--page-size",
            "20",
            "--pages",
            "2",
        ]);
        match cli.command {
            Commands::First { search, pages } => {
                assert_eq!(search.keywords, vec!["biden", "trump"]);
                assert_eq!(search.country.as_deref(), Some("us"));
                assert_eq!(search.page_size, Some(20));
                assert_eq!(pages, Some(2));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_requires_keywords() {
        assert!(Cli::try_parse_from(["newsfeed", "all"]).is_err());
    }

    #[test]
    fn test_build_request_overrides_defaults() {
        let defaults = SearchDefaults {
            category: Some("business".to_string()),
            page_size: Some(50),
            ..Default::default()
        };
        let search = SearchArgs {
            keywords: vec!["x".to_string()],
            category: None,
            country: Some("de".to_string()),
            page_size: Some(10),
        };

        let request: SearchRequest = build_request(&defaults, &search).unwrap().build().unwrap();
        assert_eq!(request.category(), Some("business"));
        assert_eq!(request.country(), Some("de"));
        assert_eq!(request.page_size(), 10);
    }

    #[test]
    fn test_build_request_rejects_zero_page_size() {
        let search = SearchArgs {
            keywords: vec!["x".to_string()],
            category: None,
            country: None,
            page_size: Some(0),
        };
        let err = build_request(&SearchDefaults::default(), &search).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_client_config_cli_overrides() {
        let cli = Cli::parse_from([
            "newsfeed",
            "--api-key",
            "cli-key",
            "--endpoint",
            "http://127.0.0.1:1234/v2/top-headlines",
            "all",
            "x",
        ]);
        let config = Runner::new(cli).client_config().unwrap();
        assert_eq!(config.api_key.as_deref(), Some("cli-key"));
        assert_eq!(config.endpoint, "http://127.0.0.1:1234/v2/top-headlines");
    }
}
