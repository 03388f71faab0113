use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    /// Qiita:Team access token
    pub access_token: String,
    /// Qiita:Team name (the `<team>` in `https://<team>.qiita.com`)
    pub team_name: String,
    /// Opaque token used in the output filename and the feed's self URL
    pub secret: String,
    /// `per_page` sent to the items endpoint; API default when unset
    pub per_page: Option<u32>,
    /// Attach per-user author and avatar content to each entry
    pub branding: bool,
    pub feed_title: Option<String>,
    pub feed_author: Option<String>,
    /// Base URL the generated feed is published under
    pub publish_url: Option<String>,
    pub output_dir: PathBuf,
    /// Base URL for the Qiita API
    pub qiita_base_url: String,
    /// Request timeout; the HTTP client default applies when unset
    pub http_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let access_token =
            get("QIITA_ACCESS_TOKEN").ok_or(ConfigError::Missing("QIITA_ACCESS_TOKEN"))?;
        let team_name = get("QIITA_TEAM_NAME").ok_or(ConfigError::Missing("QIITA_TEAM_NAME"))?;
        let secret = get("SECRET").ok_or(ConfigError::Missing("SECRET"))?;
        validate_secret(&secret)?;

        let per_page = get("FEED_ITEM_NUM")
            .map(|v| parse_positive("FEED_ITEM_NUM", &v))
            .transpose()?;

        let branding = match get("FEED_BRANDING") {
            Some(v) => parse_bool("FEED_BRANDING", &v)?,
            None => true,
        };

        let http_timeout = get("FEED_HTTP_TIMEOUT_SECS")
            .map(|v| parse_positive("FEED_HTTP_TIMEOUT_SECS", &v))
            .transpose()?
            .map(|secs| Duration::from_secs(u64::from(secs)));

        let qiita_base_url =
            get("QIITA_BASE_URL").unwrap_or_else(|| format!("https://{}.qiita.com", team_name));

        Ok(Self {
            access_token,
            team_name,
            secret,
            per_page,
            branding,
            feed_title: get("FEED_TITLE"),
            feed_author: get("FEED_AUTHOR"),
            publish_url: get("FEED_PUBLISH_URL"),
            output_dir: get("FEED_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            qiita_base_url,
            http_timeout,
        })
    }

    /// Public team site, e.g. `https://feedforce.qiita.com/`
    pub fn site_url(&self) -> String {
        format!("https://{}.qiita.com/", self.team_name)
    }

    pub fn title(&self) -> String {
        self.feed_title
            .clone()
            .unwrap_or_else(|| format!("{} Qiita:Team", self.team_name))
    }

    pub fn author(&self) -> String {
        self.feed_author
            .clone()
            .unwrap_or_else(|| self.team_name.clone())
    }

    /// Where the feed file itself is served, when a publish URL is configured
    pub fn self_url(&self) -> Option<String> {
        self.publish_url
            .as_ref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), self.output_file_name()))
    }

    /// The feed id. Falls back to the team site when no publish URL is configured.
    pub fn about(&self) -> String {
        self.self_url().unwrap_or_else(|| self.site_url())
    }

    pub fn output_file_name(&self) -> String {
        format!("{}.atom", self.secret)
    }
}

fn validate_secret(secret: &str) -> Result<(), ConfigError> {
    let unsafe_char = secret
        .chars()
        .any(|c| matches!(c, '/' | '\\' | '\0') || c.is_control());

    if unsafe_char || secret == "." || secret == ".." {
        return Err(ConfigError::Invalid {
            key: "SECRET",
            message: "must be usable as a file name".to_string(),
        });
    }
    Ok(())
}

fn parse_positive(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ConfigError::Invalid {
            key,
            message: "should be larger than zero".to_string(),
        }),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            key,
            message: format!("expected a boolean, got {:?}", other),
        }),
    }
}
