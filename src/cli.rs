//! CLI argument parsing and release source configuration.
use clap::Parser;
use secrecy::SecretString;
use std::env;
use url::Url;

use crate::{
    error::{DigestError, Result},
    forge::config::ReleaseSource,
};

/// CLI arguments for the release digest command.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// GitHub release page URL (https://github.com/owner/repo/releases/tag/v1.2.3).
    pub url: String,

    #[arg(long, default_value = "")]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Resolve the release source from the release URL and token arguments.
    /// Fails before any network call when the URL does not match the
    /// github.com release page shape.
    pub fn get_release_source(&self) -> Result<ReleaseSource> {
        let parsed = Url::parse(&self.url)?;

        validate_scheme(parsed.scheme())?;

        let host = parsed.host_str().ok_or(DigestError::invalid_url(
            "unable to parse host from release url",
        ))?;

        if host != "github.com" {
            return Err(DigestError::invalid_url(format!(
                "expected github.com release url, got host: {host}"
            )));
        }

        let segments = parsed
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).collect::<Vec<&str>>())
            .unwrap_or_default();

        let (owner, repo, tag) = match segments.as_slice() {
            [owner, repo, "releases", "tag", tag] => {
                (owner.to_string(), repo.to_string(), tag.to_string())
            }
            _ => {
                return Err(DigestError::invalid_url(format!(
                    "expected /owner/repo/releases/tag/name path, got: {}",
                    parsed.path()
                )));
            }
        };

        let mut token = self.github_token.clone();

        if token.is_empty()
            && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
        {
            token = env_var_token;
        }

        if token.is_empty() {
            return Err(DigestError::AuthenticationError(
                "must set github token".into(),
            ));
        }

        Ok(ReleaseSource {
            owner,
            repo,
            tag,
            token: SecretString::from(token),
        })
    }
}

/// Validate release URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: &str) -> Result<()> {
    match scheme {
        "http" | "https" => Ok(()),
        _ => Err(DigestError::invalid_url(
            "only http and https schemes are supported for release urls",
        )),
    }
}
