use crate::warn;
use itertools::Itertools;
use regex::Regex;
use std::{io, path::PathBuf, sync::LazyLock};

pub(crate) const ACCESS_TOKEN: &str = "accessToken";
pub(crate) const REFRESH_TOKEN: &str = "refreshToken";

/// `name=value;` pairs. Values end at the first `;`, same as a browser cookie string.
static COOKIE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^=;\s]+)=(.*?);").expect("cookie pattern is valid"));

/// File backed cookie storage for the session tokens.
///
/// The file holds a single cookie string, e.g.
/// `accessToken=eyJ...; refreshToken=eyJ...;`.
#[derive(Debug, Clone)]
pub(crate) struct CookieJar {
    path: PathBuf,
}

impl CookieJar {
    pub(crate) fn new<P: Into<PathBuf>>(path: P) -> Self { Self { path: path.into() } }

    pub(crate) fn path(&self) -> &PathBuf { &self.path }

    async fn read_entries(&self) -> io::Result<Vec<(String, String)>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };
        Ok(parse_cookie_string(&raw))
    }

    async fn write_entries(&self, entries: &[(String, String)]) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, to_cookie_string(entries)).await
    }

    /// Value of the cookie `name`. Empty values and unreadable jars count as absent.
    pub(crate) async fn get(&self, name: &str) -> Option<String> {
        match self.read_entries().await {
            Ok(entries) => entries
                .into_iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value)
                .filter(|value| !value.is_empty()),
            Err(err) => {
                warn!("Could not read cookie jar {}: {err}", self.path.display());
                None
            }
        }
    }

    pub(crate) async fn set(&self, name: &str, value: &str) -> io::Result<()> {
        self.set_all(&[(name, value)]).await
    }

    /// Sets every pair with a single write, so either all or none land.
    async fn set_all(&self, pairs: &[(&str, &str)]) -> io::Result<()> {
        let mut entries = self.read_entries().await?;
        for (name, value) in pairs {
            match entries.iter_mut().find(|(key, _)| key == name) {
                Some(entry) => entry.1 = (*value).to_string(),
                None => entries.push(((*name).to_string(), (*value).to_string())),
            }
        }
        self.write_entries(&entries).await
    }

    pub(crate) async fn remove(&self, name: &str) -> io::Result<()> {
        let mut entries = self.read_entries().await?;
        let before = entries.len();
        entries.retain(|(key, _)| key != name);
        if entries.len() == before {
            return Ok(());
        }
        self.write_entries(&entries).await
    }

    pub(crate) async fn store_tokens(&self, access: &str, refresh: &str) -> io::Result<()> {
        self.set_all(&[(ACCESS_TOKEN, access), (REFRESH_TOKEN, refresh)]).await
    }

    pub(crate) async fn clear_tokens(&self) -> io::Result<()> {
        let mut entries = self.read_entries().await?;
        let before = entries.len();
        entries.retain(|(key, _)| key != ACCESS_TOKEN && key != REFRESH_TOKEN);
        if entries.len() == before {
            return Ok(());
        }
        self.write_entries(&entries).await
    }
}

fn parse_cookie_string(raw: &str) -> Vec<(String, String)> {
    // a trailing entry without `;` would be invisible to the lazy match
    let mut terminated = raw.trim().to_string();
    if !terminated.is_empty() && !terminated.ends_with(';') {
        terminated.push(';');
    }
    COOKIE_ENTRY
        .captures_iter(&terminated)
        .map(|cap| (cap[1].to_string(), cap[2].trim().to_string()))
        .collect()
}

fn to_cookie_string(entries: &[(String, String)]) -> String {
    entries.iter().map(|(k, v)| format!("{k}={v};")).join(" ")
}
