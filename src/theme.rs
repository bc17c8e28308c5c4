//! Display mode and brand palette preferences.
//!
//! [`ThemeState`] is built explicitly from a [`PreferenceStore`], loads what was
//! persisted, and writes back on every change. Listeners get a
//! [`tokio::sync::watch`] receiver. In the web layer the store is the visitor's
//! cookie jar.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;

pub const THEME_KEY: &str = "theme";
pub const COLOR_SCHEME_KEY: &str = "colorScheme";

/// Cookie lifetime for persisted preferences (one year).
const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// One of the two brand palettes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Bain,
    #[default]
    Talsom,
}

impl ColorScheme {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bain => "bain",
            Self::Talsom => "talsom",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "bain" => Some(Self::Bain),
            "talsom" => Some(Self::Talsom),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Bain => Self::Talsom,
            Self::Talsom => Self::Bain,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreferences {
    pub theme: Theme,
    pub color_scheme: ColorScheme,
}

impl ThemePreferences {
    /// Read persisted values. Missing or unrecognized values keep the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn load(store: &impl PreferenceStore) -> Result<Self, StoreError> {
        let defaults = Self::default();
        Ok(Self {
            theme: store
                .get(THEME_KEY)?
                .as_deref()
                .and_then(Theme::from_str)
                .unwrap_or(defaults.theme),
            color_scheme: store
                .get(COLOR_SCHEME_KEY)?
                .as_deref()
                .and_then(ColorScheme::from_str)
                .unwrap_or(defaults.color_scheme),
        })
    }

    fn persist(self, store: &impl PreferenceStore) -> Result<(), StoreError> {
        store.set(THEME_KEY, self.theme.as_str())?;
        store.set(COLOR_SCHEME_KEY, self.color_scheme.as_str())
    }
}

/// Attributes the preferences put on the root `<html>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttributes {
    /// `Some("dark")` in dark mode.
    pub class: Option<&'static str>,
    /// Value of `data-color-scheme`.
    pub color_scheme: &'static str,
}

impl From<ThemePreferences> for DocumentAttributes {
    fn from(prefs: ThemePreferences) -> Self {
        Self {
            class: (prefs.theme == Theme::Dark).then_some("dark"),
            color_scheme: prefs.color_scheme.as_str(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference store lock poisoned")]
    Poisoned,
    #[error("invalid preference value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// String key-value storage for preferences.
pub trait PreferenceStore: Send + Sync {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage is unavailable or rejects the value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a request's `Cookie` header.
///
/// Reads come from the request cookies, overlaid with anything written since.
/// Writes are collected as `Set-Cookie` values for the response.
#[derive(Debug, Default)]
pub struct CookieStore {
    cookies: Mutex<HashMap<String, String>>,
    pending: Mutex<Vec<(String, String)>>,
}

impl CookieStore {
    /// Parse a `Cookie` request header (`a=1; b=2`).
    #[must_use]
    pub fn from_header(header: Option<&str>) -> Self {
        let cookies = header
            .unwrap_or_default()
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                let name = name.trim();
                (!name.is_empty()).then(|| (name.to_string(), value.trim().to_string()))
            })
            .collect();
        Self {
            cookies: Mutex::new(cookies),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// `Set-Cookie` header values for every key written through this store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    pub fn set_cookie_headers(&self) -> Result<Vec<String>, StoreError> {
        let pending = self.pending.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(pending
            .iter()
            .map(|(name, value)| {
                format!("{name}={value}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax")
            })
            .collect())
    }
}

impl PreferenceStore for CookieStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let cookies = self.cookies.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(cookies.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(StoreError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        self.cookies
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .insert(key.to_string(), value.to_string());

        let mut pending = self.pending.lock().map_err(|_| StoreError::Poisoned)?;
        pending.retain(|(name, _)| name != key);
        pending.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

/// Theme preferences bound to a store, with change notification.
pub struct ThemeState<S: PreferenceStore> {
    store: S,
    tx: watch::Sender<ThemePreferences>,
}

impl<S: PreferenceStore> fmt::Debug for ThemeState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("preferences", &*self.tx.borrow())
            .field("subscribers", &self.tx.receiver_count())
            .finish_non_exhaustive()
    }
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Load persisted preferences from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn init(store: S) -> Result<Self, StoreError> {
        let prefs = ThemePreferences::load(&store)?;
        let (tx, _) = watch::channel(prefs);
        Ok(Self { store, tx })
    }

    #[must_use]
    pub fn get(&self) -> ThemePreferences {
        *self.tx.borrow()
    }

    /// Replace the preferences, persist them, and notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write. Subscribers are not
    /// notified in that case.
    pub fn set(&self, prefs: ThemePreferences) -> Result<(), StoreError> {
        prefs.persist(&self.store)?;
        debug!(
            theme = prefs.theme.as_str(),
            color_scheme = prefs.color_scheme.as_str(),
            "Theme preferences updated"
        );
        self.tx.send_replace(prefs);
        Ok(())
    }

    /// Receiver that observes every subsequent change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ThemePreferences> {
        self.tx.subscribe()
    }

    /// Switch between light and dark.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn toggle_theme(&self) -> Result<ThemePreferences, StoreError> {
        let mut prefs = self.get();
        prefs.theme = prefs.theme.toggled();
        self.set(prefs)?;
        Ok(prefs)
    }

    /// Switch between the two brand palettes.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn toggle_color_scheme(&self) -> Result<ThemePreferences, StoreError> {
        let mut prefs = self.get();
        prefs.color_scheme = prefs.color_scheme.toggled();
        self.set(prefs)?;
        Ok(prefs)
    }

    /// Drop the notifier and hand back the store. Subscribers see the channel close.
    #[must_use]
    pub fn teardown(self) -> S {
        self.store
    }
}
