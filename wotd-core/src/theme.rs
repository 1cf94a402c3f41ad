use std::fmt;
use std::str::FromStr;

/// Stored and applied as its bare name, e.g. `localStorage.theme = dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    HotDogStand,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme '{0}'")]
pub struct UnknownTheme(String);

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::HotDogStand => "hotdogstand",
        }
    }

    pub fn from_preference(prefers_light: bool) -> Self {
        if prefers_light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// `alternate` is the shift-click easter egg.
    pub fn next(self, alternate: bool) -> Self {
        match (alternate, self) {
            (true, _) => Theme::HotDogStand,
            (false, Theme::Dark) => Theme::Light,
            (false, _) => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "hotdogstand" => Ok(Theme::HotDogStand),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Toggle state for the theme button. A toggle starts a cooldown during which
/// further toggles are ignored until [`ThemeSwitcher::cool_down`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSwitcher {
    theme: Theme,
    cooling: bool,
}

impl ThemeSwitcher {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            cooling: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_cooling(&self) -> bool {
        self.cooling
    }

    pub fn toggle(&mut self, alternate: bool) -> Option<Theme> {
        if self.cooling {
            return None;
        }
        self.theme = self.theme.next(alternate);
        self.cooling = true;
        Some(self.theme)
    }

    pub fn cool_down(&mut self) {
        self.cooling = false;
    }
}

/// Where the themed variant of an SVG icon lives, or `None` for non-SVG images.
pub fn themed_icon_path(asset_base: &str, theme: Theme, src: &str) -> Option<String> {
    if !src.ends_with(".svg") {
        return None;
    }
    let file = src.rsplit('/').next().filter(|f| !f.is_empty())?;
    Some(format!(
        "{}/svg/{}/{}",
        asset_base.trim_end_matches('/'),
        theme.as_str(),
        file
    ))
}
