//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use purchases_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    // --- Summary cards ---

    pub fn receipt(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f543}", // nf-fa-receipt
            IconMode::Unicode => "\u{2261}",   // ≡
        }
    }

    pub fn wallet(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f555}", // nf-fa-wallet
            IconMode::Unicode => "$",
        }
    }

    // --- Status badges ---

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn clock(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f017}", // nf-fa-clock_o
            IconMode::Unicode => "\u{25f7}",   // ◷
        }
    }

    pub fn close(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00d}", // nf-fa-close
            IconMode::Unicode => "\u{2717}",   // ✗
        }
    }

    // --- Rows ---

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{25b8}",   // ▸
        }
    }

    pub fn chevron_down(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f078}", // nf-fa-chevron_down
            IconMode::Unicode => "\u{25be}",   // ▾
        }
    }

    pub fn image(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f03e}", // nf-fa-image
            IconMode::Unicode => "\u{25a3}",   // ▣
        }
    }

    // --- Filters / empty state ---

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "/",
        }
    }

    pub fn inbox(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f01c}", // nf-fa-inbox
            IconMode::Unicode => "\u{2205}",   // ∅
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_icons_are_non_empty() {
        let icons = IconSet::new(IconMode::Unicode);
        for icon in [
            icons.receipt(),
            icons.wallet(),
            icons.check(),
            icons.clock(),
            icons.close(),
            icons.chevron_right(),
            icons.chevron_down(),
            icons.image(),
            icons.search(),
            icons.inbox(),
        ] {
            assert!(!icon.is_empty());
        }
    }

    #[test]
    fn test_unicode_and_nerd_font_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.check(), nerd.check());
        assert_ne!(unicode.clock(), nerd.clock());
        assert_ne!(unicode.inbox(), nerd.inbox());
    }

    #[test]
    fn test_status_icons() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.check(), "✓");
        assert_eq!(icons.clock(), "◷");
        assert_eq!(icons.close(), "✗");
    }
}
