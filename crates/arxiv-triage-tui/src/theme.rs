use ratatui::style::{Color, Modifier, Style};

use arxiv_triage_core::{NotificationLevel, PaperStatus, RelevanceBand};

/// Color theme for the TUI.
pub struct Theme {
    pub band_high: Color,
    pub band_medium: Color,
    pub band_low: Color,
    pub band_fg: Color,

    pub added: Color,
    pub ignored: Color,
    pub pending: Color,
    pub success: Color,
    pub error: Color,
    pub link: Color,

    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub active: Color,
    pub spinner: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    /// Pick a theme by name; unknown names fall back to `hacker`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "modern" => Self::modern(),
            _ => Self::hacker(),
        }
    }

    /// Hacker-green terminal theme.
    pub fn hacker() -> Self {
        Self {
            band_high: Color::Rgb(0, 200, 0),
            band_medium: Color::Rgb(255, 165, 0),
            band_low: Color::Rgb(220, 0, 0),
            band_fg: Color::Black,

            added: Color::Rgb(0, 210, 0),
            ignored: Color::DarkGray,
            pending: Color::Yellow,
            success: Color::Rgb(0, 210, 0),
            error: Color::Red,
            link: Color::Cyan,

            header_fg: Color::Black,
            header_bg: Color::Rgb(0, 210, 0),
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(30, 50, 30),
            active: Color::Cyan,
            spinner: Color::Cyan,
            footer_fg: Color::DarkGray,
            footer_bg: Color::Reset,
        }
    }

    /// Modern theme: white text, electric blue accents, dark blue header.
    pub fn modern() -> Self {
        Self {
            band_high: Color::Rgb(0, 200, 80),
            band_medium: Color::Rgb(255, 170, 40),
            band_low: Color::Rgb(255, 80, 80),
            band_fg: Color::Rgb(20, 20, 30),

            added: Color::Rgb(0, 200, 80),
            ignored: Color::Rgb(120, 120, 140),
            pending: Color::Rgb(255, 200, 0),
            success: Color::Rgb(0, 200, 80),
            error: Color::Rgb(255, 80, 80),
            link: Color::Rgb(60, 140, 255),

            header_fg: Color::White,
            header_bg: Color::Rgb(30, 60, 120),
            border: Color::Rgb(60, 60, 80),
            text: Color::White,
            dim: Color::Rgb(120, 120, 140),
            highlight_bg: Color::Rgb(30, 40, 80),
            active: Color::Rgb(60, 140, 255),
            spinner: Color::Rgb(60, 140, 255),
            footer_fg: Color::Rgb(120, 120, 140),
            footer_bg: Color::Reset,
        }
    }

    pub fn band_color(&self, band: RelevanceBand) -> Color {
        match band {
            RelevanceBand::High => self.band_high,
            RelevanceBand::Medium => self.band_medium,
            RelevanceBand::Low => self.band_low,
        }
    }

    /// Badge style for a relevance score: band color as background.
    pub fn band_style(&self, band: RelevanceBand) -> Style {
        Style::default()
            .fg(self.band_fg)
            .bg(self.band_color(band))
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_color(&self, status: PaperStatus) -> Color {
        match status {
            PaperStatus::Pending => self.pending,
            PaperStatus::Added => self.added,
            PaperStatus::Ignored => self.ignored,
        }
    }

    pub fn notification_color(&self, level: NotificationLevel) -> Color {
        match level {
            NotificationLevel::Success => self.success,
            NotificationLevel::Error => self.error,
            NotificationLevel::Info => self.active,
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }

    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }
}
