/// Canned sample inputs offered as one-click shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickFill {
    Url,
    Text,
    Email,
}

impl QuickFill {
    pub const ALL: [Self; 3] = [Self::Url, Self::Text, Self::Email];

    /// The text placed in the input field.
    pub fn sample(self) -> &'static str {
        match self {
            Self::Url => "https://example.com",
            Self::Text => "Scan this QR code!",
            Self::Email => "mailto:hello@example.com",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "🔗 URL",
            Self::Text => "📝 Text",
            Self::Email => "✉ Email",
        }
    }
}
