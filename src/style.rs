use inksac::prelude::*;

/// Terminal decoration for the shell's own output. Degrades to plain
/// text when the terminal reports no color support.
#[derive(Debug, Clone, Copy)]
pub struct OutputStyle {
    color_support: ColorSupport,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputStyle {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    fn plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    pub fn banner(&self, text: &str) -> String {
        if self.plain() {
            return text.to_string();
        }

        let banner_style = Style::builder()
            .foreground(Color::Magenta)
            .bold()
            .build();

        text.style(banner_style).to_string()
    }

    pub fn info(&self, message: &str) -> String {
        if self.plain() {
            return message.to_string();
        }

        let info_style = Style::builder().foreground(Color::Yellow).build();

        message.style(info_style).to_string()
    }

    pub fn warning(&self, message: &str) -> String {
        if self.plain() {
            return message.to_string();
        }

        let warning_style = Style::builder()
            .foreground(Color::Yellow)
            .bold()
            .build();

        message.style(warning_style).to_string()
    }

    pub fn error(&self, message: &str) -> String {
        if self.plain() {
            return message.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        message.style(error_style).to_string()
    }

    pub fn command_name(&self, name: &str) -> String {
        if self.plain() {
            return name.to_string();
        }

        let name_style = Style::builder()
            .foreground(Color::Cyan)
            .bold()
            .build();

        name.style(name_style).to_string()
    }
}
