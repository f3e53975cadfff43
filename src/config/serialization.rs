//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML template.
    ///
    /// The mail API key is never written; it only comes from RESEND_API_KEY.
    pub fn to_toml(&self) -> String {
        let content_path = match &self.content_path {
            Some(path) => format!("content_path = {:?}\n", path.display().to_string()),
            None => "# content_path = \"~/portfolio.toml\"\n".to_string(),
        };

        format!(
            r#"# folio configuration

# Theme: Folio Dark, Folio Light, Terminal
theme = "{theme}"

# Contact relay bind address (the TUI contact form posts here too)
bind_addr = "{bind}"

# Portfolio content file (bundled content when unset)
{content_path}
# Hero headline typing animation
[typing]
speed_ms = {speed}     # per typed character; deleting runs at half this
delay_ms = {delay}   # pause once a phrase is complete

# Pointer and ambient effects
[effects]
magnetic_strength = {magnetic}   # hero buttons
element_strength = {element}    # other interactive elements
cursor_trail = {trail}
particles = {particles}

# Contact relay mail provider (API key: RESEND_API_KEY env var)
[mail]
api_url = "{mail_url}"
from = "{mail_from}"
to = {mail_to:?}
subject_prefix = "{mail_prefix}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stdout)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            bind = self.bind_addr,
            content_path = content_path,
            speed = self.typing.speed_ms,
            delay = self.typing.delay_ms,
            magnetic = self.effects.magnetic_strength,
            element = self.effects.element_strength,
            trail = self.effects.cursor_trail,
            particles = self.effects.particles,
            mail_url = self.mail.api_url,
            mail_from = self.mail.from,
            mail_to = self.mail.to,
            mail_prefix = self.mail.subject_prefix,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
