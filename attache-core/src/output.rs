//! # Output Formatting
//!
//! Colored, emoji-prefixed messages for the command line.

use owo_colors::OwoColorize;

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("white_check_mark", "✓");
  println!("{} {}", check.green().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", warning.yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information_source", "ℹ");
  println!("{} {}", info.blue().bold(), message);
}

/// Print a `name: value` line with the name highlighted
pub fn print_field(name: &str, value: &str) {
  println!("  {:<20} {}", format!("{name}:").bright_cyan().bold(), value);
}

/// Format a filesystem path
pub fn format_path(path: &str) -> String {
  path.bright_green().to_string()
}

/// Format a URL
pub fn format_url(url: &str) -> String {
  url.underline().to_string()
}

/// Format a command or command example
pub fn format_command(cmd: &str) -> String {
  cmd.purple().to_string()
}

/// Mask a secret, keeping only its first characters
pub fn redact(secret: &str) -> String {
  let visible: String = secret.chars().take(4).collect();
  if secret.chars().count() <= 4 {
    "****".to_string()
  } else {
    format!("{visible}…")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_emoji_or_default() {
    assert!(!get_emoji_or_default("warning", "!").is_empty());
    assert_eq!(get_emoji_or_default("not_an_emoji_name", "!"), "!");
  }

  #[test]
  fn test_redact() {
    assert_eq!(redact("sig1"), "****");
    assert_eq!(redact("abcdef123456"), "abcd…");
  }

  #[test]
  fn test_format_helpers_keep_text() {
    assert!(format_path("/tmp/cat.png").contains("/tmp/cat.png"));
    assert!(format_url("https://chat.example.com").contains("https://chat.example.com"));
    assert!(format_command("attache upload").contains("attache upload"));
  }
}
