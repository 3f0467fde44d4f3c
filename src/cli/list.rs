// ABOUTME: CLI list command - print every session in catalog order
//
// Nothing is written until the whole catalog is built.

use anyhow::Result;
use std::io::Write;

use super::{ListArgs, OutputFormat};
use crate::config::ConfigSource;
use crate::process::SystemRunner;
use crate::session::{SessionAggregator, SessionCatalog};

/// Execute the list command
pub async fn execute<C: ConfigSource>(args: ListArgs, config: &C) -> Result<()> {
    let catalog = SessionAggregator::new(config, &SystemRunner).build().await?;
    let rendered = render(&catalog, args.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// One name per line, or a JSON array of sessions.
pub fn render(catalog: &SessionCatalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(catalog.names().map(|name| format!("{name}\n")).collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(catalog.sessions())?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;

    fn catalog() -> SessionCatalog {
        SessionCatalog::merge([
            vec![Session::live("main")],
            vec![Session::at_path("/srv/app.v2").with_template_profile(Some("web".to_string()))],
        ])
    }

    #[test]
    fn test_render_text() {
        assert_eq!(render(&catalog(), OutputFormat::Text).unwrap(), "main\n/srv/app_v2\n");
    }

    #[test]
    fn test_render_text_empty_catalog() {
        assert_eq!(render(&SessionCatalog::default(), OutputFormat::Text).unwrap(), "");
    }

    #[test]
    fn test_render_json() {
        let rendered = render(&catalog(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value[0]["name"], "main");
        assert!(value[0].get("path").is_none());
        assert_eq!(value[1]["name"], "/srv/app_v2");
        assert_eq!(value[1]["path"], "/srv/app.v2");
        assert_eq!(value[1]["tmuxinator"], "web");
    }
}
