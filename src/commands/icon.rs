//! Icon command handler.

use crate::error::Result;
use crate::status::resolve;

/// Format the resolved icon as "<glyph> <name>".
pub fn format_icon(reason: Option<&str>, status: Option<&str>) -> String {
    let icon = resolve(reason, status);
    format!("{} {}", icon.glyph(), icon.name())
}

/// Print the icon resolved for a condition.
pub fn icon_command(reason: Option<&str>, status: Option<&str>) -> Result<()> {
    println!("{}", format_icon(reason, status));
    Ok(())
}
