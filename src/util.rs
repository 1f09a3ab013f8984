// Formatting helpers for the canvas overlays

/// Scale as a rounded percentage, e.g. `1.15` -> `"115%"`.
pub fn format_scale(scale: f64) -> String {
    format!("{}%", (scale * 100.0).round() as i64)
}

/// Human label for a `KeyboardEvent.key` modifier name.
pub fn modifier_label(key: &str) -> &str {
    match key {
        "Control" => "Ctrl",
        "Meta" => "Cmd",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_rounds_to_whole_percent() {
        assert_eq!(format_scale(1.0), "100%");
        assert_eq!(format_scale(1.15), "115%");
        assert_eq!(format_scale(0.2), "20%");
        assert_eq!(format_scale(0.9999999), "100%");
        assert_eq!(format_scale(5.0), "500%");
    }

    #[test]
    fn modifier_labels() {
        assert_eq!(modifier_label("Control"), "Ctrl");
        assert_eq!(modifier_label("Meta"), "Cmd");
        assert_eq!(modifier_label("Alt"), "Alt");
    }
}
