//! Export naming convention.
//!
//! The export collaborator names files after the element kind, its draw
//! mode and a timestamp. The core never parses these names back.

use crate::kind::ElementKind;

/// Builds `<kind>_<drawMode>_<epochMillis>.png`.
pub fn export_file_name(kind: ElementKind, draw_mode: &str, epoch_millis: i64) -> String {
    let mode = if draw_mode.is_empty() {
        crate::element::DEFAULT_DRAW_MODE
    } else {
        draw_mode
    };
    format!("{}_{}_{}.png", kind.as_str(), mode, epoch_millis)
}
