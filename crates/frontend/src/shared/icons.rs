use leptos::prelude::*;

/// Outline glyph: pixel size, whether it is filled, inner SVG markup (lucide, 24x24 grid)
struct Glyph {
    size: u32,
    filled: bool,
    body: &'static str,
}

const fn outline(size: u32, body: &'static str) -> Glyph {
    Glyph { size, filled: false, body }
}

const FALLBACK: Glyph = outline(20, r#"<circle cx="12" cy="12" r="10"/>"#);

fn glyph(name: &str) -> Glyph {
    match name {
        "camera" => outline(
            20,
            r#"<path d="M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z"/><circle cx="12" cy="13" r="3"/>"#,
        ),
        "calendar" => outline(
            20,
            r#"<rect x="3" y="4" width="18" height="18" rx="2"/><path d="M16 2v4M8 2v4M3 10h18"/>"#,
        ),
        "users" => outline(
            20,
            r#"<path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"/>"#,
        ),
        "star" => Glyph {
            size: 16,
            filled: true,
            body: r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
        },
        "arrow-right" => outline(20, r#"<path d="M5 12h14m-7-7 7 7-7 7"/>"#),
        "menu" => outline(24, r#"<path d="M4 6h16M4 12h16M4 18h16"/>"#),
        "x" => outline(24, r#"<path d="M18 6 6 18M6 6l12 12"/>"#),
        "check" => outline(20, r#"<polyline points="20 6 9 17 4 12"/>"#),
        "phone" => outline(
            16,
            r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.12.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.58 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
        ),
        "mail" => outline(16, r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-10 6L2 7"/>"#),
        "plus" => outline(16, r#"<path d="M12 5v14M5 12h14"/>"#),
        "edit" => outline(
            16,
            r#"<path d="M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"/><path d="M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"/>"#,
        ),
        "delete" => outline(
            16,
            r#"<path d="M3 6h18M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>"#,
        ),
        "upload" => outline(
            16,
            r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="17 8 12 3 7 8"/><path d="M12 3v12"/>"#,
        ),
        "package" => outline(
            20,
            r#"<path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/><path d="M3.27 6.96 12 12l8.73-5.04M12 22V12"/>"#,
        ),
        "image" => outline(
            20,
            r#"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="9" cy="9" r="2"/><path d="m21 15-3.09-3.09a2 2 0 0 0-2.82 0L6 21"/>"#,
        ),
        _ => FALLBACK,
    }
}

/// Inline SVG icon by name. Unknown names render a neutral circle.
pub fn icon(name: &str) -> AnyView {
    let Glyph { size, filled, body } = glyph(name);

    view! {
        <svg
            class="icon"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill=if filled { "currentColor" } else { "none" }
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=body
        ></svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_icon_falls_back_to_circle() {
        assert_eq!(glyph("no-such-icon").body, FALLBACK.body);
        assert_ne!(glyph("camera").body, FALLBACK.body);
    }

    #[test]
    fn test_star_is_filled() {
        assert!(glyph("star").filled);
        assert!(!glyph("check").filled);
    }
}
