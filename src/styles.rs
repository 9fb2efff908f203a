//! CSS generation for the 3D book effect.
//!
//! Maps a [`Settings`] value to a stylesheet with one rule per layer of the
//! effect:
//!
//! - A scene container that centres the book and sets the perspective depth
//! - A one-shot keyframe animation that swings the book to its resting
//!   angle on mount, plus the resting transform and its hover transition
//! - The front face (the cover image itself), pushed forward by half the
//!   book's thickness
//! - A generated-content page edge, a thin strip rotated 90° and filled
//!   with a repeating light/white gradient to read as stacked paper
//! - A generated-content back face, pushed backward by half the thickness
//!
//! Generation is a pure text substitution: every numeric field lands in the
//! output verbatim, with no clamping or validation. Broken inputs produce a
//! broken picture, never an error.

use crate::config::Settings;

/// Generate the complete stylesheet for one cover instance.
///
/// Deterministic: identical settings always produce identical text.
pub fn generate_stylesheet(settings: &Settings) -> String {
    let mut css = String::with_capacity(2048);

    css.push_str("/* Scene */\n");
    css.push_str(&generate_scene_styles(settings));

    css.push_str("\n/* Cover faces */\n");
    css.push_str(&generate_face_styles(settings));

    css
}

/// Container, entry animation, and the resting/hover transforms.
///
/// Rotations are negated so that positive settings swing the spine towards
/// the viewer's left, matching how a book is usually held.
fn generate_scene_styles(settings: &Settings) -> String {
    format!(
        r#".book-container {{
    display: flex;
    align-items: center;
    justify-content: center;
    perspective: {perspective}px;
}}

@keyframes initAnimation {{
    0% {{
        transform: rotateY({hover_angle}deg);
    }}
    100% {{
        transform: rotateY({rest_angle}deg);
    }}
}}

.book {{
    width: {width}px;
    height: {height}px;
    position: relative;
    transform-style: preserve-3d;
    transform: rotateY({rest_angle}deg);
    transition: transform {duration}s ease;
    animation: 1s ease 0s 1 initAnimation;
}}

.book:hover {{
    transform: rotateY({hover_angle}deg);
}}
"#,
        perspective = settings.perspective,
        hover_angle = -settings.rotate_hover,
        rest_angle = -settings.rotate,
        width = settings.width,
        height = settings.height,
        duration = settings.transition_duration,
    )
}

/// Front face, page edge, and back face.
///
/// The front face is the first child of `.book` (the cover image); the page
/// edge and back face are generated content so the markup stays a single
/// image in a div.
fn generate_face_styles(settings: &Settings) -> String {
    format!(
        r#".book > :first-child {{
    position: absolute;
    top: 0;
    left: 0;
    width: {width}px;
    height: {height}px;
    transform: translateZ({front_offset}px);
    background-color: {bg_color};
    border-radius: 0 {radius}px {radius}px 0;
    box-shadow: 5px 5px 20px #666;
}}

.book::before {{
    position: absolute;
    content: ' ';
    left: 0;
    top: {pages_top}px;
    width: {pages_width}px;
    height: {pages_height}px;
    transform: translateX({pages_shift}px) rotateY(90deg);
    background: {pages_gradient};
}}

.book::after {{
    position: absolute;
    top: 0;
    left: 0;
    content: ' ';
    width: {width}px;
    height: {height}px;
    transform: translateZ({back_offset}px);
    background-color: {bg_color};
    border-radius: 0 {radius}px {radius}px 0;
    box-shadow: -10px 0 50px 10px #666;
}}
"#,
        width = settings.width,
        height = settings.height,
        front_offset = settings.thickness / 2.0,
        back_offset = -settings.thickness / 2.0,
        bg_color = settings.bg_color,
        radius = settings.radius,
        pages_top = settings.pages_offset,
        pages_width = settings.thickness - 2.0,
        pages_height = settings.height - 2.0 * settings.pages_offset,
        pages_shift = settings.width - settings.thickness / 2.0 - settings.pages_offset,
        pages_gradient = pages_gradient(),
    )
}

/// The repeating light/white gradient that fakes a block of paper edges:
/// 21 stops alternating between white and near-white every 5%.
fn pages_gradient() -> String {
    let stops = (0..=20)
        .map(|i| {
            let colour = if i % 2 == 0 { "#fff" } else { "#f9f9f9" };
            format!("{} {}%", colour, i * 5)
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("linear-gradient(90deg, {stops})")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::SettingsBuilder;

    #[test]
    fn emits_one_rule_per_layer() {
        let css = generate_stylesheet(&Settings::default());

        assert_eq!(css.matches(".book-container {").count(), 1);
        assert_eq!(css.matches("@keyframes initAnimation").count(), 1);
        assert_eq!(css.matches(".book {").count(), 1);
        assert_eq!(css.matches(".book:hover {").count(), 1);
        assert_eq!(css.matches(".book > :first-child {").count(), 1);
        assert_eq!(css.matches(".book::before {").count(), 1);
        assert_eq!(css.matches(".book::after {").count(), 1);
    }

    #[test]
    fn substitutes_default_settings_verbatim() {
        let css = generate_stylesheet(&Settings::default());

        assert!(css.contains("perspective: 600px"));
        assert!(css.contains("rotateY(-30deg)"));
        assert!(css.contains("rotateY(-5deg)"));
        assert!(css.contains("width: 200px"));
        assert!(css.contains("height: 300px"));
        assert!(css.contains("translateZ(25px)"));
        assert!(css.contains("translateZ(-25px)"));
        assert!(css.contains("border-radius: 0 2px 2px 0"));
        assert!(css.contains("transition: transform 1s ease"));
        assert!(css.contains("background-color: #01060f"));
    }

    #[test]
    fn is_idempotent() {
        let settings = SettingsBuilder::default()
            .rotate(12.0)
            .bg_color("#223344")
            .build()
            .unwrap();

        assert_eq!(
            generate_stylesheet(&settings),
            generate_stylesheet(&settings)
        );
    }

    #[test]
    fn width_drives_every_width_rule() {
        let settings = SettingsBuilder::default().width(250.0).build().unwrap();
        let css = generate_stylesheet(&settings);

        // .book, front face, and back face all carry the width
        assert_eq!(css.matches("width: 250px").count(), 3);
        // the page edge is shifted by width - thickness/2 - pages_offset
        assert!(css.contains("translateX(222px)"));
    }

    #[test]
    fn page_edge_arithmetic_matches_cover_geometry() {
        let css = generate_stylesheet(&Settings::default());

        // height 300 with a 3px inset top and bottom
        assert!(css.contains("height: 294px"));
        // thickness 50 less a pixel each side
        assert!(css.contains("width: 48px"));
        assert!(css.contains("top: 3px"));
        assert!(css.contains("translateX(172px) rotateY(90deg)"));
    }

    #[test]
    fn fractional_offsets_keep_their_fraction() {
        let settings = SettingsBuilder::default().thickness(45.0).build().unwrap();
        let css = generate_stylesheet(&settings);

        assert!(css.contains("translateZ(22.5px)"));
        assert!(css.contains("translateZ(-22.5px)"));
        assert!(css.contains("width: 43px"));
    }

    #[test]
    fn pages_gradient_alternates_21_stops() {
        let gradient = pages_gradient();

        assert!(gradient.starts_with("linear-gradient(90deg, #fff 0%, #f9f9f9 5%"));
        assert!(gradient.ends_with("#fff 100%)"));
        assert_eq!(gradient.matches("#fff ").count(), 11);
        assert_eq!(gradient.matches("#f9f9f9 ").count(), 10);
    }

    #[test]
    fn nonsensical_values_substitute_without_complaint() {
        let settings = SettingsBuilder::default()
            .width(-10.0)
            .transition_duration(0.0)
            .bg_color("not-a-colour")
            .build()
            .unwrap();
        let css = generate_stylesheet(&settings);

        assert!(css.contains("width: -10px"));
        assert!(css.contains("transition: transform 0s ease"));
        assert!(css.contains("background-color: not-a-colour"));
    }

    #[test]
    fn negated_rotations_follow_sign() {
        let settings = SettingsBuilder::default()
            .rotate(-20.0)
            .rotate_hover(-2.5)
            .build()
            .unwrap();
        let css = generate_stylesheet(&settings);

        assert!(css.contains("transform: rotateY(20deg)"));
        assert!(css.contains("rotateY(2.5deg)"));
    }
}
