//! Integration tests for unit, color, border and box value resolution.

use quill_css::values::{
    BorderLineStyle, BorderStyle, BoxSides, ContextOverrides, LengthUnit, ResolutionContext, Rgb,
    SizeValue, expand_box_components, parse_border, parse_box_shorthand, parse_color, parse_px,
    parse_size, split_components,
};

fn ctx() -> ResolutionContext {
    ResolutionContext::default()
}

// --- Resolution context ---

#[test]
fn test_default_context() {
    let ctx = ResolutionContext::default();
    assert_eq!(ctx.viewport_width, 1920.0);
    assert_eq!(ctx.viewport_height, 1080.0);
    assert_eq!(ctx.font_size, 16.0);
}

#[test]
fn test_context_merge_keeps_unset_fields() {
    let merged = ctx().merged(&ContextOverrides {
        font_size: Some(20.0),
        ..ContextOverrides::default()
    });
    assert_eq!(merged, ResolutionContext::new(1920.0, 1080.0, 20.0));
}

#[test]
fn test_context_from_partial_json() {
    let ctx: ResolutionContext = serde_json::from_str(r#"{"viewportWidth": 800}"#).unwrap();
    assert_eq!(ctx, ResolutionContext::new(800.0, 1080.0, 16.0));
}

// --- Lengths ---

#[test]
fn test_length_units() {
    let ctx = ResolutionContext::new(1000.0, 500.0, 10.0);
    assert_eq!(parse_size("12px", &ctx), Some(SizeValue::Px(12.0)));
    assert_eq!(parse_size("2rem", &ctx), Some(SizeValue::Px(20.0)));
    assert_eq!(parse_size("1.5em", &ctx), Some(SizeValue::Px(15.0)));
    assert_eq!(parse_size("10vw", &ctx), Some(SizeValue::Px(100.0)));
    assert_eq!(parse_size("10vh", &ctx), Some(SizeValue::Px(50.0)));
    assert_eq!(parse_size("42", &ctx), Some(SizeValue::Px(42.0)));
    assert_eq!(parse_size("2REM", &ctx), Some(SizeValue::Px(20.0)));
}

#[test]
fn test_length_unit_names() {
    assert_eq!("VW".parse::<LengthUnit>().unwrap(), LengthUnit::Vw);
    assert_eq!(LengthUnit::Rem.to_string(), "rem");
    assert!("pt".parse::<LengthUnit>().is_err());
}

#[test]
fn test_percentage_is_kept_unresolved() {
    let size = parse_size("50%", &ctx()).unwrap();
    assert_eq!(size, SizeValue::Percent(50.0));
    assert!(size.is_percent());
    assert_eq!(size.to_px(), None);
    assert_eq!(parse_px("50%", &ctx()), None);
}

#[test]
fn test_size_keywords_and_garbage() {
    for raw in ["auto", "inherit", "INITIAL", "", "   ", "wide", "12pt", "px"] {
        assert_eq!(parse_size(raw, &ctx()), None, "{raw:?}");
    }
}

#[test]
fn test_calc_sum_and_difference() {
    assert_eq!(
        parse_size("calc(1rem + 4px)", &ctx()),
        Some(SizeValue::Px(20.0))
    );
    assert_eq!(
        parse_size("calc(50vw - 60px)", &ctx()),
        Some(SizeValue::Px(900.0))
    );
}

#[test]
fn test_calc_full_width_minus_length() {
    assert_eq!(
        parse_size("calc(100% - 32px)", &ctx()),
        Some(SizeValue::Percent(100.0))
    );
}

#[test]
fn test_calc_unsupported_forms() {
    assert_eq!(parse_size("calc(50% - 10px)", &ctx()), None);
    assert_eq!(parse_size("calc(2 * 10px)", &ctx()), None);
    assert_eq!(parse_size("calc(1px + 2px + 3px)", &ctx()), None);
}

#[test]
fn test_calc_nested_is_rejected() {
    assert_eq!(parse_size("calc(calc(1px + 1px) + 1px)", &ctx()), None);
    assert_eq!(parse_size("calc(1px + calc(100% - 8px))", &ctx()), None);

    let depth = 50_000;
    let deep = format!("{}1px{} + 1px", "calc(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_size(&format!("calc({deep})"), &ctx()), None);
}

// --- Tokens ---

#[test]
fn test_split_components_respects_parentheses() {
    assert_eq!(
        split_components("1px solid rgb(1, 2, 3)"),
        vec!["1px", "solid", "rgb(1, 2, 3)"]
    );
    assert_eq!(
        split_components("  calc(100% - 8px)   4px "),
        vec!["calc(100% - 8px)", "4px"]
    );
}

// --- Colors ---

#[test]
fn test_hex_colors() {
    assert_eq!(parse_color("#ff8800"), Some(Rgb::new(255, 136, 0)));
    assert_eq!(parse_color("#F80"), Some(Rgb::new(255, 136, 0)));
    assert_eq!(parse_color("#ff88"), None);
    assert_eq!(parse_color("ff8800"), None);
    assert_eq!(parse_color("#gg0000"), None);
}

#[test]
fn test_rgb_functions() {
    assert_eq!(parse_color("rgb(10, 20, 30)"), Some(Rgb::new(10, 20, 30)));
    assert_eq!(parse_color("rgb(10 20 30)"), Some(Rgb::new(10, 20, 30)));
    assert_eq!(
        parse_color("rgba(10, 20, 30, 0.5)"),
        Some(Rgb::new(10, 20, 30))
    );
    assert_eq!(parse_color("rgb(300, -5, 100%)"), Some(Rgb::new(255, 0, 255)));
    assert_eq!(parse_color("rgb(1, 2)"), None);
}

#[test]
fn test_rgb_argument_count() {
    assert_eq!(parse_color("rgba(1 2 3 / 0.5)"), Some(Rgb::new(1, 2, 3)));
    assert_eq!(parse_color("rgb(1, 2, 3, 4, 5, 6)"), None);
    assert_eq!(parse_color("rgba(1 2 3 / 0.5 0.5)"), None);
}

#[test]
fn test_named_colors() {
    assert_eq!(parse_color("red"), Some(Rgb::new(255, 0, 0)));
    assert_eq!(parse_color("Navy"), Some(Rgb::new(0, 0, 128)));
    assert_eq!(parse_color("transparent"), Some(Rgb::BLACK));
    assert_eq!(parse_color("notacolor"), None);
    assert_eq!(parse_color("currentColor"), None);
}

#[test]
fn test_hex_string() {
    assert_eq!(Rgb::new(255, 136, 0).to_hex_string(), "#ff8800");
    assert_eq!(Rgb::WHITE.to_hex_string(), "#ffffff");
}

// --- Border ---

#[test]
fn test_border_order_independence() {
    let expected = BorderStyle {
        width: 2.0,
        style: BorderLineStyle::Solid,
        color: Rgb::new(255, 0, 0),
    };
    assert_eq!(parse_border("2px solid red", &ctx()), expected);
    assert_eq!(parse_border("solid 2px red", &ctx()), expected);
    assert_eq!(parse_border("red solid 2px", &ctx()), expected);
}

#[test]
fn test_border_defaults_and_keywords() {
    assert_eq!(parse_border("", &ctx()), BorderStyle::default());
    assert_eq!(
        parse_border("dashed", &ctx()),
        BorderStyle {
            style: BorderLineStyle::Dashed,
            ..BorderStyle::default()
        }
    );
    assert_eq!(parse_border("thick dotted", &ctx()).width, 5.0);
    assert_eq!(
        parse_border("1px solid rgb(0, 0, 255)", &ctx()).color,
        Rgb::new(0, 0, 255)
    );
}

#[test]
fn test_border_ignores_unknown_tokens() {
    let border = parse_border("groove 4px blue", &ctx());
    assert_eq!(border.width, 4.0);
    assert_eq!(border.style, BorderLineStyle::Solid);
    assert_eq!(border.color, Rgb::new(0, 0, 255));
}

// --- Box shorthands ---

#[test]
fn test_box_expansion_rules() {
    assert_eq!(expand_box_components(&["a"]), Some(["a", "a", "a", "a"]));
    assert_eq!(expand_box_components(&["a", "b"]), Some(["a", "b", "a", "b"]));
    assert_eq!(
        expand_box_components(&["a", "b", "c"]),
        Some(["a", "b", "c", "b"])
    );
    assert_eq!(
        expand_box_components(&["a", "b", "c", "d", "e"]),
        Some(["a", "b", "c", "d"])
    );
    assert_eq!(expand_box_components(&[]), None);
}

#[test]
fn test_box_shorthand_values() {
    assert_eq!(
        parse_box_shorthand("4px 8px", &ctx()),
        Some(BoxSides {
            top: 4.0,
            right: 8.0,
            bottom: 4.0,
            left: 8.0
        })
    );
    assert_eq!(
        parse_box_shorthand("1rem", &ctx()),
        Some(BoxSides::uniform(16.0))
    );
    assert_eq!(parse_box_shorthand("auto", &ctx()), None);
    assert_eq!(parse_box_shorthand("", &ctx()), None);
}

#[test]
fn test_box_shorthand_bad_tokens_become_zero() {
    assert_eq!(
        parse_box_shorthand("10px auto", &ctx()).map(BoxSides::to_array),
        Some([10.0, 0.0, 10.0, 0.0])
    );
}
