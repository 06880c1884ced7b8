use proptest::prelude::*;

use super::{Bubble, Shape, warning_bubble};
use crate::config::Options;
use crate::tui::{
    color::Color,
    measure::{strip_all_colors, visual_width},
    theme::Theme,
};

fn plain() -> Options {
    Options {
        no_colors: true,
        ..Options::default()
    }
}

fn render(text: &str, label: Option<&str>, shape: Shape) -> String {
    Bubble::builder()
        .text(text)
        .maybe_label(label)
        .shape(shape)
        .build()
        .render(&plain())
}

#[test]
fn test_single_line_round() {
    assert_eq!(render("Hi", None, Shape::Round), "╭────╮\n│ Hi │\n╰────╯");
}

#[test]
fn test_single_line_square() {
    assert_eq!(render("Hi", None, Shape::Square), "┌────┐\n│ Hi │\n└────┘");
}

#[test]
fn test_multi_line_pads_to_widest_line() {
    assert_eq!(
        render("a\nabc", None, Shape::Round),
        "╭─────╮\n│ a   │\n│ abc │\n╰─────╯"
    );
}

#[test]
fn test_empty_text() {
    assert_eq!(render("", None, Shape::Round), "╭──╮\n│  │\n╰──╯");
}

#[test]
fn test_label_narrower_than_text() {
    assert_eq!(
        render("What is your name?", Some("Name"), Shape::Round),
        "╭─ Name ─────────────╮\n│ What is your name? │\n╰────────────────────╯"
    );
}

#[test]
fn test_label_wider_than_text_grows_border() {
    assert_eq!(
        render("Hi", Some("Warning"), Shape::Round),
        "╭─ Warning ╮\n│ Hi       │\n╰──────────╯"
    );
}

#[test]
fn test_input_decorator_round() {
    let out = Bubble::builder()
        .text("Hi")
        .input_decorator(true)
        .build()
        .render(&plain());

    assert_eq!(out, "╭────╮\n│ Hi │\n├────╯\n│> ");
}

#[test]
fn test_input_decorator_square() {
    let out = Bubble::builder()
        .text("Hi")
        .shape(Shape::Square)
        .input_decorator(true)
        .build()
        .render(&plain());

    assert_eq!(out, "┌────┐\n│ Hi │\n├────┘\n│> ");
}

#[test]
fn test_shape_defaults_to_options() {
    let options = Options {
        no_colors: true,
        text_bubble_shape: Shape::Square,
    };
    let out = Bubble::builder().text("Hi").build().render(&options);
    assert!(out.starts_with('┌'));

    // explicit shape wins over the option
    let out = Bubble::builder()
        .text("Hi")
        .shape(Shape::Round)
        .build()
        .render(&options);
    assert!(out.starts_with('╭'));
}

#[test]
fn test_colored_glyphs_are_wrapped_individually() {
    let options = Options::default();
    let out = Bubble::builder().text("Hi").build().render(&options);
    let first_line = out.lines().next().unwrap();

    assert_eq!(
        first_line,
        "\u{1b}[32m╭\u{1b}[0m\u{1b}[32m────\u{1b}[0m\u{1b}[32m╮\u{1b}[0m"
    );
    assert_eq!(strip_all_colors(&out), render("Hi", None, Shape::Round));
}

#[test]
fn test_colored_body_text_does_not_desync_padding() {
    let options = Options::default();
    let body = format!("{} and\nplain text", Color::Blue.wrap("3", &options));
    let out = Bubble::builder().text(&body).build().render(&options);

    let widths: Vec<_> = out.lines().map(visual_width).collect();
    assert!(widths.iter().all(|w| *w == widths[0]), "{widths:?}");
}

#[test]
fn test_nested_bubble_keeps_frame_aligned() {
    let options = Options::default();
    let inner = Bubble::builder()
        .text("one\ntwo")
        .color(Color::Magenta)
        .build()
        .render(&options);
    let text = format!("Pick one\n{inner}");
    let out = Bubble::builder().text(&text).build().render(&options);

    let widths: Vec<_> = out.lines().map(visual_width).collect();
    assert_eq!(widths, vec![12; 7]);
}

#[test]
fn test_warning_bubble() {
    let out = warning_bubble("Too short", &Theme::default(), &plain());
    assert_eq!(out, "╭─ Warning ─╮\n│ Too short │\n╰───────────╯");

    let colored = warning_bubble("Too short", &Theme::default(), &Options::default());
    assert!(colored.contains(Color::Yellow.code()));
}

proptest! {
    #[test]
    fn prop_render_is_deterministic(
        text in "[a-z ]{0,12}(\n[a-z ]{0,12}){0,3}",
        label in proptest::option::of("[A-Za-z]{0,15}"),
    ) {
        let options = Options::default();
        let build = || Bubble::builder()
            .text(&text)
            .maybe_label(label.as_deref())
            .build()
            .render(&options);

        prop_assert_eq!(build(), build());
    }

    #[test]
    fn prop_every_line_has_equal_width(
        text in "[a-z ]{0,12}(\n[a-z ]{0,12}){0,3}",
        label in proptest::option::of("[A-Za-z]{0,15}"),
        square in any::<bool>(),
    ) {
        let shape = if square { Shape::Square } else { Shape::Round };
        let out = Bubble::builder()
            .text(&text)
            .maybe_label(label.as_deref())
            .shape(shape)
            .build()
            .render(&Options::default());

        let widths: Vec<_> = out.lines().map(visual_width).collect();
        let first = widths.first().copied().unwrap_or_default();
        prop_assert!(widths.iter().all(|w| *w == first), "{:?}", widths);
        prop_assert_eq!(widths.len(), text.split('\n').count() + 2);
    }

    #[test]
    fn prop_stripped_output_contains_text(
        text in "[a-zA-Z0-9 ]{0,20}",
        label in proptest::option::of("[A-Za-z]{0,15}"),
    ) {
        let out = Bubble::builder()
            .text(&text)
            .maybe_label(label.as_deref())
            .build()
            .render(&Options::default());

        let stripped = strip_all_colors(&out);
        let needle = format!("│ {text}");
        prop_assert!(stripped.contains(&needle));
    }
}
