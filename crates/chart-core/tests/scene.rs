// File: crates/chart-core/tests/scene.rs
// Purpose: Validate point colors, inspectable attributes, labels, legend and render idempotence.

use chart_core::geometry::Transform;
use chart_core::scene::Node;
use chart_core::{render_svg, Chart, Color, Record, RenderOptions, Theme};

fn sample() -> Vec<Record> {
    vec![
        Record::new(1994, 4684.0, "Rider A", "ITA"),
        Record::new(1998, 4455.0, "Rider B", "ESP").with_doping("EPO"),
        Record::new(1996, 4600.0, "Rider C", "FRA"),
    ]
}

#[test]
fn fill_follows_allegation_status() {
    let chart = Chart::new(sample()).expect("chart");
    let scene = chart.scene();
    let theme = Theme::classic();
    for dot in scene.dots() {
        let record = &chart.records()[dot.index];
        let want = if record.doping.is_empty() { theme.no_doping } else { theme.doping };
        assert_eq!(dot.fill, want, "record {}", dot.index);
        assert_eq!(dot.stroke, Color::BLACK);
        assert_eq!(dot.radius, 6.0);
    }
    assert_eq!(scene.dot(0).map(|d| d.fill), Some(Color::BLUE));
    assert_eq!(scene.dot(1).map(|d| d.fill), Some(Color::RED));
}

#[test]
fn whitespace_only_doping_text_still_counts_as_allegation() {
    let chart = Chart::new(vec![
        Record::new(1994, 4684.0, "Rider A", "ITA"),
        Record::new(1998, 4455.0, "Rider B", "ESP").with_doping(" "),
    ])
    .expect("chart");
    let scene = chart.scene();
    assert_eq!(scene.dot(0).map(|d| d.fill), Some(Color::BLUE));
    assert_eq!(scene.dot(1).map(|d| d.fill), Some(Color::RED));

    let mut hovered = scene.clone();
    let hover = chart.hover();
    let record = chart.record(1).expect("record");
    let active = hover.enter(&mut hovered, 1, record, Default::default()).expect("enter");
    hover.leave(&mut hovered, active).expect("leave");
    assert_eq!(hovered.dot(1).map(|d| d.fill), Some(Color::RED));
}

#[test]
fn dots_expose_year_and_time_of_day() {
    let chart = Chart::new(sample()).expect("chart");
    let svg = render_svg(&chart.scene());
    assert_eq!(svg.matches(r#"class="dot""#).count(), 3);
    assert!(svg.contains(r#"data-xvalue="1994" data-yvalue="1899-12-31T01:18:04""#));
    assert!(svg.contains(r#"data-xvalue="1998" data-yvalue="1899-12-31T01:14:15""#));
}

#[test]
fn static_labels_use_layout_offsets() {
    let chart = Chart::new(sample()).expect("chart");
    let scene = chart.scene();

    let title = scene.label("title").expect("title");
    assert_eq!(title.text, "Doping in Professional Bicycle Racing");
    assert_eq!(title.transform, Transform::translate(1475.0 / 2.0 + 100.0, 75.0));

    let x_label = scene.group("x-axis-label").expect("x label group");
    let Node::Text(l) = &x_label.children[0] else { panic!("x label text") };
    assert_eq!(l.text, "Year");
    assert_eq!(l.transform, Transform::translate(850.0, 750.0));

    let y_label = scene.group("y-axis-label").expect("y label group");
    let Node::Text(l) = &y_label.children[0] else { panic!("y label text") };
    assert_eq!(l.transform, Transform::RotateTranslate { degrees: -90.0, x: -400.0, y: 30.0 });
}

#[test]
fn legend_swatches_match_point_colors() {
    let chart = Chart::new(sample()).expect("chart");
    let scene = chart.scene();
    let legend = scene.group("legend").expect("legend");
    assert_eq!(legend.transform, Transform::translate(1475.0, 370.0));

    let entry = |id: &str| {
        let g = scene.group(id).expect("legend entry");
        let fill = g.children.iter().find_map(|n| match n {
            Node::Swatch(s) => Some((s.fill, s.rect.y)),
            _ => None,
        });
        let text = g.children.iter().find_map(|n| match n {
            Node::Text(l) => Some(l.text.clone()),
            _ => None,
        });
        (fill, text)
    };
    let (with_fill, with_text) = entry("withDopingAllegations");
    let (without_fill, without_text) = entry("noDopingAllegations");
    assert_eq!(with_fill, Some((Color::RED, 0.0)));
    assert_eq!(without_fill, Some((Color::BLUE, 20.0)));
    assert!(with_text.unwrap_or_default().contains("with doping"));
    assert_eq!(without_text.as_deref(), Some("No doping allegations"));
}

#[test]
fn rendering_twice_is_identical() {
    let chart = Chart::new(sample()).expect("chart");
    let first = chart.scene();
    let second = chart.scene();
    assert_eq!(first, second);
    assert_eq!(render_svg(&first), render_svg(&second));

    let rebuilt = Chart::new(sample()).expect("chart");
    assert_eq!(render_svg(&rebuilt.scene()), render_svg(&first));
}

#[test]
fn theme_colors_flow_into_points() {
    let opts = RenderOptions { theme: Theme::dark(), ..RenderOptions::default() };
    let chart = Chart::with_options(sample(), opts).expect("chart");
    let scene = chart.scene();
    assert_eq!(scene.background, Theme::dark().background);
    assert_eq!(scene.dot(1).map(|d| d.fill), Some(Theme::dark().doping));
}

#[test]
fn scene_serializes_to_json() {
    let chart = Chart::new(sample()).expect("chart");
    let scene = chart.scene();
    let json = serde_json::to_string(&scene).expect("serialize");
    assert!(json.contains(r#""kind":"dot""#));
    let back: chart_core::Scene = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.dots().len(), scene.dots().len());
    assert_eq!(back.dot(1).map(|d| (d.year, d.fill)), Some((1998, Color::RED)));
    assert_eq!(back.group("legend").map(|g| g.children.len()), Some(2));
}
