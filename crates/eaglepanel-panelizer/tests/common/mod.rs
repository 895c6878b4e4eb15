// Shared board fixtures for panelizer integration tests

#![allow(dead_code)]

use eaglepanel_core::{Document, Element};

pub fn wire(x1: f64, y1: f64, x2: f64, y2: f64, width: f64, layer: &str) -> Element {
    Element::new("wire")
        .with_attr("x1", x1.to_string())
        .with_attr("y1", y1.to_string())
        .with_attr("x2", x2.to_string())
        .with_attr("y2", y2.to_string())
        .with_attr("width", width.to_string())
        .with_attr("layer", layer)
}

/// Rectangular outline on layer 20
pub fn outline(min_x: f64, min_y: f64, max_x: f64, max_y: f64, width: f64) -> Vec<Element> {
    vec![
        wire(min_x, min_y, max_x, min_y, width, "20"),
        wire(max_x, min_y, max_x, max_y, width, "20"),
        wire(max_x, max_y, min_x, max_y, width, "20"),
        wire(min_x, max_y, min_x, min_y, width, "20"),
    ]
}

pub fn part(name: &str, x: f64, y: f64) -> Element {
    Element::new("element")
        .with_attr("name", name)
        .with_attr("library", "rcl")
        .with_attr("package", "R0603")
        .with_attr("value", "10k")
        .with_attr("x", x.to_string())
        .with_attr("y", y.to_string())
        .with_child(
            Element::new("attribute")
                .with_attr("name", "NAME")
                .with_attr("x", (x - 1.0).to_string())
                .with_attr("y", (y + 1.5).to_string())
                .with_attr("size", "1.016")
                .with_attr("layer", "25"),
        )
}

pub fn signal(name: &str, parts: &[&str]) -> Element {
    let mut signal = Element::new("signal").with_attr("name", name);
    for p in parts {
        signal.push(
            Element::new("contactref")
                .with_attr("element", *p)
                .with_attr("pad", "1"),
        );
    }
    signal.push(wire(10.0, 10.0, 30.0, 10.0, 0.254, "1"));
    signal.push(
        Element::new("via")
            .with_attr("x", "30")
            .with_attr("y", "10")
            .with_attr("extent", "1-16")
            .with_attr("drill", "0.35"),
    );
    signal
}

/// Board document from outline-area children, parts, and nets
pub fn board(plain: Vec<Element>, parts: Vec<Element>, signals: Vec<Element>) -> Document {
    let mut plain_elem = Element::new("plain");
    plain_elem.children = plain;
    let mut elements = Element::new("elements");
    elements.children = parts;
    let mut signals_elem = Element::new("signals");
    signals_elem.children = signals;

    let board = Element::new("board")
        .with_child(plain_elem)
        .with_child(Element::new("libraries").with_child(Element::new("library").with_attr("name", "rcl")))
        .with_child(Element::new("designrules").with_attr("name", "default"))
        .with_child(elements)
        .with_child(signals_elem);

    Document::new(
        Element::new("eagle").with_attr("version", "9.6.2").with_child(
            Element::new("drawing")
                .with_child(Element::new("settings"))
                .with_child(Element::new("layers").with_child(
                    Element::new("layer").with_attr("number", "20").with_attr("name", "Dimension"),
                ))
                .with_child(board),
        ),
    )
    .with_doctype("<!DOCTYPE eagle SYSTEM \"eagle.dtd\">")
}

/// 100 x 80 board with two parts, one net, a V-score pair, and a mounting hole
pub fn sample_board() -> Document {
    let mut plain = outline(0.0, 0.0, 100.0, 80.0, 0.1);
    plain.push(wire(50.0, 0.0, 50.0, 80.0, 0.2, "102"));
    plain.push(wire(0.0, 40.0, 100.0, 40.0, 0.2, "102"));
    plain.push(
        Element::new("hole")
            .with_attr("x", "5")
            .with_attr("y", "5")
            .with_attr("drill", "3.2"),
    );
    board(
        plain,
        vec![part("R1", 20.0, 20.0), part("C1", 60.0, 30.0)],
        vec![signal("VCC", &["R1", "C1"])],
    )
}

pub fn section<'a>(doc: &'a Document, tag: &str) -> &'a Element {
    doc.root
        .find_path(&["drawing", "board", tag])
        .unwrap_or_else(|| panic!("missing <{tag}>"))
}

pub fn num(element: &Element, attr: &str) -> f64 {
    element
        .attr(attr)
        .unwrap_or_else(|| panic!("missing {attr}"))
        .parse()
        .unwrap()
}
