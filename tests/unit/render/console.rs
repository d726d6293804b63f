use super::*;

fn render(symbol: &Symbol) -> String {
    let mut out = Vec::new();
    render_console(&mut out, symbol).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn grid_includes_four_module_border() {
    let sym = Symbol::from_fn(3, |_, _| true).unwrap();
    let text = render(&sym);
    let lines: Vec<&str> = text.split('\n').collect();

    // 11 grid rows, the blank trailing line, and the empty tail after it.
    assert_eq!(lines.len(), 13);
    assert!(lines[..11].iter().all(|l| l.len() == 22));
    assert_eq!(lines[11], "");

    assert_eq!(lines[0], " ".repeat(22));
    assert_eq!(lines[4], format!("{}{}{}", " ".repeat(8), "#".repeat(6), " ".repeat(8)));
}

#[test]
fn each_dark_module_prints_two_hashes() {
    let sym = Symbol::from_fn(5, |x, y| (x + y) % 2 == 0).unwrap();
    let text = render(&sym);
    assert_eq!(text.matches('#').count(), sym.dark_count() * 2);
}

#[test]
fn modules_keep_their_position() {
    let sym = Symbol::from_fn(3, |x, y| x == 2 && y == 1).unwrap();
    let text = render(&sym);
    let line = text.lines().nth(4 + 1).unwrap();
    assert_eq!(&line[2 * (4 + 2)..2 * (4 + 3)], "##");
    assert_eq!(line.matches('#').count(), 2);
}
