use super::*;

#[test]
fn renders_emphasis_and_paragraphs() {
    let html = render_html("The *Kid* woke up.\n\nAtom did not.");
    assert!(html.contains("<em>Kid</em>"));
    assert_eq!(html.matches("<p>").count(), 2);
}

#[test]
fn strips_raw_html() {
    let html = render_html("hello <script>alert(1)</script> world");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hello"));
}

#[test]
fn renders_bold_lists() {
    let html = render_html("- **Atom**\n- **Mr. Effort**");
    assert!(html.contains("<ul>"));
    assert!(html.contains("<strong>Atom</strong>"));
}
