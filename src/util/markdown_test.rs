use super::*;

#[test]
fn renders_emphasis_and_lists() {
    let html = render_markdown_html("**Risk**: high\n\n- db01\n- db02\n");
    assert!(html.contains("<strong>Risk</strong>"));
    assert!(html.contains("<li>db01</li>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("before <script>alert(1)</script> after\n\n<div onclick=\"x\">block</div>\n");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div"));
    assert!(html.contains("before"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| Service | Window |\n|---|---|\n| web | 09:00 |\n");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>web</td>"));
}
