// Helpers shared by the bench targets in this directory.
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code` content.\n\n- Bullet point\n  - Nested item\n- Another item\n\n- [ ] Open task\n- [x] Done task\n\n> Quoted [link](https://example.com)\n\n$$E = mc^2$$\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// Blockquotes and lists nested `depth` levels deep.
#[allow(dead_code)]
pub fn generate_nested_markdown(sections: usize, depth: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        for level in 0..depth {
            let indent = "  ".repeat(level);
            content.push_str(&format!("{indent}- Item at level {level} with *emphasis*\n"));
        }
        content.push('\n');
        content.push_str(&"> ".repeat(depth));
        content.push_str("Deeply quoted text.\n\n");
    }
    content
}
