// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with [[Some Note]] and [a link](notes/other note.md).\n\n- ![[diagram.png]]\n- [site](https://example.com/page)\n- [[Done]](Done.md)\n\n```rust\nlet x = \"[[not a link]]\";\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn sample_links() -> Vec<&'static str> {
    vec![
        "[[MD File]]",
        "![[image file.png]]",
        "[A note](some file.md)",
        "![optional title](/path/to/some%20image.png)",
        "[[MD File]](path/to/MD%20File.md)",
        "[Somefile link](https://go.to/somefile.html)",
        "<a href='attachments/document.pdf'>PDF Document</a>",
        "This does *not* have any links here",
    ]
}
