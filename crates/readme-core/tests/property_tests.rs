use proptest::prelude::*;
use readme_core::Document;

proptest! {
    #[test]
    fn export_reproduces_newline_terminated_input(lines in prop::collection::vec("[^\n]*", 0..40)) {
        // Any newline-terminated text must round-trip byte for byte:
        // parsing only classifies lines, it never rewrites them.
        let text = if lines.is_empty() {
            String::new()
        } else {
            format!("{}\n", lines.join("\n"))
        };

        let doc = Document::parse(&text);
        prop_assert_eq!(doc.export(), text);
        prop_assert!(!doc.is_modified());
    }

    #[test]
    fn parsing_preserves_every_line(lines in prop::collection::vec("[^\n]*", 0..40)) {
        let text = if lines.is_empty() {
            String::new()
        } else {
            format!("{}\n", lines.join("\n"))
        };

        let doc = Document::parse(&text);

        // Root always present, and no line gained or lost: each input line
        // ends up either as a block header or as exactly one content line.
        prop_assert!(doc.blocks()[0].is_root());
        let header_count = doc.blocks().len() - 1;
        let content_count: usize = doc.blocks().iter().map(|b| b.lines().len()).sum();
        prop_assert_eq!(header_count + content_count, lines.len());
    }
}
