//! Minimal block-level markdown parsing for wiki page bodies.

/// Block-level structure of a wiki body. Inline markup is rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdBlock {
    Heading { depth: u8, text: String },
    Paragraph(String),
    List(Vec<String>),
    CodeBlock(String),
}

pub fn parse_markdown_blocks(body: &str) -> Vec<MdBlock> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut list: Vec<String> = Vec::new();
    let mut code: Option<Vec<&str>> = None;

    fn flush(paragraph: &mut Vec<&str>, list: &mut Vec<String>, blocks: &mut Vec<MdBlock>) {
        if !paragraph.is_empty() {
            blocks.push(MdBlock::Paragraph(paragraph.join(" ")));
            paragraph.clear();
        }
        if !list.is_empty() {
            blocks.push(MdBlock::List(std::mem::take(list)));
        }
    }

    for line in body.lines() {
        if let Some(code_lines) = code.as_mut() {
            if line.trim_start().starts_with("```") {
                blocks.push(MdBlock::CodeBlock(code_lines.join("\n")));
                code = None;
            } else {
                code_lines.push(line);
            }
            continue;
        }

        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            flush(&mut paragraph, &mut list, &mut blocks);
            code = Some(Vec::new());
        } else if trimmed.is_empty() {
            flush(&mut paragraph, &mut list, &mut blocks);
        } else if let Some(text) = heading_line(trimmed) {
            flush(&mut paragraph, &mut list, &mut blocks);
            blocks.push(text);
        } else if let Some(item) = trimmed.strip_prefix("- ") {
            if !paragraph.is_empty() {
                blocks.push(MdBlock::Paragraph(paragraph.join(" ")));
                paragraph.clear();
            }
            list.push(item.trim().to_string());
        } else {
            if !list.is_empty() {
                blocks.push(MdBlock::List(std::mem::take(&mut list)));
            }
            paragraph.push(trimmed);
        }
    }
    if let Some(code_lines) = code {
        blocks.push(MdBlock::CodeBlock(code_lines.join("\n")));
    }
    flush(&mut paragraph, &mut list, &mut blocks);
    blocks
}

fn heading_line(trimmed: &str) -> Option<MdBlock> {
    for (prefix, depth) in [("### ", 3u8), ("## ", 2), ("# ", 1)] {
        if let Some(text) = trimmed.strip_prefix(prefix) {
            return Some(MdBlock::Heading {
                depth,
                text: text.trim().to_string(),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let blocks = parse_markdown_blocks("first line\nstill first\n\nsecond");
        assert_eq!(
            blocks,
            vec![
                MdBlock::Paragraph("first line still first".to_string()),
                MdBlock::Paragraph("second".to_string()),
            ]
        );
    }

    #[test]
    fn headings_lists_and_code_are_recognized() {
        let body = "# Title\n\n## Section\n- one\n- two\n\n```\nlet x = 1;\n```";
        let blocks = parse_markdown_blocks(body);
        assert_eq!(
            blocks,
            vec![
                MdBlock::Heading { depth: 1, text: "Title".to_string() },
                MdBlock::Heading { depth: 2, text: "Section".to_string() },
                MdBlock::List(vec!["one".to_string(), "two".to_string()]),
                MdBlock::CodeBlock("let x = 1;".to_string()),
            ]
        );
    }

    #[test]
    fn unterminated_code_block_is_kept() {
        let blocks = parse_markdown_blocks("```\ncode");
        assert_eq!(blocks, vec![MdBlock::CodeBlock("code".to_string())]);
    }
}
