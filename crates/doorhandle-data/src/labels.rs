// YOLO label files and the class name table
//
// Label file: one box per line, `<class_id> <cx> <cy> <w> <h>`, whitespace
// separated. Blank lines are skipped so a trailing newline never yields a
// spurious box.
//
// obj.names: one class name per line, line index = class id.

use std::fs;
use std::path::Path;

use doorhandle_core::{BoundingBox, ClassLabel, Error, Result};

/// Number of tokens on a label line.
pub const LABEL_TOKENS: usize = 5;

/// Parse one label line. Blank lines give `Ok(None)`; the error is a reason string.
pub fn parse_label_line(line: &str) -> std::result::Result<Option<BoundingBox>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    if tokens.len() != LABEL_TOKENS {
        return Err(format!(
            "expected {} tokens, got {}",
            LABEL_TOKENS,
            tokens.len()
        ));
    }

    let class_id: usize = tokens[0]
        .parse()
        .map_err(|e| format!("class id {:?}: {}", tokens[0], e))?;

    let mut coords = [0.0f32; 4];
    for (slot, tok) in coords.iter_mut().zip(&tokens[1..]) {
        *slot = tok
            .parse()
            .map_err(|e| format!("coordinate {:?}: {}", tok, e))?;
    }
    let [cx, cy, w, h] = coords;

    Ok(Some(BoundingBox::new(class_id, cx, cy, w, h)))
}

/// Parse the full text of a label file. `path` is only used in errors.
pub fn parse_labels(text: &str, path: &Path) -> Result<Vec<BoundingBox>> {
    let mut boxes = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let parsed = parse_label_line(line).map_err(|reason| Error::LabelParse {
            path: path.to_path_buf(),
            line: line_no + 1,
            reason,
        })?;
        if let Some(b) = parsed {
            boxes.push(b);
        }
    }
    Ok(boxes)
}

/// Read and parse a label file from disk.
pub fn read_labels(path: &Path) -> Result<Vec<BoundingBox>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_labels(&text, path)
}

/// Split class-name text into names, trailing whitespace stripped.
///
/// Interior blank lines are kept so that every later name keeps its id.
pub fn parse_class_names(text: &str) -> Vec<String> {
    text.lines().map(|l| l.trim_end().to_string()).collect()
}

/// Read the class name table from disk.
pub fn read_class_names(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(parse_class_names(&text))
}

/// Look up each box's class id, preserving box order.
pub fn resolve_class_labels(boxes: &[BoundingBox], names: &[String]) -> Result<Vec<ClassLabel>> {
    boxes
        .iter()
        .map(|b| {
            names
                .get(b.class_id)
                .map(|name| ClassLabel {
                    id: b.class_id,
                    name: name.clone(),
                })
                .ok_or(Error::ClassIdOutOfRange {
                    class_id: b.class_id,
                    num_classes: names.len(),
                })
        })
        .collect()
}

/// File name with its final extension removed (`a.b.png` -> `a.b`).
///
/// Leading dots are part of the name, so `.png` has no extension.
pub fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if name[..i].chars().any(|c| c != '.') => &name[..i],
        _ => name,
    }
}

/// Replace the first occurrence of `from` in `stem` with `to`.
pub fn depth_stem(stem: &str, from: &str, to: &str) -> String {
    stem.replacen(from, to, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_line() {
        let b = parse_label_line("0 0.5 0.5 0.2 0.3").unwrap().unwrap();
        assert_eq!(b, BoundingBox::new(0, 0.5, 0.5, 0.2, 0.3));
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let b = parse_label_line("  3\t0.1  0.2 0.3   0.4\r").unwrap().unwrap();
        assert_eq!(b.class_id, 3);
        assert_eq!(b.h, 0.4);
    }

    #[test]
    fn blank_lines_skipped() {
        let boxes = parse_labels("0 0.5 0.5 0.2 0.3\n\n   \n1 0.1 0.1 0.1 0.1\n\n", Path::new("x.txt"))
            .unwrap();
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[1].class_id, 1);
    }

    #[test]
    fn wrong_token_count() {
        let err = parse_labels("0 0.5 0.5 0.2 0.3\n0 0.5 0.5\n", Path::new("x.txt")).unwrap_err();
        match err {
            Error::LabelParse { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("expected 5 tokens, got 3"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_fields() {
        assert!(parse_label_line("door 0.5 0.5 0.2 0.3").is_err());
        assert!(parse_label_line("0 0.5 abc 0.2 0.3").is_err());
        assert!(parse_label_line("-1 0.5 0.5 0.2 0.3").is_err());
        assert!(parse_label_line("0.0 0.5 0.5 0.2 0.3").is_err());
    }

    #[test]
    fn class_names_keep_ids() {
        let names = parse_class_names("door_handle  \ncabinet_handle\r\n\nknob\n");
        assert_eq!(names, vec!["door_handle", "cabinet_handle", "", "knob"]);
    }

    #[test]
    fn resolve_out_of_range() {
        let names = vec!["door_handle".to_string()];
        let boxes = [BoundingBox::new(1, 0.5, 0.5, 0.1, 0.1)];
        assert!(matches!(
            resolve_class_labels(&boxes, &names),
            Err(Error::ClassIdOutOfRange {
                class_id: 1,
                num_classes: 1
            })
        ));
    }

    #[test]
    fn stems() {
        assert_eq!(file_stem("obj1_color.png"), "obj1_color");
        assert_eq!(file_stem("a.b.png"), "a.b");
        assert_eq!(file_stem("noext"), "noext");
        assert_eq!(file_stem(".png"), ".png");
    }

    #[test]
    fn depth_substitution_first_only() {
        assert_eq!(depth_stem("obj1_color", "color", "depth"), "obj1_depth");
        assert_eq!(
            depth_stem("color_obj_color", "color", "depth"),
            "depth_obj_color"
        );
        assert_eq!(depth_stem("frame_01", "color", "depth"), "frame_01");
    }
}
