//! Output formatting utilities

use crate::domain::{Child, Entry, Following};

/// Format followed journals, one per line
pub fn format_followings(followings: &[Following]) -> String {
    if followings.is_empty() {
        return "No followings found".to_string();
    }

    let mut output = String::new();
    for following in followings {
        output.push_str(&format!(
            "{:>8}  {}  ({}, {} children)\n",
            following.journal.id,
            following.journal.title,
            following.relationship,
            following.journal.children.len()
        ));
    }
    output
}

/// Format children with their journal ids
pub fn format_children(children: &[Child]) -> String {
    if children.is_empty() {
        return "No children found".to_string();
    }

    let mut output = String::new();
    for child in children {
        output.push_str(&format!(
            "{:>8}  {}  {}  journal {}\n",
            child.id,
            child.date_of_birth.format("%Y-%m-%d"),
            child.name(),
            child.journal
        ));
    }
    output
}

/// Format entries, one per line
pub fn format_entries(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let caption = entry.caption.as_deref().unwrap_or("");
        match entry.kind.video_url() {
            Some(url) => output.push_str(&format!(
                "{:>10}  {:<6} {}  {}\n",
                entry.id,
                entry.kind.as_str(),
                caption,
                url
            )),
            None => output.push_str(&format!(
                "{:>10}  {:<6} {}\n",
                entry.id,
                entry.kind.as_str(),
                caption
            )),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryKind, Journal, JournalRef};
    use chrono::NaiveDate;
    use serde_json::Value;

    fn child(id: i64, first: &str) -> Child {
        Child {
            id,
            first_name: first.to_string(),
            last_name: "Bean".to_string(),
            gender: "FEMALE".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2019, 6, 1).unwrap(),
            journal: JournalRef { id: 7 },
        }
    }

    fn entry(id: i64, kind: EntryKind, caption: Option<&str>) -> Entry {
        Entry {
            id,
            uuid: format!("uuid-{}", id),
            kind,
            timestamp: None,
            latitude: None,
            longitude: None,
            caption: caption.map(str::to_string),
            blobs: Value::Null,
            emotions: Vec::new(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn test_format_empty_lists() {
        assert_eq!(format_followings(&[]), "No followings found");
        assert_eq!(format_children(&[]), "No children found");
        assert_eq!(format_entries(&[]), "No entries found");
    }

    #[test]
    fn test_format_followings() {
        let following = Following {
            id: 21,
            url: "https://tinybeans.com/app/#/main/journals/7".to_string(),
            relationship: "Grandparent".to_string(),
            journal: Journal {
                id: 7,
                title: "The Beans".to_string(),
                children: vec![child(3, "Zoe"), child(4, "Mia")],
            },
        };

        let output = format_followings(&[following]);
        assert_eq!(output, "       7  The Beans  (Grandparent, 2 children)\n");
    }

    #[test]
    fn test_format_children() {
        let output = format_children(&[child(3, "Zoe"), child(4, "Mia")]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "       3  2019-06-01  Zoe Bean  journal 7");
        assert!(lines[1].contains("Mia Bean"));
    }

    #[test]
    fn test_format_entries() {
        let entries = vec![
            entry(1, EntryKind::Other("PHOTO".to_string()), Some("Beach day")),
            entry(
                2,
                EntryKind::Video {
                    url: "https://cdn.example.com/v.mp4".to_string(),
                },
                None,
            ),
        ];

        let output = format_entries(&entries);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "         1  PHOTO  Beach day");
        assert!(lines[1].contains("VIDEO"));
        assert!(lines[1].ends_with("https://cdn.example.com/v.mp4"));
    }
}
