/// Markers embedded in the free-text description of a message. The text
/// between two markers belongs to the field named by the first one.
const MARKER_STREET: &str = "$StraßeD$";
const MARKER_SECTION: &str = "$AbschnittD$";
const MARKER_CONTENT: &str = "$InhaltD$";

/// The typed fields carried by a marker-delimited description text.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DescriptionParts {
    pub street: Option<String>,
    pub section: Option<String>,
    pub content: Option<String>,
}

/// Splits a description into street, section and content. A field is only
/// present when every marker bounding it is. The extraction is plain offset
/// arithmetic without ordering validation; markers appearing out of order
/// yield empty fields rather than an error.
pub fn decompose(description: &str) -> DescriptionParts {
    let pos_street = description.find(MARKER_STREET);
    let pos_section = description.find(MARKER_SECTION);
    let pos_content = description.find(MARKER_CONTENT);

    let mut parts = DescriptionParts::default();
    if let (Some(street), Some(section)) = (pos_street, pos_section) {
        parts.street = Some(slice_between(
            description,
            street + MARKER_STREET.len(),
            section,
        ));
    }
    if let (Some(section), Some(content)) = (pos_section, pos_content) {
        parts.section = Some(slice_between(
            description,
            section + MARKER_SECTION.len(),
            content,
        ));
    }
    if let Some(content) = pos_content {
        parts.content = Some(slice_between(
            description,
            content + MARKER_CONTENT.len(),
            description.len(),
        ));
    }
    parts
}

// Reversed or overlapping marker ranges come out empty instead of failing.
fn slice_between(text: &str, start: usize, end: usize) -> String {
    text.get(start..end).unwrap_or_default().trim().to_string()
}
