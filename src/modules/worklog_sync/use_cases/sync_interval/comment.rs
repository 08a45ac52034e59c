pub const DEFAULT_COMMENT: &str = "Time tracked via Timewarrior sync";
const PROVENANCE_SUFFIX: &str = "(Synced from Timewarrior)";
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Worklog comment for an interval. A blank note counts as no note.
pub fn build_comment(note: Option<&str>) -> String {
    let Some(note) = note.map(str::trim).filter(|note| !note.is_empty()) else {
        return DEFAULT_COMMENT.to_string();
    };
    if note.ends_with(SENTENCE_TERMINATORS) {
        format!("{note} {PROVENANCE_SUFFIX}")
    } else {
        format!("{note}. {PROVENANCE_SUFFIX}")
    }
}
