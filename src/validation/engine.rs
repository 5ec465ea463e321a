use crate::{
    domain::{
        tags::{Field, TagSnapshot},
        track_type::TrackType,
    },
    validation::{ValidationMessage, ValidationResult, genre::parse_genre},
};

/// Runs every rule of `track_type` against `tags`.
///
/// Each call starts from empty lists; nothing from an earlier run leaks in.
pub fn evaluate(tags: &TagSnapshot, track_type: &TrackType) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !tags.has(Field::Title) {
        result.errors.push(ValidationMessage::MissingTitle);
    }

    if !tags.has(Field::Album) {
        result.push(track_type.album_mandatory(), ValidationMessage::MissingAlbum);
    }

    if !tags.has(Field::Artist) {
        result.push(track_type.artist_mandatory(), ValidationMessage::MissingArtist);
    }

    if !tags.has(Field::Date) {
        result.warnings.push(ValidationMessage::MissingYear);
    }

    check_genre(tags, track_type, &mut result);

    result
}

fn check_genre(tags: &TagSnapshot, track_type: &TrackType, result: &mut ValidationResult) {
    if !tags.has(Field::Genre) {
        result.errors.push(ValidationMessage::MissingCategory);
        return;
    }

    let genre = parse_genre(tags.values(Field::Genre));

    match (genre.category_index, genre.category_code()) {
        (Some(index), Some(code)) => {
            if index != 0 {
                result.warnings.push(ValidationMessage::CategoryWrongPosition);
            }
            if !track_type.is_valid_category(code) {
                result.errors.push(ValidationMessage::InvalidCategory);
            }
        }
        _ => result.errors.push(ValidationMessage::MissingCategory),
    }

    for item in genre.other_items() {
        if !track_type.is_valid_genre_item(item) {
            result
                .errors
                .push(ValidationMessage::InvalidGenre(item.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationMessage::*;

    fn complete_tags(genre: &str) -> TagSnapshot {
        TagSnapshot::new()
            .with(Field::Title, ["Song"])
            .with(Field::Artist, ["Artist"])
            .with(Field::Album, ["Album"])
            .with(Field::Date, ["2001"])
            .with(Field::Genre, [genre])
    }

    #[test]
    fn category_first_with_known_item_is_clean() {
        let result = evaluate(&complete_tags("cat43, cancon"), &TrackType::default_type());

        assert!(result.is_valid());
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn category_in_wrong_position_is_only_a_warning() {
        let result = evaluate(&complete_tags("cancon, cat43"), &TrackType::default_type());

        assert!(result.is_valid());
        assert_eq!(result.warnings, vec![CategoryWrongPosition]);
    }

    #[test]
    fn category_outside_policy_is_invalid() {
        let result = evaluate(&complete_tags("cat99"), &TrackType::default_type());

        assert!(!result.is_valid());
        assert_eq!(result.errors, vec![InvalidCategory]);
    }

    #[test]
    fn missing_genre_skips_item_checks() {
        let tags = TagSnapshot::new()
            .with(Field::Title, ["Song"])
            .with(Field::Artist, ["Artist"])
            .with(Field::Album, ["Album"])
            .with(Field::Date, ["2001"]);

        let result = evaluate(&tags, &TrackType::default_type());

        assert!(!result.is_valid());
        assert_eq!(result.errors, vec![MissingCategory]);
    }

    #[test]
    fn optional_artist_and_album_are_warnings() {
        let tags = TagSnapshot::new()
            .with(Field::Title, ["Song"])
            .with(Field::Date, ["2001"])
            .with(Field::Genre, ["cat21"]);

        let result = evaluate(&tags, &TrackType::default_type());

        assert!(result.is_valid());
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings, vec![MissingAlbum, MissingArtist]);
    }

    #[test]
    fn mandatory_artist_and_album_are_errors() {
        let policy = TrackType::new("Strict")
            .with_artist_mandatory(true)
            .with_album_mandatory(true);
        let tags = TagSnapshot::new()
            .with(Field::Title, ["Song"])
            .with(Field::Date, ["2001"])
            .with(Field::Genre, ["cat21"]);

        let result = evaluate(&tags, &policy);

        assert!(!result.is_valid());
        assert_eq!(result.errors, vec![MissingAlbum, MissingArtist]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn unknown_genre_item_is_reported_with_its_text() {
        let result = evaluate(&complete_tags("cat21, jazz"), &TrackType::default_type());

        assert_eq!(result.errors, vec![InvalidGenre("jazz".into())]);
    }

    #[test]
    fn empty_tag_reports_everything_in_one_pass() {
        let tags = TagSnapshot::new().with(Field::Genre, ["rock, cat99, jazz"]);

        let result = evaluate(&tags, &TrackType::default_type());

        assert_eq!(
            result.errors,
            vec![
                MissingTitle,
                InvalidCategory,
                InvalidGenre("rock".into()),
                InvalidGenre("jazz".into()),
            ]
        );
        assert_eq!(
            result.warnings,
            vec![MissingAlbum, MissingArtist, MissingYear, CategoryWrongPosition]
        );
    }

    #[test]
    fn genre_without_category_is_missing_category() {
        let result = evaluate(&complete_tags("cancon, local"), &TrackType::default_type());

        assert_eq!(result.errors, vec![MissingCategory]);
    }

    #[test]
    fn malformed_category_counts_as_missing() {
        let result = evaluate(&complete_tags("catxx, local"), &TrackType::default_type());

        assert_eq!(
            result.errors,
            vec![MissingCategory, InvalidGenre("catxx".into())]
        );
    }

    #[test]
    fn malformed_first_category_is_not_rescued_by_a_later_one() {
        let policy = TrackType::new("Catalog").with_genre_items(["catalog"]);

        let result = evaluate(&complete_tags("catalog, cat43"), &policy);

        assert!(!result.is_valid());
        assert_eq!(
            result.errors,
            vec![MissingCategory, InvalidGenre("cat43".into())]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn policy_without_genre_items_rejects_cancon() {
        let policy = TrackType::new("Station ID")
            .with_categories([43])
            .with_genre_items(Vec::<String>::new());

        let result = evaluate(&complete_tags("cat43, cancon"), &policy);

        assert_eq!(result.errors, vec![InvalidGenre("cancon".into())]);
    }

    #[test]
    fn repeated_evaluation_does_not_accumulate() {
        let tags = complete_tags("cat99, jazz");
        let policy = TrackType::default_type();

        let first = evaluate(&tags, &policy);
        let second = evaluate(&tags, &policy);

        assert_eq!(first, second);
        assert_eq!(second.errors.len(), 2);
    }
}
