use brickctl::backup::{sanitize_file_name, BackupKind, INVALID_FILE_NAME_CHARS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sanitized_names_contain_no_invalid_characters(name in ".{0,40}") {
        let clean = sanitize_file_name(&name);
        prop_assert!(!clean.chars().any(|c| INVALID_FILE_NAME_CHARS.contains(&c) || c.is_ascii_control()));
        prop_assert_eq!(clean.chars().count(), name.chars().count());
    }

    #[test]
    fn sanitizing_twice_changes_nothing(name in ".{0,40}") {
        let once = sanitize_file_name(&name);
        prop_assert_eq!(sanitize_file_name(&once), once);
    }

    #[test]
    fn backup_file_names_are_prefixed_json(name in ".{0,20}") {
        let file = BackupKind::Dashboard.file_name(&name);
        prop_assert!(file.starts_with("D-"));
        prop_assert!(file.ends_with(".json"));
        prop_assert!(!file.contains('/'));
    }
}
