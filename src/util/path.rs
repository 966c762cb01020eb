use std::path::{Path, PathBuf};

use crate::domain::{DomainError, TreeResult};

/// Expands `~`, `$VAR` and `${VAR}` in user supplied paths.
///
/// Input that cannot be expanded (e.g. an unset variable) is used verbatim.
pub fn expand_path(input: &str) -> PathBuf {
    let expanded = shellexpand::full(input)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| input.to_string());
    PathBuf::from(expanded)
}

pub fn ensure_file_exists(path: &Path) -> TreeResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(DomainError::FileNotFound(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_plain_path_when_expanding_then_unchanged() {
        assert_eq!(expand_path("trees/sample.tree"), PathBuf::from("trees/sample.tree"));
    }

    #[test]
    fn given_unset_variable_when_expanding_then_keeps_input() {
        let input = "$SIBTREE_SURELY_UNSET_VARIABLE/x.tree";
        assert_eq!(expand_path(input), PathBuf::from(input));
    }

    #[test]
    fn given_directory_when_ensuring_file_then_not_found() {
        let err = ensure_file_exists(Path::new(".")).unwrap_err();
        assert!(matches!(err, DomainError::FileNotFound(_)));
    }
}
