//! Checks that the `tests/unit` tree mirrors the `src` tree file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module declarations carry no logic of their own
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn mirrored_paths(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        walk(root, root, &mut paths)?;
        Ok(paths)
    }

    fn walk(dir: &Path, root: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(root)
                .map_err(|strip_error| io::Error::other(strip_error.to_string()))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                walk(&path, root, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let src = mirrored_paths(Path::new(SRC_DIR)).unwrap();
        let unit = mirrored_paths(Path::new(UNIT_DIR)).unwrap();

        let missing: Vec<_> = src
            .iter()
            .filter(|path| !is_exempt(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_source() {
        let src = mirrored_paths(Path::new(SRC_DIR)).unwrap();
        let unit = mirrored_paths(Path::new(UNIT_DIR)).unwrap();

        let orphaned: Vec<_> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_unit_files_contain_tests() {
        let unit = mirrored_paths(Path::new(UNIT_DIR)).unwrap();

        let empty: Vec<_> = unit
            .iter()
            .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new(UNIT_DIR).join(path))
                    .map_or(true, |content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Unit test files without #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
