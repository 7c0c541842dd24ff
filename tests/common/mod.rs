use std::path::PathBuf;

use tempfile::TempDir;

/// Create a temp directory holding the given (filename, contents) reports.
/// The caller must hold onto `TempDir` to keep the directory alive.
pub fn report_dir(reports: &[(&str, &[u8])]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in reports {
        std::fs::write(dir.path().join(name), content).unwrap();
    }
    let root = dir.path().to_path_buf();
    (dir, root)
}

/// Render a minimal single-file Clover report.
pub fn clover_report(path: &str, lines: &[(u32, u64)]) -> Vec<u8> {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<coverage generated=\"1706000000000\" clover=\"3.2.0\">\n");
    xml.push_str("  <project timestamp=\"1706000000000\" name=\"All files\">\n");
    xml.push_str(&format!("    <file name=\"x\" path=\"{path}\">\n"));
    for (num, count) in lines {
        xml.push_str(&format!(
            "      <line num=\"{num}\" count=\"{count}\" type=\"stmt\"/>\n"
        ));
    }
    xml.push_str("    </file>\n  </project>\n</coverage>\n");
    xml.into_bytes()
}
