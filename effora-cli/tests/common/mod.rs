#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Three-protein input set used across the integration tests.
pub const SCENARIO_FASTA: &str = ">A\nMKCSCC\n>B\nMAARDE\n>C\nMGGYRP\n";

/// Statistics report block for one surrogate identifier, in the fixed
/// pepstats layout the extractor parses.
pub fn report_block(id: &str) -> String {
    format!(
        "PEPSTATS of {id} from 1 to 6\n\
         \n\
         Molecular weight = 736.89  \tResidues = 6\n\
         Average Residue Weight  = 122.815 \tCharge   = 1.0\n\
         Isoelectric Point = 8.0717\n\
         \n\
         Property\tResidues\tNumber\tMole%\n\
         Tiny\t(A+C+G+S+T)\t3\t50.000\n\
         Small\t(A+B+C+D+G+N+P+S+T+V)\t3\t50.000\n\
         Aliphatic\t(A+I+L+V)\t1\t16.667\n\
         Aromatic\t(F+H+W+Y)\t0\t0.000\n\
         Non-polar\t(A+C+F+G+I+L+M+P+V+W+Y)\t4\t66.667\n\
         Polar\t(D+E+H+K+N+Q+R+S+T+Z)\t2\t33.333\n\
         Charged\t(B+D+E+H+K+R+Z)\t1\t16.667\n\
         Basic\t(H+K+R)\t1\t16.667\n\
         Acidic\t(B+D+E+Z)\t0\t0.000\n"
    )
}

/// Report covering proteins 1 and 3 of the scenario set; protein 2 has no
/// block, so it is dropped during extraction.
pub fn scenario_report() -> String {
    format!("{}{}", report_block("protein1"), report_block("protein3"))
}

/// Classifier output matching the two-row feature table of the scenario.
pub const SCENARIO_PREDICTIONS: &str = "\
=== Predictions on test data ===\n\
\n\
 inst#     actual  predicted error prediction\n\
\x20    1        1:?  1:effector       0.91\n\
\x20    2        1:?  2:non-effector       0.12";

fn write_executable(dir: &Path, name: &str, body: String) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).unwrap();
    path
}

/// Stub statistics tool: writes the given report to its `-outfile` argument.
pub fn pepstats_stub(dir: &Path, report: &str) -> PathBuf {
    write_executable(
        dir,
        "pepstats",
        format!(
            "#!/bin/sh\n\
             out=\"\"\n\
             while [ \"$#\" -gt 0 ]; do\n\
             \x20\x20if [ \"$1\" = \"-outfile\" ]; then out=\"$2\"; fi\n\
             \x20\x20shift\n\
             done\n\
             cat <<'EOF' > \"$out\"\n\
             {report}\n\
             EOF\n"
        ),
    )
}

/// Stub classifier runner: prints the given predictions on stdout.
pub fn java_stub(dir: &Path, predictions: &str) -> PathBuf {
    write_executable(
        dir,
        "java",
        format!("#!/bin/sh\ncat <<'EOF'\n{predictions}\nEOF\n"),
    )
}

/// Stub tool that always fails.
pub fn failing_stub(dir: &Path, name: &str) -> PathBuf {
    write_executable(dir, name, "#!/bin/sh\nexit 1\n".to_string())
}

/// Write the scenario FASTA into `dir` and return its path.
pub fn scenario_input(dir: &Path) -> PathBuf {
    let path = dir.join("secretome.fasta");
    fs::write(&path, SCENARIO_FASTA).unwrap();
    path
}

/// Build an `effora` invocation wired to stub tools and dummy artifacts.
pub fn effora_cmd(dir: &Path, pepstats: &Path, java: &Path) -> Command {
    let weka_jar = dir.join("weka.jar");
    let model = dir.join("effora_bayes.model");
    fs::write(&weka_jar, b"jar").unwrap();
    fs::write(&model, b"model").unwrap();

    let mut cmd = Command::cargo_bin("effora").unwrap();
    cmd.arg("--pepstats")
        .arg(pepstats)
        .arg("--java")
        .arg(java)
        .arg("--weka-jar")
        .arg(&weka_jar)
        .arg("--model")
        .arg(&model)
        .arg("-q");
    cmd
}
