//! Integration tests for the full scan/order/emit pipeline, driven through
//! the library API.

use std::fs;
use std::path::PathBuf;

use consolidate::error::Error;
use consolidate::phases::orchestrator::execute_merge;

mod common;
use common::{sources, TestFixture};

fn merge_to_string(fixture: &TestFixture, roots: &[&str]) -> Result<String, Error> {
    let out = fixture.path().join("out").join("consolidated.c");
    fs::create_dir_all(out.parent().unwrap()).unwrap();
    let roots: Vec<String> = roots.iter().map(|r| r.to_string()).collect();
    execute_merge(&roots, &[fixture.path().to_path_buf()], Some(&out))?;
    Ok(fs::read_to_string(&out).unwrap())
}

#[test]
fn test_end_to_end_example_artifact() {
    let fixture = TestFixture::new()
        .with_source("main.c", sources::MAIN_C)
        .with_source("a.h", sources::A_H);

    let text = merge_to_string(&fixture, &["main.c"]).unwrap();
    // Deterministic block order: sorted system headers, then a.h (the
    // dependency) strictly before main.c, then the trailing blank line.
    assert_eq!(
        text,
        "#include <stdio.h>\n\
         #include <stdlib.h>\n\
         \n\
         //\n\
         // Contents of a.h\n\
         //\n\
         int helper(){return 1;}\n\
         //\n\
         // Contents of main.c\n\
         //\n\
         int main(){ return 0; }\n\
         \n"
    );
}

#[test]
fn test_two_runs_are_byte_identical() {
    let build = || {
        TestFixture::new()
            .with_source("main.c", sources::MAIN_C)
            .with_source("a.h", sources::A_H)
    };

    let first = merge_to_string(&build(), &["main.c"]).unwrap();
    let second = merge_to_string(&build(), &["main.c"]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_diamond_include_is_emitted_once() {
    let fixture = TestFixture::new()
        .with_source(
            "main.c",
            "#include \"left.h\"\n#include \"right.h\"\nint main();\n",
        )
        .with_source("left.h", "#include \"base.h\"\nint l();\n")
        .with_source("right.h", "#include \"base.h\"\nint r();\n")
        .with_source("base.h", "int base();\n");

    let text = merge_to_string(&fixture, &["main.c"]).unwrap();
    assert_eq!(text.matches("// Contents of base.h").count(), 1);
    assert_eq!(text.matches("int base();").count(), 1);

    let base = text.find("// Contents of base.h").unwrap();
    let left = text.find("// Contents of left.h").unwrap();
    let right = text.find("// Contents of right.h").unwrap();
    let main = text.find("// Contents of main.c").unwrap();
    assert!(base < left && base < right);
    assert!(left < main && right < main);
}

#[test]
fn test_system_header_referenced_everywhere_appears_once() {
    let fixture = TestFixture::new()
        .with_source("main.c", "#include \"a.h\"\n#include <stdio.h>\n")
        .with_source("a.h", "#include \"b.h\"\n#include <stdio.h>\n")
        .with_source("b.h", "#include <stdio.h>\nint b();\n");

    let text = merge_to_string(&fixture, &["main.c"]).unwrap();
    assert_eq!(text.matches("#include <stdio.h>").count(), 1);
}

#[test]
fn test_cycle_leaves_partial_artifact_without_cycle_bodies() {
    let fixture = TestFixture::new()
        .with_source(
            "main.c",
            "#include \"cycle_a.h\"\n#include <stdio.h>\nint main();\n",
        )
        .with_source("cycle_a.h", sources::CYCLE_A_H)
        .with_source("cycle_b.h", sources::CYCLE_B_H);

    let out = fixture.path().join("partial.c");
    let roots = vec!["main.c".to_string()];
    let result = execute_merge(&roots, &[fixture.path().to_path_buf()], Some(&out));
    assert!(matches!(result, Err(Error::CycleDetected { .. })));

    // The artifact was started and remains on disk, but neither cycle
    // participant's body was emitted and the run did not complete.
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("#include <stdio.h>\n\n"));
    assert!(!text.contains("// Contents of cycle_a.h"));
    assert!(!text.contains("// Contents of cycle_b.h"));
    assert!(!text.contains("// Contents of main.c"));
}

#[test]
fn test_directive_lines_are_stripped_and_rest_kept_verbatim() {
    let body = "  int spaced ;\t\n\tchar *odd=\"#include \\\"x\\\"\";\n";
    let fixture = TestFixture::new().with_source(
        "main.c",
        &format!("#include <stdio.h>\n#pragma once\n# hash comment\n{}", body),
    );

    let text = merge_to_string(&fixture, &["main.c"]).unwrap();
    for line in text.lines() {
        assert!(
            !line.trim().starts_with('#') || line.starts_with("#include <"),
            "unexpected directive line in body: {:?}",
            line
        );
    }
    assert!(text.contains(body));
    assert!(!text.contains("#pragma"));
    assert!(!text.contains("hash comment"));
}

#[test]
fn test_crlf_line_endings_survive() {
    let fixture = TestFixture::new().with_source("main.c", "int a;\r\nint b;\r\n");

    let text = merge_to_string(&fixture, &["main.c"]).unwrap();
    assert!(text.contains("int a;\r\nint b;\r\n"));
}

#[test]
fn test_missing_include_emits_empty_body() {
    let fixture = TestFixture::new().with_source("main.c", "#include \"ghost.h\"\nint main();\n");

    let text = merge_to_string(&fixture, &["main.c"]).unwrap();
    // The placeholder is emitted (banner only) before its dependent.
    let ghost = text.find("// Contents of ghost.h").unwrap();
    let main = text.find("// Contents of main.c").unwrap();
    assert!(ghost < main);
    assert_eq!(
        &text[ghost..],
        "// Contents of ghost.h\n//\n//\n// Contents of main.c\n//\nint main();\n\n"
    );
}

#[test]
fn test_duplicate_include_of_same_header_wedges_the_graph() {
    let fixture = TestFixture::new()
        .with_source("main.c", "#include \"a.h\"\n#include \"a.h\"\nint main();\n")
        .with_source("a.h", "int a();\n");

    let out = fixture.path().join("dup.c");
    let roots = vec!["main.c".to_string()];
    let result = execute_merge(&roots, &[fixture.path().to_path_buf()], Some(&out));
    // One emission satisfies one occurrence; the second occurrence can
    // never be satisfied.
    assert!(matches!(result, Err(Error::CycleDetected { .. })));
}

#[test]
fn test_multiple_roots_consolidate_together() {
    let fixture = TestFixture::new()
        .with_source("one.c", "#include \"shared.h\"\nint one();\n")
        .with_source("two.c", "#include \"shared.h\"\nint two();\n")
        .with_source("shared.h", "int shared();\n");

    let text = merge_to_string(&fixture, &["one.c", "two.c"]).unwrap();
    assert_eq!(text.matches("// Contents of shared.h").count(), 1);
    let one = text.find("// Contents of one.c").unwrap();
    let two = text.find("// Contents of two.c").unwrap();
    let shared = text.find("// Contents of shared.h").unwrap();
    assert!(shared < one && one < two);
}

#[test]
fn test_dry_run_writes_nothing() {
    let fixture = TestFixture::new().with_source("main.c", sources::PLAIN_C);
    let out: Option<&std::path::Path> = None;

    let roots = vec!["main.c".to_string()];
    let report = execute_merge(&roots, &[fixture.path().to_path_buf()], out).unwrap();
    assert_eq!(report.local_files, 1);
    assert!(!PathBuf::from("consolidated.c").exists());
}
