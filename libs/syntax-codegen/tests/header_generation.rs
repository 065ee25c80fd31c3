use std::fs;

use syntaxgen_codegen::template::{write_header, HeaderJob};
use syntaxgen_table::TransferSyntax;
use tempfile::tempdir;

const TEMPLATE: &str = "\
// Autogenerated file. Do not edit.
{% for syntax in syntaxes %}
//   {{ syntax.identifier }} -> {{ syntax.externalIdentifier }}{% endfor %}
";

fn table(json: &str) -> Vec<TransferSyntax> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn rendering_is_deterministic() {
    let dir = tempdir().unwrap();
    let template_path = dir.path().join("header.j2");
    let output_path = dir.path().join("TransferSyntaxes.impl.h");
    fs::write(&template_path, TEMPLATE).unwrap();

    let table = table(
        r#"[{"identifier":"LittleEndianImplicit","externalIdentifier":"ImplicitVRLittleEndian"},
            {"identifier":"DeflatedLittleEndianExplicit"}]"#,
    );
    let job = HeaderJob {
        table: &table,
        template_path: &template_path,
        output_path: &output_path,
    };

    write_header(&job).unwrap();
    let first = fs::read_to_string(&output_path).unwrap();

    write_header(&job).unwrap();
    let second = fs::read_to_string(&output_path).unwrap();

    assert_eq!(first, second);
    assert!(first.contains("LittleEndianImplicit -> ImplicitVRLittleEndian"));
    // The table row without a counterpart still reaches the template; its
    // missing field renders empty.
    assert!(first.contains("DeflatedLittleEndianExplicit -> \n"));
}

#[test]
fn existing_output_is_fully_replaced() {
    let dir = tempdir().unwrap();
    let template_path = dir.path().join("header.j2");
    let output_path = dir.path().join("TransferSyntaxes.impl.h");
    fs::write(&template_path, "short\n").unwrap();
    fs::write(&output_path, "a much longer pre-existing file content\n").unwrap();

    let table = table(r#"[{"identifier":"A"}]"#);
    write_header(&HeaderJob {
        table: &table,
        template_path: &template_path,
        output_path: &output_path,
    })
    .unwrap();

    assert_eq!(fs::read_to_string(&output_path).unwrap(), "short\n");
}

#[test]
fn unreadable_template_is_a_read_error() {
    let dir = tempdir().unwrap();
    let table = table(r#"[{"identifier":"A"}]"#);

    let err = write_header(&HeaderJob {
        table: &table,
        template_path: &dir.path().join("missing.j2"),
        output_path: &dir.path().join("out.h"),
    })
    .unwrap_err();

    assert!(matches!(err, syntaxgen_codegen::Error::Read { .. }));
}

#[test]
fn renders_the_shipped_template() {
    let base = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../resources");
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("TransferSyntaxes.impl.h");

    let table = syntaxgen_table::load_table(&base.join("transfer_syntaxes.json")).unwrap();
    write_header(&HeaderJob {
        table: &table,
        template_path: &base.join("transfer_syntaxes.impl.h.j2"),
        output_path: &output_path,
    })
    .unwrap();

    let out = fs::read_to_string(&output_path).unwrap();
    assert!(out.contains("1.2.840.10008.1.2.5"));
    assert!(out.contains("LittleEndianImplicit"));
}
